use clap::Args;

use envhash_digest::{redact_values, to_pairs};
use envhash_env::{resolve, DetailedMap, EnvSnapshot};

use super::SelectionArgs;

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Emit the resolved map as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Show sha256 digests of values instead of the values themselves
    #[arg(long)]
    redact: bool,
}

impl ResolveArgs {
    pub fn run(self) -> eyre::Result<()> {
        let snapshot = self.selection.snapshot()?;
        let specs = self.selection.specifications()?;
        let resolved = resolve(&snapshot, &specs)?;

        let view = if self.redact {
            redact_detailed(&resolved)
        } else {
            resolved
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print_section("explicit", &view.by_source.explicit);
            print_section("matching", &view.by_source.matching);
        }

        Ok(())
    }
}

fn redact_detailed(map: &DetailedMap) -> DetailedMap {
    DetailedMap {
        all: redact_values(&map.all),
        by_source: envhash_env::BySource {
            explicit: redact_values(&map.by_source.explicit),
            matching: redact_values(&map.by_source.matching),
        },
    }
}

fn print_section(label: &str, map: &EnvSnapshot) {
    println!("{label}:");
    for pair in to_pairs(map) {
        println!("  {pair}");
    }
}

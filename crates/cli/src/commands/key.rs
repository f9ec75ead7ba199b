use clap::Args;

use envhash_digest::hash_detailed_map;
use envhash_env::resolve;

use super::SelectionArgs;

#[derive(Args)]
pub struct KeyArgs {
    #[command(flatten)]
    selection: SelectionArgs,
}

impl KeyArgs {
    pub fn run(self) -> eyre::Result<()> {
        let snapshot = self.selection.snapshot()?;
        let specs = self.selection.specifications()?;
        let resolved = resolve(&snapshot, &specs)?;

        println!("{}", hash_detailed_map(&resolved));
        Ok(())
    }
}

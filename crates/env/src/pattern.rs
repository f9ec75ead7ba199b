use envhash_core::{Error, Result};

const NEGATION: char = '!';
const WILDCARD: char = '*';

/// How a specification selects variable names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Selects the single variable with exactly this name.
    Exact(String),
    /// Selects every variable whose name starts with this prefix. An empty
    /// prefix matches the whole snapshot.
    Prefix(String),
}

/// One parsed include/exclude rule drawn from build configuration.
///
/// Syntax: an optional leading `!` (negation), then either a literal
/// variable name or a name prefix followed by a single trailing `*`.
/// A negated specification removes its matches from the selection instead
/// of adding them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Specification {
    pub pattern: Pattern,
    pub negated: bool,
}

impl Specification {
    /// Parse one specification string.
    ///
    /// Rejected forms: the empty string, a bare `!`, and any `*` that is
    /// not the final character.
    pub fn parse(spec: &str) -> Result<Specification> {
        let (negated, body) = match spec.strip_prefix(NEGATION) {
            Some(rest) => (true, rest),
            None => (false, spec),
        };

        if body.is_empty() {
            return Err(Error::specification(spec, "empty pattern"));
        }

        let pattern = match body.strip_suffix(WILDCARD) {
            Some(prefix) if prefix.contains(WILDCARD) => {
                return Err(Error::specification(
                    spec,
                    "wildcard is only allowed as the final character",
                ));
            }
            Some(prefix) => Pattern::Prefix(prefix.to_string()),
            None if body.contains(WILDCARD) => {
                return Err(Error::specification(
                    spec,
                    "wildcard is only allowed as the final character",
                ));
            }
            None => Pattern::Exact(body.to_string()),
        };

        Ok(Specification { pattern, negated })
    }

    /// Whether `name` is selected by this specification's pattern.
    ///
    /// Matching is case-sensitive and byte-exact; names are treated as
    /// opaque strings.
    pub fn matches(&self, name: &str) -> bool {
        match &self.pattern {
            Pattern::Exact(exact) => name == exact,
            Pattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.pattern, Pattern::Exact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(spec: &str) -> Specification {
        Specification::parse(spec).unwrap()
    }

    #[test]
    fn parses_exact_names() {
        assert_eq!(
            parse("CI"),
            Specification {
                pattern: Pattern::Exact("CI".into()),
                negated: false,
            }
        );
    }

    #[test]
    fn parses_trailing_wildcards() {
        assert_eq!(
            parse("CARGO_*"),
            Specification {
                pattern: Pattern::Prefix("CARGO_".into()),
                negated: false,
            }
        );
    }

    #[test]
    fn parses_negation_on_both_shapes() {
        assert!(parse("!CARGO_*").negated);
        assert!(parse("!DB_SECRET").negated);
        assert_eq!(parse("!DB_SECRET").pattern, Pattern::Exact("DB_SECRET".into()));
    }

    #[test]
    fn bare_wildcard_is_an_empty_prefix() {
        assert_eq!(parse("*").pattern, Pattern::Prefix(String::new()));
        assert_eq!(parse("!*").pattern, Pattern::Prefix(String::new()));
    }

    #[test]
    fn rejects_empty_and_bare_negation() {
        assert!(Specification::parse("").is_err());
        assert!(Specification::parse("!").is_err());
    }

    #[test]
    fn rejects_wildcards_before_the_final_position() {
        assert!(Specification::parse("FOO*BAR").is_err());
        assert!(Specification::parse("*FOO").is_err());
        assert!(Specification::parse("FOO**").is_err());
        assert!(Specification::parse("!A*B*").is_err());
    }

    #[test]
    fn matching_is_prefix_based_for_wildcards() {
        let spec = parse("CARGO_*");
        assert!(spec.matches("CARGO_HOME"));
        assert!(spec.matches("CARGO_"));
        assert!(!spec.matches("CARGO"));
        assert!(!spec.matches("NODE_ENV"));
    }

    #[test]
    fn matching_is_exact_for_literals() {
        let spec = parse("TOKEN");
        assert!(spec.matches("TOKEN"));
        assert!(!spec.matches("TOKEN_X"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!parse("path").matches("PATH"));
        assert!(!parse("Cargo_*").matches("CARGO_HOME"));
    }
}

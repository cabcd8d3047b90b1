//! Policy for requests that name medicines which do not exist.

use std::fmt;
use std::str::FromStr;

/// How unmatched medicine names in a request are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Fail only when no requested name resolves. Unmatched names are
    /// skipped and logged.
    #[default]
    Lenient,
    /// Fail the whole request when any requested name does not resolve.
    Strict,
}

impl MatchPolicy {
    /// Returns the configuration string for this policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "invalid medicine match policy '{other}' (expected 'lenient' or 'strict')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("STRICT".parse::<MatchPolicy>(), Ok(MatchPolicy::Strict));
        assert_eq!("lenient".parse::<MatchPolicy>(), Ok(MatchPolicy::Lenient));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("partial".parse::<MatchPolicy>().is_err());
    }

    #[test]
    fn defaults_to_lenient() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::Lenient);
        assert_eq!(MatchPolicy::default().to_string(), "lenient");
    }
}

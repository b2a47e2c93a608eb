use std::fmt;

/// One scope entry: a non-empty, whitespace-trimmed line of text, typically a
/// subdomain name. Construction is the only place the emptiness predicate
/// lives; a `Domain` in hand is always printable as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Trim `line` and wrap what remains. Returns `None` when the line is
    /// empty or whitespace-only, which the file loader treats as a skipped
    /// line rather than an error.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let domain = Domain::parse("  api.example.com \t\n").unwrap();
        assert_eq!(domain.as_str(), "api.example.com");
    }

    #[test]
    fn parse_rejects_empty_and_whitespace_lines() {
        assert_eq!(Domain::parse(""), None);
        assert_eq!(Domain::parse("   \t  "), None);
        assert_eq!(Domain::parse("\n"), None);
    }

    #[test]
    fn display_matches_inner_value() {
        let domain = Domain::parse("cdn.example.com").unwrap();
        assert_eq!(domain.to_string(), "cdn.example.com");
    }
}

use serde::{Deserialize, Deserializer};
use std::fmt;

/// A port binding as written in a compose file, e.g. `8080:80` or `53:53/udp`.
///
/// The raw text is kept verbatim. The host token is everything before the
/// first `:`, or the whole string when there is no `:`. Neither side is
/// required to be numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortBinding {
    raw: String,
}

impl PortBinding {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn host(&self) -> &str {
        host_token(&self.raw)
    }

    /// Whether this binding claims `host_port`. Exact string comparison.
    pub fn claims(&self, host_port: &str) -> bool {
        self.host() == host_port
    }
}

/// Host-side token of a binding string.
pub fn host_token(binding: &str) -> &str {
    binding
        .split_once(':')
        .map_or(binding, |(host, _)| host)
}

impl fmt::Display for PortBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for PortBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `- 8080` is a YAML integer; keep its text like a quoted entry.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Scalar {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Scalar::deserialize(deserializer)? {
            Scalar::Text(raw) => PortBinding::new(raw),
            Scalar::Unsigned(n) => PortBinding::new(n.to_string()),
            Scalar::Signed(n) => PortBinding::new(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_text_before_first_colon() {
        assert_eq!(host_token("8080:80"), "8080");
        assert_eq!(host_token("127.0.0.1:8080:80"), "127.0.0.1");
        assert_eq!(host_token("53:53/udp"), "53");
        assert_eq!(host_token(":80"), "");
    }

    #[test]
    fn binding_without_colon_is_its_own_host() {
        let binding = PortBinding::new("8080");
        assert_eq!(binding.host(), "8080");
    }

    #[test]
    fn display_keeps_protocol_suffix() {
        let binding = PortBinding::new("5353:53/udp");
        assert_eq!(binding.host(), "5353");
        assert_eq!(binding.to_string(), "5353:53/udp");
    }

    #[test]
    fn claims_compares_strings_not_numbers() {
        let binding = PortBinding::new("8080:80");
        assert!(binding.claims("8080"));
        assert!(!binding.claims("08080"));
        assert!(!binding.claims("80"));
        assert!(!binding.claims(" 8080"));
    }

    #[test]
    fn deserializes_strings_and_integers() {
        let bindings: Vec<PortBinding> =
            serde_yaml_ng::from_str("- '8080:80'\n- 3000:3000\n- 9000\n").unwrap();
        let raw: Vec<&str> = bindings.iter().map(PortBinding::as_str).collect();
        assert_eq!(raw, vec!["8080:80", "3000:3000", "9000"]);
    }

    #[test]
    fn rejects_long_syntax_entries() {
        let result: Result<Vec<PortBinding>, _> =
            serde_yaml_ng::from_str("- target: 80\n  published: 8080\n");
        assert!(result.is_err());
    }
}

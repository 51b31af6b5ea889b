//! GraphQL endpoint configuration.

use serde::Deserialize;

/// Configuration for the GraphQL gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphqlConfig {
    /// Full URL of the GraphQL endpoint.
    pub endpoint: String,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/graphql".to_string(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = GraphqlConfig::default();
        assert_eq!(config.endpoint, "http://localhost:5000/graphql");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            endpoint = "https://events.example.com/graphql"
            timeout_secs = 5
        "#;
        let config: GraphqlConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint, "https://events.example.com/graphql");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: GraphqlConfig = toml::from_str("timeout_secs = 1").unwrap();
        assert_eq!(config.endpoint, "http://localhost:5000/graphql");
        assert_eq!(config.timeout_secs, 1);
    }
}

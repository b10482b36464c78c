//! Gateway configuration tests.

use kismet_gateway::GatewayConfig;
use router::ProviderKind;
use std::collections::HashMap;

#[test]
fn parse_minimal_config() {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 8080

[[providers]]
provider = "openai"
api_key = "sk-test"
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
    assert_eq!(config.providers.len(), 1);
    assert_eq!(config.providers[0].provider, ProviderKind::OpenAI);
    assert_eq!(config.providers[0].api_key, "sk-test");
}

#[test]
fn parse_full_config() {
    let toml = r#"
[server]
port = 4000

[[providers]]
provider = "gemini"
api_key = "g-key"

[[providers]]
provider = "copilot"
api_key = "c-key"
base_url = "http://copilot.local/v1/chat/completions"

[[providers]]
provider = "perplexity"
api_key = "p-key"
model = "sonar-pro"
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    let kinds: Vec<_> = config.providers.iter().map(|slot| slot.provider).collect();
    assert_eq!(
        kinds,
        [
            ProviderKind::Gemini,
            ProviderKind::Copilot,
            ProviderKind::Perplexity
        ]
    );
    assert_eq!(
        config.providers[1].base_url.as_deref(),
        Some("http://copilot.local/v1/chat/completions")
    );
    assert_eq!(config.providers[2].model(), "sonar-pro");
}

#[test]
fn default_server_config() {
    let config = GatewayConfig::from_toml("").unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
    assert!(config.providers.is_empty());
}

#[test]
fn unknown_vendor_is_rejected() {
    let toml = r#"
[[providers]]
provider = "mistral"
api_key = "k"
"#;
    assert!(GatewayConfig::from_toml(toml).is_err());
}

#[test]
fn unset_variable_expands_to_empty_key() {
    let toml = r#"
[[providers]]
provider = "claude"
api_key = "${KISMET_TEST_SURELY_UNSET_VARIABLE}"
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.providers[0].api_key, "");
    assert!(!config.providers[0].is_configured());
}

#[test]
fn environment_config() {
    let vars: HashMap<&str, &str> = [("PORT", "8181"), ("ANTHROPIC_API_KEY", "sk-ant")].into();
    let config =
        GatewayConfig::from_vars(|key: &str| vars.get(key).map(|v| v.to_string())).unwrap();
    assert_eq!(config.server.port, 8181);

    let configured: Vec<_> = config
        .providers
        .iter()
        .filter(|slot| slot.is_configured())
        .map(|slot| slot.provider)
        .collect();
    assert_eq!(configured, [ProviderKind::Claude]);
}

#[test]
fn invalid_port_is_an_error() {
    let lookup = |key: &str| (key == "PORT").then(|| "http".to_owned());
    assert!(GatewayConfig::from_vars(lookup).is_err());
}

//! Registry construction and provider configuration.

use kismet_router::{
    Generation, Provider, ProviderConfig, ProviderKind, Registry, Router, Source, Wire,
    build_provider,
};
use llm::{Client, LLM, Language};
use serde_json::json;
use std::collections::HashMap;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method},
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn kinds_declare_wire_and_models() {
    assert_eq!(ProviderKind::OpenAI.wire(), Wire::ChatCompletions);
    assert_eq!(ProviderKind::Gemini.wire(), Wire::GenerativeContent);
    assert_eq!(ProviderKind::Claude.wire(), Wire::Messages);
    assert_eq!(ProviderKind::Perplexity.wire(), Wire::SearchGrounded);
    assert_eq!(ProviderKind::Gemini.default_model(), "gemini-1.5-flash");
    assert_eq!(ProviderKind::Claude.default_model(), "claude-3-5-sonnet-20241022");
    assert_eq!(
        ProviderKind::ALL.last().copied(),
        Some(ProviderKind::Perplexity)
    );
}

#[test]
fn env_slots_skip_blank_credentials() {
    let configs = ProviderConfig::from_vars(lookup(&[
        ("OPENAI_API_KEY", "sk-1"),
        ("GEMINI_API_KEY", "   "),
        ("GOOGLE_GEMINI_API_KEY", "g-2"),
        ("PERPLEXITY_API_KEY", "pplx"),
        ("COPILOT_API_KEY", ""),
        ("COPILOT_ENDPOINT", "http://copilot.local/v1"),
    ]));
    assert_eq!(configs.len(), ProviderKind::ALL.len());

    let configured: Vec<_> = configs
        .iter()
        .filter(|c| c.is_configured())
        .map(|c| (c.provider, c.api_key.as_str()))
        .collect();
    assert_eq!(
        configured,
        [
            (ProviderKind::OpenAI, "sk-1"),
            (ProviderKind::Gemini, "g-2"),
            (ProviderKind::Perplexity, "pplx"),
        ]
    );

    let copilot = configs
        .iter()
        .find(|c| c.provider == ProviderKind::Copilot)
        .unwrap();
    assert!(!copilot.is_configured());
    assert_eq!(copilot.base_url.as_deref(), Some("http://copilot.local/v1"));
}

#[test]
fn registry_orders_by_priority() {
    let registry = Registry::from_configs(
        [
            ProviderConfig::new(ProviderKind::Perplexity, "p"),
            ProviderConfig::new(ProviderKind::Grok, "x"),
            ProviderConfig::new(ProviderKind::Claude, "c"),
            ProviderConfig::new(ProviderKind::OpenAI, ""),
            ProviderConfig::new(ProviderKind::Gemini, "g"),
        ],
        Client::new(),
    );
    assert_eq!(registry.names(), ["gemini", "claude", "grok", "perplexity"]);
}

#[test]
fn unbuildable_slot_is_skipped() {
    let registry = Registry::from_configs(
        [
            ProviderConfig::new(ProviderKind::OpenAI, "bad\nkey"),
            ProviderConfig::new(ProviderKind::DeepSeek, "ok"),
        ],
        Client::new(),
    );
    assert_eq!(registry.names(), ["deepseek"]);
}

#[test]
fn build_rejects_missing_key() {
    let config = ProviderConfig::new(ProviderKind::Claude, " ");
    assert!(build_provider(&config, Client::new()).is_err());
}

#[test]
fn variant_follows_wire() {
    for kind in ProviderKind::ALL {
        let provider = build_provider(&ProviderConfig::new(kind, "k"), Client::new()).unwrap();
        let wire = match &provider {
            Provider::Gemini(_) => Wire::GenerativeContent,
            Provider::Claude(_) => Wire::Messages,
            Provider::OpenAI(_) if kind == ProviderKind::Perplexity => Wire::SearchGrounded,
            Provider::OpenAI(_) => Wire::ChatCompletions,
        };
        assert_eq!(kind.wire(), wire, "{kind}");
        assert_eq!(provider.name(), kind.as_str());
    }
}

#[test]
fn search_wire_survives_endpoint_override() {
    let mut config = ProviderConfig::new(ProviderKind::Perplexity, "pplx");
    config.base_url = Some("http://search.local/chat/completions".into());
    let Provider::OpenAI(search) = build_provider(&config, Client::new()).unwrap() else {
        panic!("perplexity should speak chat completions");
    };
    assert_eq!(search.endpoint(), "http://search.local/chat/completions");

    let body = serde_json::to_value(search.request("ask", None, Language::En)).unwrap();
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["model"], "sonar-small-chat");
    assert!(body.get("max_tokens").is_none());
}

#[test]
fn model_override_applies() {
    let mut config = ProviderConfig::new(ProviderKind::DeepSeek, "k");
    config.model = Some("deepseek-reasoner".into());
    let provider = build_provider(&config, Client::new()).unwrap();
    assert_eq!(provider.name(), "deepseek");
    assert_eq!(provider.model(), "deepseek-reasoner");

    let provider =
        build_provider(&ProviderConfig::new(ProviderKind::Copilot, "k"), Client::new()).unwrap();
    assert_eq!(provider.model(), "gpt-4");
}

#[test]
fn config_parses_from_toml() {
    #[derive(serde::Deserialize)]
    struct File {
        providers: Vec<ProviderConfig>,
    }

    let file: File = toml::from_str(
        r#"
[[providers]]
provider = "openai"
api_key = "sk-test"

[[providers]]
provider = "deepseek"
api_key = "ds"
model = "deepseek-reasoner"
base_url = "http://localhost:9000/v1/chat/completions"
"#,
    )
    .unwrap();
    assert_eq!(file.providers[0].provider, ProviderKind::OpenAI);
    assert_eq!(file.providers[0].model(), "gpt-4o-mini");
    assert_eq!(file.providers[1].model(), "deepseek-reasoner");
    assert_eq!(
        file.providers[1].base_url.as_deref(),
        Some("http://localhost:9000/v1/chat/completions")
    );
}

#[tokio::test]
async fn live_failover_across_vendors() {
    let openai = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&openai)
        .await;

    let claude = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("x-api-key", "sk-ant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": "The moon is listening." }]
        })))
        .expect(1)
        .mount(&claude)
        .await;

    let mut openai_slot = ProviderConfig::new(ProviderKind::OpenAI, "sk-1");
    openai_slot.base_url = Some(openai.uri());
    let mut claude_slot = ProviderConfig::new(ProviderKind::Claude, "sk-ant");
    claude_slot.base_url = Some(claude.uri());

    let router = Router::from_registry(Registry::from_configs(
        [claude_slot, openai_slot],
        Client::new(),
    ));
    let generation = router.generate_traced("hello", None, Language::En).await;
    assert_eq!(
        generation,
        Generation {
            text: "The moon is listening.".into(),
            source: Source::Provider("claude".into()),
        }
    );
    assert_eq!(router.cursor(), 0);
}

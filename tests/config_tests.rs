use std::env;
use std::sync::Mutex;

use momonga::core::config::{
    AppConfig, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL_ID, DEFAULT_TOKEN_PARAMETER,
};

/// Tests for environment-driven configuration.
///
/// `from_env` reads process-wide state, so every test takes this lock to keep
/// the parallel test runner from interleaving env mutations.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARIANT_VARS: &[&str] = &[
    "BEDROCK_MODEL_ID",
    "BEDROCK_MAX_TOKENS",
    "BOT_PERSONA",
    "SLACK_TOKEN_PARAMETER",
    "KNOWLEDGE_BASE_ID",
    "TRIGGER_WORD",
    "THREAD_REPLY",
];

fn clear_variant_vars() {
    for var in VARIANT_VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_defaults_match_production_variant() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_variant_vars();

    let config = AppConfig::from_env().expect("defaults should always resolve");

    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    assert_eq!(config.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    assert_eq!(config.token_parameter, DEFAULT_TOKEN_PARAMETER);
    assert!(config.knowledge_base_id.is_none(), "retrieval off by default");
    assert!(config.trigger_word.is_none(), "no trigger gating by default");
    assert!(config.thread_reply, "replies are threaded by default");
    assert!(
        config.persona.contains("モモンガ"),
        "built-in persona should be the MOMONGA persona"
    );
}

#[test]
fn test_env_overrides_select_the_beta_variant() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_variant_vars();

    unsafe {
        env::set_var("BEDROCK_MAX_TOKENS", "400");
        env::set_var("SLACK_TOKEN_PARAMETER", "/Slack/Token/BetaMOMONGA");
        env::set_var("KNOWLEDGE_BASE_ID", "MDQPVNFIVK");
        env::set_var("TRIGGER_WORD", "モモンガくん");
        env::set_var("THREAD_REPLY", "false");
    }

    let config = AppConfig::from_env().expect("overridden config should resolve");
    clear_variant_vars();

    assert_eq!(config.max_output_tokens, 400);
    assert_eq!(config.token_parameter, "/Slack/Token/BetaMOMONGA");
    assert_eq!(config.knowledge_base_id.as_deref(), Some("MDQPVNFIVK"));
    assert_eq!(config.trigger_word.as_deref(), Some("モモンガくん"));
    assert!(!config.thread_reply);
}

#[test]
fn test_unparseable_max_tokens_is_a_config_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_variant_vars();

    unsafe { env::set_var("BEDROCK_MAX_TOKENS", "lots") };
    let result = AppConfig::from_env();
    clear_variant_vars();

    let err = result.expect_err("non-numeric token cap should fail fast");
    assert!(err.contains("BEDROCK_MAX_TOKENS"));
}

#[test]
fn test_empty_optional_vars_mean_unset() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_variant_vars();

    // Infra templates often pass empty strings for unused settings
    unsafe {
        env::set_var("KNOWLEDGE_BASE_ID", "");
        env::set_var("TRIGGER_WORD", "");
    }

    let config = AppConfig::from_env().expect("empty optionals should resolve");
    clear_variant_vars();

    assert!(config.knowledge_base_id.is_none());
    assert!(config.trigger_word.is_none());
}

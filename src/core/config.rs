use std::env;

use crate::ai::prompt::DEFAULT_PERSONA;

/// Built-in defaults reproduce the production MOMONGAgent deployment; the Beta
/// deployment overrides them through the environment.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_MAX_OUTPUT_TOKENS: i32 = 500;
pub const DEFAULT_TOKEN_PARAMETER: &str = "/Slack/Token/MOMONGAgent";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bedrock model identifier passed to the Converse API.
    pub model_id: String,
    /// Output-token cap for a single generated reply.
    pub max_output_tokens: i32,
    /// System persona the model replies as.
    pub persona: String,
    /// SSM parameter holding the Slack bot OAuth token.
    pub token_parameter: String,
    /// When set, replies are grounded in this Bedrock Knowledge Base.
    pub knowledge_base_id: Option<String>,
    /// When set, only messages containing this substring get a reply.
    pub trigger_word: Option<String>,
    /// Reply in the originating message's thread instead of the channel.
    pub thread_reply: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let max_output_tokens = match env::var("BEDROCK_MAX_TOKENS") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("BEDROCK_MAX_TOKENS: {}", e))?,
            Err(_) => DEFAULT_MAX_OUTPUT_TOKENS,
        };

        Ok(Self {
            model_id: env::var("BEDROCK_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            max_output_tokens,
            persona: env::var("BOT_PERSONA").unwrap_or_else(|_| DEFAULT_PERSONA.to_string()),
            token_parameter: env::var("SLACK_TOKEN_PARAMETER")
                .unwrap_or_else(|_| DEFAULT_TOKEN_PARAMETER.to_string()),
            knowledge_base_id: env::var("KNOWLEDGE_BASE_ID").ok().filter(|v| !v.is_empty()),
            trigger_word: env::var("TRIGGER_WORD").ok().filter(|v| !v.is_empty()),
            thread_reply: env::var("THREAD_REPLY")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }
}

//! Bedrock reply generation.
//!
//! One Converse call per accepted message. Model errors are not recovered
//! here; a failed generation fails the whole invocation and no Slack message
//! is sent.

use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use super::prompt;
use crate::core::config::AppConfig;
use crate::errors::BotError;

/// Bedrock client parameters for generating replies.
pub struct ReplyGenerator {
    model_id: String,
    max_output_tokens: i32,
    persona: String,
}

impl ReplyGenerator {
    #[must_use]
    pub fn new(model_id: String, max_output_tokens: i32, persona: String) -> Self {
        Self {
            model_id,
            max_output_tokens,
            persona,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.model_id.clone(),
            config.max_output_tokens,
            config.persona.clone(),
        )
    }

    /// Generate a reply to `user_text`, grounded in `context` when present.
    ///
    /// Returns the model's text output verbatim; no post-processing is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns `BotError::Generation` if the Converse call fails or the model
    /// returns no text output.
    pub async fn generate(
        &self,
        user_text: &str,
        context: Option<&str>,
    ) -> Result<String, BotError> {
        let shared = aws_config::from_env().load().await;
        let client = BedrockClient::new(&shared);

        let user_prompt = prompt::build_user_prompt(user_text, context);

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_prompt))
            .build()
            .map_err(|e| BotError::Generation(format!("message build: {e}")))?;

        let inference_config = InferenceConfiguration::builder()
            .max_tokens(self.max_output_tokens)
            .build();

        let resp = client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(self.persona.clone()))
            .messages(message)
            .inference_config(inference_config)
            .send()
            .await
            .map_err(|e| BotError::Generation(format!("bedrock converse: {e}")))?;

        let reply = resp
            .output()
            .and_then(|output| output.as_message().ok())
            .map(|msg| {
                msg.content()
                    .iter()
                    .filter_map(|block| block.as_text().ok().cloned())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if reply.is_empty() {
            return Err(BotError::Generation(
                "model returned no text output".to_string(),
            ));
        }

        info!(model_id = %self.model_id, chars = reply.chars().count(), "Generated reply");
        Ok(reply)
    }
}

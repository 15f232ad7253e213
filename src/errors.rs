use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to parse Slack event: {0}")]
    Parse(String),

    #[error("Failed to read Slack token from parameter store: {0}")]
    SecretUnavailable(String),

    #[error("Failed to retrieve knowledge base passages: {0}")]
    Retrieval(String),

    #[error("Failed to generate reply with Bedrock: {0}")]
    Generation(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(error: serde_json::Error) -> Self {
        BotError::Parse(error.to_string())
    }
}

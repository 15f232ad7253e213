/// MOMONGA - a Slack chatbot that replies to channel messages as a friendly
/// flying squirrel, powered by Amazon Bedrock.
///
/// This crate implements a single-Lambda architecture for the MOMONGA Slack bot:
/// the Lambda receives Slack Events API webhooks, filters them (trigger
/// keyword, bot-loop guard, per-channel staleness cursor, platform-retry
/// suppression), fetches the bot token from SSM Parameter Store, generates a
/// reply with Bedrock (optionally grounded in a Bedrock Knowledge Base), and
/// posts the reply back to the originating channel.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SSM Parameter Store for the Slack OAuth token
/// - Bedrock Runtime (Converse) for reply generation
/// - Bedrock Agent Runtime (Retrieve) for optional knowledge-base grounding
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use momonga::ai::ReplyGenerator;
/// use momonga::core::config::AppConfig;
/// use momonga::core::models::OutboundMessage;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     momonga::setup_logging();
///
///     let config = AppConfig::from_env()?;
///
///     // Generate a reply and post it back to Slack
///     let generator = ReplyGenerator::from_config(&config);
///     let reply = generator.generate("モモンガくん 元気?", None).await?;
///
///     let token = momonga::core::secrets::fetch_bot_token(&config.token_parameter).await?;
///     let message = OutboundMessage {
///         channel: "C0123456789".to_string(),
///         text: reply,
///         thread_ts: None,
///     };
///     momonga::slack::post_message(&token, &message).await?;
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// momonga::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}

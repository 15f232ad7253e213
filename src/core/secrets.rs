use aws_sdk_ssm::Client as SsmClient;

use crate::errors::BotError;

/// Fetch the decrypted Slack bot token from SSM Parameter Store.
///
/// Fetched fresh per invocation; the token is never cached.
///
/// # Errors
///
/// Returns `BotError::SecretUnavailable` if the parameter is missing, has no
/// value, or the SSM call fails.
pub async fn fetch_bot_token(parameter_name: &str) -> Result<String, BotError> {
    let shared = aws_config::from_env().load().await;
    let client = SsmClient::new(&shared);

    let resp = client
        .get_parameter()
        .name(parameter_name)
        .with_decryption(true)
        .send()
        .await
        .map_err(|e| BotError::SecretUnavailable(format!("ssm get_parameter: {e}")))?;

    resp.parameter
        .and_then(|p| p.value)
        .ok_or_else(|| {
            BotError::SecretUnavailable(format!("parameter {parameter_name} has no value"))
        })
}

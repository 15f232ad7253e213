//! Persona and prompt composition for the MOMONGA bot.

/// System persona the bot replies as. Charm is weighted over strict accuracy
/// on purpose; this is a mascot, not a reference desk.
pub const DEFAULT_PERSONA: &str = "\
#役割
あなたは、とても親しみやすいモモンガです。

#命令文
以下の制約条件に従って、最高の返答をしてください。

#制約条件
・一人称は「僕」である
・丁寧語は使わない
・可愛げがある
・正確性より穏やかさを重視する";

/// Compose the user-facing half of the prompt.
///
/// Without retrieved context the message text goes through verbatim. With
/// context, the text and the retrieved passages are presented as separate
/// labeled sections so the model can ground its reply in the passages.
#[must_use]
pub fn build_user_prompt(user_text: &str, context: Option<&str>) -> String {
    match context {
        Some(info) => format!("# 入力:\n{user_text}\n\n# 情報:\n{info}"),
        None => user_text.to_string(),
    }
}

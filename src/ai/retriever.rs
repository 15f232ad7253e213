//! Bedrock Knowledge Base retrieval.

use aws_sdk_bedrockagentruntime::Client as AgentRuntimeClient;
use aws_sdk_bedrockagentruntime::types::{
    KnowledgeBaseQuery, KnowledgeBaseRetrievalConfiguration,
    KnowledgeBaseVectorSearchConfiguration,
};
use tracing::info;

use crate::errors::BotError;

/// Passages requested per similarity search.
pub const RETRIEVAL_TOP_K: i32 = 10;

/// Run a similarity search against the knowledge base and concatenate the
/// passage texts, space-separated, in relevance order.
///
/// Overlapping passages are not deduplicated; the model sees them as the
/// retriever ranked them.
///
/// # Errors
///
/// Returns `BotError::Retrieval` if the Retrieve call fails. Retrieval
/// failures are fatal to the invocation; there is no local fallback.
pub async fn retrieve_context(knowledge_base_id: &str, query: &str) -> Result<String, BotError> {
    let shared = aws_config::from_env().load().await;
    let client = AgentRuntimeClient::new(&shared);

    let retrieval_query = KnowledgeBaseQuery::builder().text(query).build();

    let retrieval_configuration = KnowledgeBaseRetrievalConfiguration::builder()
        .vector_search_configuration(
            KnowledgeBaseVectorSearchConfiguration::builder()
                .number_of_results(RETRIEVAL_TOP_K)
                .build(),
        )
        .build();

    let resp = client
        .retrieve()
        .knowledge_base_id(knowledge_base_id)
        .retrieval_query(retrieval_query)
        .retrieval_configuration(retrieval_configuration)
        .send()
        .await
        .map_err(|e| BotError::Retrieval(format!("bedrock retrieve: {e}")))?;

    let passages: Vec<&str> = resp
        .retrieval_results()
        .iter()
        .filter_map(|result| result.content().map(|content| content.text()))
        .collect();

    info!(
        knowledge_base_id = %knowledge_base_id,
        passages = passages.len(),
        "Retrieved knowledge base passages"
    );

    Ok(passages.join(" "))
}

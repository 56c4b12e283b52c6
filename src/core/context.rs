//! Context assembly for AI coding queries.
//!
//! Searches the resource and memory namespaces for a query and
//! concatenates the most relevant contents into one string. Reads are
//! best-effort: a match whose content cannot be fetched is dropped,
//! never surfaced. Search failures still propagate.

use serde_json::Value;

use crate::core::client::{ClientError, ContextClient};
use crate::core::uri::{MEMORIES_ROOT, RESOURCES_ROOT};

/// Matches fetched per namespace
const TOP_MATCHES: usize = 3;

/// Assemble context for a query
///
/// Resource sections come first (in match order), then memory
/// sections. Sections are separated by a blank line. No matches, or
/// both inclusion flags off, yields an empty string.
pub async fn assemble(
    client: &dyn ContextClient,
    query: &str,
    include_resources: bool,
    include_memories: bool,
) -> Result<String, ClientError> {
    let mut parts = Vec::new();

    if include_resources {
        let matches = client.find(query, RESOURCES_ROOT).await?;
        collect_sections(client, &matches, "## Related resource", &mut parts).await;
    }

    if include_memories {
        let matches = client.find(query, MEMORIES_ROOT).await?;
        collect_sections(client, &matches, "## Related memory", &mut parts).await;
    }

    Ok(parts.join("\n\n"))
}

/// Read the top matches and append each successful read as a section
async fn collect_sections(
    client: &dyn ContextClient,
    matches: &[Value],
    label: &str,
    parts: &mut Vec<String>,
) {
    for m in matches.iter().take(TOP_MATCHES) {
        let Some(uri) = m.get("uri").and_then(Value::as_str) else {
            continue;
        };

        match client.read(uri).await {
            Ok(content) => parts.push(format!("{label}\n{}", render(&content))),
            Err(e) => {
                tracing::debug!(uri = %uri, "skipping unreadable match: {e}");
            }
        }
    }
}

/// Render opaque content as text
fn render(content: &Value) -> String {
    match content.as_str() {
        Some(s) => s.to_string(),
        None => content.to_string(),
    }
}

//! Sub-resource resolution
//!
//! A link-bearing field holds one resource URL (homeworld) or an ordered
//! list of them (films, species, starships, vehicles). Resolution turns
//! each URL into one human-readable field of the referenced resource
//! (`title` for films, `name` for everything else), consulting the shared
//! cache before going to the network.
//!
//! Resolution is sequential within one call; concurrency comes from many
//! records resolving at once. Any HTTP failure, malformed body, or missing
//! extract key fails the call — there is no retry and no partial result.

use crate::api::{ApiClient, ResourceCache};
use crate::{HolocronError, Result};
use serde_json::Value;

/// Resolves an ordered list of resource URLs into one joined display string
///
/// Each URL resolves to `body[extract_key]`; the values are joined with
/// `", "` in the original list order.
pub async fn resolve_list(
    client: &ApiClient,
    cache: &ResourceCache,
    urls: &[String],
    extract_key: &str,
) -> Result<String> {
    let mut values = Vec::with_capacity(urls.len());

    for url in urls {
        values.push(resolve_one(client, cache, url, extract_key).await?);
    }

    Ok(values.join(", "))
}

/// Resolves a single resource URL into its extracted display value
pub async fn resolve_single(
    client: &ApiClient,
    cache: &ResourceCache,
    url: &str,
    extract_key: &str,
) -> Result<String> {
    resolve_one(client, cache, url, extract_key).await
}

/// Cache-first resolution of one URL
async fn resolve_one(
    client: &ApiClient,
    cache: &ResourceCache,
    url: &str,
    extract_key: &str,
) -> Result<String> {
    if let Some(value) = cache.lookup(url) {
        tracing::trace!("Cache hit for {}", url);
        return Ok(value);
    }

    let body = client.get_json(url).await?;
    let value = extract_field(url, &body, extract_key)?;
    cache.store(url, &value);

    Ok(value)
}

/// Extracts a string field from a resource body
fn extract_field(url: &str, body: &Value, extract_key: &str) -> Result<String> {
    body.get(extract_key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| HolocronError::MissingField {
            url: url.to_string(),
            field: extract_key.to_string(),
        })
}

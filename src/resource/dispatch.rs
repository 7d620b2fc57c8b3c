//! Generic resource operations
//!
//! Maps registry descriptors to concrete REST calls under
//! `/visionboards/{boardId}/...`. Every operation is a pure function of its
//! arguments: argument-shape problems fail with
//! [`ApiError::InvalidArgument`] before any request is issued, and transport
//! failures are surfaced unchanged. No operation retries, caches, or keeps
//! state between calls.

use super::registry::{get_action, get_resource, ActionDef, ResourceDef, Verb};
use crate::api::client::VisionBoardClient;
use crate::error::ApiError;
use serde_json::Value;

/// Reject empty/whitespace identifiers before building a path
fn require_non_empty(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidArgument(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(())
}

/// Percent-encode a dynamic path segment (also escapes path delimiters)
fn encode_segment(name: &str, value: &str) -> Result<String, ApiError> {
    require_non_empty(name, value)?;
    Ok(urlencoding::encode(value).into_owned())
}

fn lookup(key: &str, verb: Verb) -> Result<&'static ResourceDef, ApiError> {
    let Some(def) = get_resource(key) else {
        return Err(ApiError::InvalidArgument(format!(
            "unknown resource: {}",
            key
        )));
    };
    if !def.allows(verb) {
        return Err(ApiError::InvalidArgument(format!(
            "{:?} is not permitted on {}",
            verb, key
        )));
    }
    Ok(def)
}

fn lookup_action(key: &str) -> Result<&'static ActionDef, ApiError> {
    get_action(key).ok_or_else(|| ApiError::InvalidArgument(format!("unknown action: {}", key)))
}

/// Build the collection path for a resource, appending the optional filter
/// as a single `?key=value` pair only when the caller supplies a value
pub fn collection_path(key: &str, filter: Option<&str>) -> Result<String, ApiError> {
    let Some(def) = get_resource(key) else {
        return Err(ApiError::InvalidArgument(format!(
            "unknown resource: {}",
            key
        )));
    };
    let mut path = format!("{}/{}", def.group, def.collection);

    match (def.filter_param.as_deref(), filter) {
        (Some(param), Some(value)) => {
            path.push_str(&format!("?{}={}", param, urlencoding::encode(value)));
        }
        (None, Some(_)) => {
            return Err(ApiError::InvalidArgument(format!(
                "{} does not accept a filter",
                key
            )));
        }
        _ => {}
    }

    Ok(path)
}

/// Build the path for a single resource item
pub fn item_path(key: &str, id: &str) -> Result<String, ApiError> {
    let Some(def) = get_resource(key) else {
        return Err(ApiError::InvalidArgument(format!(
            "unknown resource: {}",
            key
        )));
    };
    Ok(format!(
        "{}/{}/{}",
        def.group,
        def.collection,
        encode_segment("resource id", id)?
    ))
}

/// Build the path for a nested sub-resource collection
pub fn nested_collection_path(key: &str, id: &str, sub_key: &str) -> Result<String, ApiError> {
    let def = get_resource(key).ok_or_else(|| {
        ApiError::InvalidArgument(format!("unknown resource: {}", key))
    })?;
    let sub = def.sub_resource(sub_key).ok_or_else(|| {
        ApiError::InvalidArgument(format!("{} has no sub-resource {}", key, sub_key))
    })?;
    Ok(format!(
        "{}/{}/{}/{}",
        def.group,
        def.collection,
        encode_segment("resource id", id)?,
        sub.path
    ))
}

/// Build the path for a single nested sub-resource item
pub fn nested_item_path(
    key: &str,
    id: &str,
    sub_key: &str,
    sub_id: &str,
) -> Result<String, ApiError> {
    Ok(format!(
        "{}/{}",
        nested_collection_path(key, id, sub_key)?,
        encode_segment("nested resource id", sub_id)?
    ))
}

/// Build the path for an RPC-style action, substituting `{id}` when present
///
/// An id is required exactly when the template carries `{id}`; a stray id
/// on an unscoped action is rejected.
pub fn action_path(action_key: &str, id: Option<&str>) -> Result<String, ApiError> {
    let def = lookup_action(action_key)?;

    let path = if def.requires_id() {
        let Some(id) = id else {
            return Err(ApiError::InvalidArgument(format!(
                "action {} requires a resource id",
                action_key
            )));
        };
        def.path.replace("{id}", &encode_segment("resource id", id)?)
    } else {
        if id.is_some() {
            return Err(ApiError::InvalidArgument(format!(
                "action {} does not take a resource id",
                action_key
            )));
        }
        def.path.clone()
    };

    Ok(format!("{}/{}", def.group, path))
}

/// Unwrap the server's `{"data": ...}` envelope
///
/// Responses without the envelope field are returned as-is; callers never
/// see the envelope itself.
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

fn as_items(value: Value) -> Vec<Value> {
    value.as_array().cloned().unwrap_or_default()
}

/// List a sub-resource collection, optionally filtered
pub async fn list(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    filter: Option<&str>,
) -> Result<Vec<Value>, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::List)?;
    let path = collection_path(key, filter)?;

    let response = client.get(&client.board_url(board_id, &path)).await?;
    Ok(as_items(unwrap_envelope(response)))
}

/// Create an item; returns the created item including its server-assigned id
///
/// Not idempotent: callers must not blindly retry without deduplication.
pub async fn create(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    payload: &Value,
) -> Result<Value, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::Create)?;
    let path = collection_path(key, None)?;

    let response = client
        .post(&client.board_url(board_id, &path), Some(payload))
        .await?;
    Ok(unwrap_envelope(response))
}

/// Update an item with a partial payload; returns the updated item
pub async fn update(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    id: &str,
    payload: &Value,
) -> Result<Value, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::Update)?;
    let path = item_path(key, id)?;

    let response = client.put(&client.board_url(board_id, &path), payload).await?;
    Ok(unwrap_envelope(response))
}

/// Delete an item; returns the server's confirmation value (may be null)
///
/// Repeated delete of an already-deleted id surfaces the server's
/// `NotFound` unchanged; there is no client-side suppression.
pub async fn delete(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    id: &str,
) -> Result<Value, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::Delete)?;
    let path = item_path(key, id)?;

    let response = client.delete(&client.board_url(board_id, &path)).await?;
    Ok(unwrap_envelope(response))
}

/// Invoke an RPC-style action (always POST)
pub async fn action(
    client: &VisionBoardClient,
    board_id: &str,
    action_key: &str,
    id: Option<&str>,
    payload: Option<&Value>,
) -> Result<Value, ApiError> {
    require_non_empty("board id", board_id)?;
    let def = lookup_action(action_key)?;
    if def.requires_body && payload.is_none() {
        return Err(ApiError::InvalidArgument(format!(
            "action {} requires a payload",
            action_key
        )));
    }
    let path = action_path(action_key, id)?;

    tracing::info!("action: {} on board {}", action_key, board_id);
    let response = client.post(&client.board_url(board_id, &path), payload).await?;
    Ok(unwrap_envelope(response))
}

/// List a nested sub-resource collection
pub async fn list_nested(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    id: &str,
    sub_key: &str,
) -> Result<Vec<Value>, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::List)?;
    let path = nested_collection_path(key, id, sub_key)?;

    let response = client.get(&client.board_url(board_id, &path)).await?;
    Ok(as_items(unwrap_envelope(response)))
}

/// Create an item in a nested sub-resource collection
pub async fn create_nested(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    id: &str,
    sub_key: &str,
    payload: &Value,
) -> Result<Value, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::Create)?;
    let path = nested_collection_path(key, id, sub_key)?;

    let response = client
        .post(&client.board_url(board_id, &path), Some(payload))
        .await?;
    Ok(unwrap_envelope(response))
}

/// Update a nested sub-resource item
pub async fn update_nested(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    id: &str,
    sub_key: &str,
    sub_id: &str,
    payload: &Value,
) -> Result<Value, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::Update)?;
    let path = nested_item_path(key, id, sub_key, sub_id)?;

    let response = client.put(&client.board_url(board_id, &path), payload).await?;
    Ok(unwrap_envelope(response))
}

/// Delete a nested sub-resource item (same policy as [`delete`])
pub async fn delete_nested(
    client: &VisionBoardClient,
    board_id: &str,
    key: &str,
    id: &str,
    sub_key: &str,
    sub_id: &str,
) -> Result<Value, ApiError> {
    require_non_empty("board id", board_id)?;
    lookup(key, Verb::Delete)?;
    let path = nested_item_path(key, id, sub_key, sub_id)?;

    let response = client.delete(&client.board_url(board_id, &path)).await?;
    Ok(unwrap_envelope(response))
}

//! Session telemetry snapshot as delivered on stdin.
//!
//! Only the top-level parse may fail. Every field below is decoded leniently:
//! a missing, `null` or mistyped value becomes `None` and the formatters fall
//! back to their placeholders.

use std::io::Read;

use anyhow::Context;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Decode a field, turning a shape mismatch into `None` instead of an error.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "lenient")]
    pub model: Option<Model>,
    #[serde(default, deserialize_with = "lenient")]
    pub workspace: Option<Workspace>,
    #[serde(default, deserialize_with = "lenient")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub output_style: Option<OutputStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost: Option<Cost>,
    #[serde(default, deserialize_with = "lenient")]
    pub context_window: Option<ContextWindow>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Model {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Workspace {
    #[serde(default, deserialize_with = "lenient")]
    pub current_dir: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub project_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputStyle {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Cost {
    #[serde(default, deserialize_with = "lenient")]
    pub total_cost_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_duration_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_api_duration_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_lines_added: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_lines_removed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContextWindow {
    #[serde(default, deserialize_with = "lenient")]
    pub total_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub context_window_size: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub used_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub remaining_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_usage: Option<CurrentUsage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentUsage {
    #[serde(default, deserialize_with = "lenient")]
    pub input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub cache_read_input_tokens: Option<u64>,
}

impl Snapshot {
    /// Build a snapshot from an already-parsed document.
    ///
    /// A document that is valid JSON but not an object carries no fields, so
    /// it yields an empty snapshot.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            warn!("status snapshot is not a JSON object, rendering placeholders");
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_else(|err| {
            warn!(%err, "status snapshot could not be decoded, rendering placeholders");
            Self::default()
        })
    }

    /// Live working directory, falling back to the top-level `cwd`.
    /// Empty strings count as absent.
    pub fn current_dir(&self) -> Option<&str> {
        self.workspace
            .as_ref()
            .and_then(|w| w.current_dir.as_deref())
            .filter(|dir| !dir.is_empty())
            .or_else(|| self.cwd.as_deref().filter(|dir| !dir.is_empty()))
    }

    pub fn project_dir(&self) -> Option<&str> {
        self.workspace
            .as_ref()
            .and_then(|w| w.project_dir.as_deref())
            .filter(|dir| !dir.is_empty())
    }
}

/// Read the whole stream, then parse it as a single JSON document.
pub fn read_snapshot<R: Read>(mut reader: R) -> anyhow::Result<Snapshot> {
    let mut input = String::with_capacity(4096);
    reader
        .read_to_string(&mut input)
        .context("failed to read status snapshot from stdin")?;
    debug!(bytes = input.len(), "read status snapshot");

    let value: Value =
        serde_json::from_str(&input).context("status snapshot is not valid JSON")?;
    Ok(Snapshot::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_full_snapshot() {
        let json = r#"{
            "model": {"id": "claude-opus-4-1", "display_name": "Opus"},
            "workspace": {"current_dir": "/repo/src", "project_dir": "/repo"},
            "cost": {"total_cost_usd": 1.5, "total_api_duration_ms": 2300},
            "context_window": {
                "remaining_percentage": 42.5,
                "current_usage": {"input_tokens": 10, "cache_read_input_tokens": 90}
            }
        }"#;
        let snapshot = read_snapshot(json.as_bytes()).unwrap();

        assert_eq!(snapshot.current_dir(), Some("/repo/src"));
        assert_eq!(snapshot.project_dir(), Some("/repo"));
        let model = snapshot.model.as_ref().unwrap();
        assert_eq!(model.display_name.as_deref(), Some("Opus"));
        let ctx = snapshot.context_window.unwrap();
        assert_eq!(ctx.remaining_percentage, Some(42.5));
        assert_eq!(ctx.current_usage.unwrap().cache_read_input_tokens, Some(90));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let err = read_snapshot("{invalid json}".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("not valid JSON"));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(read_snapshot("".as_bytes()).is_err());
    }

    #[test]
    fn test_mistyped_fields_become_none() {
        let json = r#"{
            "model": "not-an-object",
            "cost": {"total_cost_usd": "lots", "total_api_duration_ms": 1200},
            "context_window": {"remaining_percentage": null, "total_input_tokens": -4}
        }"#;
        let snapshot = read_snapshot(json.as_bytes()).unwrap();

        assert!(snapshot.model.is_none());
        let cost = snapshot.cost.unwrap();
        assert_eq!(cost.total_cost_usd, None);
        assert_eq!(cost.total_api_duration_ms, Some(1200.0));
        let ctx = snapshot.context_window.unwrap();
        assert_eq!(ctx.remaining_percentage, None);
        assert_eq!(ctx.total_input_tokens, None);
    }

    #[test]
    fn test_non_object_document_is_empty_snapshot() {
        let snapshot = read_snapshot("[1, 2, 3]".as_bytes()).unwrap();
        assert!(snapshot.model.is_none());
        assert!(snapshot.workspace.is_none());
    }

    #[test]
    fn test_current_dir_falls_back_to_cwd() {
        let snapshot = read_snapshot(r#"{"cwd": "/tmp/fallback"}"#.as_bytes()).unwrap();
        assert_eq!(snapshot.current_dir(), Some("/tmp/fallback"));

        let json = r#"{"cwd": "/tmp/fallback", "workspace": {"current_dir": "/tmp/live"}}"#;
        let snapshot = read_snapshot(json.as_bytes()).unwrap();
        assert_eq!(snapshot.current_dir(), Some("/tmp/live"));
    }

    #[test]
    fn test_empty_dirs_count_as_absent() {
        let json = r#"{"cwd": "/tmp/x", "workspace": {"current_dir": "", "project_dir": ""}}"#;
        let snapshot = read_snapshot(json.as_bytes()).unwrap();
        assert_eq!(snapshot.current_dir(), Some("/tmp/x"));
        assert_eq!(snapshot.project_dir(), None);

        let snapshot = read_snapshot(r#"{"cwd": "", "workspace": {"current_dir": ""}}"#.as_bytes()).unwrap();
        assert_eq!(snapshot.current_dir(), None);
    }
}

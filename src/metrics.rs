//! One function per status field. Each takes the whole snapshot and returns a
//! single colored fragment, substituting a placeholder when its inputs are
//! missing.

use crate::config::RenderConfig;
use crate::path::{collapse, display_path};
use crate::snapshot::Snapshot;
use crate::theme::{Tone, paint, urgency_color};

pub const CONTEXT_PLACEHOLDER: &str = "--.--% ctx";
pub const TOKENS_PLACEHOLDER: &str = "--% in";
pub const CACHE_PLACEHOLDER: &str = "--% cache";
pub const PATH_PLACEHOLDER: &str = "-";

/// `part / whole` as a rounded percentage, `None` for an empty whole.
fn percent(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some((part as f64 / whole as f64 * 100.0).round())
}

/// `"<style> (<model>)"` with any `namespace:` prefix dropped from the style.
pub fn style_model(snapshot: &Snapshot) -> String {
    let style = snapshot
        .output_style
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .and_then(|name| name.rsplit(':').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("default");
    let model = snapshot
        .model
        .as_ref()
        .and_then(|m| m.display_name.as_deref())
        .filter(|m| !m.is_empty())
        .unwrap_or("unknown");
    paint(&format!("{style} ({model})"), Tone::Style.index())
}

/// Session cost in dollars, `$0.00` when absent.
pub fn cost(snapshot: &Snapshot) -> String {
    let usd = snapshot
        .cost
        .as_ref()
        .and_then(|c| c.total_cost_usd)
        .unwrap_or(0.0);
    paint(&format!("${usd:.2}"), Tone::Cost.index())
}

/// Render API time. Under a minute shows tenths and an `api` suffix; a minute
/// or more shows `<m>m<s>s` with no suffix.
pub fn format_api_time(ms: f64) -> String {
    let ms = ms.max(0.0);
    if ms < 60_000.0 {
        let tenths = (ms / 100.0).floor() as u64;
        format!("{}.{}s api", tenths / 10, tenths % 10)
    } else {
        let secs = (ms / 1000.0).round() as u64;
        format!("{}m{}s", secs / 60, secs % 60)
    }
}

/// Cumulative time spent waiting on the API.
pub fn api_time(snapshot: &Snapshot) -> String {
    let ms = snapshot
        .cost
        .as_ref()
        .and_then(|c| c.total_api_duration_ms)
        .unwrap_or(0.0);
    paint(&format_api_time(ms), Tone::Time.index())
}

/// Remaining context percentage, colored by urgency.
pub fn context_remaining(snapshot: &Snapshot) -> String {
    match snapshot
        .context_window
        .as_ref()
        .and_then(|c| c.remaining_percentage)
    {
        Some(remaining) => paint(&format!("{remaining:.2}% ctx"), urgency_color(remaining)),
        None => paint(CONTEXT_PLACEHOLDER, Tone::Dim.index()),
    }
}

/// Share of session tokens that were input.
pub fn token_ratio(snapshot: &Snapshot) -> String {
    let ctx = snapshot.context_window.as_ref();
    let input = ctx.and_then(|c| c.total_input_tokens).unwrap_or(0);
    let output = ctx.and_then(|c| c.total_output_tokens).unwrap_or(0);
    if input == 0 || output == 0 {
        return paint(TOKENS_PLACEHOLDER, Tone::Dim.index());
    }
    match percent(input, input.saturating_add(output)) {
        Some(pct) => paint(&format!("{pct:.0}% in"), Tone::Tokens.index()),
        None => paint(TOKENS_PLACEHOLDER, Tone::Dim.index()),
    }
}

/// Share of the current request's input served from cache.
pub fn cache_efficiency(snapshot: &Snapshot) -> String {
    let Some(usage) = snapshot
        .context_window
        .as_ref()
        .and_then(|c| c.current_usage.as_ref())
    else {
        return paint(CACHE_PLACEHOLDER, Tone::Dim.index());
    };

    let read = usage.cache_read_input_tokens.unwrap_or(0);
    let whole = usage
        .input_tokens
        .unwrap_or(0)
        .saturating_add(read)
        .saturating_add(usage.cache_creation_input_tokens.unwrap_or(0));
    match percent(read, whole) {
        Some(pct) => paint(&format!("{pct:.0}% cache"), Tone::Cache.index()),
        None => paint(CACHE_PLACEHOLDER, Tone::Dim.index()),
    }
}

/// Working directory collapsed to the configured width, in the accent color.
pub fn collapsed_path(snapshot: &Snapshot, config: &RenderConfig) -> String {
    let shown = display_path(snapshot, config);
    let path = shown.as_deref().unwrap_or(PATH_PLACEHOLDER);
    paint(&collapse(path, config.max_width), Tone::Path.index())
}

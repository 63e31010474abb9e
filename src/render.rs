//! Row composition: three fixed rows of formatter output.

use crate::config::RenderConfig;
use crate::metrics;
use crate::snapshot::Snapshot;
use crate::theme::{Tone, paint};

pub const SEPARATOR: &str = " | ";

/// Join fields with a dim separator.
pub fn join_row(fields: &[String]) -> String {
    fields.join(paint(SEPARATOR, Tone::Dim.index()).as_str())
}

/// The three status rows, in display order.
pub fn rows(snapshot: &Snapshot, config: &RenderConfig) -> [String; 3] {
    [
        join_row(&[
            metrics::style_model(snapshot),
            metrics::cost(snapshot),
            metrics::api_time(snapshot),
        ]),
        join_row(&[
            metrics::context_remaining(snapshot),
            metrics::token_ratio(snapshot),
            metrics::cache_efficiency(snapshot),
        ]),
        metrics::collapsed_path(snapshot, config),
    ]
}

/// Rows joined by newlines, without a trailing newline.
pub fn render(snapshot: &Snapshot, config: &RenderConfig) -> String {
    rows(snapshot, config).join("\n")
}

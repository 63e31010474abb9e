//! cc-usage-line library
//!
//! Pure pieces of the status line: snapshot decoding, the color ramp, path
//! collapsing, per-field formatters and row composition. The binary in
//! main.rs only wires stdin and stdout to [`render`].

pub mod config;
pub mod metrics;
pub mod path;
pub mod render;
pub mod snapshot;
pub mod theme;

pub use config::{DEFAULT_MAX_WIDTH, RenderConfig};
pub use path::collapse;
pub use render::render;
pub use snapshot::{Snapshot, read_snapshot};
pub use theme::urgency_color;

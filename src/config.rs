//! Render settings: the width budget and the home directory used for `~`.

use std::env;

use crate::path::normalize;

/// Fixed printable width of the directory row. The terminal is never probed.
pub const DEFAULT_MAX_WIDTH: usize = 50;

/// Inputs to rendering that do not come from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub max_width: usize,
    /// Home directory in forward-slash form, used for `~` substitution.
    pub home: Option<String>,
}

impl RenderConfig {
    pub fn new(max_width: usize, home: Option<&str>) -> Self {
        Self {
            max_width,
            home: home.filter(|h| !h.is_empty()).map(normalize),
        }
    }

    /// Width default plus the home directory from `HOME`, then `USERPROFILE`.
    pub fn from_env() -> Self {
        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .ok();
        Self::new(DEFAULT_MAX_WIDTH, home.as_deref())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH, None)
    }
}

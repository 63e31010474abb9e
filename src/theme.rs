//! 256-color palette and the context urgency ramp.

pub const RESET: &str = "\x1b[0m";

/// Semantic color names used by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Separators and placeholders.
    Dim,
    Style,
    Cost,
    Time,
    Tokens,
    Cache,
    /// Accent for the working-directory row.
    Path,
}

impl Tone {
    pub const fn index(self) -> u8 {
        match self {
            Tone::Dim => 242,
            Tone::Style => 111,
            Tone::Cost => 114,
            Tone::Time => 180,
            Tone::Tokens => 146,
            Tone::Cache => 109,
            Tone::Path => 75,
        }
    }
}

/// `(remaining >= threshold, color index)`, evaluated top-down.
pub const URGENCY_TIERS: [(f64, u8); 7] = [
    (60.0, 242), // dim
    (50.0, 250), // slightly elevated
    (40.0, 229), // pale warning
    (30.0, 220), // bright warning
    (20.0, 214), // high alert
    (10.0, 202), // severe
    (0.0, 196),  // critical
];

const CRITICAL: u8 = 196;

/// Foreground escape for a 256-color index.
pub fn fg(index: u8) -> String {
    format!("\x1b[38;5;{index}m")
}

/// Wrap `text` in a color span that is always closed.
pub fn paint(text: &str, index: u8) -> String {
    format!("{}{text}{RESET}", fg(index))
}

/// Pick a color for the percentage of context still available.
///
/// Lower remaining means a hotter color. Negative and NaN inputs land on the
/// critical tier.
pub fn urgency_color(remaining_percent: f64) -> u8 {
    URGENCY_TIERS
        .iter()
        .find(|&&(min, _)| remaining_percent >= min)
        .map_or(CRITICAL, |&(_, index)| index)
}

//! Working-directory display: picking the path to show and collapsing it to
//! a width budget.
//!
//! All path math runs on forward-slash strings so results do not depend on
//! the host separator. Widths are counted in `char`s.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::snapshot::Snapshot;

pub const ELLIPSIS: &str = "...";

/// Prefix for a directory below the project root.
pub const ROOT_MARKER: &str = "⌂";

fn width(s: &str) -> usize {
    s.chars().count()
}

/// First `n` chars of `s`, as a slice.
fn head(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(i, _)| &s[..i])
}

/// Last `n` chars of `s`, as a slice.
fn tail(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    s.char_indices()
        .rev()
        .nth(n - 1)
        .map_or(s, |(i, _)| &s[i..])
}

/// Shorten `path` to at most `max_width` chars.
///
/// Passes, in order, each only while characters are still overdue:
/// 1. reduce directory segments to their first char, left to right
/// 2. with 3+ segments, keep the first, turn the second into `...` and drop
///    the rest
/// 3. cut the middle out of the basename, leaving `prefix...suffix`
///
/// A basename that cannot shrink far enough leaves the result over budget.
pub fn collapse(path: &str, max_width: usize) -> Cow<'_, str> {
    let len = width(path);
    if len <= max_width {
        return Cow::Borrowed(path);
    }

    let mut overdue = (len - max_width) as isize;
    let (dir, basename) = match path.rfind('/') {
        Some(i) => (Some(&path[..i]), &path[i + 1..]),
        None => (None, path),
    };
    let mut segments: Vec<&str> = dir.map(|d| d.split('/').collect()).unwrap_or_default();

    for seg in &mut segments {
        if overdue <= 0 {
            break;
        }
        let saved = width(seg).saturating_sub(1);
        if saved == 0 {
            continue;
        }
        *seg = head(*seg, 1);
        overdue -= saved as isize;
    }
    trace!(overdue, "collapse: initialed directories");

    if overdue > 0 && segments.len() >= 3 {
        let dropped: usize = segments[2..].iter().map(|s| width(s) + 1).sum();
        overdue -= (dropped + width(segments[1])) as isize - width(ELLIPSIS) as isize;
        segments.truncate(2);
        segments[1] = ELLIPSIS;
        trace!(overdue, "collapse: elided middle directories");
    }

    let basename: Cow<str> = if overdue > 0 && width(basename) > width(ELLIPSIS) {
        let target = width(basename).saturating_sub(overdue as usize);
        let keep = target.saturating_sub(width(ELLIPSIS));
        let suffix = keep / 2;
        let prefix = keep - suffix;
        trace!(target_width = target, "collapse: truncating basename");
        Cow::Owned(format!(
            "{}{ELLIPSIS}{}",
            head(basename, prefix),
            tail(basename, suffix)
        ))
    } else {
        Cow::Borrowed(basename)
    };

    let mut result = String::with_capacity(max_width + ELLIPSIS.len());
    for seg in &segments {
        result.push_str(seg);
        result.push('/');
    }
    result.push_str(&basename);
    Cow::Owned(result)
}

/// Convert separators to `/` and drop trailing slashes, keeping a bare root.
pub fn normalize(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// `path` relative to `base`, or `None` when it is not inside `base`.
/// Equal paths give `Some("")`.
fn relative_to<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if path == base {
        return Some("");
    }
    let rest = path.strip_prefix(base)?;
    if base.ends_with('/') {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

/// Replace a leading home directory with `~`.
fn tilde(path: &str, home: Option<&str>) -> String {
    match home.and_then(|h| relative_to(path, h)) {
        Some("") => "~".to_string(),
        Some(rel) => format!("~/{rel}"),
        None => path.to_string(),
    }
}

/// Uncollapsed path for the directory row.
///
/// The project root itself shows in home-relative form, a directory below it
/// as `⌂/<relative>`, and anything else as the home-relative current dir.
pub fn display_path(snapshot: &Snapshot, config: &RenderConfig) -> Option<String> {
    let project = snapshot.project_dir().map(normalize);
    let current = snapshot
        .current_dir()
        .map(normalize)
        .or_else(|| project.clone())?;
    let home = config.home.as_deref();

    let shown = match project.as_deref().map(|p| (p, relative_to(&current, p))) {
        Some((project, Some(""))) => tilde(project, home),
        Some((_, Some(rel))) => format!("{ROOT_MARKER}/{rel}"),
        _ => tilde(&current, home),
    };
    debug!(path = %shown, "resolved working directory");
    Some(shown)
}

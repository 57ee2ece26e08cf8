//! The detector page.

/// Static page markup and script, served verbatim at `/`.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

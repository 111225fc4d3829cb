//! Text cleanup helpers

use physocts_core::bind_maybes;

/// Drop ASCII control characters (code points below 32) from `text`.
///
/// `None` stays `None`.
pub fn to_readable_text(text: Option<&str>) -> Option<String> {
    let strip = bind_maybes!(|s: &str| Some(
        s.chars().filter(|c| u32::from(*c) >= 32).collect::<String>()
    ));
    strip(text)
}

//! Emoji glyphs for terminal feedback lines.
//!
//! Messages are written with `:shortcode:` names and resolved to the actual
//! glyph just before printing, so the message templates stay readable.

/// Shortcode → glyph table. Only the names the printers use.
const GLYPHS: &[(&str, &str)] = &[
    ("microphone", "\u{1F3A4}"),                  // 🎤
    ("musical_score", "\u{1F3BC}"),               // 🎼
    ("cd", "\u{1F4BF}"),                          // 💿
    ("arrow_forward", "\u{25B6}\u{FE0F}"),        // ▶️
    ("double_vertical_bar", "\u{23F8}\u{FE0F}"),  // ⏸️
    ("fast_forward", "\u{23E9}"),                 // ⏩
    ("rewind", "\u{23EA}"),                       // ⏪
    ("bell", "\u{1F514}"),                        // 🔔
    ("no_bell", "\u{1F515}"),                     // 🔕
    ("headphones", "\u{1F3A7}"),                  // 🎧
    ("speaker", "\u{1F50A}"),                     // 🔊
    ("twisted_rightwards_arrows", "\u{1F500}"),   // 🔀
    ("repeat", "\u{1F501}"),                      // 🔁
];

/// Look up a glyph by shortcode name.
pub fn glyph(name: &str) -> Option<&'static str> {
    GLYPHS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, symbol)| *symbol)
}

/// Replace every known `:shortcode:` occurrence in `text` with its glyph.
///
/// Unknown shortcodes are left untouched, including their colons, so a plain
/// `12:30` timestamp passes through unchanged.
pub fn emojify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find(':') {
            Some(end) => match glyph(&after[..end]) {
                Some(symbol) => {
                    out.push_str(symbol);
                    rest = &after[end + 1..];
                }
                None => {
                    // Not a known name; keep the opening colon and rescan
                    // from the closing one, which may open a real shortcode.
                    out.push(':');
                    out.push_str(&after[..end]);
                    rest = &after[end..];
                }
            },
            None => {
                out.push(':');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(glyph("bell"), Some("\u{1F514}"));
        assert_eq!(glyph("twisted_rightwards_arrows"), Some("\u{1F500}"));
    }

    #[test]
    fn unknown_names_return_none() {
        assert_eq!(glyph("saxophone"), None);
    }

    #[test]
    fn emojify_replaces_a_single_shortcode() {
        assert_eq!(emojify(":bell:  Spotify unmuted."), "\u{1F514}  Spotify unmuted.");
    }

    #[test]
    fn emojify_replaces_multiple_shortcodes() {
        let line = emojify(":fast_forward:  next :musical_score:");
        assert_eq!(line, "\u{23E9}  next \u{1F3BC}");
    }

    #[test]
    fn emojify_leaves_unknown_shortcodes_alone() {
        assert_eq!(emojify(":saxophone: solo"), ":saxophone: solo");
    }

    #[test]
    fn emojify_leaves_plain_colons_alone() {
        assert_eq!(emojify("position 12:30 of 44:10"), "position 12:30 of 44:10");
    }

    #[test]
    fn emojify_handles_adjacent_text_and_shortcode() {
        assert_eq!(emojify("Volume :speaker: up"), "Volume \u{1F50A} up");
    }

    #[test]
    fn emojify_without_shortcodes_is_identity() {
        assert_eq!(emojify("no glyphs here"), "no glyphs here");
    }
}

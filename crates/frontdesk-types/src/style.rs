//! Markup tag to synthesis style resolution.
//!
//! The speech engine understands a small set of named styles, each with an
//! intensity degree. Reply text arrives tagged with emotion markup
//! (`[EXCITED]...[/EXCITED]`); this module owns the fixed table that turns a
//! tag into the (style, degree) pair the synthesis document carries.

/// A named synthesis style with an intensity degree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechStyle {
    /// Style name as the speech engine expects it.
    pub name: &'static str,
    /// Intensity of the style, 1.0 is nominal.
    pub degree: f32,
}

/// Tag table, uppercase key to style.
///
/// Several tags share a style at different intensities; labels outside this
/// table resolve to the `DEFAULT` row.
const STYLE_TABLE: &[(&str, SpeechStyle)] = &[
    ("DEFAULT", SpeechStyle { name: "friendly", degree: 1.0 }),
    ("ANGRY", SpeechStyle { name: "angry", degree: 1.5 }),
    ("SAD", SpeechStyle { name: "sad", degree: 1.0 }),
    ("CHEERFUL", SpeechStyle { name: "cheerful", degree: 1.0 }),
    ("EXCITED", SpeechStyle { name: "excited", degree: 1.5 }),
    ("EMPATHETIC", SpeechStyle { name: "empathetic", degree: 1.0 }),
    ("FRIENDLY", SpeechStyle { name: "friendly", degree: 1.0 }),
    ("DELIGHTFUL", SpeechStyle { name: "cheerful", degree: 1.3 }),
    ("JOYFUL", SpeechStyle { name: "cheerful", degree: 2.0 }),
    ("LAUGHING", SpeechStyle { name: "cheerful", degree: 2.0 }),
];

/// Read-only lookup from markup tags to synthesis styles.
#[derive(Debug, Clone, Copy)]
pub struct StyleProfile {
    entries: &'static [(&'static str, SpeechStyle)],
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            entries: STYLE_TABLE,
        }
    }
}

impl StyleProfile {
    /// Resolves a tag to its style, case-insensitively.
    ///
    /// Unknown tags resolve to the default style rather than failing; a
    /// misspelled tag costs expressiveness, never the reply.
    pub fn resolve(&self, tag: &str) -> SpeechStyle {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(tag))
            .map(|(_, style)| *style)
            .unwrap_or_else(|| self.default_style())
    }

    /// The style applied to untagged text.
    pub fn default_style(&self) -> SpeechStyle {
        // First row is DEFAULT.
        self.entries[0].1
    }
}

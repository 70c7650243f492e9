//! Emotion markup parsing and synthesis document assembly.
//!
//! Reply text arrives with optional `[TAG]...[/TAG]` spans from the emotion
//! pipeline. [`assemble`] scans the text left to right, resolves each tag
//! through the [`StyleProfile`], wraps untagged stretches in the default
//! style, and produces a [`StyledDocument`] that renders to the XML-like
//! markup the speech engine consumes.

use std::sync::LazyLock;

use regex::Regex;

use frontdesk_types::{SpeakerVoice, SpeechStyle, StyleProfile};

/// An opening tag: `[` followed by anything up to the first `]`.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());

/// One styled stretch of reply text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    /// The spoken text, exactly as it will appear in the markup.
    pub text: String,
    /// The resolved synthesis style.
    pub style: SpeechStyle,
}

/// A complete synthesis document: voice settings plus ordered segments.
///
/// Segments tile the input text in order. Concatenating their texts yields
/// the input back, except where a span's preamble was stripped (see
/// [`assemble`]).
#[derive(Debug, Clone, PartialEq)]
pub struct StyledDocument {
    voice: SpeakerVoice,
    segments: Vec<StyledSegment>,
}

impl StyledDocument {
    /// Voice settings the document will be spoken with.
    pub fn voice(&self) -> &SpeakerVoice {
        &self.voice
    }

    /// The ordered styled segments.
    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    /// Renders the document to the speech engine's markup format.
    ///
    /// Segment text is emitted verbatim; the engine receives exactly what
    /// the model produced.
    pub fn to_markup(&self) -> String {
        let mut out = String::from(
            r#"<speak xmlns="http://www.w3.org/2001/10/synthesis" xmlns:mstts="http://www.w3.org/2001/mstts" version="1.0" xml:lang="en-US">"#,
        );
        out.push_str(&format!(r#"<voice name="{}">"#, self.voice.name));
        out.push_str(&format!(
            r#"<prosody rate="{}" pitch="{}">"#,
            self.voice.rate, self.voice.pitch
        ));
        for segment in &self.segments {
            out.push_str(&format!(
                r#"<mstts:express-as style="{}" styledegree="{:.1}">{}</mstts:express-as>"#,
                segment.style.name, segment.style.degree, segment.text
            ));
        }
        out.push_str("</prosody></voice></speak>");
        out
    }
}

/// Splits tagged reply text into styled segments.
///
/// The scan is non-nesting and first-match-wins: at each opening tag the
/// first later occurrence of its exact closing token ends the span, and
/// scanning resumes after it. An opening tag with no close is plain text.
/// Text outside spans becomes default-styled segments; text with no spans at
/// all (including the empty string) becomes a single default segment.
///
/// Inside a span, everything up to and including the first blank line is
/// dropped. Models sometimes prefix a reply with thinking-out-loud text
/// separated by a blank line; only the part after it is meant to be spoken.
pub fn assemble(text: &str, voice: &SpeakerVoice, profile: &StyleProfile) -> StyledDocument {
    let mut segments = Vec::new();
    let mut consumed = 0;
    let mut scan_from = 0;
    let mut found_span = false;

    while scan_from <= text.len() {
        let Some(caps) = OPEN_TAG.captures(&text[scan_from..]) else {
            break;
        };
        let (open_start, open_end, tag) = match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(tag)) => (
                scan_from + whole.start(),
                scan_from + whole.end(),
                tag.as_str(),
            ),
            _ => break,
        };

        let close_token = format!("[/{}]", tag);
        match text[open_end..].find(&close_token) {
            Some(rel) => {
                if open_start > consumed {
                    segments.push(StyledSegment {
                        text: text[consumed..open_start].to_string(),
                        style: profile.default_style(),
                    });
                }
                let inner = &text[open_end..open_end + rel];
                let spoken = match inner.find("\n\n") {
                    Some(at) => &inner[at + 2..],
                    None => inner,
                };
                segments.push(StyledSegment {
                    text: spoken.to_string(),
                    style: profile.resolve(tag),
                });
                found_span = true;
                consumed = open_end + rel + close_token.len();
                scan_from = consumed;
            }
            None => {
                // Unterminated open tag; step past the bracket and rescan so
                // a later well-formed span is still found.
                scan_from = open_start + 1;
            }
        }
    }

    if !found_span {
        segments.push(StyledSegment {
            text: text.to_string(),
            style: profile.default_style(),
        });
    } else if consumed < text.len() {
        segments.push(StyledSegment {
            text: text[consumed..].to_string(),
            style: profile.default_style(),
        });
    }

    StyledDocument {
        voice: voice.clone(),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> StyledDocument {
        assemble(text, &SpeakerVoice::default(), &StyleProfile::default())
    }

    #[test]
    fn untagged_text_is_one_default_segment() {
        let document = doc("Hello, how can I help?");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "Hello, how can I help?");
        assert_eq!(document.segments()[0].style.name, "friendly");
        assert_eq!(document.segments()[0].style.degree, 1.0);
    }

    #[test]
    fn empty_input_is_one_empty_default_segment() {
        let document = doc("");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "");
    }

    #[test]
    fn single_span_resolves_its_tag() {
        let document = doc("[EXCITED]Great news![/EXCITED]");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "Great news!");
        assert_eq!(document.segments()[0].style.name, "excited");
        assert_eq!(document.segments()[0].style.degree, 1.5);
    }

    #[test]
    fn gaps_around_spans_become_default_segments() {
        let document = doc("Intro. [SAD]Bad news.[/SAD] Outro.");
        let texts: Vec<&str> = document.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Intro. ", "Bad news.", " Outro."]);
        assert_eq!(document.segments()[0].style.name, "friendly");
        assert_eq!(document.segments()[1].style.name, "sad");
        assert_eq!(document.segments()[2].style.name, "friendly");
    }

    #[test]
    fn segment_texts_tile_the_input() {
        let input = "One [ANGRY]two[/ANGRY] three [JOYFUL]four[/JOYFUL] five";
        let document = doc(input);
        let joined: String = document
            .segments()
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(joined, "One two three four five");
    }

    #[test]
    fn tags_resolve_case_insensitively() {
        let document = doc("[cheerful]hi there[/cheerful]");
        assert_eq!(document.segments()[0].style.name, "cheerful");
    }

    #[test]
    fn close_must_repeat_the_open_token_exactly() {
        // Mixed-case close does not terminate the span, so no span exists
        // and the whole text stays literal.
        let document = doc("[CHEERFUL]hi[/cheerful]");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "[CHEERFUL]hi[/cheerful]");
        assert_eq!(document.segments()[0].style.name, "friendly");
    }

    #[test]
    fn unknown_tag_falls_back_to_default_style() {
        let document = doc("[SARCASTIC]sure[/SARCASTIC]");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "sure");
        assert_eq!(document.segments()[0].style.name, "friendly");
        assert_eq!(document.segments()[0].style.degree, 1.0);
    }

    #[test]
    fn unterminated_tag_is_plain_text() {
        let document = doc("[EXCITED]no close here");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "[EXCITED]no close here");
        assert_eq!(document.segments()[0].style.name, "friendly");
    }

    #[test]
    fn mismatched_close_is_plain_text() {
        let document = doc("[EXCITED]oops[/SAD]");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "[EXCITED]oops[/SAD]");
    }

    #[test]
    fn unterminated_tag_does_not_hide_a_later_span() {
        let document = doc("[BROKEN] text [SAD]fine[/SAD]");
        let texts: Vec<&str> = document.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["[BROKEN] text ", "fine"]);
        assert_eq!(document.segments()[1].style.name, "sad");
    }

    #[test]
    fn span_preamble_before_blank_line_is_dropped() {
        let document = doc("[CHEERFUL]Let me think.\n\nHere is the answer.[/CHEERFUL]");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "Here is the answer.");
    }

    #[test]
    fn only_the_first_blank_line_is_stripped() {
        let document = doc("[SAD]a\n\nb\n\nc[/SAD]");
        assert_eq!(document.segments()[0].text, "b\n\nc");
    }

    #[test]
    fn inner_tags_do_not_nest() {
        let document = doc("[EXCITED][SAD]deep[/SAD][/EXCITED]");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "[SAD]deep[/SAD]");
        assert_eq!(document.segments()[0].style.name, "excited");
    }

    #[test]
    fn markup_carries_shell_and_segments() {
        let markup = doc("[EXCITED]Great news![/EXCITED]").to_markup();
        assert!(markup.starts_with(
            r#"<speak xmlns="http://www.w3.org/2001/10/synthesis" xmlns:mstts="http://www.w3.org/2001/mstts" version="1.0" xml:lang="en-US">"#
        ));
        assert!(markup.contains(r#"<voice name="en-US-JennyNeural">"#));
        assert!(markup.contains(r#"<prosody rate="0.9" pitch="0">"#));
        assert!(markup.contains(
            r#"<mstts:express-as style="excited" styledegree="1.5">Great news!</mstts:express-as>"#
        ));
        assert!(markup.ends_with("</prosody></voice></speak>"));
    }

    #[test]
    fn markup_degree_keeps_one_decimal() {
        let markup = doc("[JOYFUL]yay[/JOYFUL]").to_markup();
        assert!(markup.contains(r#"styledegree="2.0""#));
        let markup = doc("[DELIGHTFUL]lovely[/DELIGHTFUL]").to_markup();
        assert!(markup.contains(r#"styledegree="1.3""#));
    }

    #[test]
    fn empty_tag_pair_is_a_default_span() {
        let document = doc("[]odd[/]");
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.segments()[0].text, "odd");
        assert_eq!(document.segments()[0].style.name, "friendly");
    }
}

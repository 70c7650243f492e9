//! Explicit tone-change request detection.

use std::sync::LazyLock;

use regex::Regex;

use frontdesk_types::EmotionLabel;

/// Request phrasings, most specific first. Each captures the candidate
/// emotion word in group 1.
static REQUEST_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        // "speak in an excited way", "talk to me like a friend"
        Regex::new(r"(?:talk|speak|respond|reply|chat|sound|be)(?:\s+to\s+me)?\s+(?:in|with|using|like)?\s+(?:an?\s+)?(\w+)(?:\s+(?:mode|tone|voice|style|emotion|manner|way))?").unwrap(),
        // "can you please sound more cheerful", "would you reply in a sad tone"
        Regex::new(r"(?:can\s+you|could\s+you|will\s+you|would\s+you)(?:\s+please)?\s+(?:talk|speak|respond|reply|chat|sound|be)(?:\s+to\s+me)?\s+(?:in|with|using|like)?\s+(?:an?\s+)?(\w+)(?:\s+(?:mode|tone|voice|style|emotion|manner|way))?").unwrap(),
        // "switch to angry mode", "change to a friendly tone"
        Regex::new(r"(?:switch|change|go)(?:\s+to)?\s+(?:an?\s+)?(\w+)(?:\s+(?:mode|tone|voice|style|emotion|manner|way))").unwrap(),
        // "make your voice excited", "use a more cheerful voice"
        Regex::new(r"(?:make\s+your\s+voice|use\s+a|try\s+a)(?:\s+more)?\s+(\w+)").unwrap(),
    ]
});

/// Scans an utterance for an explicit tone-change request.
///
/// The utterance is lower-cased, then each pattern is tried in order. The
/// first pattern whose captured word names a requestable emotion wins; a
/// pattern that matches but captures something else ("switch to banana
/// mode") is discarded wholesale and the next pattern gets its turn. Returns
/// `None` when no pattern yields a recognized label.
///
/// The patterns are loose by intent. A sentence that merely mentions an
/// emotion in a qualifying position ("be in a sad state") reads as a request
/// here; tightening that would also drop casual phrasings real callers use,
/// so the looseness stays.
pub fn detect_request(text: &str) -> Option<EmotionLabel> {
    let lowered = text.to_lowercase();
    for pattern in REQUEST_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&lowered) {
            if let Some(word) = caps.get(1) {
                if let Ok(label) = word.as_str().parse::<EmotionLabel>() {
                    if label.requestable() {
                        return Some(label);
                    }
                }
            }
        }
    }
    None
}

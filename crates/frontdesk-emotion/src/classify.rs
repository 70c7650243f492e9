//! Keyword-first emotion classification with a sentiment fallback.

use std::sync::LazyLock;

use regex::Regex;
use vader_sentiment::SentimentIntensityAnalyzer;

use frontdesk_types::EmotionLabel;

/// Emotion vocabulary, in priority order. Ties in keyword counts resolve to
/// the earlier row.
const KEYWORD_TABLE: &[(EmotionLabel, &[&str])] = &[
    (EmotionLabel::Angry, &["angry", "mad", "furious", "upset", "annoyed"]),
    (EmotionLabel::Sad, &["sad", "unhappy", "depressed"]),
    (EmotionLabel::Cheerful, &["cheerful", "happy", "glad", "delighted"]),
    (EmotionLabel::Excited, &["excited", "thrilled", "eager"]),
    (EmotionLabel::Empathetic, &["understand", "feel for you", "compassion"]),
    (EmotionLabel::Friendly, &["friendly", "kind", "nice"]),
    (EmotionLabel::Delightful, &["delightful", "warm", "welcoming"]),
    (EmotionLabel::Joyful, &["joyful", "ecstatic"]),
];

static KEYWORD_PATTERNS: LazyLock<Vec<(EmotionLabel, Vec<Regex>)>> = LazyLock::new(|| {
    KEYWORD_TABLE
        .iter()
        .map(|(label, words)| {
            let patterns = words
                .iter()
                .map(|word| {
                    Regex::new(&format!(r"\b{}\b", regex::escape(word))).unwrap()
                })
                .collect();
            (*label, patterns)
        })
        .collect()
});

/// Assigns an emotion label to a piece of text.
///
/// Whole-word keyword occurrences are counted per emotion over the
/// lower-cased text; if any emotion scores above zero, the highest count
/// wins and ties go to the earlier table row. Text without keyword hits
/// falls back to sentiment polarity: strongly positive reads as cheerful,
/// strongly negative as sad, mildly positive as friendly, and everything
/// else as default. Never fails; the weakest answer is
/// [`EmotionLabel::Default`].
pub fn classify(text: &str) -> EmotionLabel {
    let lowered = text.to_lowercase();

    let mut best: Option<(EmotionLabel, usize)> = None;
    for (label, patterns) in KEYWORD_PATTERNS.iter() {
        let count: usize = patterns.iter().map(|p| p.find_iter(&lowered).count()).sum();
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((*label, count));
        }
    }
    if let Some((label, _)) = best {
        return label;
    }

    // The sentiment scorer treats capitalization as emphasis, so it gets the
    // original text rather than the lowered copy.
    let compound = compound_polarity(text);
    if compound >= 0.5 {
        EmotionLabel::Cheerful
    } else if compound <= -0.5 {
        EmotionLabel::Sad
    } else if compound > 0.0 {
        EmotionLabel::Friendly
    } else {
        EmotionLabel::Default
    }
}

/// Compound sentiment polarity in [-1.0, 1.0].
fn compound_polarity(text: &str) -> f64 {
    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    scores.get("compound").copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_counts_pick_the_dominant_emotion() {
        assert_eq!(
            classify("I'm furious and upset about this"),
            EmotionLabel::Angry
        );
        assert_eq!(
            classify("I am so happy and delighted today"),
            EmotionLabel::Cheerful
        );
    }

    #[test]
    fn ties_break_to_the_earlier_table_row() {
        // One hit each for sad and cheerful; sad is listed first.
        assert_eq!(classify("happy and sad at once"), EmotionLabel::Sad);
    }

    #[test]
    fn keywords_match_whole_words_only() {
        // "madrid" must not count as "mad".
        assert_eq!(classify("the office is in madrid"), EmotionLabel::Default);
    }

    #[test]
    fn phrase_keywords_count() {
        assert_eq!(classify("I feel for you"), EmotionLabel::Empathetic);
    }

    #[test]
    fn strong_positive_sentiment_reads_cheerful() {
        assert_eq!(
            classify("What wonderful, amazing, fantastic news!"),
            EmotionLabel::Cheerful
        );
    }

    #[test]
    fn strong_negative_sentiment_reads_sad() {
        assert_eq!(
            classify("This is horrible and terrible."),
            EmotionLabel::Sad
        );
    }

    #[test]
    fn mild_positive_sentiment_reads_friendly() {
        assert_eq!(classify("sounds good"), EmotionLabel::Friendly);
    }

    #[test]
    fn neutral_text_defaults() {
        assert_eq!(classify("the viewing is at three"), EmotionLabel::Default);
        assert_eq!(classify(""), EmotionLabel::Default);
    }
}

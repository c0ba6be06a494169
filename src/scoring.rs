//! Score normalization for COTOHA sentiment results

use crate::client::{EmotionalPhrase, SentimentResult};
use crate::Sentiment;

/// Lower edge of the positive band
const POSITIVE_FLOOR: f64 = 0.75;
/// Width of the positive and negative bands
const BAND_WIDTH: f64 = 0.25;

/// Turns a raw sentiment result into a score in `[0.0, 1.0]`
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Score a full sentiment result: derive the label, then normalize.
    ///
    /// `None` when the result has no emotional phrases and no `sentiment`.
    pub fn score(result: &SentimentResult) -> Option<f64> {
        let label = Self::emotional_sentiment(result)?;
        Some(Self::normalize(&label, result.score))
    }

    /// Derive the label used for scoring.
    ///
    /// When the API tagged any emotional phrases, the most frequent emotion
    /// code across all of them decides the label and `sentiment` is not
    /// read. Otherwise `sentiment` is used as-is; `None` if it is missing.
    pub fn emotional_sentiment(result: &SentimentResult) -> Option<Sentiment> {
        Self::majority_code(emotion_codes(&result.emotional_phrase))
            .map(Sentiment::from_code)
            .or_else(|| result.sentiment.as_deref().map(Sentiment::from_label))
    }

    /// Most frequent code. Among equally frequent codes the one seen first wins.
    pub fn majority_code<'a, I>(codes: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        // Kept in first-seen order so the tie-break falls out of a strict `>`
        let mut counts: Vec<(&'a str, usize)> = Vec::new();
        for code in codes {
            match counts.iter_mut().find(|(c, _)| *c == code) {
                Some((_, n)) => *n += 1,
                None => counts.push((code, 1)),
            }
        }

        let mut best: Option<(&'a str, usize)> = None;
        for (code, n) in counts {
            if best.map_or(true, |(_, best_n)| n > best_n) {
                best = Some((code, n));
            }
        }
        best.map(|(code, _)| code)
    }

    /// Map a raw confidence in `[0, 1]` into the band for `label`.
    ///
    /// Neutral uses `1.0 - score / 2`, which spans `[0.5, 1.0]` and overlaps
    /// the positive band.
    pub fn normalize(label: &Sentiment, score: f64) -> f64 {
        match label {
            Sentiment::Neutral => 0.5 + (0.5 - score / 2.0),
            Sentiment::Positive => POSITIVE_FLOOR + score * BAND_WIDTH,
            _ => score * BAND_WIDTH,
        }
    }
}

/// Flatten the comma-separated emotion codes of every phrase, in order
fn emotion_codes(phrases: &[EmotionalPhrase]) -> impl Iterator<Item = &str> {
    phrases.iter().flat_map(|p| p.emotion.split(','))
}

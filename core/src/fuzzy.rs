//! Approximate dictionary matching for words with no exact entry.
//!
//! Every dictionary key is scored against the word with the similarity
//! ratio, small bonuses are added for shared prefixes and close lengths, and
//! the best candidate that clears the threshold and the correction validator
//! wins. Ties go to the earliest entry in dictionary order.

use crate::dictionary::Dictionary;
use crate::similarity::{ratio_chars, real_quick_ratio, similarity};

/// Default minimum adjusted score for a fuzzy match.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Base score a candidate needs before bonuses apply.
pub const BONUS_CUTOFF: f64 = 0.7;
/// Bonus when either word starts with the other's first three characters.
pub const PREFIX_BONUS: f64 = 0.05;
/// Bonus when lengths differ by at most one character.
pub const NEAR_LENGTH_BONUS: f64 = 0.03;
/// Bonus when lengths differ by exactly two characters.
pub const CLOSE_LENGTH_BONUS: f64 = 0.01;
/// Number of leading characters compared for the prefix bonus.
pub const PREFIX_LEN: usize = 3;

/// Largest length difference the validator accepts.
pub const MAX_LENGTH_DIFF: usize = 3;
/// Smallest word-to-candidate similarity the validator accepts.
pub const MIN_CANDIDATE_SIMILARITY: f64 = 0.6;

// Slack so the pruning bound never undercuts a sum computed in another order.
const BOUND_EPSILON: f64 = 1e-9;

/// A dictionary value chosen for a word and the score that selected it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'d> {
    pub value: &'d str,
    pub score: f64,
}

/// Reject implausible rewrites of `original` into `candidate`.
///
/// A candidate fails when lengths differ by more than three characters, when
/// the first letters differ (ignoring case), or when the two words are less
/// than 60% similar.
pub fn validate_correction(original: &str, candidate: &str) -> bool {
    let length_diff = original.chars().count().abs_diff(candidate.chars().count());
    if length_diff > MAX_LENGTH_DIFF {
        return false;
    }

    if let (Some(o), Some(c)) = (original.chars().next(), candidate.chars().next()) {
        if !o.to_lowercase().eq(c.to_lowercase()) {
            return false;
        }
    }

    similarity(original, candidate) >= MIN_CANDIDATE_SIMILARITY
}

fn shares_prefix(word: &[char], key: &[char]) -> bool {
    let key_prefix = &key[..key.len().min(PREFIX_LEN)];
    let word_prefix = &word[..word.len().min(PREFIX_LEN)];
    word.starts_with(key_prefix) || key.starts_with(word_prefix)
}

fn length_bonus(word_len: usize, key_len: usize) -> f64 {
    match word_len.abs_diff(key_len) {
        0 | 1 => NEAR_LENGTH_BONUS,
        2 => CLOSE_LENGTH_BONUS,
        _ => 0.0,
    }
}

/// Find the best dictionary value for `word`.
///
/// An exact hit on the lowercased word is returned immediately with score
/// 1.0. Otherwise the whole dictionary is scanned; a candidate replaces the
/// current best only if its adjusted score is strictly greater, at least
/// `threshold`, and it passes `validate_correction`.
///
/// `context` is the word's surrounding window. It is accepted for callers
/// that track it but does not influence scoring.
pub fn find_best_match<'d, S: AsRef<str>>(
    dictionary: &'d Dictionary,
    word: &str,
    threshold: f64,
    _context: &[S],
) -> Option<FuzzyMatch<'d>> {
    let lowered = word.to_lowercase();
    if let Some(value) = dictionary.lookup(&lowered) {
        return Some(FuzzyMatch { value, score: 1.0 });
    }

    let word_chars: Vec<char> = lowered.chars().collect();
    let word_len = word.chars().count();
    let max_bonus = PREFIX_BONUS + NEAR_LENGTH_BONUS;

    let mut best: Option<FuzzyMatch<'d>> = None;
    let mut best_score = 0.0;

    for entry in dictionary.raw_entries() {
        let key = &entry.key_chars[..];

        let bound = real_quick_ratio(word_chars.len(), key.len()) + max_bonus + BOUND_EPSILON;
        if bound < threshold || bound <= best_score {
            continue;
        }

        let mut score = ratio_chars(&word_chars, key);
        if score >= BONUS_CUTOFF {
            if shares_prefix(&word_chars, key) {
                score += PREFIX_BONUS;
            }
            score += length_bonus(word_len, key.len());
        }

        if score > best_score && score >= threshold && validate_correction(word, &entry.value) {
            best_score = score;
            best = Some(FuzzyMatch {
                value: &entry.value,
                score,
            });
        }
    }

    best
}

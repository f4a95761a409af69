//! Fuzzy question matching over the taught entries.

use crate::model::knowledge::QaEntry;

/// Minimum similarity for a fuzzy match to count as an answer.
pub const MATCH_CUTOFF: f64 = 0.6;

/// Immutable index over a snapshot of the knowledge entries.
///
/// Rebuilt from scratch on every teach and swapped in whole, so lookups never
/// see a half-updated entry list.
#[derive(Debug, Default)]
pub struct Matcher {
    entries: Vec<QaEntry>,
}

impl Matcher {
    pub fn new(entries: Vec<QaEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Finds the answer for an already-normalized question.
    ///
    /// An exact question match always wins over a fuzzy one. Otherwise the entry with
    /// the highest similarity at or above `MATCH_CUTOFF` is chosen. In both cases the
    /// most recently taught entry wins ties. Entries with a blank answer never match.
    pub fn best_match(&self, question: &str) -> Option<&str> {
        let answerable = || self.entries.iter().filter(|e| !e.answer.trim().is_empty());

        if let Some(entry) = answerable().rev().find(|e| e.question == question) {
            return Some(&entry.answer);
        }

        let question_len = question.chars().count();
        let mut best: Option<(f64, &QaEntry)> = None;
        for entry in answerable() {
            if !within_reach(question_len, entry.question.chars().count()) {
                continue;
            }

            let score = similarity(question, &entry.question);
            if score < MATCH_CUTOFF {
                continue;
            }
            if best.map_or(true, |(best_score, _)| score >= best_score) {
                best = Some((score, entry));
            }
        }

        best.map(|(_, entry)| entry.answer.as_str())
    }
}

/// Whether two strings of these lengths can reach `MATCH_CUTOFF` at all.
///
/// The edit distance is at least the length difference, which bounds the ratio
/// before any distance is computed.
fn within_reach(a_len: usize, b_len: usize) -> bool {
    let longest = a_len.max(b_len);
    if longest == 0 {
        return true;
    }

    1.0 - a_len.abs_diff(b_len) as f64 / longest as f64 >= MATCH_CUTOFF
}

/// Similarity ratio in `[0, 1]` derived from the Levenshtein distance over chars.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

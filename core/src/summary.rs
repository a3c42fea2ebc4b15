//! Word-frequency summary computed entirely on the client.
//!
//! No network call is involved. Texts are lower-cased and joined, split into
//! word runs, and every word longer than three characters is counted. The
//! three most frequent words, with ties going to the word seen first, are
//! reported as the list's priorities.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::types::Todo;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

pub const MIN_KEYWORD_CHARS: usize = 4;
pub const KEYWORD_LIMIT: usize = 3;
/// Above this many items the summary urges focus instead of praise.
pub const BUSY_THRESHOLD: usize = 5;
pub const DEFAULT_DISPLAY_LATENCY: Duration = Duration::from_millis(1000);

/// The most frequent qualifying words across all items, highest count first.
/// Equal counts keep first-occurrence order.
pub fn top_keywords(todos: &[Todo], limit: usize) -> Vec<String> {
    let joined = todos
        .iter()
        .map(|todo| todo.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for word in WORD.find_iter(&joined).map(|m| m.as_str()) {
        if word.chars().count() < MIN_KEYWORD_CHARS {
            continue;
        }
        match slots.get(word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// The one-sentence heuristic summary for `todos`.
pub fn heuristic_summary(todos: &[Todo]) -> String {
    let count = todos.len();
    let remark = if count > BUSY_THRESHOLD {
        "Focus on the most frequent tasks!"
    } else {
        "You're doing well managing your tasks."
    };
    let keywords = top_keywords(todos, KEYWORD_LIMIT);
    let priorities = if keywords.is_empty() {
        "None".to_string()
    } else {
        keywords.join(", ")
    };
    format!("You have {count} todos. {remark} Top priorities seem to be: {priorities}.")
}

/// A computed summary plus how long the host should wait before showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSummary {
    pub text: String,
    pub display_after: Duration,
}

/// Produces heuristic summaries with a minimum display latency.
///
/// The latency is presentation only; the text is ready immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalSummarizer {
    pub min_display_latency: Duration,
}

impl Default for LocalSummarizer {
    fn default() -> Self {
        Self {
            min_display_latency: DEFAULT_DISPLAY_LATENCY,
        }
    }
}

impl LocalSummarizer {
    pub fn new(min_display_latency: Duration) -> Self {
        Self { min_display_latency }
    }

    pub fn prepare(&self, todos: &[Todo]) -> PendingSummary {
        PendingSummary {
            text: heuristic_summary(todos),
            display_after: self.min_display_latency,
        }
    }
}

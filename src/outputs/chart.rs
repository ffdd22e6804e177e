//! Terminal charts for the word-frequency and sentiment analyses.

use crate::models::{SentimentBuckets, WordCount};
use std::fmt::Write;

const BAR_WIDTH: usize = 40;

fn bar(value: usize, max: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH).div_ceil(max);
    "█".repeat(len)
}

/// Horizontal bar chart of the top words, most frequent first.
pub fn word_frequency_chart(words: &[WordCount]) -> String {
    let mut out = String::from("Most occurring words in Pakistani newspapers\n\n");
    let max = words.iter().map(|w| w.count).max().unwrap_or(0);
    let label_width = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);
    for w in words {
        let _ = writeln!(
            out,
            "{:>width$} | {} {}",
            w.word,
            bar(w.count, max),
            w.count,
            width = label_width
        );
    }
    out
}

/// Share of `part` in `total` as a percentage. Zero when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Sentiment distribution with percentages, in negative/neutral/positive order.
pub fn sentiment_chart(buckets: &SentimentBuckets) -> String {
    let total = buckets.total();
    let mut out = String::from("Sentiment distribution (%)\n\n");
    if total == 0 {
        out.push_str("No headlines to score.\n");
        return out;
    }
    let rows = [
        ("Negative", buckets.negative),
        ("Neutral", buckets.neutral),
        ("Positive", buckets.positive),
    ];
    for (label, count) in rows {
        let _ = writeln!(
            out,
            "{:>8} | {:<width$} {:>5.1}% ({})",
            label,
            bar(count, total),
            percentage(count, total),
            count,
            width = BAR_WIDTH
        );
    }
    out
}

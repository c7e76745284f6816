// Colored terminal view of topic summaries.
//
// Same data as the summary document, laid out for reading: one block per
// topic, one bar per word scaled against the topic's top weight.

use colored::Colorize;

use super::summary::{format_weight, TopicSummary};

const BAR_WIDTH: usize = 20;
const TOKEN_WIDTH: usize = 24;

/// Print every topic summary to stdout.
pub fn display_summaries(summaries: &[TopicSummary]) {
    if summaries.is_empty() {
        println!("Model has no topics.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Topic Summary ({} topics) ===", summaries.len()).bold()
    );
    println!();

    for summary in summaries {
        println!(
            "  {} {}  {}",
            format!("Topic {:>3}", summary.topic).bold(),
            "smoothing".dimmed(),
            format_weight(summary.smoothing)
        );

        if summary.words.is_empty() {
            println!("      {}", "(no words)".dimmed());
            println!();
            continue;
        }

        // Ranked order means the first word carries the largest weight
        let top = summary.words[0].1;
        for (token, weight) in &summary.words {
            let filled = bar_fill(*weight, top);
            let bar = format!(
                "[{}{}]",
                "=".repeat(filled),
                " ".repeat(BAR_WIDTH - filled)
            );
            let colored_bar = if filled * 2 >= BAR_WIDTH {
                bar.bright_green()
            } else if filled * 4 >= BAR_WIDTH {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };
            println!(
                "      {:<width$} {} {}",
                truncate_chars(token, TOKEN_WIDTH),
                colored_bar,
                format_weight(*weight),
                width = TOKEN_WIDTH + 3
            );
        }
        println!();
    }
}

/// Number of filled bar cells for `weight` relative to `top`.
fn bar_fill(weight: f64, top: f64) -> usize {
    if top.is_nan() || top <= 0.0 || !weight.is_finite() {
        return 0;
    }
    let ratio = (weight / top).clamp(0.0, 1.0);
    (ratio * BAR_WIDTH as f64).round() as usize
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so multi-byte tokens never panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

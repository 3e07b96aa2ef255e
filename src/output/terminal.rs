// Colored terminal output for topic reports and sentiment summaries.
//
// This module handles all terminal-specific formatting. The main.rs
// command handlers delegate here.

use colored::Colorize;

use crate::analysis::keyword::KeywordPoint;
use crate::analysis::summary::{SentimentExtremes, SpeakerSummary};
use crate::corpus::document::EnrichedDocument;
use crate::sentiment::traits::SentimentResult;
use crate::topics::lda::FitOutcome;
use crate::topics::report::TopicReport;

const BAR_WIDTH: usize = 20;

/// Display the topic report with a prevalence bar per topic.
pub fn display_topic_report(report: &TopicReport, outcome: &FitOutcome) {
    println!(
        "\n{}",
        format!("=== Topics ({} fitted) ===", report.len()).bold()
    );
    if outcome.converged {
        println!("  Converged after {} iterations", outcome.iterations);
    } else {
        println!(
            "  {} iteration budget ({}) reached, last change {:.2e}",
            "~".yellow(),
            outcome.iterations,
            outcome.final_change
        );
    }
    println!();

    for topic in &report.topics {
        let filled = (topic.prevalence * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled.min(BAR_WIDTH)),
            " ".repeat(BAR_WIDTH.saturating_sub(filled))
        );
        println!("  {} {:.2}  {}", bar.bright_blue(), topic.prevalence, topic.to_string().bold());
    }
    println!();
}

/// Display one text's sentiment breakdown.
pub fn display_sentiment(result: &SentimentResult) {
    println!("\n{}", "=== Sentiment ===".bold());
    println!("  Compound: {}", colorize_score(result.compound));
    println!(
        "  Positive: {:.3}  Neutral: {:.3}  Negative: {:.3}",
        result.positive, result.neutral, result.negative
    );
}

/// Display the most positive and most negative speeches.
pub fn display_extremes(extremes: Option<SentimentExtremes<'_>>) {
    let Some(extremes) = extremes else {
        println!("No speeches scored.");
        return;
    };
    println!("\n{}", "=== Sentiment Extremes ===".bold());
    for (label, doc) in [
        ("Most positive", extremes.most_positive),
        ("Most negative", extremes.most_negative),
    ] {
        display_speech_line(label, doc);
    }
    println!();
}

fn display_speech_line(label: &str, doc: &EnrichedDocument) {
    println!(
        "  {:<14} {} ({})  {}",
        label,
        doc.document.speaker.bold(),
        doc.document.date_label(),
        colorize_score(doc.sentiment_score())
    );
    let preview = super::truncate_chars(doc.document.raw_text.trim(), 120);
    println!("                 {}", preview.dimmed());
}

/// Display per-speaker sentiment statistics.
pub fn display_speaker_summaries(summaries: &[SpeakerSummary]) {
    if summaries.is_empty() {
        println!("No speeches in the corpus.");
        return;
    }
    println!(
        "\n{}",
        format!("=== Speakers ({}) ===", summaries.len()).bold()
    );
    println!(
        "  {:<32} {:>8} {:>8} {:>8} {:>8}",
        "Speaker".dimmed(),
        "Speeches".dimmed(),
        "Mean".dimmed(),
        "Min".dimmed(),
        "Max".dimmed(),
    );
    println!("  {}", "-".repeat(68).dimmed());
    for s in summaries {
        println!(
            "  {:<32} {:>8} {:>8} {:>8.3} {:>8.3}",
            super::truncate_chars(&s.speaker, 32),
            s.speeches,
            colorize_score(s.mean_sentiment),
            s.min_sentiment,
            s.max_sentiment,
        );
    }
    println!();
}

/// Display keyword usage per speech, oldest first.
pub fn display_keyword_timeline(keyword: &str, points: &[KeywordPoint]) {
    let total: usize = points.iter().map(|p| p.count).sum();
    println!(
        "\n{}",
        format!("=== Usage of '{keyword}' ({total} mentions) ===").bold()
    );
    if total == 0 {
        println!("  {} '{keyword}' was not found in any speech.", "~".yellow());
        return;
    }
    let peak = points.iter().map(|p| p.count).max().unwrap_or(0).max(1);
    for point in points {
        let filled = point.count * BAR_WIDTH / peak;
        println!(
            "  {:<12} {:<28} {:>4} {}",
            point.date_label,
            super::truncate_chars(&point.speaker, 28),
            point.count,
            "#".repeat(filled).bright_red()
        );
    }
    println!();
}

/// Green for positive, red for negative, dimmed for neutral.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:+.3}");
    if score >= 0.05 {
        text.green()
    } else if score <= -0.05 {
        text.red()
    } else {
        text.dimmed()
    }
}

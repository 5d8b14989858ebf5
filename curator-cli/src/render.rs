//! Styled terminal output for classification results.

use crossterm::style::{StyledContent, Stylize};
use curator_engine::{Narrative, ZcResult, Zone};

fn paint(zone: Zone, text: String) -> StyledContent<String> {
    match zone {
        Zone::Green => text.green(),
        Zone::Yellow => text.yellow(),
        Zone::Red => text.red(),
    }
}

fn rule() -> String {
    "=".repeat(60)
}

/// Print one classification as a styled report.
pub fn print_result(result: &ZcResult) {
    println!();
    println!("{}", rule().bold());
    println!("{}", "Cognitive Impedance Analysis".bold());
    println!("{}", rule());
    println!();
    println!("{} {}", "Timestamp:".bold(), result.timestamp.to_rfc3339());
    println!(
        "{} {}",
        "Zc Ratio:".bold(),
        paint(result.zone, format!("{:.2}", result.zc)).bold()
    );
    println!(
        "{} {}",
        "Zone:".bold(),
        paint(result.zone, result.zone.to_string())
    );
    println!("{} {}", "Mode:".bold(), result.mode.label());
    println!("{} {}", "Trend:".bold(), result.trend);
    println!(
        "{} {:.0}%",
        "Confidence:".bold(),
        result.confidence * 100.0
    );
    println!();
    println!(
        "{} {:.2} items/hour generated against {:.2}/hour of capacity",
        "Rates:".bold(),
        result.v_generation,
        result.b_social
    );
    println!();
    println!("{}", "Recommendation:".bold());
    println!("  {}", result.recommendation);
    println!();
    println!("{}", rule());
}

/// Print recent history, one line per classification, oldest first.
pub fn print_history(results: &[ZcResult]) {
    if results.is_empty() {
        println!("No classifications in the selected window.");
        return;
    }

    println!();
    println!(
        "{:<25} {:>6}  {:<6} {:<10} {}",
        "TIMESTAMP".bold(),
        "ZC".bold(),
        "ZONE".bold(),
        "TREND".bold(),
        "RECOMMENDATION".bold()
    );
    for result in results {
        println!(
            "{:<25} {:>6.2}  {:<6} {:<10} {}",
            result.timestamp.format("%Y-%m-%d %H:%M:%S"),
            result.zc,
            paint(result.zone, result.zone.to_string()),
            result.trend.to_string(),
            result.recommendation
        );
    }
    println!();
    println!("{} results", results.len());
}

/// Print a narrative recommendation as a sectioned report.
pub fn print_narrative(narrative: &Narrative) {
    let section = |title: &str, items: &[String]| {
        println!("{}", title.bold());
        for (i, item) in items.iter().enumerate() {
            println!("  {}. {}", i + 1, item);
        }
        println!();
    };

    println!();
    println!("{}", rule().bold());
    println!("{}", "Curator Recommendation".bold());
    println!("{}", rule());
    println!();
    println!("{}", "Summary".bold());
    println!("  {}", narrative.summary);
    println!();
    section("Immediate actions (today)", &narrative.immediate_actions);
    section("This week", &narrative.this_week);
    section("Avoid", &narrative.avoid);
    section("Success criteria", &narrative.success_criteria);
    if !narrative.context.is_empty() {
        println!("{}", "Context".bold());
        println!("  {}", narrative.context);
        println!();
    }
    println!("{}", rule());
}

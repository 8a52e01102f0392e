mod play;
mod rules;
mod simulate;

pub use play::play;
pub use rules::show_rules;
pub use simulate::simulate;

use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{RoundResult, SessionSummary};

fn join_numbers(numbers: &[u32]) -> String {
    if numbers.is_empty() {
        return "-".to_string();
    }
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Picked numbers with hits marked, e.g. `3*, 10, 22*`.
fn mark_hits(result: &RoundResult) -> String {
    result
        .selected_numbers
        .iter()
        .map(|n| {
            if result.matched.contains(n) {
                format!("{}*", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn print_result(result: &RoundResult) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Winning", "Yours"]);
    table.add_row(vec![
        "Strong".to_string(),
        result.winning_strong.to_string(),
        format!(
            "{}{}",
            result.selected_strong,
            if result.strong_match { "*" } else { "" }
        ),
    ]);
    table.add_row(vec![
        "Numbers".to_string(),
        join_numbers(&result.winning_numbers),
        mark_hits(result),
    ]);

    println!("Round {} summary:", result.round);
    println!("{table}");
    println!("  Successful guesses: {}", result.matched_count);
    println!(
        "  Strong number: {}",
        if result.strong_match {
            "Matched"
        } else {
            "Not matched"
        }
    );
    println!("  Prize: {}", result.prize);
    println!("  Money now: {}", result.money_after);

    if result.is_win() {
        println!("You won {}!", result.prize);
    } else {
        println!("No prize this time.");
    }
}

pub(crate) fn print_summary(summary: &SessionSummary) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Rounds", "Spent", "Won", "Net", "Money"]);
    table.add_row(vec![
        summary.rounds.to_string(),
        summary.spent.to_string(),
        summary.won.to_string(),
        summary.net.to_string(),
        summary.money.to_string(),
    ]);
    println!("{table}");
}

pub(crate) fn print_history(history: &[RoundResult]) {
    if history.is_empty() {
        println!("No rounds played yet.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Round", "Time", "Winning", "Strong", "Yours", "Strong", "Prize", "Money",
    ]);

    for result in history {
        table.add_row(vec![
            result.round.to_string(),
            result.played_at.format("%H:%M:%S").to_string(),
            join_numbers(&result.winning_numbers),
            result.winning_strong.to_string(),
            mark_hits(result),
            result.selected_strong.to_string(),
            result.prize.to_string(),
            result.money_after.to_string(),
        ]);
    }

    println!("{table}");
}

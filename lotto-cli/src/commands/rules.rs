use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{GameConfig, PRIZE_TABLE};

pub fn show_rules(config: &GameConfig) {
    println!(
        "Pick 1 strong number ({}-{}) and exactly {} numbers ({}-{}).",
        config.min_strong, config.max_strong, config.max_picks, config.min_number, config.max_number
    );
    println!(
        "Each ticket costs {}. You start with {}.",
        config.ticket_cost, config.start_money
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Matched numbers", "Strong number", "Prize"]);
    for (matched, strong, prize) in PRIZE_TABLE {
        table.add_row(vec![
            matched.to_string(),
            if strong { "Matched" } else { "Not matched" }.to_string(),
            prize.to_string(),
        ]);
    }
    table.add_row(vec!["Anything else", "-", "0"]);
    println!("{table}");
}

use super::print_summary;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{RandomSource, RoundEngine, StartOutcome, SubmitOutcome};
use std::collections::BTreeMap;

/// Tally of graded tickets by prize.
#[derive(Debug, Default)]
struct PrizeTally {
    counts: BTreeMap<i64, u32>,
}

impl PrizeTally {
    fn record(&mut self, prize: i64) {
        *self.counts.entry(prize).or_default() += 1;
    }

    fn wins(&self) -> u32 {
        self.counts
            .iter()
            .filter(|(prize, _)| **prize > 0)
            .map(|(_, count)| *count)
            .sum()
    }
}

/// Submit quick-pick tickets until `rounds` are graded or the engine locks.
fn run_simulation<S: RandomSource>(engine: &mut RoundEngine<S>, rounds: u32) -> Result<PrizeTally> {
    let mut tally = PrizeTally::default();

    if let StartOutcome::LockedOutOfMoney { money } = engine.start_round()? {
        tracing::warn!("Cannot start: only {} available", money);
        return Ok(tally);
    }

    for _ in 0..rounds {
        if !engine.quick_pick()? {
            break;
        }
        match engine.submit_ticket()? {
            SubmitOutcome::Graded(result) => {
                tally.record(result.prize);
                if result.lock_after.is_some() {
                    break;
                }
            }
            SubmitOutcome::LockedOutOfMoney { .. } | SubmitOutcome::Ignored => break,
        }
    }

    Ok(tally)
}

pub fn simulate<S: RandomSource>(mut engine: RoundEngine<S>, rounds: u32) -> Result<()> {
    let tally = run_simulation(&mut engine, rounds)?;

    println!("Simulated {} of {} tickets.", engine.rounds_completed(), rounds);
    if engine.is_locked() {
        println!("Stopped early: out of money.");
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Prize", "Tickets"]);
    for (prize, count) in &tally.counts {
        table.add_row(vec![prize.to_string(), count.to_string()]);
    }
    println!("{table}");
    println!("Winning tickets: {}", tally.wins());

    print_summary(&engine.summary());
    Ok(())
}

use super::{join_numbers, print_history, print_result, print_summary};
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use lotto_core::{
    DepositOutcome, LockReason, LottoError, RandomSource, RoundEngine, StartOutcome,
    SubmitOutcome, ToggleOutcome,
};

const ACTIONS: [&str; 7] = [
    "Pick strong number",
    "Pick numbers",
    "Quick pick",
    "Check lottery",
    "Clear picks",
    "History",
    "Finish game",
];

pub fn play<S: RandomSource>(mut engine: RoundEngine<S>) -> Result<()> {
    let config = engine.config().clone();

    println!("Welcome to the Lotto Game.");
    println!(
        "Pick 1 strong number ({}-{}) and {} numbers ({}-{}). Each ticket costs {}.",
        config.min_strong,
        config.max_strong,
        config.max_picks,
        config.min_number,
        config.max_number,
        config.ticket_cost
    );
    println!("Starting money: {}", engine.money());
    println!();

    if !Confirm::new()
        .with_prompt("Start game?")
        .default(true)
        .interact()?
    {
        return Ok(());
    }

    if let StartOutcome::Started = engine.start_round()? {
        println!("Game started. Pick your numbers, then check the lottery.");
    }

    loop {
        match engine.lock() {
            Some(LockReason::Finished) => {
                println!();
                println!("Game finished. Money left: {}", engine.money());
                print_summary(&engine.summary());
                return Ok(());
            }
            Some(LockReason::OutOfMoney) => {
                if !offer_deposit(&mut engine)? {
                    println!("Money left: {}", engine.money());
                    print_summary(&engine.summary());
                    return Ok(());
                }
                continue;
            }
            None => {}
        }

        print_status(&engine);

        let action = Select::new()
            .with_prompt("What next?")
            .items(&ACTIONS[..])
            .default(3)
            .interact()?;

        let outcome = match action {
            0 => pick_strong(&mut engine),
            1 => pick_numbers(&mut engine),
            2 => engine.quick_pick().map(|_| ()).map_err(Into::into),
            3 => check_lottery(&mut engine),
            4 => {
                engine.clear_selection();
                Ok(())
            }
            5 => {
                print_history(engine.history());
                Ok(())
            }
            _ => {
                engine.finish();
                Ok(())
            }
        };

        // Player mistakes are shown and the loop continues.
        if let Err(e) = outcome {
            match e.downcast_ref::<LottoError>() {
                Some(err) if err.is_player_input() => println!("{}", err),
                _ => return Err(e),
            }
        }
    }
}

fn print_status<S: RandomSource>(engine: &RoundEngine<S>) {
    let selection = engine.selection();
    println!();
    println!(
        "Money: {} | Ticket cost: {} | Plays: {}",
        engine.money(),
        engine.ticket_cost(),
        engine.rounds_completed()
    );
    println!(
        "Strong: {} | Numbers: {}",
        selection
            .strong
            .map_or_else(|| "-".to_string(), |s| s.to_string()),
        join_numbers(&selection.numbers)
    );
}

fn pick_strong<S: RandomSource>(engine: &mut RoundEngine<S>) -> Result<()> {
    let value = Input::<u32>::new()
        .with_prompt("Strong number (picking it again clears it)")
        .interact_text()?;

    if let ToggleOutcome::Deselected(value) = engine.toggle_strong(value)? {
        println!("Strong number {} cleared.", value);
    }
    Ok(())
}

/// Parse `"3 14, 27"` into numbers, skipping empty fields.
fn parse_numbers(input: &str) -> std::result::Result<Vec<u32>, std::num::ParseIntError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

fn pick_numbers<S: RandomSource>(engine: &mut RoundEngine<S>) -> Result<()> {
    let input = Input::<String>::new()
        .with_prompt("Numbers to toggle (e.g. 3 14 27)")
        .interact_text()?;

    let numbers = match parse_numbers(&input) {
        Ok(numbers) => numbers,
        Err(_) => {
            println!("Please enter whole numbers separated by spaces or commas.");
            return Ok(());
        }
    };

    // Stop at the first rejection, keeping earlier toggles.
    for n in numbers {
        engine.toggle_number(n)?;
    }
    Ok(())
}

fn check_lottery<S: RandomSource>(engine: &mut RoundEngine<S>) -> Result<()> {
    match engine.submit_ticket()? {
        SubmitOutcome::Graded(result) => {
            println!();
            print_result(&result);
        }
        SubmitOutcome::LockedOutOfMoney { .. } | SubmitOutcome::Ignored => {}
    }
    Ok(())
}

/// Out-of-money screen. Returns false when the player gives up.
fn offer_deposit<S: RandomSource>(engine: &mut RoundEngine<S>) -> Result<bool> {
    println!();
    println!("Not enough money");
    println!(
        "You have {} and a ticket costs {}. Deposit to keep playing.",
        engine.money(),
        engine.ticket_cost()
    );

    loop {
        if !Confirm::new()
            .with_prompt("Deposit?")
            .default(true)
            .interact()?
        {
            return Ok(false);
        }

        let amount = Input::<i64>::new().with_prompt("Amount").interact_text()?;
        match engine.deposit(amount) {
            Ok(DepositOutcome::Resumed { money }) => {
                println!("Deposit added. Money now {}. You can continue playing.", money);
                return Ok(true);
            }
            Ok(DepositOutcome::StillLocked { money, shortfall }) => {
                println!(
                    "Still not enough money ({}). Deposit at least {} more.",
                    money, shortfall
                );
            }
            Ok(DepositOutcome::Ignored) => return Ok(true),
            Err(LottoError::InvalidAmount(_)) => println!("Invalid deposit amount."),
            Err(e) => return Err(e.into()),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why play is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockReason {
    /// Money dropped below the ticket cost. Cleared by a deposit.
    OutOfMoney,
    /// The player ended the game. Permanent for this engine.
    Finished,
}

/// The player's picks for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub strong: Option<u32>,
    /// Insertion order, kept for display.
    pub numbers: Vec<u32>,
}

impl Selection {
    pub fn is_complete(&self, required: usize) -> bool {
        self.strong.is_some() && self.numbers.len() == required
    }

    pub fn clear(&mut self) {
        self.strong = None;
        self.numbers.clear();
    }
}

/// Outcome of one graded ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based ordinal of the graded round.
    pub round: u32,
    pub matched_count: usize,
    /// Picked numbers that were drawn, in pick order.
    pub matched: Vec<u32>,
    pub strong_match: bool,
    pub prize: i64,
    pub ticket_cost: i64,
    pub winning_numbers: Vec<u32>,
    pub winning_strong: u32,
    pub selected_numbers: Vec<u32>,
    pub selected_strong: u32,
    pub money_after: i64,
    /// Set when grading left too little money for another ticket.
    pub lock_after: Option<LockReason>,
    pub played_at: DateTime<Utc>,
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        self.prize > 0
    }
}

/// Result of `start_round`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    LockedOutOfMoney { money: i64 },
    Ignored,
}

/// Result of `toggle_strong` / `toggle_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected(u32),
    Deselected(u32),
    Ignored,
}

/// Result of `submit_ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Graded(Box<RoundResult>),
    /// Not enough money for a ticket; nothing was charged or graded.
    LockedOutOfMoney { money: i64 },
    Ignored,
}

/// Result of `deposit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositOutcome {
    /// Lock cleared and a new round drawn.
    Resumed { money: i64 },
    StillLocked { money: i64, shortfall: i64 },
    Ignored,
}

/// Totals for the session so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds: u32,
    pub spent: i64,
    pub won: i64,
    pub net: i64,
    pub money: i64,
}

/// Everything a presentation layer may read between commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub money: i64,
    pub ticket_cost: i64,
    pub rounds_completed: u32,
    pub selection: Selection,
    pub started: bool,
    pub lock: Option<LockReason>,
    pub last_result: Option<RoundResult>,
}

impl Snapshot {
    pub fn can_play(&self) -> bool {
        self.started && self.lock.is_none()
    }
}

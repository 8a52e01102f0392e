use crate::draw::{self, RandomSource, RngSource};
use crate::prize::{calculate_prize, matched_numbers};
use crate::{
    DepositOutcome, GameConfig, LockReason, LottoError, Result, RoundResult, Selection,
    SessionSummary, Snapshot, StartOutcome, SubmitOutcome, ToggleOutcome,
};
use chrono::Utc;
use uuid::Uuid;

/// Hidden target for the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WinningDraw {
    pub numbers: Vec<u32>,
    pub strong: u32,
}

/// Owns the player's money, picks, the hidden draw and the lock state.
///
/// Every command runs to completion and either applies all of its mutations
/// or none of them. Commands issued while the engine is not started, or is
/// locked, return an `Ignored` outcome and change nothing.
#[derive(Debug)]
pub struct RoundEngine<S = RngSource> {
    id: Uuid,
    config: GameConfig,
    source: S,
    money: i64,
    selection: Selection,
    winning: Option<WinningDraw>,
    rounds_completed: u32,
    started: bool,
    lock: Option<LockReason>,
    history: Vec<RoundResult>,
}

impl RoundEngine<RngSource> {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_source(config, RngSource::from_entropy())
    }

    /// Engine whose draws repeat for the same seed.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, RngSource::seeded(seed))
    }
}

impl<S: RandomSource> RoundEngine<S> {
    pub fn with_source(config: GameConfig, source: S) -> Result<Self> {
        config.validate()?;

        let id = Uuid::new_v4();
        tracing::info!(
            "Created engine {} (ticket cost {}, starting money {})",
            id,
            config.ticket_cost,
            config.start_money
        );

        Ok(Self {
            id,
            money: config.start_money,
            config,
            source,
            selection: Selection::default(),
            winning: None,
            rounds_completed: 0,
            started: false,
            lock: None,
            history: Vec::new(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn ticket_cost(&self) -> i64 {
        self.config.ticket_cost
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn lock(&self) -> Option<LockReason> {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.history.last()
    }

    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    pub fn summary(&self) -> SessionSummary {
        let spent = self
            .history
            .iter()
            .map(|r| r.ticket_cost)
            .fold(0i64, i64::saturating_add);
        let won = self
            .history
            .iter()
            .map(|r| r.prize)
            .fold(0i64, i64::saturating_add);

        SessionSummary {
            rounds: self.rounds_completed,
            spent,
            won,
            net: won.saturating_sub(spent),
            money: self.money,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            money: self.money,
            ticket_cost: self.config.ticket_cost,
            rounds_completed: self.rounds_completed,
            selection: self.selection.clone(),
            started: self.started,
            lock: self.lock,
            last_result: self.history.last().cloned(),
        }
    }

    fn can_play(&self) -> bool {
        self.started && self.lock.is_none()
    }

    fn has_ticket_money(&self) -> bool {
        self.money >= self.config.ticket_cost
    }

    fn lock_out_of_money(&mut self) {
        self.lock = Some(LockReason::OutOfMoney);
        tracing::info!(
            "Engine {} locked: {} left, ticket costs {}",
            self.id,
            self.money,
            self.config.ticket_cost
        );
    }

    /// Draw a new hidden combination and clear the selection.
    pub fn start_round(&mut self) -> Result<StartOutcome> {
        if self.lock.is_some() {
            return Ok(StartOutcome::Ignored);
        }
        self.started = true;

        if !self.has_ticket_money() {
            self.lock_out_of_money();
            return Ok(StartOutcome::LockedOutOfMoney { money: self.money });
        }

        let numbers = draw::draw(
            &mut self.source,
            self.config.max_picks,
            self.config.min_number,
            self.config.max_number,
        )?;
        let strong = draw::draw_strong(
            &mut self.source,
            self.config.min_strong,
            self.config.max_strong,
        )?;

        tracing::debug!(
            "Engine {} winning draw: numbers={:?} strong={}",
            self.id,
            numbers,
            strong
        );

        self.winning = Some(WinningDraw { numbers, strong });
        self.selection.clear();

        tracing::info!(
            "Engine {} started round {}",
            self.id,
            self.rounds_completed + 1
        );
        Ok(StartOutcome::Started)
    }

    /// Select `value` as the strong number, or clear it if already selected.
    pub fn toggle_strong(&mut self, value: u32) -> Result<ToggleOutcome> {
        if !self.can_play() {
            return Ok(ToggleOutcome::Ignored);
        }

        if !self.config.contains_strong(value) {
            tracing::warn!("Engine {} rejected strong number {}", self.id, value);
            return Err(LottoError::OutOfRange {
                value,
                min: self.config.min_strong,
                max: self.config.max_strong,
            });
        }

        if self.selection.strong == Some(value) {
            self.selection.strong = None;
            Ok(ToggleOutcome::Deselected(value))
        } else {
            self.selection.strong = Some(value);
            Ok(ToggleOutcome::Selected(value))
        }
    }

    /// Add `value` to the picked numbers, or remove it if already picked.
    pub fn toggle_number(&mut self, value: u32) -> Result<ToggleOutcome> {
        if !self.can_play() {
            return Ok(ToggleOutcome::Ignored);
        }

        if !self.config.contains_number(value) {
            tracing::warn!("Engine {} rejected number {}", self.id, value);
            return Err(LottoError::OutOfRange {
                value,
                min: self.config.min_number,
                max: self.config.max_number,
            });
        }

        if let Some(idx) = self.selection.numbers.iter().position(|&n| n == value) {
            self.selection.numbers.remove(idx);
            return Ok(ToggleOutcome::Deselected(value));
        }

        if self.selection.numbers.len() >= self.config.max_picks {
            return Err(LottoError::SelectionFull {
                max: self.config.max_picks,
            });
        }

        self.selection.numbers.push(value);
        Ok(ToggleOutcome::Selected(value))
    }

    /// Drop every pick for the current round.
    pub fn clear_selection(&mut self) -> bool {
        if !self.can_play() {
            return false;
        }
        self.selection.clear();
        true
    }

    /// Replace the selection with a random complete ticket.
    pub fn quick_pick(&mut self) -> Result<bool> {
        if !self.can_play() {
            return Ok(false);
        }

        let numbers = draw::draw(
            &mut self.source,
            self.config.max_picks,
            self.config.min_number,
            self.config.max_number,
        )?;
        let strong = draw::draw_strong(
            &mut self.source,
            self.config.min_strong,
            self.config.max_strong,
        )?;

        self.selection = Selection {
            strong: Some(strong),
            numbers,
        };
        Ok(true)
    }

    /// Charge, grade and pay one ticket, then advance or lock.
    pub fn submit_ticket(&mut self) -> Result<SubmitOutcome> {
        if !self.can_play() {
            return Ok(SubmitOutcome::Ignored);
        }

        // Money is checked before the selection.
        if !self.has_ticket_money() {
            self.lock_out_of_money();
            return Ok(SubmitOutcome::LockedOutOfMoney { money: self.money });
        }

        let Some(winning) = self.winning.as_ref() else {
            return Ok(SubmitOutcome::Ignored);
        };

        let selected_strong = match self.selection.strong {
            Some(strong) if self.selection.numbers.len() == self.config.max_picks => strong,
            _ => {
                tracing::warn!("Engine {} rejected incomplete ticket", self.id);
                return Err(LottoError::IncompleteSelection {
                    required: self.config.max_picks,
                });
            }
        };

        self.money = self.money.saturating_sub(self.config.ticket_cost);
        self.rounds_completed += 1;

        let matched = matched_numbers(&self.selection.numbers, &winning.numbers);
        let strong_match = selected_strong == winning.strong;
        let prize = calculate_prize(matched.len(), strong_match);

        // Money has no upper bound; saturate rather than wrap.
        self.money = self.money.saturating_add(prize);

        let lock_after = if self.has_ticket_money() {
            None
        } else {
            Some(LockReason::OutOfMoney)
        };

        let result = RoundResult {
            round: self.rounds_completed,
            matched_count: matched.len(),
            matched,
            strong_match,
            prize,
            ticket_cost: self.config.ticket_cost,
            winning_numbers: winning.numbers.clone(),
            winning_strong: winning.strong,
            selected_numbers: self.selection.numbers.clone(),
            selected_strong,
            money_after: self.money,
            lock_after,
            played_at: Utc::now(),
        };

        tracing::info!(
            "Engine {} graded round {}: {} matched, strong {}, prize {}, money {}",
            self.id,
            result.round,
            result.matched_count,
            if strong_match { "hit" } else { "miss" },
            prize,
            self.money
        );

        self.history.push(result.clone());

        if lock_after.is_some() {
            self.lock_out_of_money();
        } else {
            self.start_round()?;
        }

        Ok(SubmitOutcome::Graded(Box::new(result)))
    }

    /// End the game. Permanent for this engine.
    pub fn finish(&mut self) -> Option<SessionSummary> {
        if !self.can_play() {
            return None;
        }

        self.lock = Some(LockReason::Finished);
        let summary = self.summary();
        tracing::info!(
            "Engine {} finished after {} rounds with {} left",
            self.id,
            summary.rounds,
            summary.money
        );
        Some(summary)
    }

    /// Add funds while locked out of money.
    pub fn deposit(&mut self, amount: i64) -> Result<DepositOutcome> {
        if self.lock != Some(LockReason::OutOfMoney) {
            return Ok(DepositOutcome::Ignored);
        }

        if amount <= 0 {
            tracing::warn!("Engine {} rejected deposit of {}", self.id, amount);
            return Err(LottoError::InvalidAmount(amount));
        }

        self.money = self.money.saturating_add(amount);
        tracing::info!(
            "Engine {} deposit of {}, money now {}",
            self.id,
            amount,
            self.money
        );

        if !self.has_ticket_money() {
            return Ok(DepositOutcome::StillLocked {
                money: self.money,
                shortfall: self.config.ticket_cost.saturating_sub(self.money),
            });
        }

        self.lock = None;
        self.start_round()?;
        Ok(DepositOutcome::Resumed { money: self.money })
    }

    #[cfg(test)]
    pub(crate) fn winning(&self) -> Option<&WinningDraw> {
        self.winning.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedSource;

    /// Every round draws numbers 1..=6 and strong 1.
    fn fixed_engine(config: GameConfig) -> RoundEngine<ScriptedSource> {
        let source = ScriptedSource::new([1, 2, 3, 4, 5, 6, 1]);
        RoundEngine::with_source(config, source).unwrap()
    }

    fn started(config: GameConfig) -> RoundEngine<ScriptedSource> {
        let mut engine = fixed_engine(config);
        assert_eq!(engine.start_round().unwrap(), StartOutcome::Started);
        engine
    }

    fn pick(engine: &mut RoundEngine<ScriptedSource>, numbers: &[u32], strong: u32) {
        for &n in numbers {
            engine.toggle_number(n).unwrap();
        }
        engine.toggle_strong(strong).unwrap();
    }

    fn graded(outcome: SubmitOutcome) -> RoundResult {
        match outcome {
            SubmitOutcome::Graded(result) => *result,
            other => panic!("expected graded round, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig::new(0, 1000);
        assert!(RoundEngine::new(config).is_err());
    }

    #[test]
    fn test_commands_ignored_before_start() {
        let mut engine = fixed_engine(GameConfig::default());

        assert_eq!(engine.toggle_number(3).unwrap(), ToggleOutcome::Ignored);
        assert_eq!(engine.toggle_strong(3).unwrap(), ToggleOutcome::Ignored);
        assert_eq!(engine.submit_ticket().unwrap(), SubmitOutcome::Ignored);
        assert!(engine.finish().is_none());
        assert!(!engine.is_started());
        assert!(engine.selection().numbers.is_empty());
    }

    #[test]
    fn test_start_round_draws() {
        let engine = started(GameConfig::default());
        let winning = engine.winning().unwrap();

        assert_eq!(winning.numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(winning.strong, 1);
        assert_eq!(engine.money(), 1000);
        assert!(engine.is_started());
    }

    #[test]
    fn test_start_round_without_money_locks() {
        let mut engine = fixed_engine(GameConfig::new(300, 200));

        let outcome = engine.start_round().unwrap();
        assert_eq!(outcome, StartOutcome::LockedOutOfMoney { money: 200 });
        assert_eq!(engine.lock(), Some(LockReason::OutOfMoney));
        assert!(engine.winning().is_none());
    }

    #[test]
    fn test_toggle_strong() {
        let mut engine = started(GameConfig::default());

        assert_eq!(engine.toggle_strong(3).unwrap(), ToggleOutcome::Selected(3));
        assert_eq!(engine.toggle_strong(5).unwrap(), ToggleOutcome::Selected(5));
        assert_eq!(engine.selection().strong, Some(5));
        assert_eq!(
            engine.toggle_strong(5).unwrap(),
            ToggleOutcome::Deselected(5)
        );
        assert_eq!(engine.selection().strong, None);
    }

    #[test]
    fn test_toggle_number_twice_restores() {
        let mut engine = started(GameConfig::default());
        engine.toggle_number(10).unwrap();
        let before = engine.selection().clone();

        engine.toggle_number(20).unwrap();
        engine.toggle_number(20).unwrap();
        assert_eq!(engine.selection(), &before);
    }

    #[test]
    fn test_selection_full() {
        let mut engine = started(GameConfig::default());
        for n in 10..16 {
            engine.toggle_number(n).unwrap();
        }

        let result = engine.toggle_number(30);
        assert!(matches!(result, Err(LottoError::SelectionFull { max: 6 })));
        assert_eq!(engine.selection().numbers, vec![10, 11, 12, 13, 14, 15]);

        // Deselecting still works when full.
        assert_eq!(
            engine.toggle_number(12).unwrap(),
            ToggleOutcome::Deselected(12)
        );
        assert_eq!(engine.selection().numbers.len(), 5);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut engine = started(GameConfig::default());

        assert!(matches!(
            engine.toggle_number(38),
            Err(LottoError::OutOfRange {
                value: 38,
                min: 1,
                max: 37
            })
        ));
        assert!(matches!(
            engine.toggle_strong(0),
            Err(LottoError::OutOfRange { value: 0, .. })
        ));
        assert_eq!(engine.selection(), &Selection::default());
    }

    #[test]
    fn test_incomplete_selection() {
        let mut engine = started(GameConfig::default());
        engine.toggle_number(10).unwrap();

        let result = engine.submit_ticket();
        assert!(matches!(
            result,
            Err(LottoError::IncompleteSelection { required: 6 })
        ));
        assert_eq!(engine.money(), 1000);
        assert_eq!(engine.rounds_completed(), 0);
        assert_eq!(engine.selection().numbers, vec![10]);

        // Strong missing, numbers complete.
        for n in 11..16 {
            engine.toggle_number(n).unwrap();
        }
        assert!(engine.submit_ticket().is_err());
        assert_eq!(engine.money(), 1000);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_jackpot() {
        let mut engine = started(GameConfig::default());
        pick(&mut engine, &[6, 5, 4, 3, 2, 1], 1);

        let result = graded(engine.submit_ticket().unwrap());
        assert_eq!(result.matched_count, 6);
        assert!(result.strong_match);
        assert_eq!(result.prize, 1000);
        assert_eq!(result.money_after, 1700);
        assert_eq!(result.selected_numbers, vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(result.lock_after, None);
        assert_eq!(engine.money(), 1700);
        assert_eq!(engine.rounds_completed(), 1);
    }

    #[test]
    fn test_six_without_strong() {
        let mut engine = started(GameConfig::default());
        pick(&mut engine, &[1, 2, 3, 4, 5, 6], 2);

        let result = graded(engine.submit_ticket().unwrap());
        assert_eq!(result.prize, 600);
        assert_eq!(engine.money(), 1300);
    }

    #[test]
    fn test_four_with_strong() {
        let mut engine = started(GameConfig::default());
        pick(&mut engine, &[1, 2, 3, 4, 20, 21], 1);

        let result = graded(engine.submit_ticket().unwrap());
        assert_eq!(result.matched, vec![1, 2, 3, 4]);
        assert_eq!(result.prize, 400);
        assert_eq!(engine.money(), 1100);
    }

    #[test]
    fn test_five_with_strong_pays_nothing() {
        let mut engine = started(GameConfig::default());
        pick(&mut engine, &[1, 2, 3, 4, 5, 21], 1);

        let result = graded(engine.submit_ticket().unwrap());
        assert_eq!(result.matched_count, 5);
        assert_eq!(result.prize, 0);
        assert_eq!(engine.money(), 700);
    }

    #[test]
    fn test_submit_advances_round() {
        let mut engine = started(GameConfig::default());
        pick(&mut engine, &[10, 11, 12, 13, 14, 15], 2);

        graded(engine.submit_ticket().unwrap());
        assert_eq!(engine.selection(), &Selection::default());
        assert!(engine.winning().is_some());
        assert!(!engine.is_locked());
    }

    #[test]
    fn test_runs_out_of_money() {
        let mut engine = started(GameConfig::new(300, 1000));

        for round in 1..=3 {
            pick(&mut engine, &[10, 11, 12, 13, 14, 15], 2);
            let result = graded(engine.submit_ticket().unwrap());
            assert_eq!(result.round, round);
        }

        assert_eq!(engine.money(), 100);
        assert_eq!(engine.lock(), Some(LockReason::OutOfMoney));
        assert_eq!(
            engine.last_result().unwrap().lock_after,
            Some(LockReason::OutOfMoney)
        );

        // Locked: the fourth ticket is neither charged nor graded.
        assert_eq!(engine.toggle_number(10).unwrap(), ToggleOutcome::Ignored);
        assert_eq!(engine.submit_ticket().unwrap(), SubmitOutcome::Ignored);
        assert_eq!(engine.money(), 100);
        assert_eq!(engine.rounds_completed(), 3);
    }

    #[test]
    fn test_money_checked_before_selection() {
        let mut engine = started(GameConfig::new(300, 1000));
        engine.money = 100;

        let outcome = engine.submit_ticket().unwrap();
        assert_eq!(outcome, SubmitOutcome::LockedOutOfMoney { money: 100 });
        assert_eq!(engine.money(), 100);
        assert_eq!(engine.rounds_completed(), 0);
        assert_eq!(engine.lock(), Some(LockReason::OutOfMoney));
    }

    fn broke_engine() -> RoundEngine<ScriptedSource> {
        let mut engine = started(GameConfig::new(300, 1000));
        for _ in 0..3 {
            pick(&mut engine, &[10, 11, 12, 13, 14, 15], 2);
            engine.submit_ticket().unwrap();
        }
        assert_eq!(engine.money(), 100);
        engine
    }

    #[test]
    fn test_invalid_deposit() {
        let mut engine = broke_engine();

        assert!(matches!(
            engine.deposit(-5),
            Err(LottoError::InvalidAmount(-5))
        ));
        assert!(matches!(engine.deposit(0), Err(LottoError::InvalidAmount(0))));
        assert_eq!(engine.money(), 100);
        assert_eq!(engine.lock(), Some(LockReason::OutOfMoney));
    }

    #[test]
    fn test_huge_deposit_then_jackpot_saturates() {
        let mut engine = fixed_engine(GameConfig::new(300, 100));
        assert_eq!(
            engine.start_round().unwrap(),
            StartOutcome::LockedOutOfMoney { money: 100 }
        );

        assert_eq!(
            engine.deposit(i64::MAX).unwrap(),
            DepositOutcome::Resumed { money: i64::MAX }
        );

        pick(&mut engine, &[1, 2, 3, 4, 5, 6], 1);
        let result = graded(engine.submit_ticket().unwrap());
        assert_eq!(result.prize, 1000);
        assert_eq!(result.money_after, i64::MAX);
        assert_eq!(engine.money(), i64::MAX);
        assert_eq!(engine.rounds_completed(), 1);
        assert!(!engine.is_locked());

        let summary = engine.summary();
        assert_eq!(summary.spent, 300);
        assert_eq!(summary.won, 1000);
        assert_eq!(summary.net, 700);
    }

    #[test]
    fn test_clear_selection() {
        let mut engine = started(GameConfig::default());
        pick(&mut engine, &[8, 9], 3);

        assert!(engine.clear_selection());
        assert_eq!(engine.selection(), &Selection::default());

        pick(&mut engine, &[8], 3);
        engine.finish().unwrap();
        assert!(!engine.clear_selection());
        assert_eq!(engine.selection().numbers, vec![8]);
    }

    #[test]
    fn test_deposit_resumes() {
        let mut engine = broke_engine();
        // Wrong combination left from before the lock.
        engine.winning = Some(WinningDraw {
            numbers: vec![30, 31, 32, 33, 34, 35],
            strong: 7,
        });

        let outcome = engine.deposit(500).unwrap();
        assert_eq!(outcome, DepositOutcome::Resumed { money: 600 });
        assert_eq!(engine.money(), 600);
        assert_eq!(engine.lock(), None);
        assert_eq!(engine.selection(), &Selection::default());
        assert_eq!(engine.winning().unwrap().numbers, vec![1, 2, 3, 4, 5, 6]);

        pick(&mut engine, &[1, 2, 3, 4, 5, 6], 1);
        assert_eq!(graded(engine.submit_ticket().unwrap()).prize, 1000);
    }

    #[test]
    fn test_small_deposit_stays_locked() {
        let mut engine = broke_engine();

        let outcome = engine.deposit(100).unwrap();
        assert_eq!(
            outcome,
            DepositOutcome::StillLocked {
                money: 200,
                shortfall: 100
            }
        );
        assert_eq!(engine.lock(), Some(LockReason::OutOfMoney));

        assert_eq!(
            engine.deposit(100).unwrap(),
            DepositOutcome::Resumed { money: 300 }
        );
    }

    #[test]
    fn test_deposit_ignored_unless_out_of_money() {
        let mut engine = started(GameConfig::default());
        assert_eq!(engine.deposit(500).unwrap(), DepositOutcome::Ignored);
        assert_eq!(engine.money(), 1000);

        engine.finish().unwrap();
        assert_eq!(engine.deposit(500).unwrap(), DepositOutcome::Ignored);
        assert_eq!(engine.money(), 1000);
    }

    #[test]
    fn test_finish_is_permanent() {
        let mut engine = started(GameConfig::default());
        engine.toggle_number(10).unwrap();

        let summary = engine.finish().unwrap();
        assert_eq!(summary.money, 1000);
        assert_eq!(engine.lock(), Some(LockReason::Finished));

        assert_eq!(engine.toggle_strong(2).unwrap(), ToggleOutcome::Ignored);
        assert_eq!(engine.toggle_number(11).unwrap(), ToggleOutcome::Ignored);
        assert_eq!(engine.submit_ticket().unwrap(), SubmitOutcome::Ignored);
        assert_eq!(engine.start_round().unwrap(), StartOutcome::Ignored);
        assert!(engine.finish().is_none());
        assert_eq!(engine.selection().numbers, vec![10]);
    }

    #[test]
    fn test_quick_pick() {
        let mut engine = RoundEngine::seeded(GameConfig::default(), 11).unwrap();
        assert!(!engine.quick_pick().unwrap());

        engine.start_round().unwrap();
        assert!(engine.quick_pick().unwrap());
        assert!(engine.selection().is_complete(6));

        assert!(matches!(
            engine.submit_ticket().unwrap(),
            SubmitOutcome::Graded(_)
        ));
        assert_eq!(engine.rounds_completed(), 1);
    }

    #[test]
    fn test_summary_and_snapshot() {
        let mut engine = started(GameConfig::default());
        pick(&mut engine, &[1, 2, 3, 4, 5, 6], 2);
        engine.submit_ticket().unwrap();
        pick(&mut engine, &[10, 11, 12, 13, 14, 15], 2);
        engine.submit_ticket().unwrap();

        let summary = engine.summary();
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.spent, 600);
        assert_eq!(summary.won, 600);
        assert_eq!(summary.net, 0);
        assert_eq!(summary.money, 1000);

        let snapshot = engine.snapshot();
        assert!(snapshot.can_play());
        assert_eq!(snapshot.rounds_completed, 2);
        assert_eq!(snapshot.last_result.unwrap().round, 2);
        assert_eq!(engine.history().len(), 2);
    }
}

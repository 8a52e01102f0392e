use crate::error::{LottoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game rules fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Amount debited per submitted ticket.
    pub ticket_cost: i64,
    /// Player money when the engine is created.
    pub start_money: i64,
    /// Regular numbers on a ticket, and in each draw.
    pub max_picks: usize,
    pub min_number: u32,
    pub max_number: u32,
    pub min_strong: u32,
    pub max_strong: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ticket_cost: 300,
            start_money: 1000,
            max_picks: 6,
            min_number: 1,
            max_number: 37,
            min_strong: 1,
            max_strong: 7,
        }
    }
}

impl GameConfig {
    pub fn new(ticket_cost: i64, start_money: i64) -> Self {
        Self {
            ticket_cost,
            start_money,
            ..Self::default()
        }
    }

    /// Parse a JSON file without validating it. Missing keys take defaults.
    pub fn load_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config = Self::load_json_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Count of regular numbers on the board; 0 for an inverted range.
    pub fn number_span(&self) -> usize {
        self.max_number
            .checked_sub(self.min_number)
            .map_or(0, |d| d as usize + 1)
    }

    pub fn contains_number(&self, value: u32) -> bool {
        (self.min_number..=self.max_number).contains(&value)
    }

    pub fn contains_strong(&self, value: u32) -> bool {
        (self.min_strong..=self.max_strong).contains(&value)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ticket_cost <= 0 {
            return Err(LottoError::config("Ticket cost must be greater than 0"));
        }

        if self.start_money < 0 {
            return Err(LottoError::config("Starting money cannot be negative"));
        }

        if self.max_picks == 0 {
            return Err(LottoError::config("Pick count must be greater than 0"));
        }

        if self.min_number > self.max_number {
            return Err(LottoError::config(format!(
                "Number range is inverted: {}..={}",
                self.min_number, self.max_number
            )));
        }

        if self.min_strong > self.max_strong {
            return Err(LottoError::config(format!(
                "Strong range is inverted: {}..={}",
                self.min_strong, self.max_strong
            )));
        }

        if self.max_picks > self.number_span() {
            return Err(LottoError::DrawRange {
                count: self.max_picks,
                min: self.min_number,
                max: self.max_number,
            });
        }

        Ok(())
    }
}

//! Lotto SDK - round lifecycle and prize-resolution engine
//!
//! A player stakes a fixed ticket price against a freshly drawn hidden
//! combination of regular numbers plus one strong number, and is paid from a
//! fixed prize table. The engine owns all game state and performs no I/O.

pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod prize;
pub mod shared;
pub mod types;

pub use config::GameConfig;
pub use draw::{RandomSource, RngSource, ScriptedSource};
pub use engine::RoundEngine;
pub use error::{LottoError, Result};
pub use prize::{calculate_prize, PRIZE_TABLE};
pub use shared::SharedEngine;
pub use types::{
    DepositOutcome, LockReason, RoundResult, Selection, SessionSummary, Snapshot, StartOutcome,
    SubmitOutcome, ToggleOutcome,
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot draw {count} unique numbers from range {min}..={max}")]
    DrawRange { count: usize, min: u32, max: u32 },

    #[error("You can select up to {max} numbers only")]
    SelectionFull { max: usize },

    #[error("Incomplete selection: pick 1 strong number and exactly {required} numbers")]
    IncompleteSelection { required: usize },

    #[error("Invalid deposit amount: {0}")]
    InvalidAmount(i64),

    #[error("Number {value} is outside {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LottoError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for rejections the player can fix by changing input and retrying.
    pub fn is_player_input(&self) -> bool {
        matches!(
            self,
            Self::SelectionFull { .. }
                | Self::IncompleteSelection { .. }
                | Self::InvalidAmount(_)
                | Self::OutOfRange { .. }
        )
    }
}

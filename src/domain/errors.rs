/// Errors the engine reports to its host.
///
/// Everything else (empty buffers, zero-span domains) follows the
/// skip-the-frame policy and never surfaces as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    LevelOutOfRange { index: usize, levels: usize },
    InvalidTradeId(String),
    UnknownTrade(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::LevelOutOfRange { index, levels } => {
                write!(f, "Level index {} outside [0, {})", index, levels)
            }
            ChartError::InvalidTradeId(id) => write!(f, "Invalid trade id: {:?}", id),
            ChartError::UnknownTrade(id) => write!(f, "Unknown trade id: {}", id),
        }
    }
}

impl std::error::Error for ChartError {}

pub type ChartResult<T> = Result<T, ChartError>;

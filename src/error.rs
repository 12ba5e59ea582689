//! errors raised while building a game, the tick path itself never fails

/// Errors that can occur while setting up a board or controller.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// the operating system could not seed a random generator
    #[error("no usable source of randomness: {0}")]
    RandomSource(#[from] rand::Error),

    /// the board can't hold the starting snake and a reward, or has more than 256 cells per axis
    #[error("unsupported board dimensions {width}x{height}")]
    UnsupportedDimensions {
        #[allow(missing_docs)]
        width: usize,
        #[allow(missing_docs)]
        height: usize,
    },

    /// a snapshot that doesn't describe a valid board
    #[error("invalid board snapshot: {0}")]
    Snapshot(String),

    /// configuration or snapshot json that couldn't be parsed
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

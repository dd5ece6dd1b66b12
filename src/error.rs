//! Error types for Resume Quest.

/// Errors produced while loading data or driving a scene.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token {index} out of range (scene has {total} tokens)")]
    TokenOutOfRange { index: usize, total: usize },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_out_of_range_display() {
        let e = GameError::TokenOutOfRange { index: 5, total: 3 };
        assert_eq!(format!("{e}"), "token 5 out of range (scene has 3 tokens)");
    }

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: GameError = err.into();
        assert!(format!("{e}").starts_with("JSON error:"));
    }
}

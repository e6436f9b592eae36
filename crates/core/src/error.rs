use diag_types::FormError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid form: {0}")]
    Form(#[from] FormError),
    #[error("diagnosis service unreachable: {0}")]
    Transport(reqwest::Error),
    #[error("diagnosis service returned HTTP {status}")]
    HttpStatus { status: u16 },
    #[error("failed to decode diagnosis service response: {0}")]
    Decode(serde_json::Error),
    #[error("a diagnosis request is already in flight")]
    SubmissionInFlight,
}

impl CoreError {
    /// Coarse classification used in log fields.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::HttpStatus { .. } => FailureKind::Status,
            Self::Decode(_) => FailureKind::Decode,
            Self::InvalidInput(_) | Self::Form(_) | Self::SubmissionInFlight => FailureKind::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Status,
    Decode,
    Input,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Decode => "decode",
            Self::Input => "input",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

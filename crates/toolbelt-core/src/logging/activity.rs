use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a long-running activity, recorded as a structured log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Started,
    Processing,
    Completed,
    Failed,
    ProcessingWithError,
    CompletedWithError,
}

impl ActivityStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "STARTED",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::ProcessingWithError => "PROCESSING_WITH_ERROR",
            Self::CompletedWithError => "COMPLETED_WITH_ERROR",
        }
    }

    /// Returns `true` once the activity can no longer change state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::CompletedWithError
        )
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityStatus {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STARTED" => Ok(Self::Started),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            "PROCESSING_WITH_ERROR" => Ok(Self::ProcessingWithError),
            "COMPLETED_WITH_ERROR" => Ok(Self::CompletedWithError),
            _ => Err(crate::error::CoreError::InvalidArgument(format!(
                "unknown activity status: {s}"
            ))),
        }
    }
}

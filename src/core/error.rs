use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    /// The world server returned nothing for this cycle. Transient: the
    /// scheduler skips the cycle without advancing the counter.
    #[error("no data available from world server")]
    NoDataAvailable,

    /// The world snapshot had no creature record for the observer.
    /// Transient: the cycle is skipped and logged.
    #[error("creature record missing from world snapshot")]
    MissingCreatureRecord,

    /// Sending the chosen action failed. Transient: logged, never retried
    /// within the same cycle.
    #[error("failed to emit action: {0}")]
    EmitFailure(String),

    /// Malformed configuration or rule set. Fatal at startup only.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AgentError {
    /// Transient errors are contained within the cycle loop; everything
    /// else stops the loop, or surfaces to the caller at startup.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AgentError::NoDataAvailable
                | AgentError::MissingCreatureRecord
                | AgentError::EmitFailure(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;

use javagen_model::MemberAccessError;
use thiserror::Error;

/// Failures raised while writing a compilation unit.
///
/// None of these are retried. Output already written to the sink stays there.
#[derive(Debug, Error)]
pub enum WriteError {
    /// `end()` (or a member that needs an enclosing type) with nothing open.
    #[error("no open scope: end() or member declaration without an enclosing type")]
    EmptyScope,
    /// An annotation value outside the literal forms Java accepts.
    #[error("unsupported annotation value: {0}")]
    UnsupportedLiteral(String),
    /// Reading an annotation's members failed.
    #[error("failed to read members of annotation @{annotation}")]
    MemberAccess {
        annotation: String,
        #[source]
        source: MemberAccessError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = WriteError> = std::result::Result<T, E>;

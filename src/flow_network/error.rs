use thiserror::Error;

/// All variants are fatal to the computation that raised them; there is no
/// recoverable or degraded-mode path.
#[derive(Debug, Error)]
pub enum FlowError {
    /// An increment would push flow above capacity, or cancel more residual
    /// capacity than exists. Signals a bug in bottleneck computation.
    #[error("capacity violation: {0}")]
    CapacityViolation(String),

    /// The input graph references an unknown edge endpoint, duplicates a
    /// vertex name, carries a negative capacity, or lacks the designated
    /// source/sink vertex.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An edge was registered on a vertex that is not its origin.
    #[error("structural invariant violation: {0}")]
    StructuralInvariantViolation(String),
}

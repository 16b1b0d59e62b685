//! Engine error type.
//!
//! Every fallible engine operation returns an [`EngineError`]. The set of
//! kinds is closed: lookups that miss, state toggles into the current state,
//! duplicate registrations, removal of protected entries, and failures raised
//! by collaborators (render backends and event slots).

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A component, event, scene, slot, or game object was not found.
    NotFound(String),
    /// A lifecycle toggle was requested into the state it is already in.
    AlreadyInState(String),
    /// A name was registered twice.
    DuplicateKey(String),
    /// A protected (default) entry was asked to be removed.
    NotRemovable(String),
    /// A texture backend or event slot reported a failure.
    CollaboratorFailure(String),
}

impl EngineError {
    pub fn not_found(what: impl Into<String>) -> Self {
        EngineError::NotFound(what.into())
    }

    pub fn collaborator(msg: impl Into<String>) -> Self {
        EngineError::CollaboratorFailure(msg.into())
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(msg) => write!(f, "not found: {}", msg),
            EngineError::AlreadyInState(msg) => write!(f, "already in state: {}", msg),
            EngineError::DuplicateKey(msg) => write!(f, "duplicate key: {}", msg),
            EngineError::NotRemovable(msg) => write!(f, "not removable: {}", msg),
            EngineError::CollaboratorFailure(msg) => write!(f, "collaborator failure: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

/// Shorthand for results carrying an [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;

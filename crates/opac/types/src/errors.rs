//! Error types for the membership registry

use crate::MemberId;

/// Errors that can occur in registry operations
///
/// Both variants are recoverable-by-caller outcomes; the registry never
/// mutates state when returning one of these.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Member not found: {0}")]
    NotFound(MemberId),

    #[error("Member already exists: {0}")]
    AlreadyExists(MemberId),
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

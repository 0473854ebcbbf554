//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`BattleError`, `InventoryError`, `ShopError`) are
//! defined next to the rules they enforce. This module only provides the
//! shared classification used to decide how a caller should react.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error enum with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Fatal Surface**: Rules errors are all recoverable or validation errors;
//!   corrupt content is the loader's problem, not the core's

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The action was rejected but the game can continue as-is
///   (no item left, no other creature to switch to)
/// - **Validation**: The request itself was invalid for the current state
///   (acting outside the player's turn, acting on a finished battle)
/// - **Internal**: Unexpected state inconsistency that should be investigated
/// - **Fatal**: The session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log filtering and for asserting on error kinds in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

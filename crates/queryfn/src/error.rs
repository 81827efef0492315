use std::fmt;
use thiserror::Error as ThisError;

///
/// EngineError
///
/// Opaque failure raised by a host engine (JSON marshalling, statement
/// execution). Callers propagate it unchanged.
///

pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

///
/// ArgsError
///
/// Raised by [`args`](crate::args::args) when an erased input does not
/// satisfy the capability set required of it. Carries the offending
/// concrete type name.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ArgsError {
    #[error("invalid function arguments type {type_name}")]
    InvalidArgumentType { type_name: &'static str },

    #[error("invalid function context type {type_name}")]
    InvalidContextType { type_name: &'static str },
}

impl ArgsError {
    #[must_use]
    pub const fn kind(&self) -> ArgsErrorKind {
        match self {
            Self::InvalidArgumentType { .. } => ArgsErrorKind::Argument,
            Self::InvalidContextType { .. } => ArgsErrorKind::Context,
        }
    }

    /// Concrete type name of the rejected input.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::InvalidArgumentType { type_name } | Self::InvalidContextType { type_name } => {
                *type_name
            }
        }
    }
}

///
/// ArgsErrorKind
/// Which input failed its capability check.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgsErrorKind {
    Argument,
    Context,
}

impl fmt::Display for ArgsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Argument => "argument",
            Self::Context => "context",
        };
        write!(f, "{label}")
    }
}

use std::fmt;
use thiserror::Error as ThisError;

///
/// HostError
///
/// Failures raised by the reference host. Crosses the contract boundary
/// boxed as a `queryfn::EngineError`.
///

#[derive(Debug, ThisError)]
pub enum HostError {
    #[error("statement is {len} bytes, limit is {max}")]
    StatementTooLong { len: usize, max: usize },

    #[error("statement has {count} positional arguments, limit is {max}")]
    TooManyArguments { count: usize, max: usize },

    #[error("no handler registered for statement '{0}'")]
    UnknownStatement(String),

    #[error("unsupported {slot} argument of type {type_name}")]
    UnsupportedArgument {
        slot: ArgSlot,
        type_name: &'static str,
    },

    #[error("invalid value: wrapping rejected native type {type_name}")]
    InvalidValue { type_name: &'static str },

    #[error("value could not be marshalled: {0}")]
    Marshal(String),

    #[error("statement handler failed: {0}")]
    Handler(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

///
/// ArgSlot
/// Position of a statement argument, for diagnostics.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArgSlot {
    Named(String),
    Positional(usize),
    /// The raw input of `new_value`.
    Raw,
}

impl fmt::Display for ArgSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "named '{name}'"),
            Self::Positional(index) => write!(f, "positional #{index}"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

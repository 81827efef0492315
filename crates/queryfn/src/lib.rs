//! Capability contract between a query engine and externally loaded
//! functions: the `Value` and `Context` capability sets, the erased
//! `Native` boundary type, and the `args` adapter that narrows one into
//! the others.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

pub mod args;
pub mod context;
pub mod error;
pub mod native;
pub mod value;

// re-exports
pub use args::args;
pub use context::{Context, NamedArgs, StatementOutcome};
pub use error::{ArgsError, ArgsErrorKind, EngineError};
pub use native::Native;
pub use value::Value;

///
/// Prelude
///
/// Everything a function plugin needs to narrow its inputs and work with
/// engine values.
///

pub mod prelude {
    pub use crate::{
        args::args,
        context::{Context, NamedArgs, StatementOutcome},
        error::{ArgsError, EngineError},
        native::Native,
        value::Value,
    };
}

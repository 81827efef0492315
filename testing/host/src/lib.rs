//! Reference in-memory host engine for the `queryfn` contract.
//!
//! Values are JSON documents, statements are dispatched to handlers
//! registered by exact text. Meant for exercising function plugins in
//! tests, not for production use.
#![warn(unreachable_pub)]

pub mod config;
pub mod context;
pub mod error;
pub mod pool;
pub mod value;

// re-exports
pub use config::HostConfig;
pub use context::{HandlerOutput, HostContext, StatementCall};
pub use error::{ArgSlot, HostError};
pub use pool::{PoolStats, ValuePool};
pub use value::HostValue;

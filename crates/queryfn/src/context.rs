use crate::{error::EngineError, native::Native};
use std::collections::BTreeMap;

///
/// NamedArgs
///
/// Named statement bindings. Entries are engine values or plain natives;
/// the engine decides how to bind either.
///

pub type NamedArgs = BTreeMap<String, Box<dyn Native>>;

///
/// StatementOutcome
///
/// What the engine hands back from a statement.
/// The shape of `result` and the unit of `count` are engine-defined.
///

#[derive(Debug)]
pub struct StatementOutcome {
    pub result: Box<dyn Native>,
    pub count: u64,
}

impl StatementOutcome {
    #[must_use]
    pub fn new(result: Box<dyn Native>, count: u64) -> Self {
        Self { result, count }
    }
}

///
/// Context
///
/// Handle to an execution session, as seen by a function plugin.
///

pub trait Context {
    /// Wrap an arbitrary native input as an engine value.
    ///
    /// Never fails. A wrapping failure must be encoded in the returned
    /// value itself, since there is no error channel.
    fn new_value(&self, raw: Box<dyn Native>) -> Box<dyn Native>;

    /// Execute `statement` with named and positional bindings.
    ///
    /// Failures are engine-defined and must be propagated unchanged by
    /// callers.
    fn execute_statement(
        &self,
        statement: &str,
        named_args: &NamedArgs,
        positional_args: &[Box<dyn Native>],
    ) -> Result<StatementOutcome, EngineError>;
}

impl std::fmt::Debug for dyn Context + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Context")
    }
}

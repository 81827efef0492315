
use crate::{
    config::HostConfig,
    error::{ArgSlot, HostError},
    pool::ValuePool,
    value::HostValue,
};
use queryfn::{Context, EngineError, NamedArgs, Native, StatementOutcome};
use serde_json::{Number, Value as Json};
use std::{collections::BTreeMap, fmt, sync::Arc};
use tracing::{debug, trace, warn};

///
/// StatementCall
///
/// A statement with its bindings resolved to JSON, as seen by a handler.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatementCall {
    pub statement: String,
    pub named: BTreeMap<String, Json>,
    pub positional: Vec<Json>,
}

///
/// HandlerOutput
///

#[derive(Clone, Debug, PartialEq)]
pub struct HandlerOutput {
    pub result: Json,
    pub count: u64,
}

impl HandlerOutput {
    #[must_use]
    pub const fn new(result: Json, count: u64) -> Self {
        Self { result, count }
    }
}

type StatementHandler =
    Box<dyn Fn(&StatementCall) -> Result<HandlerOutput, HostError> + Send + Sync>;

///
/// HostContext
///
/// Execution session of the reference host.
///
/// Statements are matched by their trimmed text against registered
/// handlers. Every value created here, including statement results, is
/// accounted in the context's pool.
///

pub struct HostContext {
    config: HostConfig,
    pool: Arc<ValuePool>,
    handlers: BTreeMap<String, StatementHandler>,
}

impl HostContext {
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            pool: Arc::new(ValuePool::new()),
            handlers: BTreeMap::new(),
        }
    }

    /// Register the handler for one statement text.
    /// A later registration for the same text replaces the earlier one.
    pub fn register<F>(&mut self, statement: &str, handler: F) -> &mut Self
    where
        F: Fn(&StatementCall) -> Result<HandlerOutput, HostError> + Send + Sync + 'static,
    {
        self.handlers.insert(statement.trim().to_string(), Box::new(handler));

        self
    }

    #[must_use]
    pub const fn config(&self) -> &HostConfig {
        &self.config
    }

    #[must_use]
    pub const fn pool(&self) -> &Arc<ValuePool> {
        &self.pool
    }

    /// Create a host value directly from JSON.
    #[must_use]
    pub fn value(&self, json: Json) -> HostValue {
        HostValue::new(json, Arc::clone(&self.pool))
    }

    fn execute(
        &self,
        statement: &str,
        named_args: &NamedArgs,
        positional_args: &[Box<dyn Native>],
    ) -> Result<StatementOutcome, HostError> {
        let statement = statement.trim();

        if statement.len() > self.config.max_statement_len {
            return Err(HostError::StatementTooLong {
                len: statement.len(),
                max: self.config.max_statement_len,
            });
        }
        if positional_args.len() > self.config.max_positional_args {
            return Err(HostError::TooManyArguments {
                count: positional_args.len(),
                max: self.config.max_positional_args,
            });
        }

        let handler = self.handlers.get(statement).ok_or_else(|| {
            warn!(statement, "no handler registered");
            HostError::UnknownStatement(statement.to_string())
        })?;

        let named = named_args
            .iter()
            .map(|(name, arg)| {
                resolve_native(ArgSlot::Named(name.clone()), arg.as_ref())
                    .map(|json| (name.clone(), json))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        let positional = positional_args
            .iter()
            .enumerate()
            .map(|(index, arg)| resolve_native(ArgSlot::Positional(index), arg.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            statement,
            named = named.len(),
            positional = positional.len(),
            "executing statement"
        );

        let call = StatementCall {
            statement: statement.to_string(),
            named,
            positional,
        };
        let output = handler(&call)?;

        debug!(statement, count = output.count, "statement complete");

        Ok(StatementOutcome::new(
            Box::new(self.value(output.result)),
            output.count,
        ))
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("config", &self.config)
            .field("pool", &self.pool.stats())
            .field("statements", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Context for HostContext {
    fn new_value(&self, raw: Box<dyn Native>) -> Box<dyn Native> {
        // a host value from this context's pool is passed through untouched;
        // one from another context is re-wrapped so this pool accounts for it
        let raw = match raw.downcast::<HostValue>() {
            Ok(value) if value.belongs_to(&self.pool) => return value,
            Ok(value) => value as Box<dyn Native>,
            Err(raw) => raw,
        };

        match resolve_native(ArgSlot::Raw, raw.as_ref()) {
            Ok(json) => {
                trace!(type_name = raw.type_name(), "wrapped native as host value");
                Box::new(self.value(json))
            }
            Err(_) => Box::new(HostValue::invalid(raw.type_name(), Arc::clone(&self.pool))),
        }
    }

    fn execute_statement(
        &self,
        statement: &str,
        named_args: &NamedArgs,
        positional_args: &[Box<dyn Native>],
    ) -> Result<StatementOutcome, EngineError> {
        Ok(self.execute(statement, named_args, positional_args)?)
    }
}

queryfn::native!(HostContext: context);

// resolve_native
// Any `Value` goes through its JSON form; otherwise only plain
// JSON-shaped natives are accepted.
fn resolve_native(slot: ArgSlot, native: &dyn Native) -> Result<Json, HostError> {
    if let Some(value) = native.as_value() {
        let bytes = value
            .marshal_json()
            .map_err(|err| HostError::Marshal(err.to_string()))?;

        return Ok(serde_json::from_slice(&bytes)?);
    }

    // each plain type is also accepted as `Option<T>`, with `None` as null
    macro_rules! try_native {
        ($convert:ident; $($ty:ty),* $(,)?) => {
            $(
                if let Some(v) = native.downcast_ref::<$ty>() {
                    return $convert(v).ok_or_else(|| unsupported(slot, native));
                }
                if let Some(opt) = native.downcast_ref::<Option<$ty>>() {
                    return match opt {
                        Some(v) => resolve_native(slot, v),
                        None => Ok(Json::Null),
                    };
                }
            )*
        };
    }

    try_native!(
        lossless;
        Json,
        String,
        &'static str,
        bool,
        i8,
        i16,
        i32,
        i64,
        isize,
        u8,
        u16,
        u32,
        u64,
        usize,
        Vec<Json>,
    );
    try_native!(char_text; char);
    try_native!(finite_f64; f64);
    try_native!(finite_f32; f32);

    if native.is::<()>() {
        return Ok(Json::Null);
    }

    Err(unsupported(slot, native))
}

fn unsupported(slot: ArgSlot, native: &dyn Native) -> HostError {
    HostError::UnsupportedArgument {
        slot,
        type_name: native.type_name(),
    }
}

fn lossless<T: Clone + Into<Json>>(v: &T) -> Option<Json> {
    Some(v.clone().into())
}

fn char_text(v: &char) -> Option<Json> {
    Some(Json::String(v.to_string()))
}

// NaN and infinities have no JSON form
fn finite_f64(v: &f64) -> Option<Json> {
    Number::from_f64(*v).map(Json::Number)
}

fn finite_f32(v: &f32) -> Option<Json> {
    finite_f64(&f64::from(*v))
}

#[cfg(test)]
mod tests;

use crate::{error::HostError, pool::ValuePool};
use queryfn::{EngineError, Native, Value};
use serde_json::Value as Json;
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::{trace, warn};

///
/// Repr
///

#[derive(Clone, Debug)]
enum Repr {
    Json(Json),
    /// Sentinel for a `new_value` input the host could not wrap.
    Invalid { type_name: &'static str },
}

///
/// HostValue
///
/// JSON-backed engine value.
///
/// Every instance is counted as live in its pool until recycled.
/// An invalid value stands in for a failed wrap: it renders as
/// `<invalid TYPE>`, is falsy, and refuses to marshal.
///

#[derive(Debug)]
pub struct HostValue {
    repr: Repr,
    pool: Arc<ValuePool>,
    recycled: AtomicBool,
}

impl HostValue {
    pub(crate) fn new(json: Json, pool: Arc<ValuePool>) -> Self {
        Self::with_repr(Repr::Json(json), pool)
    }

    pub(crate) fn invalid(type_name: &'static str, pool: Arc<ValuePool>) -> Self {
        trace!(type_name, "wrapping rejected, returning invalid value");
        Self::with_repr(Repr::Invalid { type_name }, pool)
    }

    fn with_repr(repr: Repr, pool: Arc<ValuePool>) -> Self {
        pool.acquire();

        Self {
            repr,
            pool,
            recycled: AtomicBool::new(false),
        }
    }

    /// The JSON document, or `None` for an invalid value.
    #[must_use]
    pub const fn json(&self) -> Option<&Json> {
        match &self.repr {
            Repr::Json(json) => Some(json),
            Repr::Invalid { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.repr, Repr::Json(_))
    }

    pub(crate) fn belongs_to(&self, pool: &Arc<ValuePool>) -> bool {
        Arc::ptr_eq(&self.pool, pool)
    }

    #[must_use]
    pub fn is_recycled(&self) -> bool {
        self.recycled.load(Ordering::Acquire)
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Json(json) => write!(f, "{json}"),
            Repr::Invalid { type_name } => write!(f, "<invalid {type_name}>"),
        }
    }
}

impl Value for HostValue {
    fn to_text(&self) -> String {
        match &self.repr {
            Repr::Json(Json::String(text)) => text.clone(),
            _ => self.to_string(),
        }
    }

    fn marshal_json(&self) -> Result<Vec<u8>, EngineError> {
        match &self.repr {
            Repr::Json(json) => Ok(serde_json::to_vec(json).map_err(HostError::from)?),
            Repr::Invalid { type_name } => Err(HostError::InvalidValue {
                type_name: *type_name,
            }
            .into()),
        }
    }

    // invalid values have no native form beyond unit
    fn actual(&self) -> Box<dyn Native> {
        match &self.repr {
            Repr::Json(json) => Box::new(json.clone()),
            Repr::Invalid { .. } => Box::new(()),
        }
    }

    fn truth(&self) -> bool {
        match &self.repr {
            Repr::Json(json) => json_truth(json),
            Repr::Invalid { .. } => false,
        }
    }

    fn recycle(&self) {
        if self.recycled.swap(true, Ordering::AcqRel) {
            warn!(value = %self, "recycle called on an already recycled value");
            return;
        }

        self.pool.release();
    }

    fn track(&self) {
        if self.is_recycled() {
            warn!(value = %self, "track called on a recycled value");
            return;
        }

        self.pool.track();
    }
}

queryfn::native!(HostValue: value);

/// Truthiness of a JSON document.
///
/// Null, `false`, zero, and empty strings/arrays/objects are false.
#[must_use]
pub fn json_truth(json: &Json) -> bool {
    match json {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Json::String(s) => !s.is_empty(),
        Json::Array(items) => !items.is_empty(),
        Json::Object(fields) => !fields.is_empty(),
    }
}

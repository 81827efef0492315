use crate::{error::EngineError, native::Native};
use std::fmt::Display;

///
/// Value
///
/// Borrowed handle to an engine-native datum.
///
/// The engine owns the backing memory. A conforming type provides every
/// operation below; there is no partial implementation.
///
/// - `Display` is the engine's printable rendering.
/// - `to_text` is a second rendering and may follow different conventions
///   (for example, strings without quotes).
///
/// Lifecycle: after [`Value::recycle`] the handle must not be used again.
/// What happens if it is is up to the engine.
///

pub trait Value: Display {
    /// Engine textual conversion, distinct from `Display`.
    fn to_text(&self) -> String;

    /// Serialize to JSON bytes.
    fn marshal_json(&self) -> Result<Vec<u8>, EngineError>;

    /// The underlying native representation. Its concrete type is defined
    /// by the engine.
    fn actual(&self) -> Box<dyn Native>;

    /// Reduce to a boolean using the engine's coercion rules.
    fn truth(&self) -> bool;

    /// Release the value back to the engine.
    fn recycle(&self);

    /// Register the value with the engine's resource accounting.
    fn track(&self);
}

impl std::fmt::Debug for dyn Value + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Value({self})")
    }
}

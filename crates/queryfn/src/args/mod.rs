
use crate::{context::Context, error::ArgsError, native::Native, value::Value};

/// Narrow the erased inputs of a function call to a `Value` and a `Context`.
///
/// `args` is checked first; if it fails, `context` is not inspected.
/// The returned handles borrow the same instances that were passed in.
/// Pure: nothing is mutated and the engine is never called.
pub fn args<'a>(
    args: &'a dyn Native,
    context: &'a dyn Native,
) -> Result<(&'a dyn Value, &'a dyn Context), ArgsError> {
    let Some(value) = args.as_value() else {
        return Err(ArgsError::InvalidArgumentType {
            type_name: args.type_name(),
        });
    };

    let Some(context_handle) = context.as_context() else {
        return Err(ArgsError::InvalidContextType {
            type_name: context.type_name(),
        });
    };

    Ok((value, context_handle))
}

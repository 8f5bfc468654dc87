pub mod function;
pub mod value;

pub use function::{Builtin, NativeFn};
pub use value::Value;

pub mod function;
pub mod literal;


pub use function::{Function, NativeFn};
pub use literal::{Literal, LiteralError};

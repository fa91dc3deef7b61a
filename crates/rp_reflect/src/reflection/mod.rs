// -----------------------------------------------------------------------------
// Modules

mod clone_error;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;
pub use reflect::Reflect;

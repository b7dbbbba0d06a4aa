//----------------------------------------
// parameters mod
//----------------------------------------
pub mod bounds;
pub mod error;
pub mod types;
mod validate;

//----------------------------------------
// sampling mod
//----------------------------------------
pub mod draw;
pub mod error;

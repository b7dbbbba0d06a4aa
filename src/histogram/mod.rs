//----------------------------------------
// histogram mod
//----------------------------------------
pub mod bins;
pub mod error;
pub mod svg;

// crates/core/src/lib.rs
pub mod nlu;
pub mod result;

pub use nlu::*;
pub use result::*;

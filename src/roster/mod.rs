//! Player roster module
//!
//! Parses tab-separated player tables into records that can pre-populate
//! a read-only panel.

mod parser;
mod record;


pub use parser::*;
pub use record::*;

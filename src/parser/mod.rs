//! Parser for portfolio documents

pub mod lexer;
pub mod record;
mod scanner;

pub use record::*;
pub use scanner::{parse, Section};

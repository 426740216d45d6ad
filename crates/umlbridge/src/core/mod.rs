//! Core abstractions for translation
//!
//! The shared model, the parser and translator traits every notation plugin
//! implements, and the ambient error and logging infrastructure.

pub mod chumsky_utils;
mod error;
pub mod logging;
mod parser;
mod structure;
mod translator;
mod types;

pub use error::*;
pub use logging::*;
pub use parser::*;
pub use structure::*;
pub use translator::*;
pub use types::*;

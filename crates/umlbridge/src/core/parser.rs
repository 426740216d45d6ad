//! Core parser trait
//!
//! A parser reads one textual notation and registers what it recognizes into
//! a [`Structure`].

use anyhow::Result;

use super::Structure;

/// Core trait for notation parsers
///
/// # Example
/// ```
/// use umlbridge::core::{Parser, Structure};
/// use umlbridge::plugins::uml::UmlParser;
///
/// let parser = UmlParser::new();
/// let mut structure = Structure::new();
/// parser.parse("class Book\nclass Shelf", &mut structure).unwrap();
/// assert_eq!(structure.class_count(), 2);
/// ```
pub trait Parser: Send + Sync {
    /// Parse `input` and register its entities into `structure`
    fn parse(&self, input: &str, structure: &mut Structure) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Cheap check whether the input looks like this parser's notation
    fn can_parse(&self, input: &str) -> bool;
}

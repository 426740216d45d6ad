//! Java source parser
//!
//! Parses one compilation unit and registers its top-level types. Unlike the
//! diagram parser, malformed Java is an error.

use anyhow::Result;
use tracing::{debug, span, Level};

use super::syntax_parser::JavaSyntaxParser;
use super::visitor::ModelBuilder;
use crate::core::{Parser, Structure};

/// Java source parser
pub struct JavaParser {
    syntax: JavaSyntaxParser,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            syntax: JavaSyntaxParser::new(),
        }
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for JavaParser {
    fn parse(&self, input: &str, structure: &mut Structure) -> Result<()> {
        let parse_span = span!(Level::DEBUG, "parse_java", input_len = input.len());
        let _enter = parse_span.enter();

        let unit = self.syntax.parse_compilation_unit(input)?;
        debug!(
            package = %unit.package.join("."),
            import_count = unit.imports.len(),
            type_count = unit.types.len(),
            "Parsed compilation unit"
        );

        ModelBuilder::new(structure).visit(&unit);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "java"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        self.syntax
            .parse_compilation_unit(input)
            .is_ok_and(|unit| !unit.types.is_empty())
    }
}

//! UML notation plugin
//!
//! Implements PlantUML-style class diagram parsing and rendering.

mod chumsky_parser;
mod modifiers;
mod parser;
mod renderer;

pub use chumsky_parser::{
    parse_parameters, ChumskyUmlParser, Declaration, DeclarationKind, InlineMember, MemberKinds,
    MemberLine, ParsedAssociation, ParsedAttribute, ParsedMethod,
};
pub use modifiers::{strip_modifiers, LineModifiers, StrippedLine};
pub use parser::UmlParser;
pub use renderer::UmlTranslator;

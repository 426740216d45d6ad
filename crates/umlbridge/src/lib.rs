//! umlbridge - Translate between UML class diagrams, Java and Protobuf
//!
//! A library for parsing PlantUML-style class diagrams and Java sources into
//! one shared model, and rendering that model as UML, Java stubs or proto3.
//!
//! # Quick Start
//!
//! ```rust
//! let proto = umlbridge::uml_to_proto("class Book {\n  - title : String\n}").unwrap();
//! assert!(proto.contains("message Book {\n\tString title = 1;\n}"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use umlbridge::prelude::*;
//!
//! let parser = UmlParser::new();
//! let mut structure = Structure::new();
//! parser.parse("interface Repo {\n  + find(int id) : Book\n}", &mut structure).unwrap();
//! assert_eq!(structure.interface_count(), 1);
//!
//! let translator = ProtobufTranslator::new().with_package("com.example");
//! let proto = translator.translate_all(&mut structure).unwrap();
//! assert!(proto.contains("service Repo {"));
//! ```

pub mod core;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Association, Attribute, Class, Enum, EnumProperty, Interface, Method, Multiplicity,
        Parameter, Parser, Structure, TranslateError, TranslationContext, Translator, Visibility,
    };
    pub use crate::plugins::java::{JavaFile, JavaParser, JavaTranslator};
    pub use crate::plugins::pipeline::Pipeline;
    pub use crate::plugins::protobuf::ProtobufTranslator;
    pub use crate::plugins::uml::{UmlParser, UmlTranslator};
}

/// Parse diagram text into a structure
///
/// Never fails: lines that match no grammar are dropped.
///
/// # Example
/// ```rust
/// let structure = umlbridge::parse_uml("class Book\nBook \"1\" -- \"*\" Page");
/// assert_eq!(structure.class_count(), 1);
/// assert_eq!(structure.association_count(), 1);
/// ```
pub fn parse_uml(input: &str) -> Structure {
    plugins::Pipeline::new().parse_uml(input)
}

/// Render diagram text as Java stubs, one file per class, interface and enum
///
/// # Example
/// ```rust
/// let files = umlbridge::uml_to_java("enum Color {\n  RED\n}");
/// assert_eq!(files[0].name, "Color");
/// assert_eq!(files[0].body, "enum Color {\n\tRED\n}");
/// ```
pub fn uml_to_java(input: &str) -> Vec<plugins::JavaFile> {
    plugins::Pipeline::new().uml_to_java(input)
}

/// Render diagram text as a proto3 document
pub fn uml_to_proto(input: &str) -> anyhow::Result<String> {
    plugins::Pipeline::new().uml_to_proto(input)
}

/// Re-render diagram text in normalized form
pub fn uml_to_uml(input: &str) -> anyhow::Result<String> {
    plugins::Pipeline::new().uml_to_uml(input)
}

/// Build one structure from `(path, text)` Java sources, skipping files that fail to parse
pub fn java_to_structure<P: AsRef<str>, S: AsRef<str>>(sources: &[(P, S)]) -> Structure {
    plugins::Pipeline::new().java_to_structure(sources.iter().map(|(path, text)| (path, text)))
}

/// Render `(path, text)` Java sources as one UML document
///
/// # Example
/// ```rust
/// let uml = umlbridge::java_to_uml(&[("Book.java", "class Book { private String title; }")]).unwrap();
/// assert!(uml.contains("\t- String title"));
/// ```
pub fn java_to_uml<P: AsRef<str>, S: AsRef<str>>(sources: &[(P, S)]) -> anyhow::Result<String> {
    plugins::Pipeline::new().java_to_uml(sources.iter().map(|(path, text)| (path, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uml_to_proto() {
        let output = uml_to_proto("class Book").unwrap();
        assert!(output.starts_with("syntax = \"proto3\";"));
        assert!(output.ends_with("message Book {\n}"));
    }

    #[test]
    fn test_uml_to_uml() {
        assert_eq!(uml_to_uml("class Book").unwrap(), "@startuml\nclass Book\n@enduml");
    }

    #[test]
    fn test_uml_to_java_empty_input() {
        assert!(uml_to_java("").is_empty());
    }

    #[test]
    fn test_java_to_structure() {
        let structure = java_to_structure(&[("A.java", "class A {}"), ("B.java", "interface B {}")]);
        assert_eq!(structure.class_count(), 1);
        assert_eq!(structure.interface_count(), 1);
    }
}

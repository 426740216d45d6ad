//! Translation pipeline
//!
//! Wires the notation plugins together so callers can run a full conversion
//! without handling each trait manually:
//! UML text → Structure → Java / Protobuf / UML, and Java sources → UML.

use anyhow::Result;
use tracing::{debug, info, span, warn, Level};

use crate::core::{Parser, Structure, Translator};
use crate::plugins::java::{JavaFile, JavaParser, JavaTranslator};
use crate::plugins::protobuf::ProtobufTranslator;
use crate::plugins::uml::{UmlParser, UmlTranslator};

/// Owns one instance of every parser and translator
pub struct Pipeline {
    uml_parser: UmlParser,
    java_parser: JavaParser,
    uml_translator: UmlTranslator,
    java_translator: JavaTranslator,
    protobuf_translator: ProtobufTranslator,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            uml_parser: UmlParser::new(),
            java_parser: JavaParser::new(),
            uml_translator: UmlTranslator::new(),
            java_translator: JavaTranslator::new(),
            protobuf_translator: ProtobufTranslator::new(),
        }
    }

    /// Use `package` as the Protobuf `java_package` option
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.protobuf_translator = self.protobuf_translator.with_package(package);
        self
    }

    /// Parse diagram text; never fails, unrecognized lines are dropped
    pub fn parse_uml(&self, input: &str) -> Structure {
        self.uml_parser.parse_str(input)
    }

    /// One Java stub file per class, interface and enum
    pub fn uml_to_java(&self, input: &str) -> Vec<JavaFile> {
        let pipeline_span = span!(Level::INFO, "uml_to_java", input_len = input.len());
        let _enter = pipeline_span.enter();

        let structure = self.parse_uml(input);
        let files = self.java_translator.translate_files(&structure);
        info!(file_count = files.len(), "Generated Java files");
        files
    }

    pub fn uml_to_proto(&self, input: &str) -> Result<String> {
        let pipeline_span = span!(Level::INFO, "uml_to_proto", input_len = input.len());
        let _enter = pipeline_span.enter();

        let mut structure = self.parse_uml(input);
        let output = self.protobuf_translator.translate_all(&mut structure)?;
        debug!(output_len = output.len(), "Rendered protobuf");
        Ok(output)
    }

    /// Re-render diagram text in normalized form
    pub fn uml_to_uml(&self, input: &str) -> Result<String> {
        let pipeline_span = span!(Level::INFO, "uml_to_uml", input_len = input.len());
        let _enter = pipeline_span.enter();

        let mut structure = self.parse_uml(input);
        self.uml_translator.translate_all(&mut structure)
    }

    /// Build one structure from many Java files.
    ///
    /// Each source is a `(path, text)` pair; the path is only used for
    /// logging. A file that fails to parse is reported and skipped.
    pub fn java_to_structure<I, P, S>(&self, sources: I) -> Structure
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<str>,
        S: AsRef<str>,
    {
        let pipeline_span = span!(Level::INFO, "java_to_structure");
        let _enter = pipeline_span.enter();

        let mut structure = Structure::new();
        let mut parsed = 0usize;
        let mut skipped = 0usize;

        for (path, text) in sources {
            let path = path.as_ref();
            debug!(path, "Parsing Java file");
            match self.java_parser.parse(text.as_ref(), &mut structure) {
                Ok(()) => parsed += 1,
                Err(error) => {
                    skipped += 1;
                    warn!(path, error = %error, "Skipping Java file");
                }
            }
        }

        info!(
            parsed,
            skipped,
            class_count = structure.class_count(),
            interface_count = structure.interface_count(),
            enum_count = structure.enum_count(),
            "Java sources visited"
        );
        structure
    }

    pub fn java_to_uml<I, P, S>(&self, sources: I) -> Result<String>
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<str>,
        S: AsRef<str>,
    {
        let mut structure = self.java_to_structure(sources);
        self.uml_translator.translate_all(&mut structure)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = "@startuml\n\
        interface LibraryServices {\n\
        \t+ Book find(title : String)\n\
        }\n\
        class Book implements LibraryServices {\n\
        \t- String title\n\
        }\n\
        enum Genre {\n\
        \tNOVEL : 0\n\
        }\n\
        @enduml";

    #[test]
    fn test_uml_to_java() {
        let files = Pipeline::new().uml_to_java(LIBRARY);
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Book", "LibraryServices", "Genre"]);
        assert!(files[0].body.contains("\tpublic Book find(String title) {return null;}"));
    }

    #[test]
    fn test_uml_to_proto_uses_package() {
        let output = Pipeline::new().with_package("org.library").uml_to_proto(LIBRARY).unwrap();
        assert!(output.contains("option java_package = \"org.library\";"));
        assert!(output.contains("\trpc find(findRequest) returns (Book) {}"));
        assert!(output.contains("message findRequest {\n\tString title = 1;\n}"));
        assert!(output.contains("enum Genre {\n\tNOVEL = 0;\n}"));
    }

    #[test]
    fn test_uml_to_uml_normalizes() {
        let output = Pipeline::new().uml_to_uml("class A\nA -- B").unwrap();
        assert_eq!(output, "@startuml\nclass A\n\nA  *-->  B\n@enduml");
    }

    #[test]
    fn test_java_to_structure_skips_broken_files() {
        let structure = Pipeline::new().java_to_structure(vec![
            ("src/Book.java", "package lib;\npublic class Book { private String title; }"),
            ("src/Broken.java", "public class {"),
            ("src/Shelf.java", "class Shelf { Book[] books; }"),
        ]);

        assert_eq!(structure.class_count(), 2);
        assert!(structure.get_class("lib.Book").is_some());
        assert_eq!(structure.association_count(), 1);
    }

    #[test]
    fn test_java_to_uml() {
        let output = Pipeline::new()
            .java_to_uml([("Dog.java", "class Dog extends Animal { public void bark() {} }")])
            .unwrap();
        assert_eq!(
            output,
            "@startuml\nclass Dog extends Animal {\n\t+ void bark()\n}\n@enduml"
        );
    }
}

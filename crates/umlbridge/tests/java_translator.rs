//! Integration tests for the Java stub renderer

use umlbridge::prelude::*;

const SHELF: &str = r#"@startuml
interface Searchable {
  + find(String title) : Book
}

abstract class Shelf implements Searchable {
  - books : List<Book>
  {abstract} + capacity() : int
}

enum Genre {
  NOVEL
  ESSAY
}
@enduml"#;

#[test]
fn test_files_follow_entity_order() {
    let files = umlbridge::uml_to_java(SHELF);
    let names: Vec<_> = files.iter().map(JavaFile::file_name).collect();
    assert_eq!(names, vec!["Shelf.java", "Searchable.java", "Genre.java"]);
}

#[test]
fn test_class_with_implemented_interface() {
    let files = umlbridge::uml_to_java(SHELF);
    assert_eq!(
        files[0].body,
        "abstract public class Shelf implements Searchable {\n\
         \tprivate List<Book> books;\n\
         \n\
         \tpublic abstract int capacity();\n\
         \tpublic Book find(String title) {return null;}\n\
         }"
    );
}

#[test]
fn test_interface_and_enum_bodies() {
    let files = umlbridge::uml_to_java(SHELF);
    assert_eq!(
        files[1].body,
        "public interface Searchable {\n\tpublic Book find(String title);\n}"
    );
    assert_eq!(files[2].body, "enum Genre {\n\tNOVEL,\n\tESSAY\n}");
}

#[test]
fn test_detached_class_skips_interface_methods() {
    let class = Class::new("Shelf").with_implements("Searchable");
    let output = JavaTranslator::new().translate_class(&mut TranslationContext::detached(), &class);
    assert_eq!(output, "public class Shelf implements Searchable {\n}");
}

#[test]
fn test_static_attribute_and_visibility() {
    let class = Class::new("Counter")
        .with_visibility(Visibility::Protected)
        .with_attribute(Attribute::new("total", "long").with_static(true).with_visibility(Visibility::Public));
    let output = JavaTranslator::new().translate_class(&mut TranslationContext::detached(), &class);
    assert_eq!(output, "protected class Counter {\n\tpublic static long total;\n}");
}

#[test]
fn test_translate_all_is_not_implemented() {
    let mut structure = umlbridge::parse_uml(SHELF);
    let error = JavaTranslator::new().translate_all(&mut structure).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<TranslateError>(),
        Some(TranslateError::NotImplemented { .. })
    ));
}

#[test]
fn test_generated_stubs_parse_back() {
    let files = umlbridge::uml_to_java(SHELF);
    let sources: Vec<(String, String)> = files
        .iter()
        .map(|file| (file.file_name(), file.body.clone()))
        .collect();

    let structure = umlbridge::java_to_structure(&sources);

    let shelf = structure.get_class("Shelf").unwrap();
    assert!(shelf.is_abstract);
    assert_eq!(shelf.implements, vec!["Searchable"]);
    assert_eq!(shelf.attributes["books"].ty, "List<Book>");
    assert!(shelf.methods["capacity"].is_abstract);
    assert_eq!(shelf.methods["find"].parameters, vec![Parameter::new("title", "String")]);

    assert!(structure.get_interface("Searchable").is_some());
    let genre = structure.get_enum("Genre").unwrap();
    assert_eq!(genre.properties.keys().collect::<Vec<_>>(), vec!["NOVEL", "ESSAY"]);
}

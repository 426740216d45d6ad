//! Integration tests for the UML notation renderer

use umlbridge::prelude::*;

#[test]
fn test_normalizes_diagram() {
    let output = umlbridge::uml_to_uml(
        "class Dog extends Animal {\n  + bark() : void\n  age : int\n}\nDog \"1\" o-- \"*\" Toy : toys",
    )
    .unwrap();

    assert_eq!(
        output,
        "@startuml\n\
         class Dog extends Animal {\n\
         \t- int age\n\
         \n\
         \t+ void bark()\n\
         }\n\
         \n\
         Dog \"1\" *--> \"*\" Toy : toys\n\
         @enduml"
    );
}

#[test]
fn test_normalized_output_is_stable() {
    let input = "@startuml\n\
        abstract class Shape {\n\
        \t# {static} int count\n\
        \t{abstract} + area(Shape other) : double\n\
        }\n\
        interface Drawable {\n\
        \t+ draw(canvas : Canvas)\n\
        }\n\
        enum Color {\n\
        \tRED = 1\n\
        \tBLUE\n\
        }\n\
        Shape -- Color\n\
        @enduml";

    let first = umlbridge::uml_to_uml(input).unwrap();
    let second = umlbridge::uml_to_uml(&first).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_interface_rendering() {
    let interface = Interface::new("Repo")
        .with_method(Method::new("find").with_return_type("Book").with_parameter(Parameter::new("id", "int")))
        .with_method(Method::new("count").with_return_type("int").with_static(true));

    let output = UmlTranslator::new().translate_interface(&mut TranslationContext::detached(), &interface);
    assert_eq!(
        output,
        "interface Repo {\n\t+ Book find(id : int)\n\t+ {static} int count()\n}"
    );
}

#[test]
fn test_java_sources_to_uml() {
    let sources = [
        ("Book.java", "package lib;\npublic class Book { private String title; }"),
        ("Shelf.java", "package lib;\nclass Shelf { ArrayList<Book> books; }"),
    ];

    let output = umlbridge::java_to_uml(&sources).unwrap();
    assert_eq!(
        output,
        "@startuml\n\
         class lib.Book {\n\
         \t- String title\n\
         }\n\
         \n\
         class lib.Shelf\n\
         \n\
         lib.Shelf  *--> \"*\" Book : books\n\
         @enduml"
    );
}

#[test]
fn test_translator_metadata() {
    let translator = UmlTranslator::new();
    assert_eq!(translator.name(), "uml");
    assert_eq!(translator.extension(), "puml");
}

//! Property tests: rendered diagrams parse back into the same model

use proptest::prelude::*;
use umlbridge::prelude::*;

const RESERVED: [&str; 7] = [
    "abstract",
    "class",
    "interface",
    "enum",
    "extends",
    "implements",
    "static",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,7}".prop_filter("reserved word", |name| !RESERVED.contains(&name.as_str()))
}

fn type_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["int", "String", "Book", "List<Book>", "int[]"]).prop_map(str::to_string)
}

fn return_type() -> impl Strategy<Value = String> {
    prop_oneof![Just("void".to_string()), type_name()]
}

fn visibility() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Public),
        Just(Visibility::Private),
        Just(Visibility::Protected),
    ]
}

fn attribute() -> impl Strategy<Value = Attribute> {
    (identifier(), type_name(), visibility(), any::<bool>()).prop_map(|(name, ty, visibility, is_static)| {
        Attribute::new(name, ty)
            .with_visibility(visibility)
            .with_static(is_static)
    })
}

fn method() -> impl Strategy<Value = Method> {
    (
        identifier(),
        return_type(),
        prop::collection::vec((identifier(), type_name()), 0..4),
        visibility(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(name, return_type, parameters, visibility, is_abstract, is_static)| {
            Method::new(name)
                .with_return_type(return_type)
                .with_parameters(parameters.into_iter().map(|(name, ty)| Parameter::new(name, ty)))
                .with_visibility(visibility)
                .with_abstract(is_abstract)
                .with_static(is_static)
        })
}

fn class() -> impl Strategy<Value = Class> {
    (
        prop::collection::vec(attribute(), 0..5),
        prop::collection::vec(method(), 0..5),
        any::<bool>(),
    )
        .prop_map(|(attributes, methods, is_abstract)| {
            let mut class = Class::new("Sample").with_abstract(is_abstract);
            for attribute in attributes {
                class.add_attribute(attribute);
            }
            for method in methods {
                class.add_method(method);
            }
            class
        })
}

proptest! {
    #[test]
    fn rendered_class_parses_back(class in class()) {
        let mut structure = Structure::new();
        structure.add_class(class.clone());

        let rendered = UmlTranslator::new().translate_all(&mut structure).unwrap();
        let parsed = UmlParser::new().parse_str(&rendered);

        prop_assert_eq!(parsed.class_count(), 1);
        prop_assert_eq!(parsed.get_class("Sample"), Some(&class));
    }

    #[test]
    fn rendered_enum_parses_back(names in prop::collection::vec("[A-Z][A-Z_]{0,6}", 1..6)) {
        let mut enumeration = Enum::new("Code");
        for (value, name) in names.into_iter().enumerate() {
            enumeration.add_property(EnumProperty::new(name, value.to_string()));
        }

        let mut structure = Structure::new();
        structure.add_enum(enumeration.clone());

        let rendered = UmlTranslator::new().translate_all(&mut structure).unwrap();
        let parsed = UmlParser::new().parse_str(&rendered);
        prop_assert_eq!(parsed.get_enum("Code"), Some(&enumeration));
    }

    #[test]
    fn uml_parser_never_panics(input in "\\PC{0,200}") {
        let _ = UmlParser::new().parse_str(&input);
    }
}

//! UML notation renderer
//!
//! Serializes a structure back into diagram text that [`super::UmlParser`]
//! accepts.

use anyhow::Result;

use crate::core::{
    Association, Attribute, Class, Enum, Interface, Method, Multiplicity, Structure,
    TranslationContext, Translator,
};

/// UML notation translator
pub struct UmlTranslator;

impl UmlTranslator {
    pub fn new() -> Self {
        Self
    }

    fn attribute_line(attribute: &Attribute) -> String {
        format!(
            "\t{} {}{} {}",
            attribute.visibility.marker(),
            if attribute.is_static { "{static} " } else { "" },
            attribute.ty.trim(),
            attribute.name
        )
    }

    fn method_line(method: &Method) -> String {
        let parameters = method
            .parameters
            .iter()
            .map(|p| format!("{} : {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "\t{} {}{}{} {}({})",
            method.visibility.marker(),
            if method.is_static { "{static} " } else { "" },
            if method.is_abstract { "abstract " } else { "" },
            method.return_type,
            method.name,
            parameters
        )
    }

    fn multiplicity(multiplicity: Multiplicity) -> String {
        match multiplicity {
            Multiplicity::Unspecified => String::new(),
            other => format!("\"{}\"", other.literal()),
        }
    }

    /// Render one association as a directed composition
    pub fn translate_association(&self, association: &Association) -> String {
        let mut out = format!(
            "{} {} *--> {} {}",
            association.left_class,
            Self::multiplicity(association.right_to_left),
            Self::multiplicity(association.left_to_right),
            association.right_class
        );
        if !association.name.is_empty() {
            out.push_str(" : ");
            out.push_str(&association.name);
        }
        out
    }
}

impl Default for UmlTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for UmlTranslator {
    fn translate_class(&self, _cx: &mut TranslationContext<'_>, class: &Class) -> String {
        let mut out = String::new();
        if class.is_abstract {
            out.push_str("abstract ");
        }
        out.push_str("class ");
        out.push_str(&class.name);

        if let Some(parent) = &class.extends {
            out.push_str(" extends ");
            out.push_str(parent);
        }
        if !class.implements.is_empty() {
            out.push_str(" implements ");
            out.push_str(&class.implements.join(", "));
        }

        if class.has_members() {
            let attributes = class
                .attributes
                .values()
                .map(Self::attribute_line)
                .collect::<Vec<_>>()
                .join("\n");
            let methods = class
                .methods
                .values()
                .map(Self::method_line)
                .collect::<Vec<_>>()
                .join("\n");

            out.push_str(" {\n");
            out.push_str(&attributes);
            if !attributes.is_empty() && !methods.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&methods);
            out.push_str("\n}");
        }

        out
    }

    fn translate_interface(&self, _cx: &mut TranslationContext<'_>, interface: &Interface) -> String {
        let methods = interface
            .methods
            .values()
            .map(Self::method_line)
            .collect::<Vec<_>>()
            .join("\n");

        format!("interface {} {{\n{}\n}}", interface.name, methods)
    }

    fn translate_enum(&self, _cx: &mut TranslationContext<'_>, enumeration: &Enum) -> String {
        let mut out = format!("enum {}", enumeration.name);
        if !enumeration.properties.is_empty() {
            out.push_str(" {");
            for property in enumeration.properties.values() {
                out.push_str("\n\t");
                out.push_str(&property.name);
                if !property.value.is_empty() {
                    out.push_str(" : ");
                    out.push_str(&property.value);
                }
            }
            out.push_str("\n}");
        }
        out
    }

    fn translate_all(&self, structure: &mut Structure) -> Result<String> {
        let structure = &*structure;
        let mut cx = TranslationContext::attached(structure);

        let associations = structure
            .associations()
            .iter()
            .map(|association| self.translate_association(association))
            .collect::<Vec<_>>()
            .join("\n");

        let sections = [
            self.translate_classes(&mut cx, structure.classes()),
            self.translate_interfaces(&mut cx, structure.interfaces()),
            self.translate_enums(&mut cx, structure.enums()),
            associations,
        ];

        let body = sections
            .into_iter()
            .filter(|section| !section.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(format!("@startuml\n{}\n@enduml", body))
    }

    fn name(&self) -> &'static str {
        "uml"
    }

    fn extension(&self) -> &'static str {
        "puml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EnumProperty, Parameter, Visibility};

    fn render_class(class: &Class) -> String {
        UmlTranslator::new().translate_class(&mut TranslationContext::detached(), class)
    }

    #[test]
    fn test_render_bare_class() {
        let class = Class::new("Dog").with_extends("Animal").with_implements("Pet");
        assert_eq!(render_class(&class), "class Dog extends Animal implements Pet");
    }

    #[test]
    fn test_render_class_members() {
        let class = Class::new("Shape")
            .with_abstract(true)
            .with_attribute(Attribute::new("count", "int ").with_static(true))
            .with_attribute(Attribute::new("name", "String").with_visibility(Visibility::Protected))
            .with_method(
                Method::new("area")
                    .with_return_type("double")
                    .with_abstract(true)
                    .with_parameter(Parameter::new("scale", "int")),
            );

        assert_eq!(
            render_class(&class),
            "abstract class Shape {\n\
             \t- {static} int count\n\
             \t# String name\n\
             \n\
             \t+ abstract double area(scale : int)\n\
             }"
        );
    }

    #[test]
    fn test_render_methods_only() {
        let class = Class::new("Runner").with_method(Method::new("run"));
        assert_eq!(render_class(&class), "class Runner {\n\t+ void run()\n}");
    }

    #[test]
    fn test_render_enum() {
        let translator = UmlTranslator::new();
        let mut cx = TranslationContext::detached();
        let color = Enum::new("Color")
            .with_property(EnumProperty::new("RED", "0"))
            .with_property(EnumProperty::unvalued("BLUE"));

        assert_eq!(
            translator.translate_enum(&mut cx, &color),
            "enum Color {\n\tRED : 0\n\tBLUE\n}"
        );
        assert_eq!(translator.translate_enum(&mut cx, &Enum::new("Empty")), "enum Empty");
    }

    #[test]
    fn test_render_association() {
        let translator = UmlTranslator::new();
        let named = Association::new("Library", "Book")
            .with_multiplicities(Multiplicity::Many, Multiplicity::One)
            .with_name("books");
        assert_eq!(
            translator.translate_association(&named),
            "Library \"1\" *--> \"*\" Book : books"
        );

        let bare = Association::new("A", "B");
        assert_eq!(translator.translate_association(&bare), "A  *-->  B");
    }

    #[test]
    fn test_translate_all_sections() {
        let mut structure = Structure::new();
        structure.add_class(Class::new("Book"));
        structure.add_enum(Enum::new("Genre"));
        structure.add_association(Association::new("Book", "Genre"));

        let output = UmlTranslator::new().translate_all(&mut structure).unwrap();
        assert_eq!(
            output,
            "@startuml\nclass Book\n\nenum Genre\n\nBook  *-->  Genre\n@enduml"
        );
    }

    #[test]
    fn test_translate_all_empty() {
        let output = UmlTranslator::new()
            .translate_all(&mut Structure::new())
            .unwrap();
        assert_eq!(output, "@startuml\n\n@enduml");
    }
}

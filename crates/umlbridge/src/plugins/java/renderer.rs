//! Java stub renderer
//!
//! Emits compilable-looking skeletons: signatures only, with a placeholder
//! body for concrete methods. There is no single-document form; use
//! [`JavaTranslator::translate_files`] to get one source file per entity.

use anyhow::Result;
use serde::Serialize;

use crate::core::{
    Class, Enum, Interface, Method, Structure, TranslateError, TranslationContext, Translator,
};

/// One generated source file, named after the entity it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JavaFile {
    pub name: String,
    pub body: String,
}

impl JavaFile {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// `<name>.java`
    pub fn file_name(&self) -> String {
        format!("{}.java", self.name)
    }
}

/// Java stub translator
pub struct JavaTranslator;

impl JavaTranslator {
    pub fn new() -> Self {
        Self
    }

    fn method_line(method: &Method, in_interface: bool) -> String {
        let parameters = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "\t{} {}{} {}({}){}",
            method.visibility,
            if method.is_abstract && !in_interface { "abstract " } else { "" },
            method.return_type,
            method.name,
            parameters,
            if in_interface || method.is_abstract { ";" } else { " {return null;}" }
        )
    }

    fn method_lines<'a>(methods: impl IntoIterator<Item = &'a Method>, in_interface: bool) -> String {
        methods
            .into_iter()
            .map(|method| Self::method_line(method, in_interface))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render every class, interface and enum as its own file, in that order
    pub fn translate_files(&self, structure: &Structure) -> Vec<JavaFile> {
        let mut cx = TranslationContext::attached(structure);
        let mut files = Vec::new();

        for class in structure.classes() {
            files.push(JavaFile::new(&class.name, self.translate_class(&mut cx, class)));
        }
        for interface in structure.interfaces() {
            files.push(JavaFile::new(&interface.name, self.translate_interface(&mut cx, interface)));
        }
        for enumeration in structure.enums() {
            files.push(JavaFile::new(&enumeration.name, self.translate_enum(&mut cx, enumeration)));
        }

        files
    }
}

impl Default for JavaTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for JavaTranslator {
    fn translate_class(&self, cx: &mut TranslationContext<'_>, class: &Class) -> String {
        let mut out = String::new();
        if class.is_abstract {
            out.push_str("abstract ");
        }
        out.push_str(&format!("{} class {}", class.visibility, class.name));

        if let Some(parent) = &class.extends {
            out.push_str(" extends ");
            out.push_str(parent);
        }
        if !class.implements.is_empty() {
            out.push_str(" implements ");
            out.push_str(&class.implements.join(", "));
        }
        out.push_str(" {");

        // Interface methods are appended as-is; a clash with a declared method is kept
        let mut methods: Vec<&Method> = class.methods.values().collect();
        if let Some(structure) = cx.structure() {
            for name in &class.implements {
                if let Some(interface) = structure.get_interface(name) {
                    methods.extend(interface.methods.values());
                }
            }
        }

        if !class.attributes.is_empty() {
            out.push('\n');
            let attributes = class
                .attributes
                .values()
                .map(|attribute| {
                    format!(
                        "\t{} {}{} {};",
                        attribute.visibility,
                        if attribute.is_static { "static " } else { "" },
                        attribute.ty,
                        attribute.name
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            out.push_str(&attributes);
        }

        if !methods.is_empty() {
            out.push('\n');
            if !class.attributes.is_empty() {
                out.push('\n');
            }
            out.push_str(&Self::method_lines(methods, false));
        }

        out.push_str("\n}");
        out
    }

    fn translate_interface(&self, _cx: &mut TranslationContext<'_>, interface: &Interface) -> String {
        format!(
            "{} interface {} {{\n{}\n}}",
            interface.visibility,
            interface.name,
            Self::method_lines(interface.methods.values(), true)
        )
    }

    fn translate_enum(&self, _cx: &mut TranslationContext<'_>, enumeration: &Enum) -> String {
        let constants = enumeration
            .properties
            .values()
            .map(|property| format!("\t{}", property.name))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("enum {} {{\n{}\n}}", enumeration.name, constants)
    }

    fn translate_all(&self, _structure: &mut Structure) -> Result<String> {
        Err(TranslateError::not_implemented("java translate_all").into())
    }

    fn name(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }
}

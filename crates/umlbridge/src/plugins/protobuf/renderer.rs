//! Protobuf renderer
//!
//! Classes become messages, enums become enums and interfaces become
//! services. Rendering an interface can synthesize request and event
//! messages; [`ProtobufTranslator::translate_all`] registers them on the
//! structure so they are emitted with the other messages.

use anyhow::Result;
use tracing::{debug, span, warn, Level};

use crate::core::{
    Attribute, Class, Enum, Interface, Method, Structure, TranslationContext, Translator,
};

/// Placeholder written into `option java_package` unless configured
pub const DEFAULT_PACKAGE: &str = "{{packageName}}";

/// Scalar types that never need a message definition
pub const NATIVE_TYPES: [&str; 15] = [
    "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32",
    "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
];

const EMPTY: &str = "google.protobuf.Empty";

const UNREFERENCED_HEADER: &str = "// UNREFERENCED MESSAGE TYPES FROM PARSED UML";

/// How an interface is turned into a service, decided by its name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// `...DataProvider`: `suscribe` streams
    DataProvider,
    /// `...Events`: `get` streams
    Events,
    /// `...Services`: request/response calls
    Services,
    /// Anything else: event naming without streaming
    Plain,
}

impl ServiceKind {
    pub fn classify(name: &str) -> Self {
        if name.ends_with("DataProvider") {
            ServiceKind::DataProvider
        } else if name.ends_with("Events") {
            ServiceKind::Events
        } else if name.ends_with("Services") {
            ServiceKind::Services
        } else {
            ServiceKind::Plain
        }
    }

    fn is_streaming(self) -> bool {
        matches!(self, ServiceKind::DataProvider | ServiceKind::Events)
    }

    fn rpc_prefix(self) -> &'static str {
        match self {
            ServiceKind::DataProvider => "suscribe",
            _ => "get",
        }
    }
}

/// Map model scalars onto protobuf ones
pub fn replace_type(ty: &str) -> &str {
    match ty {
        "int" => "int32",
        "void" => EMPTY,
        other => other,
    }
}

/// Message holding one field per method parameter
fn parameter_message(name: impl Into<String>, method: &Method) -> Class {
    let mut class = Class::new(name);
    for parameter in &method.parameters {
        class.add_attribute(Attribute::new(&parameter.name, &parameter.ty));
    }
    class
}

/// Protobuf translator
pub struct ProtobufTranslator {
    package: String,
}

impl ProtobufTranslator {
    pub fn new() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }

    /// Use `package` for `option java_package`
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Map a type and remember it as referenced
    fn check_type(cx: &mut TranslationContext<'_>, ty: &str) -> String {
        let ty = replace_type(ty);
        cx.types_mut().mark_referenced(ty);
        ty.to_string()
    }

    /// Fold every association into an attribute on one of its classes.
    ///
    /// Right-to-left compositions (`<--*`, `-o`, ...) add the attribute to
    /// the right class; everything else adds it to the left class. Unknown
    /// owners are skipped.
    pub fn process_associations(&self, structure: &mut Structure) {
        let folds: Vec<(String, Attribute)> = structure
            .associations()
            .iter()
            .map(|association| {
                if is_right_to_left_composition(&association.separator) {
                    (
                        association.right_class.clone(),
                        Attribute::new(&association.name, &association.left_class),
                    )
                } else {
                    (
                        association.left_class.clone(),
                        Attribute::new(&association.name, &association.right_class),
                    )
                }
            })
            .collect();

        for (owner, attribute) in folds {
            match structure.get_class_mut(&owner) {
                Some(class) => class.add_attribute(attribute),
                None => debug!(owner = %owner, attribute = %attribute.name, "Association owner not found"),
            }
        }
    }

    fn rpc_line(&self, cx: &mut TranslationContext<'_>, interface: &Interface, kind: ServiceKind, method: &Method) -> String {
        let (rpc_name, request, response, synthesized) = match kind {
            ServiceKind::Services => {
                let response = if method.return_type == "void" {
                    EMPTY.to_string()
                } else {
                    Self::check_type(cx, &method.return_type)
                };

                if method.parameters.is_empty() {
                    (method.name.clone(), EMPTY.to_string(), response, None)
                } else {
                    let request = format!("{}Request", method.name);
                    let message = parameter_message(&request, method);
                    (method.name.clone(), request, response, Some(message))
                }
            }
            _ => {
                let base = match method.name.strip_prefix("on") {
                    Some(stripped) => format!("{}Event", stripped),
                    None => method.name.clone(),
                };

                let (response, message) = match method.parameters.as_slice() {
                    [] => (EMPTY.to_string(), None),
                    [single] => (single.ty.clone(), None),
                    _ => (Self::check_type(cx, &base), Some(parameter_message(&base, method))),
                };

                (format!("{}{}", kind.rpc_prefix(), base), EMPTY.to_string(), response, message)
            }
        };

        let line = format!(
            "\trpc {}({}) returns ({}{}) {{}}\n",
            rpc_name,
            request,
            if kind.is_streaming() { "stream " } else { "" },
            response
        );

        if !method.parameters.is_empty() {
            cx.types_mut().mark_referenced(&request);
        }

        if cx.is_attached() {
            if let Some(message) = synthesized {
                cx.synthesize(message);
            }
        } else {
            warn!(
                "Cannot create parameters & returns classes of method {}#{} because structure is not available",
                interface.name, rpc_name
            );
        }

        line
    }
}

impl Default for ProtobufTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `separator` contains a right-to-left composition (`<?-+[*o]`)
fn is_right_to_left_composition(separator: &str) -> bool {
    separator.char_indices().any(|(start, c)| {
        c == '-'
            && matches!(
                separator[start..].trim_start_matches('-').chars().next(),
                Some('*' | 'o')
            )
    })
}

impl Translator for ProtobufTranslator {
    fn translate_class(&self, cx: &mut TranslationContext<'_>, class: &Class) -> String {
        cx.types_mut().mark_translated(&class.name);

        let mut out = format!("message {} {{\n", class.name);
        for (index, attribute) in class.attributes.values().enumerate() {
            out.push_str(&format!(
                "\t{} {} = {};\n",
                Self::check_type(cx, &attribute.ty),
                attribute.name,
                index + 1
            ));
        }
        out.push('}');
        out
    }

    fn translate_interface(&self, cx: &mut TranslationContext<'_>, interface: &Interface) -> String {
        let kind = ServiceKind::classify(&interface.name);

        let mut out = format!("service {} {{\n", interface.name);
        for method in interface.methods.values() {
            out.push_str(&self.rpc_line(cx, interface, kind, method));
        }
        out.push('}');
        out
    }

    fn translate_enum(&self, cx: &mut TranslationContext<'_>, enumeration: &Enum) -> String {
        cx.types_mut().mark_translated(&enumeration.name);

        let mut out = format!("enum {} {{\n", enumeration.name);
        for property in enumeration.properties.values() {
            out.push_str(&format!("\t{} = {};\n", property.name, property.value));
        }
        out.push('}');
        out
    }

    fn translate_all(&self, structure: &mut Structure) -> Result<String> {
        let translate_span = span!(Level::DEBUG, "translate_protobuf");
        let _enter = translate_span.enter();

        self.process_associations(structure);

        let mut out = format!(
            "syntax = \"proto3\";\n\n\
             import \"google/protobuf/empty.proto\";\n\n\
             option java_multiple_files = true;\n\
             option java_generic_services = false;\n\
             option java_package = \"{}\";",
            self.package
        );

        let (types, synthesized) = {
            let mut cx = TranslationContext::attached(&*structure);
            let services = self.translate_interfaces(&mut cx, structure.interfaces());
            if !services.is_empty() {
                out.push_str("\n\n");
                out.push_str(&services);
            }
            cx.into_parts()
        };

        debug!(synthesized_count = synthesized.len(), "Registering synthesized messages");
        for class in synthesized {
            structure.add_class(class);
        }

        let mut cx = TranslationContext::attached(&*structure).with_types(types);
        for section in [
            self.translate_classes(&mut cx, structure.classes()),
            self.translate_enums(&mut cx, structure.enums()),
        ] {
            if !section.is_empty() {
                out.push_str("\n\n");
                out.push_str(&section);
            }
        }

        if cx.types().has_untranslated() {
            out.push_str("\n\n");
            out.push_str(UNREFERENCED_HEADER);
            out.push('\n');

            let pending: Vec<String> = cx.types().untranslated().map(str::to_string).collect();
            for name in pending {
                if !NATIVE_TYPES.contains(&name.as_str()) && !name.contains('.') {
                    out.push_str("\n\n");
                    out.push_str(&self.translate_class(&mut cx, &Class::new(name)));
                }
            }
        }

        Ok(out)
    }

    fn name(&self) -> &'static str {
        "protobuf"
    }

    fn extension(&self) -> &'static str {
        "proto"
    }
}

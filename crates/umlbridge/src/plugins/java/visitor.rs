//! Model builder over the Java syntax tree
//!
//! Walks a [`CompilationUnit`] and registers its top-level types into a
//! [`Structure`]. The package of the file being visited is passed explicitly.

use tracing::{debug, trace};

use super::cst::{
    join_arguments, ClassDeclaration, CompilationUnit, EnumDeclaration, FieldDeclaration,
    FormalParameter, InterfaceDeclaration, Member, MethodDeclaration, Modifier, TypeDeclaration,
    UnannType,
};
use crate::core::{
    Association, Attribute, Class, Enum, EnumProperty, Interface, Method, Multiplicity, Parameter,
    Structure, Visibility,
};

/// Per-file visiting state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContext {
    /// `a.b.` for `package a.b;`, empty otherwise
    prefix: String,
}

impl FileContext {
    pub fn for_unit(unit: &CompilationUnit) -> Self {
        if unit.package.is_empty() {
            Self::default()
        } else {
            Self {
                prefix: format!("{}.", unit.package.join(".")),
            }
        }
    }

    pub fn qualify(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

/// The visibility named by the last access keyword, if any
fn access_visibility(modifiers: &[Modifier]) -> Option<Visibility> {
    modifiers.iter().rev().find_map(|modifier| match modifier {
        Modifier::Public => Some(Visibility::Public),
        Modifier::Protected => Some(Visibility::Protected),
        Modifier::Private => Some(Visibility::Private),
        _ => None,
    })
}

fn has(modifiers: &[Modifier], wanted: Modifier) -> bool {
    modifiers.contains(&wanted)
}

/// Element type of a field that models a to-many relationship.
///
/// Arrays of any type and `ArrayList<T>` qualify.
fn association_target(ty: &UnannType) -> Option<String> {
    match ty {
        UnannType::Primitive { name, dims } if *dims > 0 => Some(name.clone()),
        UnannType::Reference { class, dims } if *dims > 0 => Some(class.to_string()),
        UnannType::Reference { class, .. } => {
            let last = class.segments.last()?;
            match (&last.arguments, last.name.as_str()) {
                (Some(arguments), "ArrayList") => Some(join_arguments(arguments)),
                _ => None,
            }
        }
        UnannType::Primitive { .. } => None,
    }
}

/// Varargs parameters are recorded as the array they receive
fn parameter(parameter: &FormalParameter) -> Parameter {
    let ty = parameter.ty.as_ref().map_or_else(
        || "UnknownType".to_string(),
        |ty| {
            ty.clone()
                .with_extra_dims(usize::from(parameter.is_varargs))
                .to_string()
        },
    );
    Parameter::new(&parameter.name, ty)
}

fn method_signature(method: &MethodDeclaration) -> Method {
    let return_type = method
        .result
        .as_ref()
        .map_or_else(|| "void".to_string(), ToString::to_string);

    Method::new(&method.name)
        .with_return_type(return_type)
        .with_parameters(method.parameters.iter().map(parameter))
}

/// Builds a structure from syntax trees, one file at a time
pub struct ModelBuilder<'s> {
    structure: &'s mut Structure,
}

impl<'s> ModelBuilder<'s> {
    pub fn new(structure: &'s mut Structure) -> Self {
        Self { structure }
    }

    /// Register every top-level type of `unit`
    pub fn visit(&mut self, unit: &CompilationUnit) {
        let cx = FileContext::for_unit(unit);
        for declaration in &unit.types {
            self.visit_type(&cx, declaration);
        }

        debug!(
            class_count = self.structure.class_count(),
            interface_count = self.structure.interface_count(),
            enum_count = self.structure.enum_count(),
            association_count = self.structure.association_count(),
            "Visited compilation unit"
        );
    }

    fn visit_type(&mut self, cx: &FileContext, declaration: &TypeDeclaration) {
        match declaration {
            TypeDeclaration::Class(class) => self.visit_class(cx, class),
            TypeDeclaration::Interface(interface) => self.visit_interface(cx, interface),
            TypeDeclaration::Enum(enumeration) => self.visit_enum(cx, enumeration),
        }
    }

    fn visit_class(&mut self, cx: &FileContext, declaration: &ClassDeclaration) {
        let mut class = Class::new(cx.qualify(&declaration.name))
            .with_abstract(has(&declaration.modifiers, Modifier::Abstract))
            .with_visibility(access_visibility(&declaration.modifiers).unwrap_or(Visibility::Public));
        class.extends = declaration.superclass.as_ref().map(|parent| parent.qualified_name());
        class.implements = declaration
            .interfaces
            .iter()
            .map(|interface| interface.qualified_name())
            .collect();

        for member in &declaration.members {
            match member {
                Member::Field(field) => self.visit_field(cx, &declaration.name, field, &mut class),
                Member::Method(method) => class.add_method(Self::visit_method(method)),
                Member::Type(nested) => {
                    trace!(owner = %declaration.name, nested = ?type_name(nested), "Ignoring nested type");
                }
                Member::Constructor { .. } | Member::Initializer => {}
            }
        }

        self.structure.add_class(class);
    }

    /// Each declarator becomes an attribute, or an association for to-many types
    fn visit_field(
        &mut self,
        cx: &FileContext,
        owner: &str,
        field: &FieldDeclaration,
        class: &mut Class,
    ) {
        let visibility = access_visibility(&field.modifiers).unwrap_or(Visibility::Public);
        let is_static = has(&field.modifiers, Modifier::Static);

        for declarator in &field.declarators {
            let ty = field.ty.clone().with_extra_dims(declarator.dims);

            match association_target(&ty) {
                Some(target) => self.structure.add_association(
                    Association::new(cx.qualify(owner), target)
                        .with_separator("-->")
                        .with_multiplicities(Multiplicity::Many, Multiplicity::Unspecified)
                        .with_name(&declarator.name),
                ),
                None => class.add_attribute(
                    Attribute::new(&declarator.name, ty.to_string())
                        .with_visibility(visibility)
                        .with_static(is_static),
                ),
            }
        }
    }

    fn visit_method(method: &MethodDeclaration) -> Method {
        method_signature(method)
            .with_visibility(access_visibility(&method.modifiers).unwrap_or(Visibility::Public))
            .with_abstract(has(&method.modifiers, Modifier::Abstract))
            .with_static(has(&method.modifiers, Modifier::Static))
    }

    fn visit_interface(&mut self, cx: &FileContext, declaration: &InterfaceDeclaration) {
        let visibility = access_visibility(&declaration.modifiers).unwrap_or(Visibility::Public);
        let mut interface = Interface::new(cx.qualify(&declaration.name)).with_visibility(visibility);

        for member in &declaration.members {
            if let Member::Method(method) = member {
                interface.add_method(Self::visit_interface_method(method));
            }
        }

        self.structure.add_interface(interface);
    }

    /// Interface methods only honor `public` and `private`
    fn visit_interface_method(method: &MethodDeclaration) -> Method {
        let visibility = method
            .modifiers
            .iter()
            .rev()
            .find_map(|modifier| match modifier {
                Modifier::Public => Some(Visibility::Public),
                Modifier::Private => Some(Visibility::Private),
                _ => None,
            })
            .unwrap_or(Visibility::Public);

        method_signature(method)
            .with_visibility(visibility)
            .with_abstract(has(&method.modifiers, Modifier::Abstract))
            .with_static(has(&method.modifiers, Modifier::Static))
    }

    fn visit_enum(&mut self, cx: &FileContext, declaration: &EnumDeclaration) {
        for interface in &declaration.interfaces {
            self.structure.add_association(
                Association::new(&declaration.name, interface.qualified_name()).with_separator("-->"),
            );
        }

        let mut enumeration = Enum::new(cx.qualify(&declaration.name));
        for constant in &declaration.constants {
            enumeration.add_property(EnumProperty::unvalued(constant));
        }

        self.structure.add_enum(enumeration);
    }
}

fn type_name(declaration: &TypeDeclaration) -> &str {
    match declaration {
        TypeDeclaration::Class(class) => &class.name,
        TypeDeclaration::Interface(interface) => &interface.name,
        TypeDeclaration::Enum(enumeration) => &enumeration.name,
    }
}

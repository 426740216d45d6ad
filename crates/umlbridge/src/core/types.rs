//! Shared model types
//!
//! The entities every parser produces and every translator consumes. Member
//! collections are insertion-ordered maps keyed by name, so re-adding a name
//! replaces the earlier entry in place.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Member or type visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,    // +
    Private,   // -
    Protected, // #
}

impl Visibility {
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '+' => Some(Visibility::Public),
            '-' => Some(Visibility::Private),
            '#' => Some(Visibility::Protected),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
        }
    }

    /// Java keyword for this visibility
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Cardinality at one end of an association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Multiplicity {
    #[default]
    Unspecified,
    ZeroOrOne,
    One,
    Many,
    OneOrMany,
}

impl Multiplicity {
    /// Map a diagram literal (`1`, `1..*`, `*`, `0..1`) to a multiplicity.
    ///
    /// Anything else, including an absent literal, is `Unspecified`.
    pub fn from_literal(literal: Option<&str>) -> Self {
        match literal {
            Some("1") => Multiplicity::One,
            Some("1..*") => Multiplicity::OneOrMany,
            Some("*") => Multiplicity::Many,
            Some("0..1") => Multiplicity::ZeroOrOne,
            _ => Multiplicity::Unspecified,
        }
    }

    pub fn literal(self) -> &'static str {
        match self {
            Multiplicity::Unspecified => "",
            Multiplicity::ZeroOrOne => "0..1",
            Multiplicity::One => "1",
            Multiplicity::Many => "*",
            Multiplicity::OneOrMany => "1..*",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub visibility: Visibility,
    pub is_static: bool,
}

impl Attribute {
    /// New private, non-static attribute
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::Private,
            is_static: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_static: bool,
}

impl Method {
    /// New public `void` method without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: "void".to_string(),
            parameters: Vec::new(),
            visibility: Visibility::Public,
            is_abstract: false,
            is_static: false,
        }
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumProperty {
    pub name: String,
    /// Empty when the property carries no explicit value
    pub value: String,
}

impl EnumProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn unvalued(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    pub name: String,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub attributes: IndexMap<String, Attribute>,
    pub methods: IndexMap<String, Method>,
    pub is_abstract: bool,
    pub visibility: Visibility,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            implements: Vec::new(),
            attributes: IndexMap::new(),
            methods: IndexMap::new(),
            is_abstract: false,
            visibility: Visibility::Public,
        }
    }

    pub fn with_extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn with_implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.add_method(method);
        self
    }

    /// Insert or replace the attribute with the same name
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute.name.clone(), attribute);
    }

    /// Insert or replace the method with the same name
    pub fn add_method(&mut self, method: Method) {
        self.methods.insert(method.name.clone(), method);
    }

    pub fn has_members(&self) -> bool {
        !self.attributes.is_empty() || !self.methods.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub name: String,
    pub methods: IndexMap<String, Method>,
    pub visibility: Visibility,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: IndexMap::new(),
            visibility: Visibility::Public,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.add_method(method);
        self
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.insert(method.name.clone(), method);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enum {
    pub name: String,
    pub properties: IndexMap<String, EnumProperty>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, property: EnumProperty) -> Self {
        self.add_property(property);
        self
    }

    pub fn add_property(&mut self, property: EnumProperty) {
        self.properties.insert(property.name.clone(), property);
    }
}

/// Directed relationship between two named entities
///
/// Neither end has to be declared in the owning structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Association {
    pub left_class: String,
    pub right_class: String,
    pub separator: String,
    pub left_to_right: Multiplicity,
    pub right_to_left: Multiplicity,
    pub name: String,
}

impl Association {
    /// Plain `--` association with unspecified multiplicities and no label
    pub fn new(left_class: impl Into<String>, right_class: impl Into<String>) -> Self {
        Self {
            left_class: left_class.into(),
            right_class: right_class.into(),
            separator: "--".to_string(),
            left_to_right: Multiplicity::Unspecified,
            right_to_left: Multiplicity::Unspecified,
            name: String::new(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_multiplicities(mut self, left_to_right: Multiplicity, right_to_left: Multiplicity) -> Self {
        self.left_to_right = left_to_right;
        self.right_to_left = right_to_left;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

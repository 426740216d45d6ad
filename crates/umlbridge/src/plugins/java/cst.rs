//! Concrete syntax tree for the supported Java subset
//!
//! Only the shape needed to rebuild the class model is kept. Method bodies,
//! initializers, annotations and type parameters are recognized and dropped.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    /// Package name segments, empty for the default package
    pub package: Vec<String>,
    pub imports: Vec<String>,
    pub types: Vec<TypeDeclaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Default,
    Sealed,
    NonSealed,
    Strictfp,
    Transient,
    Volatile,
    Synchronized,
    Native,
}

impl Modifier {
    pub const ALL: [Modifier; 14] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Abstract,
        Modifier::Static,
        Modifier::Final,
        Modifier::Default,
        Modifier::Sealed,
        Modifier::NonSealed,
        Modifier::Strictfp,
        Modifier::Transient,
        Modifier::Volatile,
        Modifier::Synchronized,
        Modifier::Native,
    ];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.keyword() == keyword)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Default => "default",
            Modifier::Sealed => "sealed",
            Modifier::NonSealed => "non-sealed",
            Modifier::Strictfp => "strictfp",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDeclaration {
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Enum(EnumDeclaration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub superclass: Option<ClassType>,
    pub interfaces: Vec<ClassType>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub extends: Vec<ClassType>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub interfaces: Vec<ClassType>,
    pub constants: Vec<String>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Constructor { name: String },
    Initializer,
    Type(TypeDeclaration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    pub modifiers: Vec<Modifier>,
    pub ty: UnannType,
    pub declarators: Vec<VariableDeclarator>,
}

/// One name of a field declaration; `int a, b[];` declares `b` with one extra dimension
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub name: String,
    pub dims: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub modifiers: Vec<Modifier>,
    /// `None` for `void`
    pub result: Option<UnannType>,
    pub name: String,
    pub parameters: Vec<FormalParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameter {
    /// `None` when the source omits the type
    pub ty: Option<UnannType>,
    pub name: String,
    /// `Type... name`; the parameter receives `Type[]`
    pub is_varargs: bool,
}

/// A type as written in a declaration, without annotations
#[derive(Debug, Clone, PartialEq)]
pub enum UnannType {
    Primitive { name: String, dims: usize },
    Reference { class: ClassType, dims: usize },
}

impl UnannType {
    pub fn dims(&self) -> usize {
        match self {
            UnannType::Primitive { dims, .. } | UnannType::Reference { dims, .. } => *dims,
        }
    }

    pub fn with_extra_dims(self, extra: usize) -> Self {
        match self {
            UnannType::Primitive { name, dims } => UnannType::Primitive {
                name,
                dims: dims + extra,
            },
            UnannType::Reference { class, dims } => UnannType::Reference {
                class,
                dims: dims + extra,
            },
        }
    }

    /// The type with its array dimensions removed
    pub fn element(&self) -> String {
        match self {
            UnannType::Primitive { name, .. } => name.clone(),
            UnannType::Reference { class, .. } => class.to_string(),
        }
    }
}

impl fmt::Display for UnannType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.element())?;
        for _ in 0..self.dims() {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

/// Dot-separated class type such as `java.util.Map<K, V>`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    pub segments: Vec<ClassTypeSegment>,
}

impl ClassType {
    /// Dot-joined segment names without type arguments
    pub fn qualified_name(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassTypeSegment {
    pub name: String,
    pub arguments: Option<Vec<TypeArgument>>,
}

impl fmt::Display for ClassTypeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(arguments) = &self.arguments {
            write!(f, "<{}>", join_arguments(arguments))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeArgument {
    Type(UnannType),
    /// `?`, with any bound dropped
    Wildcard,
}

impl fmt::Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgument::Type(ty) => write!(f, "{}", ty),
            TypeArgument::Wildcard => f.write_str("?"),
        }
    }
}

/// Render type arguments as `A, B`
pub fn join_arguments(arguments: &[TypeArgument]) -> String {
    arguments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

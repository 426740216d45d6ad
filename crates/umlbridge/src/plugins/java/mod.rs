//! Java source plugin
//!
//! Reads a Java subset into the shared model and renders the model back as
//! Java stubs.

mod cst;
mod parser;
mod renderer;
mod syntax_parser;
mod visitor;

pub use cst::{
    ClassDeclaration, ClassType, ClassTypeSegment, CompilationUnit, EnumDeclaration,
    FieldDeclaration, FormalParameter, InterfaceDeclaration, Member, MethodDeclaration, Modifier,
    TypeArgument, TypeDeclaration, UnannType, VariableDeclarator,
};
pub use parser::JavaParser;
pub use renderer::{JavaFile, JavaTranslator};
pub use syntax_parser::JavaSyntaxParser;
pub use visitor::{FileContext, ModelBuilder};

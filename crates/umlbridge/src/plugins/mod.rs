//! Notation plugins
//!
//! Each plugin implements the core parser and/or translator traits for one
//! notation. The pipeline chains them for the supported conversions.

pub mod java;
pub mod pipeline;
pub mod protobuf;
pub mod uml;

pub use java::{JavaFile, JavaParser, JavaTranslator};
pub use pipeline::Pipeline;
pub use protobuf::ProtobufTranslator;
pub use uml::{UmlParser, UmlTranslator};

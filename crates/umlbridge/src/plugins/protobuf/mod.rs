//! Protobuf plugin
//!
//! Renders the shared model as a proto3 document.

mod renderer;

pub use renderer::{replace_type, ProtobufTranslator, ServiceKind, DEFAULT_PACKAGE, NATIVE_TYPES};

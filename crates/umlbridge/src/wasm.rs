//! WebAssembly bindings for umlbridge
//!
//! Browser-friendly wrappers around the pipeline. Failures surface as
//! JavaScript errors.

use wasm_bindgen::prelude::*;

use crate::plugins::Pipeline;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Render diagram text as a proto3 document
#[wasm_bindgen]
pub fn uml_to_proto(input: &str, package: Option<String>) -> Result<String, JsValue> {
    let pipeline = match package {
        Some(package) => Pipeline::new().with_package(package),
        None => Pipeline::new(),
    };

    pipeline
        .uml_to_proto(input)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Re-render diagram text in normalized form
#[wasm_bindgen]
pub fn uml_to_uml(input: &str) -> Result<String, JsValue> {
    Pipeline::new()
        .uml_to_uml(input)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render diagram text as Java stubs
///
/// # Returns
/// * JSON array of `{ "name": ..., "body": ... }` objects
#[wasm_bindgen]
pub fn uml_to_java(input: &str) -> Result<String, JsValue> {
    let files = Pipeline::new().uml_to_java(input);
    serde_json::to_string(&files).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render one Java source file as UML
#[wasm_bindgen]
pub fn java_to_uml(source: &str) -> Result<String, JsValue> {
    Pipeline::new()
        .java_to_uml([("input.java", source)])
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

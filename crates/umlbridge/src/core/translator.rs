//! Core translator trait
//!
//! A translator serializes model entities into one target notation. Per-call
//! state lives in a [`TranslationContext`] so translators themselves stay
//! immutable and reusable.

use anyhow::Result;
use indexmap::IndexSet;

use super::{Class, Enum, Interface, Structure};

/// Tracks which type names a translation pass has defined and which it has
/// only referenced so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTracker {
    translated: IndexSet<String>,
    untranslated: IndexSet<String>,
}

impl TypeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as defined, dropping it from the pending set
    pub fn mark_translated(&mut self, name: &str) {
        self.untranslated.shift_remove(name);
        self.translated.insert(name.to_string());
    }

    /// Record `name` as referenced unless it is already known either way
    pub fn mark_referenced(&mut self, name: &str) {
        if !self.is_translated(name) && !self.untranslated.contains(name) {
            self.untranslated.insert(name.to_string());
        }
    }

    pub fn is_translated(&self, name: &str) -> bool {
        self.translated.contains(name)
    }

    /// Referenced but never defined names, in first-reference order
    pub fn untranslated(&self) -> impl Iterator<Item = &str> {
        self.untranslated.iter().map(String::as_str)
    }

    pub fn has_untranslated(&self) -> bool {
        !self.untranslated.is_empty()
    }
}

/// Per-call translation state
///
/// An attached context can look entities up in the structure being
/// translated; a detached one cannot, and translators that need lookups
/// degrade gracefully.
#[derive(Debug, Default)]
pub struct TranslationContext<'s> {
    structure: Option<&'s Structure>,
    types: TypeTracker,
    synthesized: Vec<Class>,
}

impl<'s> TranslationContext<'s> {
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn attached(structure: &'s Structure) -> Self {
        Self {
            structure: Some(structure),
            ..Self::default()
        }
    }

    /// Continue with type state carried over from an earlier context
    pub fn with_types(mut self, types: TypeTracker) -> Self {
        self.types = types;
        self
    }

    pub fn structure(&self) -> Option<&'s Structure> {
        self.structure
    }

    pub fn is_attached(&self) -> bool {
        self.structure.is_some()
    }

    pub fn types(&self) -> &TypeTracker {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeTracker {
        &mut self.types
    }

    /// Queue a class created during translation for registration
    pub fn synthesize(&mut self, class: Class) {
        self.synthesized.push(class);
    }

    pub fn synthesized(&self) -> &[Class] {
        &self.synthesized
    }

    pub fn into_parts(self) -> (TypeTracker, Vec<Class>) {
        (self.types, self.synthesized)
    }
}

/// Core trait for notation translators
///
/// Batch methods join their items with a blank line.
pub trait Translator: Send + Sync {
    fn translate_class(&self, cx: &mut TranslationContext<'_>, class: &Class) -> String;

    fn translate_interface(&self, cx: &mut TranslationContext<'_>, interface: &Interface) -> String;

    fn translate_enum(&self, cx: &mut TranslationContext<'_>, enumeration: &Enum) -> String;

    fn translate_classes<'a, I>(&self, cx: &mut TranslationContext<'_>, classes: I) -> String
    where
        I: IntoIterator<Item = &'a Class>,
        Self: Sized,
    {
        classes
            .into_iter()
            .map(|class| self.translate_class(cx, class))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn translate_interfaces<'a, I>(&self, cx: &mut TranslationContext<'_>, interfaces: I) -> String
    where
        I: IntoIterator<Item = &'a Interface>,
        Self: Sized,
    {
        interfaces
            .into_iter()
            .map(|interface| self.translate_interface(cx, interface))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn translate_enums<'a, I>(&self, cx: &mut TranslationContext<'_>, enums: I) -> String
    where
        I: IntoIterator<Item = &'a Enum>,
        Self: Sized,
    {
        enums
            .into_iter()
            .map(|enumeration| self.translate_enum(cx, enumeration))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the whole structure as one document
    ///
    /// Takes the structure mutably because some notations fold or synthesize
    /// entities while translating.
    fn translate_all(&self, structure: &mut Structure) -> Result<String>;

    /// Get the name of this translator
    fn name(&self) -> &'static str;

    /// File extension of the produced notation
    fn extension(&self) -> &'static str;
}

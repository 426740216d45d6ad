//! Structure aggregate
//!
//! Owns every class, interface, enum and association of one translation unit.

use indexmap::IndexMap;
use serde::Serialize;

use super::{Association, Class, Enum, Interface};

/// Aggregate root for one translation unit
///
/// Classes, interfaces and enums are keyed by name; registering a name twice
/// replaces the earlier entry. Associations accumulate in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Structure {
    classes: IndexMap<String, Class>,
    interfaces: IndexMap<String, Interface>,
    enums: IndexMap<String, Enum>,
    associations: Vec<Association>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: Class) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn add_interface(&mut self, interface: Interface) {
        self.interfaces.insert(interface.name.clone(), interface);
    }

    pub fn add_enum(&mut self, enumeration: Enum) {
        self.enums.insert(enumeration.name.clone(), enumeration);
    }

    pub fn add_association(&mut self, association: Association) {
        self.associations.push(association);
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.values()
    }

    pub fn enums(&self) -> impl Iterator<Item = &Enum> {
        self.enums.values()
    }

    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    pub fn get_class(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }

    pub fn get_class_mut(&mut self, name: &str) -> Option<&mut Class> {
        self.classes.get_mut(name)
    }

    pub fn get_interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.get(name)
    }

    pub fn get_interface_mut(&mut self, name: &str) -> Option<&mut Interface> {
        self.interfaces.get_mut(name)
    }

    pub fn get_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.get(name)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    pub fn association_count(&self) -> usize {
        self.associations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.interfaces.is_empty()
            && self.enums.is_empty()
            && self.associations.is_empty()
    }
}

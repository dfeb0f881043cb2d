// Bootgen
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! In-memory container

use super::{ComponentDefinition, Container, ContainerMetadata, EventListenerMethod, PropertySource};
use crate::error::{ContainerError, ContainerResult};
use crate::types::{TypeDescriptor, TypeName, TypeSystem};
use std::collections::{BTreeSet, HashMap};

/// Container backed by an insertion-ordered list of definitions
#[derive(Debug, Clone, Default)]
pub struct DefaultContainer {
    names: Vec<String>,
    definitions: HashMap<String, ComponentDefinition>,
    metadata: ContainerMetadata,
    types: TypeSystem,
}

impl DefaultContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_system(types: TypeSystem) -> Self {
        Self { types, ..Self::default() }
    }

    /// Register a definition; re-registering a name replaces it in place
    pub fn register(&mut self, name: impl Into<String>, definition: ComponentDefinition) {
        let name = name.into();
        if self.definitions.insert(name.clone(), definition).is_none() {
            self.names.push(name);
        }
    }

    pub fn with_component(mut self, name: impl Into<String>, definition: ComponentDefinition) -> Self {
        self.register(name, definition);
        self
    }

    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.register(descriptor);
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<TypeName>) -> Self {
        self.metadata.annotations.push(annotation.into());
        self
    }

    pub fn with_property_source(mut self, source: PropertySource) -> Self {
        self.metadata.property_sources.push(source);
        self
    }

    pub fn with_active_profile(mut self, profile: impl Into<String>) -> Self {
        self.metadata.active_profiles.push(profile.into());
        self
    }

    pub fn with_event_listener(mut self, listener: EventListenerMethod) -> Self {
        self.metadata.event_listeners.push(listener);
        self
    }

    pub fn types_mut(&mut self) -> &mut TypeSystem {
        &mut self.types
    }

    pub fn metadata_mut(&mut self) -> &mut ContainerMetadata {
        &mut self.metadata
    }

    pub fn raw_definition(&self, name: &str) -> Option<&ComponentDefinition> {
        self.definitions.get(name)
    }
}

impl Container for DefaultContainer {
    fn definition_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn merged_definition(&self, name: &str) -> ContainerResult<ComponentDefinition> {
        let definition = self.definitions.get(name).ok_or_else(|| ContainerError::NoSuchComponent(name.to_string()))?;

        let mut chain = vec![definition];
        let mut seen = BTreeSet::from([name.to_string()]);
        let mut current = definition;
        while let Some(parent_name) = &current.parent {
            if !seen.insert(parent_name.clone()) {
                return Err(ContainerError::CyclicParent(name.to_string()));
            }
            let parent = self
                .definitions
                .get(parent_name)
                .ok_or_else(|| ContainerError::MissingParent { name: name.to_string(), parent: parent_name.clone() })?;
            chain.push(parent);
            current = parent;
        }

        // Fold from the root ancestor down to the requested definition
        let mut merged = match chain.pop() {
            Some(root) => root.clone(),
            None => return Err(ContainerError::NoSuchComponent(name.to_string())),
        };
        merged.parent = None;
        while let Some(next) = chain.pop() {
            merged = next.merged_with(&merged);
        }
        Ok(merged)
    }

    fn metadata(&self) -> &ContainerMetadata {
        &self.metadata
    }

    fn type_system(&self) -> &TypeSystem {
        &self.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{PropertyValue, Scope};

    #[test]
    fn test_registration_order() {
        let container = DefaultContainer::new()
            .with_component("b", ComponentDefinition::of_type("com.example.B"))
            .with_component("a", ComponentDefinition::of_type("com.example.A"))
            .with_component("b", ComponentDefinition::of_type("com.example.B2"));

        assert_eq!(container.definition_names(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(container.merged_definition("b").unwrap().bean_class, Some(TypeName::new("com.example.B2")));
    }

    #[test]
    fn test_parent_merge() {
        let container = DefaultContainer::new()
            .with_component("root", ComponentDefinition::of_type("com.example.Base").with_scope(Scope::Prototype))
            .with_component("middle", ComponentDefinition::new().with_parent("root").with_property(PropertyValue::literal("a", "1")))
            .with_component("leaf", ComponentDefinition::new().with_parent("middle").with_property(PropertyValue::literal("a", "2")));

        let leaf = container.merged_definition("leaf").unwrap();
        assert_eq!(leaf.bean_class, Some(TypeName::new("com.example.Base")));
        assert_eq!(leaf.effective_scope(), Scope::Prototype);
        assert_eq!(leaf.property_values, vec![PropertyValue::literal("a", "2")]);
        assert!(leaf.parent.is_none());
    }

    #[test]
    fn test_merge_errors() {
        let container = DefaultContainer::new()
            .with_component("a", ComponentDefinition::new().with_parent("b"))
            .with_component("b", ComponentDefinition::new().with_parent("a"))
            .with_component("orphan", ComponentDefinition::new().with_parent("missing"));

        assert_eq!(container.merged_definition("a"), Err(ContainerError::CyclicParent("a".to_string())));
        assert!(matches!(container.merged_definition("orphan"), Err(ContainerError::MissingParent { .. })));
        assert_eq!(container.merged_definition("nope"), Err(ContainerError::NoSuchComponent("nope".to_string())));
    }

    #[test]
    fn test_names_for_type() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.Impl").implements("com.example.Api"))
            .with_type(TypeDescriptor::interface("com.example.Api"))
            .with_component("impl", ComponentDefinition::of_type("com.example.Impl"))
            .with_component("other", ComponentDefinition::of_type("com.example.Other"));

        assert_eq!(container.names_for_type(&TypeName::new("com.example.Api")), vec!["impl".to_string()]);
    }
}

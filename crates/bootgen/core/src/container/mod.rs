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

//! Component container boundary
//!
//! The generator reads a container; it never registers or scans components.

pub mod default;
pub mod definition;

pub use default::DefaultContainer;
pub use definition::{ArgumentValue, ComponentDefinition, ComponentSource, InstanceSource, PropertyValue, Role, Scope};

use crate::error::ContainerResult;
use crate::types::{ExecutableRef, TypeName, TypeSystem};

/// Property source registered with the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    pub name: String,
    pub location: String,
}

impl PropertySource {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self { name: name.into(), location: location.into() }
    }

    /// Resource path for `classpath:` locations
    pub fn classpath_location(&self) -> Option<&str> {
        self.location.strip_prefix("classpath:").map(|path| path.trim_start_matches('/'))
    }
}

/// Annotated event listener method discovered on a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListenerMethod {
    pub component_name: String,
    pub component_type: TypeName,
    pub method: ExecutableRef,
}

/// Container-level state outside individual definitions
#[derive(Debug, Clone, Default)]
pub struct ContainerMetadata {
    /// Annotations present on configuration sources
    pub annotations: Vec<TypeName>,
    pub property_sources: Vec<PropertySource>,
    pub active_profiles: Vec<String>,
    pub event_listeners: Vec<EventListenerMethod>,
}

/// Read-only view of a populated component container
pub trait Container: Send + Sync {
    /// Component names in registration order
    fn definition_names(&self) -> Vec<String>;

    /// Definition with its parent chain merged in
    fn merged_definition(&self, name: &str) -> ContainerResult<ComponentDefinition>;

    fn metadata(&self) -> &ContainerMetadata;

    fn type_system(&self) -> &TypeSystem;

    /// Type of the instances a definition produces
    fn produced_type(&self, definition: &ComponentDefinition) -> Option<TypeName> {
        match &definition.instance_source {
            Some(InstanceSource::FactoryMethod { method, .. }) | Some(InstanceSource::StaticFactoryMethod(method)) => {
                self.type_system().method_info(method).map(|m| m.return_type.clone()).or_else(|| definition.bean_class.clone())
            }
            _ => definition.bean_class.clone(),
        }
    }

    /// Names of the components whose produced type is assignable to `target`
    fn names_for_type(&self, target: &TypeName) -> Vec<String> {
        self.definition_names()
            .into_iter()
            .filter(|name| {
                self.merged_definition(name)
                    .ok()
                    .and_then(|definition| self.produced_type(&definition))
                    .is_some_and(|produced| self.type_system().is_assignable(&produced, target))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classpath_location() {
        assert_eq!(PropertySource::new("app", "classpath:/app.properties").classpath_location(), Some("app.properties"));
        assert_eq!(PropertySource::new("app", "classpath:config/app.properties").classpath_location(), Some("config/app.properties"));
        assert_eq!(PropertySource::new("app", "file:/etc/app.properties").classpath_location(), None);
    }
}

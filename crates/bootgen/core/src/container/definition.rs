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

//! Component definitions

use crate::types::{ExecutableRef, TypeName};
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle scope of a component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Singleton,
    Prototype,
    Custom(String),
}

impl Scope {
    pub fn as_str(&self) -> &str {
        match self {
            Scope::Singleton => "singleton",
            Scope::Prototype => "prototype",
            Scope::Custom(name) => name,
        }
    }
}

/// Role hint carried by a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Application,
    Support,
    Infrastructure,
}

impl Role {
    /// Constant name on the container's definition interface
    pub fn constant_name(self) -> &'static str {
        match self {
            Role::Application => "ROLE_APPLICATION",
            Role::Support => "ROLE_SUPPORT",
            Role::Infrastructure => "ROLE_INFRASTRUCTURE",
        }
    }
}

/// Explicit constructor or factory method argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    /// Reference to another component by name
    Reference(String),
    /// Literal value, emitted as a string literal
    Literal(String),
}

/// Property value applied after instantiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValue {
    pub name: String,
    pub value: ArgumentValue,
}

impl PropertyValue {
    pub fn reference(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self { name: name.into(), value: ArgumentValue::Reference(component.into()) }
    }

    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: ArgumentValue::Literal(value.into()) }
    }
}

/// How instances are created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceSource {
    /// A specific constructor
    Constructor(ExecutableRef),
    /// An instance method on another component
    FactoryMethod { factory_component: String, method: ExecutableRef },
    /// A static method
    StaticFactoryMethod(ExecutableRef),
}

impl InstanceSource {
    pub fn executable(&self) -> &ExecutableRef {
        match self {
            InstanceSource::Constructor(executable) | InstanceSource::StaticFactoryMethod(executable) => executable,
            InstanceSource::FactoryMethod { method, .. } => method,
        }
    }
}

/// Where a definition came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComponentSource {
    #[default]
    Declared,
    /// Discovered from a factories file under the given key type
    Factories { factory_type: TypeName },
}

/// Declarative description of how to build a component
///
/// Fields left unset inherit from the parent definition when the container
/// merges it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentDefinition {
    pub bean_class: Option<TypeName>,
    pub scope: Option<Scope>,
    pub role: Role,
    pub primary: bool,
    pub lazy_init: bool,
    pub instance_source: Option<InstanceSource>,
    pub constructor_arguments: BTreeMap<usize, ArgumentValue>,
    pub property_values: Vec<PropertyValue>,
    pub init_method: Option<String>,
    pub destroy_method: Option<String>,
    pub parent: Option<String>,
    pub source: ComponentSource,
}

impl ComponentDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_type(bean_class: impl Into<TypeName>) -> Self {
        Self { bean_class: Some(bean_class.into()), ..Self::default() }
    }

    /// Definition discovered from a factories file
    pub fn from_factories(factory_type: impl Into<TypeName>, implementation: impl Into<TypeName>) -> Self {
        Self { source: ComponentSource::Factories { factory_type: factory_type.into() }, ..Self::of_type(implementation) }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn as_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn as_lazy(mut self) -> Self {
        self.lazy_init = true;
        self
    }

    pub fn with_instance_source(mut self, source: InstanceSource) -> Self {
        self.instance_source = Some(source);
        self
    }

    pub fn with_constructor_argument(mut self, index: usize, value: ArgumentValue) -> Self {
        self.constructor_arguments.insert(index, value);
        self
    }

    pub fn with_property(mut self, property: PropertyValue) -> Self {
        self.property_values.push(property);
        self
    }

    pub fn with_init_method(mut self, method: impl Into<String>) -> Self {
        self.init_method = Some(method.into());
        self
    }

    pub fn with_destroy_method(mut self, method: impl Into<String>) -> Self {
        self.destroy_method = Some(method.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn effective_scope(&self) -> Scope {
        self.scope.clone().unwrap_or_default()
    }

    /// Whether the definition was discovered under the given factories key
    pub fn is_factories_entry_for(&self, factory_type: &str) -> bool {
        matches!(&self.source, ComponentSource::Factories { factory_type: key } if key.as_str() == factory_type)
    }

    /// Merge with a parent definition; values set on `self` win
    pub fn merged_with(&self, parent: &ComponentDefinition) -> ComponentDefinition {
        let mut constructor_arguments = parent.constructor_arguments.clone();
        constructor_arguments.extend(self.constructor_arguments.iter().map(|(k, v)| (*k, v.clone())));

        let mut property_values: Vec<PropertyValue> = parent.property_values.iter().filter(|p| !self.property_values.iter().any(|o| o.name == p.name)).cloned().collect();
        property_values.extend(self.property_values.iter().cloned());

        ComponentDefinition {
            bean_class: self.bean_class.clone().or_else(|| parent.bean_class.clone()),
            scope: self.scope.clone().or_else(|| parent.scope.clone()),
            role: self.role,
            primary: self.primary,
            lazy_init: self.lazy_init || parent.lazy_init,
            instance_source: self.instance_source.clone().or_else(|| parent.instance_source.clone()),
            constructor_arguments,
            property_values,
            init_method: self.init_method.clone().or_else(|| parent.init_method.clone()),
            destroy_method: self.destroy_method.clone().or_else(|| parent.destroy_method.clone()),
            parent: None,
            source: self.source.clone(),
        }
    }
}

impl fmt::Display for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.bean_class.as_ref().map(TypeName::as_str).unwrap_or("null");
        write!(f, "Generic bean: class [{}]; scope={}; lazyInit={}; primary={}; role={:?}", class, self.effective_scope().as_str(), self.lazy_init, self.primary, self.role)?;
        if let Some(init) = &self.init_method {
            write!(f, "; initMethodName={}", init)?;
        }
        if let Some(destroy) = &self.destroy_method {
            write!(f, "; destroyMethodName={}", destroy)?;
        }
        if let Some(parent) = &self.parent {
            write!(f, "; parent={}", parent)?;
        }
        Ok(())
    }
}

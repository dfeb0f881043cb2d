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

//! Declarative native hints
//!
//! A hint bundles native configuration that a library needs whenever one of
//! its trigger types shows up in the container.

pub mod transaction;

use crate::nativex::{InitializationPhase, NativeConfigurationRegistry, NativeResourcesEntry, TypeAccess};
use crate::types::{ExecutableRef, TypeName, TypeSystem};
use std::collections::BTreeSet;
use tracing::debug;

pub use transaction::transaction_management_hints;

/// Access requested for a group of types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHint {
    pub types: Vec<TypeName>,
    pub access: Vec<TypeAccess>,
    pub methods: Vec<(String, Vec<TypeName>)>,
    pub fields: Vec<String>,
}

impl TypeHint {
    /// Hint for the given types with auto-detected access
    pub fn of<I, T>(types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        Self { types: types.into_iter().map(Into::into).collect(), access: vec![TypeAccess::AutoDetect], methods: Vec::new(), fields: Vec::new() }
    }

    pub fn with_access(mut self, access: impl IntoIterator<Item = TypeAccess>) -> Self {
        self.access = access.into_iter().collect();
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, parameter_types: Vec<TypeName>) -> Self {
        self.methods.push((name.into(), parameter_types));
        self
    }

    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    fn apply(&self, registry: &mut NativeConfigurationRegistry, types: &TypeSystem) {
        for type_name in &self.types {
            let mut access = BTreeSet::new();
            for requested in &self.access {
                match requested {
                    TypeAccess::AutoDetect => access.extend(TypeAccess::auto_detect(types.kind(type_name))),
                    other => {
                        access.insert(*other);
                    }
                }
            }

            if access.remove(&TypeAccess::Resource) {
                registry.resources_mut().add(NativeResourcesEntry::of_class_name(type_name.as_str()));
            }
            let target = if access.remove(&TypeAccess::Jni) { registry.jni_mut() } else { registry.reflection_mut() };

            let methods = self.methods.iter().map(|(name, params)| {
                if name == ExecutableRef::CONSTRUCTOR_NAME {
                    ExecutableRef::constructor(type_name.clone(), params.clone())
                } else {
                    ExecutableRef::method(type_name.clone(), name.clone(), params.clone())
                }
            });
            target.for_type(type_name.clone()).with_access(access).with_methods(methods).with_fields(self.fields.iter().cloned());
        }
    }
}

/// Native configuration contributed when a trigger type is present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeHint {
    /// `None` applies unconditionally
    pub trigger: Option<TypeName>,
    pub types: Vec<TypeHint>,
    pub resources: Vec<NativeResourcesEntry>,
    pub proxies: Vec<Vec<TypeName>>,
    pub serializables: Vec<TypeName>,
    pub initialization: Vec<(String, InitializationPhase)>,
}

impl NativeHint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triggered_by(trigger: impl Into<TypeName>) -> Self {
        Self { trigger: Some(trigger.into()), ..Self::default() }
    }

    pub fn with_types(mut self, hint: TypeHint) -> Self {
        self.types.push(hint);
        self
    }

    pub fn with_resource(mut self, entry: NativeResourcesEntry) -> Self {
        self.resources.push(entry);
        self
    }

    pub fn with_proxy<I, T>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.proxies.push(interfaces.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_serializable(mut self, type_name: impl Into<TypeName>) -> Self {
        self.serializables.push(type_name.into());
        self
    }

    pub fn with_initialization(mut self, class_name: impl Into<String>, phase: InitializationPhase) -> Self {
        self.initialization.push((class_name.into(), phase));
        self
    }

    /// Whether the hint applies given the set of types present in the container
    pub fn is_triggered_by(&self, present: &BTreeSet<TypeName>) -> bool {
        self.trigger.as_ref().is_none_or(|trigger| present.contains(trigger))
    }

    /// Record everything this hint asks for
    pub fn apply(&self, registry: &mut NativeConfigurationRegistry, types: &TypeSystem) {
        debug!(trigger = ?self.trigger, types = self.types.len(), "Applying native hint");
        for hint in &self.types {
            hint.apply(registry, types);
        }
        for entry in &self.resources {
            registry.resources_mut().add(entry.clone());
        }
        for interfaces in &self.proxies {
            registry.proxy_mut().add(interfaces.iter().cloned());
        }
        for type_name in &self.serializables {
            registry.serialization_mut().add(type_name.clone());
        }
        for (class_name, phase) in &self.initialization {
            registry.initialization_mut().add_class(class_name.clone(), *phase);
        }
    }
}

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

//! Reflection (and JNI) access registry

use super::TypeAccess;
use crate::types::{ExecutableRef, FieldRef, TypeName};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, BTreeSet};

/// Accumulated access requirements for one type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeReflectionEntry {
    access: BTreeSet<TypeAccess>,
    methods: BTreeSet<ExecutableRef>,
    fields: BTreeSet<String>,
}

impl NativeReflectionEntry {
    pub fn with_access(&mut self, access: impl IntoIterator<Item = TypeAccess>) -> &mut Self {
        self.access.extend(access);
        self
    }

    pub fn with_method(&mut self, method: ExecutableRef) -> &mut Self {
        self.methods.insert(method);
        self
    }

    pub fn with_methods(&mut self, methods: impl IntoIterator<Item = ExecutableRef>) -> &mut Self {
        self.methods.extend(methods);
        self
    }

    pub fn with_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.fields.insert(field.into());
        self
    }

    pub fn with_fields<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn access(&self) -> &BTreeSet<TypeAccess> {
        &self.access
    }

    pub fn methods(&self) -> &BTreeSet<ExecutableRef> {
        &self.methods
    }

    pub fn fields(&self) -> &BTreeSet<String> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.access.is_empty() && self.methods.is_empty() && self.fields.is_empty()
    }

    fn merge(&mut self, other: &NativeReflectionEntry) {
        self.access.extend(other.access.iter().copied());
        self.methods.extend(other.methods.iter().cloned());
        self.fields.extend(other.fields.iter().cloned());
    }
}

/// Per-type reflection entries, at most one per type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReflectionConfiguration {
    entries: BTreeMap<TypeName, NativeReflectionEntry>,
}

impl ReflectionConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for a type, created empty on first use
    pub fn for_type(&mut self, type_name: impl Into<TypeName>) -> &mut NativeReflectionEntry {
        self.entries.entry(type_name.into()).or_default()
    }

    /// Register a constructor or method under the type that declares it
    pub fn add_executable(&mut self, executable: ExecutableRef) -> &mut Self {
        self.for_type(executable.declaring_type().clone()).with_method(executable);
        self
    }

    /// Register a field under the type that declares it
    pub fn add_field(&mut self, field: FieldRef) -> &mut Self {
        self.for_type(field.declaring_type().clone()).with_field(field.name());
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&NativeReflectionEntry> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&TypeName, &NativeReflectionEntry)> {
        self.entries.iter()
    }

    pub fn merge(&mut self, other: &ReflectionConfiguration) {
        for (name, entry) in &other.entries {
            self.for_type(name.clone()).merge(entry);
        }
    }

    /// Immutable snapshot, ordered by type name
    pub fn to_class_descriptors(&self) -> Vec<ClassDescriptor> {
        self.entries
            .iter()
            .map(|(name, entry)| ClassDescriptor {
                name: name.clone(),
                access: entry.access.iter().copied().filter(|a| a.is_reflection_flag()).collect(),
                methods: (!entry.methods.is_empty()).then(|| entry.methods.iter().map(MethodDescriptor::of).collect()),
                fields: (!entry.fields.is_empty()).then(|| entry.fields.iter().map(|f| FieldDescriptor::new(f.clone())).collect()),
            })
            .collect()
    }
}

/// Method entry of a class descriptor
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    pub parameter_types: Vec<String>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, parameter_types: Vec<String>) -> Self {
        Self { name: name.into(), parameter_types }
    }

    pub fn default_constructor() -> Self {
        Self::new(ExecutableRef::CONSTRUCTOR_NAME, Vec::new())
    }

    pub fn of(executable: &ExecutableRef) -> Self {
        Self::new(executable.name(), executable.parameter_types().iter().map(|t| t.as_str().to_string()).collect())
    }
}

/// Field entry of a class descriptor
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct FieldDescriptor {
    pub name: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Snapshot of one type's reflection requirements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: TypeName,
    pub access: BTreeSet<TypeAccess>,
    /// `None` when no method was requested
    pub methods: Option<Vec<MethodDescriptor>>,
    /// `None` when no field was requested
    pub fields: Option<Vec<FieldDescriptor>>,
}

impl ClassDescriptor {
    pub fn has_access(&self, access: TypeAccess) -> bool {
        self.access.contains(&access)
    }

    pub fn contains_method(&self, method: &MethodDescriptor) -> bool {
        self.methods.as_ref().is_some_and(|methods| methods.contains(method))
    }
}

impl Serialize for ClassDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        for access in &self.access {
            map.serialize_entry(access.json_key(), &true)?;
        }
        if let Some(methods) = &self.methods {
            map.serialize_entry("methods", methods)?;
        }
        if let Some(fields) = &self.fields {
            map.serialize_entry("fields", fields)?;
        }
        map.end()
    }
}

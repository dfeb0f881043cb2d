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

//! Read-only type metadata lookups

use super::{ConstructorInfo, ExecutableRef, FieldRef, MethodInfo, TypeDescriptor, TypeKind, TypeName, Visibility};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Registry of type descriptors supplied by the caller
///
/// Types that were never registered are treated as public classes with a
/// public no-argument constructor and no other members.
#[derive(Debug, Clone, Default)]
pub struct TypeSystem {
    types: BTreeMap<TypeName, TypeDescriptor>,
}

impl TypeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, replacing any previous one for the same name
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn kind(&self, name: &TypeName) -> TypeKind {
        if name.is_array() {
            return TypeKind::Array;
        }
        self.get(name.as_str()).map(|d| d.kind).unwrap_or_default()
    }

    pub fn visibility(&self, name: &TypeName) -> Visibility {
        self.get(name.as_str()).map(|d| d.visibility).unwrap_or_default()
    }

    /// Whether the type itself carries the annotation
    pub fn has_annotation(&self, name: &TypeName, annotation: &str) -> bool {
        self.get(name.as_str()).is_some_and(|d| d.has_annotation(annotation))
    }

    /// The type followed by its known superclasses, nearest first
    pub fn superclass_chain(&self, name: &TypeName) -> Vec<&TypeDescriptor> {
        let mut chain = Vec::new();
        let mut seen = BTreeSet::new();
        let mut current = self.get(name.as_str());
        while let Some(descriptor) = current {
            if !seen.insert(descriptor.name.clone()) {
                break;
            }
            chain.push(descriptor);
            current = descriptor.superclass.as_ref().and_then(|s| self.get(s.as_str()));
        }
        chain
    }

    /// All known supertypes (classes and interfaces) reachable from `name`, including itself
    fn hierarchy(&self, name: &TypeName) -> Vec<&TypeDescriptor> {
        let mut result = Vec::new();
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([name.clone()]);
        while let Some(next) = queue.pop_front() {
            if !seen.insert(next.clone()) {
                continue;
            }
            if let Some(descriptor) = self.get(next.as_str()) {
                result.push(descriptor);
                if let Some(superclass) = &descriptor.superclass {
                    queue.push_back(superclass.clone());
                }
                queue.extend(descriptor.interfaces.iter().cloned());
            }
        }
        result
    }

    /// Constructors of a type; a type that declares none gets an implicit no-arg one
    pub fn constructors(&self, name: &TypeName) -> Vec<ConstructorInfo> {
        match self.get(name.as_str()) {
            Some(descriptor) if !descriptor.constructors.is_empty() => descriptor.constructors.clone(),
            Some(descriptor) if descriptor.kind == TypeKind::Class => vec![ConstructorInfo::default().with_visibility(descriptor.visibility)],
            Some(_) => Vec::new(),
            None => vec![ConstructorInfo::default()],
        }
    }

    /// Find a method by exact signature, walking superclasses then interfaces.
    /// The returned reference is keyed by the type that declares the method.
    pub fn find_method(&self, name: &TypeName, method: &str, parameter_types: &[TypeName]) -> Option<ExecutableRef> {
        self.hierarchy(name)
            .into_iter()
            .find(|d| d.declared_method(method, parameter_types).is_some())
            .map(|d| ExecutableRef::method(d.name.clone(), method, parameter_types.to_vec()))
    }

    /// Find the first method with the given name, whatever its parameters
    pub fn find_method_named(&self, name: &TypeName, method: &str) -> Option<ExecutableRef> {
        self.hierarchy(name)
            .into_iter()
            .find_map(|d| d.declared_methods_named(method).next().map(|m| ExecutableRef::method(d.name.clone(), method, m.parameter_types.clone())))
    }

    /// Find the single-argument setter for a bean property
    pub fn find_setter(&self, name: &TypeName, property: &str) -> Option<ExecutableRef> {
        let setter = setter_name(property);
        self.hierarchy(name).into_iter().find_map(|d| {
            d.declared_methods_named(&setter)
                .find(|m| m.parameter_types.len() == 1 && !m.is_static)
                .map(|m| ExecutableRef::method(d.name.clone(), setter.clone(), m.parameter_types.clone()))
        })
    }

    /// Find a field by name, walking superclasses
    pub fn find_field(&self, name: &TypeName, field: &str) -> Option<FieldRef> {
        self.superclass_chain(name).into_iter().find(|d| d.declared_field(field).is_some()).map(|d| FieldRef::new(d.name.clone(), field))
    }

    /// Method metadata for a reference, `None` for constructors and unknown methods
    pub fn method_info(&self, executable: &ExecutableRef) -> Option<&MethodInfo> {
        if executable.is_constructor() {
            return None;
        }
        self.get(executable.declaring_type().as_str())
            .and_then(|d| d.declared_method(executable.name(), executable.parameter_types()))
    }

    /// Declared visibility of an executable; unknown members are public
    pub fn executable_visibility(&self, executable: &ExecutableRef) -> Visibility {
        if executable.is_constructor() {
            return self
                .constructors(executable.declaring_type())
                .into_iter()
                .find(|c| c.parameter_types == executable.parameter_types())
                .map(|c| c.visibility)
                .unwrap_or_default();
        }
        self.method_info(executable).map(|m| m.visibility).unwrap_or_default()
    }

    /// Whether generated code living in `from_package` can call `executable` directly
    pub fn is_accessible(&self, executable: &ExecutableRef, from_package: &str) -> bool {
        let declaring = executable.declaring_type();
        let package = declaring.package_name();
        self.visibility(declaring).is_accessible_from(package, from_package) && self.executable_visibility(executable).is_accessible_from(package, from_package)
    }

    /// Whether a value of `from` can be assigned to `to`
    pub fn is_assignable(&self, from: &TypeName, to: &TypeName) -> bool {
        if from == to || to.as_str() == "java.lang.Object" {
            return true;
        }
        self.hierarchy(from).iter().any(|d| &d.name == to || d.superclass.as_ref() == Some(to) || d.interfaces.contains(to))
    }
}

/// JavaBeans setter name for a property
pub fn setter_name(property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

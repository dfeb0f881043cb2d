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

//! Type descriptors
//!
//! Builders used by callers (and tests) to describe the shape of a type.

use super::{TypeKind, TypeName, Visibility};

/// Declared constructor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstructorInfo {
    pub parameter_types: Vec<TypeName>,
    pub visibility: Visibility,
    pub annotations: Vec<TypeName>,
}

impl ConstructorInfo {
    pub fn new(parameter_types: Vec<TypeName>) -> Self {
        Self { parameter_types, ..Default::default() }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn annotated_with(mut self, annotation: impl Into<TypeName>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn has_annotation(&self, annotation: &str) -> bool {
        self.annotations.iter().any(|a| a.as_str() == annotation)
    }
}

/// Declared method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub parameter_types: Vec<TypeName>,
    pub return_type: TypeName,
    pub visibility: Visibility,
    pub is_static: bool,
    pub annotations: Vec<TypeName>,
}

impl MethodInfo {
    pub fn new(name: impl Into<String>, parameter_types: Vec<TypeName>) -> Self {
        Self {
            name: name.into(),
            parameter_types,
            return_type: TypeName::new("void"),
            visibility: Visibility::Public,
            is_static: false,
            annotations: Vec::new(),
        }
    }

    pub fn returning(mut self, return_type: impl Into<TypeName>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn annotated_with(mut self, annotation: impl Into<TypeName>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

/// Declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub field_type: TypeName,
    pub visibility: Visibility,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, field_type: impl Into<TypeName>) -> Self {
        Self { name: name.into(), field_type: field_type.into(), visibility: Visibility::Private }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Everything known about one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: TypeName,
    pub kind: TypeKind,
    pub visibility: Visibility,
    pub superclass: Option<TypeName>,
    pub interfaces: Vec<TypeName>,
    pub annotations: Vec<TypeName>,
    pub constructors: Vec<ConstructorInfo>,
    pub methods: Vec<MethodInfo>,
    pub fields: Vec<FieldInfo>,
}

impl TypeDescriptor {
    fn of_kind(name: impl Into<TypeName>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::Public,
            superclass: None,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn class(name: impl Into<TypeName>) -> Self {
        Self::of_kind(name, TypeKind::Class)
    }

    pub fn interface(name: impl Into<TypeName>) -> Self {
        Self::of_kind(name, TypeKind::Interface)
    }

    pub fn annotation(name: impl Into<TypeName>) -> Self {
        Self::of_kind(name, TypeKind::Annotation)
    }

    pub fn enumeration(name: impl Into<TypeName>) -> Self {
        Self::of_kind(name, TypeKind::Enum)
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn extends(mut self, superclass: impl Into<TypeName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<TypeName>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn annotated_with(mut self, annotation: impl Into<TypeName>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn has_annotation(&self, annotation: &str) -> bool {
        self.annotations.iter().any(|a| a.as_str() == annotation)
    }

    /// Declared method matching name and parameter types exactly
    pub fn declared_method(&self, name: &str, parameter_types: &[TypeName]) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name == name && m.parameter_types == parameter_types)
    }

    /// Declared methods with the given name, in declaration order
    pub fn declared_methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodInfo> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn declared_field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }
}

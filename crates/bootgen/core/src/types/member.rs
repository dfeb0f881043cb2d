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

//! Member references
//!
//! A reference identifies a constructor, method or field by the type that
//! declares it. Lookups through a subtype always produce a reference keyed by
//! the declaring type, so `declaring_type()` is a pure accessor.

use super::TypeName;
use std::fmt;

/// Constructor or named method
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExecutableKind {
    Constructor,
    Method(String),
}

/// Identity of a constructor or method
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExecutableRef {
    declaring_type: TypeName,
    kind: ExecutableKind,
    parameter_types: Vec<TypeName>,
}

impl ExecutableRef {
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";

    pub fn constructor(declaring_type: impl Into<TypeName>, parameter_types: Vec<TypeName>) -> Self {
        Self { declaring_type: declaring_type.into(), kind: ExecutableKind::Constructor, parameter_types }
    }

    pub fn default_constructor(declaring_type: impl Into<TypeName>) -> Self {
        Self::constructor(declaring_type, Vec::new())
    }

    pub fn method(declaring_type: impl Into<TypeName>, name: impl Into<String>, parameter_types: Vec<TypeName>) -> Self {
        Self { declaring_type: declaring_type.into(), kind: ExecutableKind::Method(name.into()), parameter_types }
    }

    /// The type that declares this executable
    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    pub fn kind(&self) -> &ExecutableKind {
        &self.kind
    }

    /// Method name, or `<init>` for constructors
    pub fn name(&self) -> &str {
        match &self.kind {
            ExecutableKind::Constructor => Self::CONSTRUCTOR_NAME,
            ExecutableKind::Method(name) => name,
        }
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.kind, ExecutableKind::Constructor)
    }

    pub fn parameter_types(&self) -> &[TypeName] {
        &self.parameter_types
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_types.len()
    }
}

impl fmt::Display for ExecutableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.parameter_types.iter().map(TypeName::as_str).collect::<Vec<_>>().join(", ");
        write!(f, "{}.{}({})", self.declaring_type, self.name(), params)
    }
}

/// Identity of a field
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldRef {
    declaring_type: TypeName,
    name: String,
}

impl FieldRef {
    pub fn new(declaring_type: impl Into<TypeName>, name: impl Into<String>) -> Self {
        Self { declaring_type: declaring_type.into(), name: name.into() }
    }

    /// The type that declares this field
    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_name() {
        let ctor = ExecutableRef::default_constructor("com.example.Foo");
        assert!(ctor.is_constructor());
        assert_eq!(ctor.name(), "<init>");
        assert_eq!(ctor.parameter_count(), 0);
        assert_eq!(ctor.to_string(), "com.example.Foo.<init>()");
    }

    #[test]
    fn test_method_display() {
        let method = ExecutableRef::method("com.example.Foo", "setBar", vec![TypeName::new("java.lang.String"), TypeName::new("int")]);
        assert_eq!(method.declaring_type().as_str(), "com.example.Foo");
        assert_eq!(method.to_string(), "com.example.Foo.setBar(java.lang.String, int)");
    }

    #[test]
    fn test_field_ref() {
        let field = FieldRef::new("com.example.Foo", "bar");
        assert_eq!(field.declaring_type().as_str(), "com.example.Foo");
        assert_eq!(field.name(), "bar");
    }
}

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

//! Type metadata model
//!
//! The generator never loads classes. Everything it knows about the target
//! program's types comes from a [`TypeSystem`] populated by the caller.

pub mod descriptor;
pub mod member;
pub mod system;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

pub use descriptor::{ConstructorInfo, FieldInfo, MethodInfo, TypeDescriptor};
pub use member::{ExecutableKind, ExecutableRef, FieldRef};
pub use system::TypeSystem;

const PRIMITIVES: [&str; 9] = ["boolean", "byte", "char", "short", "int", "long", "float", "double", "void"];

/// Fully-qualified binary type name, e.g. `com.example.Outer$Inner` or `java.lang.String[]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name from its binary form
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The binary name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this names a primitive type (including `void`)
    pub fn is_primitive(&self) -> bool {
        PRIMITIVES.contains(&self.0.as_str())
    }

    /// Whether this names an array type
    pub fn is_array(&self) -> bool {
        self.0.ends_with("[]")
    }

    /// Element type of an array, or `None` for non-array types
    pub fn component_type(&self) -> Option<TypeName> {
        self.0.strip_suffix("[]").map(TypeName::new)
    }

    /// Package portion of the name, empty for primitives and the default package
    pub fn package_name(&self) -> &str {
        let base = self.0.trim_end_matches("[]");
        match base.rfind('.') {
            Some(index) => &base[..index],
            None => "",
        }
    }

    /// Name of the top-level type enclosing this one (itself when not nested)
    pub fn top_level(&self) -> TypeName {
        let base = self.0.trim_end_matches("[]");
        match base.find('$') {
            Some(index) => TypeName::new(&base[..index]),
            None => TypeName::new(base),
        }
    }

    /// Binary simple name, keeping nesting markers (`Outer$Inner`)
    pub fn binary_simple_name(&self) -> &str {
        let base = self.0.trim_end_matches("[]");
        match base.rfind('.') {
            Some(index) => &base[index + 1..],
            None => base,
        }
    }

    /// Simple name of the innermost type (`Inner` for `com.example.Outer$Inner`)
    pub fn simple_name(&self) -> &str {
        let binary = self.binary_simple_name();
        match binary.rfind('$') {
            Some(index) => &binary[index + 1..],
            None => binary,
        }
    }

    /// Source-level name with nesting separators replaced by dots
    pub fn canonical_name(&self) -> String {
        self.0.replace('$', ".")
    }

    /// Class file resource path, e.g. `java/lang/String.class`
    pub fn to_resource_path(&self) -> String {
        format!("{}.class", self.0.replace('.', "/"))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&TypeName> for TypeName {
    fn from(name: &TypeName) -> Self {
        name.clone()
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Annotation,
    Enum,
    Array,
}

/// Access level of a type or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    /// Whether code in `from_package` may use a member with this visibility
    /// declared in `declaring_package`, ignoring subclass access
    pub fn is_accessible_from(self, declaring_package: &str, from_package: &str) -> bool {
        match self {
            Visibility::Public => true,
            Visibility::Protected | Visibility::Package => declaring_package == from_package,
            Visibility::Private => false,
        }
    }
}

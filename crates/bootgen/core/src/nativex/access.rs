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

//! Reflective access flags

use crate::types::TypeKind;
use std::fmt;

/// Kind of reflective access a native image must retain for a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeAccess {
    /// Resolved from the type kind when hints are applied
    AutoDetect,
    /// Route the type into the JNI configuration
    Jni,
    /// Keep the class file as a resource
    Resource,
    PublicFields,
    DeclaredFields,
    DeclaredConstructors,
    PublicConstructors,
    DeclaredMethods,
    PublicMethods,
    DeclaredClasses,
    PublicClasses,
    QueryDeclaredMethods,
    QueryPublicMethods,
    QueryDeclaredConstructors,
    QueryPublicConstructors,
}

impl TypeAccess {
    pub const ALL: [TypeAccess; 15] = [
        TypeAccess::AutoDetect,
        TypeAccess::Jni,
        TypeAccess::Resource,
        TypeAccess::PublicFields,
        TypeAccess::DeclaredFields,
        TypeAccess::DeclaredConstructors,
        TypeAccess::PublicConstructors,
        TypeAccess::DeclaredMethods,
        TypeAccess::PublicMethods,
        TypeAccess::DeclaredClasses,
        TypeAccess::PublicClasses,
        TypeAccess::QueryDeclaredMethods,
        TypeAccess::QueryPublicMethods,
        TypeAccess::QueryDeclaredConstructors,
        TypeAccess::QueryPublicConstructors,
    ];

    /// Key used in the reflection JSON descriptor
    pub fn json_key(self) -> &'static str {
        match self {
            TypeAccess::AutoDetect => "autoDetect",
            TypeAccess::Jni => "jni",
            TypeAccess::Resource => "resource",
            TypeAccess::PublicFields => "allPublicFields",
            TypeAccess::DeclaredFields => "allDeclaredFields",
            TypeAccess::DeclaredConstructors => "allDeclaredConstructors",
            TypeAccess::PublicConstructors => "allPublicConstructors",
            TypeAccess::DeclaredMethods => "allDeclaredMethods",
            TypeAccess::PublicMethods => "allPublicMethods",
            TypeAccess::DeclaredClasses => "allDeclaredClasses",
            TypeAccess::PublicClasses => "allPublicClasses",
            TypeAccess::QueryDeclaredMethods => "queryAllDeclaredMethods",
            TypeAccess::QueryPublicMethods => "queryAllPublicMethods",
            TypeAccess::QueryDeclaredConstructors => "queryAllDeclaredConstructors",
            TypeAccess::QueryPublicConstructors => "queryAllPublicConstructors",
        }
    }

    pub fn from_json_key(key: &str) -> Option<TypeAccess> {
        Self::ALL.into_iter().find(|access| access.json_key() == key)
    }

    /// Flags that end up as booleans in the reflection descriptor
    pub fn is_reflection_flag(self) -> bool {
        !matches!(self, TypeAccess::AutoDetect | TypeAccess::Jni | TypeAccess::Resource)
    }

    /// Concrete access implied by `AutoDetect` for a type of the given kind
    pub fn auto_detect(kind: TypeKind) -> Option<TypeAccess> {
        match kind {
            TypeKind::Annotation | TypeKind::Interface => Some(TypeAccess::PublicMethods),
            TypeKind::Array => None,
            TypeKind::Class | TypeKind::Enum => Some(TypeAccess::DeclaredConstructors),
        }
    }
}

impl fmt::Display for TypeAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

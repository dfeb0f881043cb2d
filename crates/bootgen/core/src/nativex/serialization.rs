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

//! Serialization registry

use crate::types::TypeName;
use serde::Serialize;
use std::collections::BTreeSet;

/// Types that must stay serializable in the native image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializationConfiguration {
    types: BTreeSet<TypeName>,
}

impl SerializationConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, type_name: impl Into<TypeName>) -> &mut Self {
        self.types.insert(type_name.into());
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn merge(&mut self, other: &SerializationConfiguration) {
        self.types.extend(other.types.iter().cloned());
    }

    pub fn to_serialization_descriptors(&self) -> Vec<SerializationDescriptor> {
        self.types.iter().map(|name| SerializationDescriptor { name: name.clone() }).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializationDescriptor {
    pub name: TypeName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates() {
        let mut config = SerializationConfiguration::new();
        config.add("java.util.ArrayList").add("java.util.ArrayList").add("java.lang.Integer");
        let json = serde_json::to_value(config.to_serialization_descriptors()).unwrap();
        assert_eq!(json, serde_json::json!([{ "name": "java.lang.Integer" }, { "name": "java.util.ArrayList" }]));
    }
}

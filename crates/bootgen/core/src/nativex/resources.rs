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

//! Resource registry

use crate::types::TypeName;
use serde::Serialize;
use std::collections::BTreeSet;

/// Resource pattern or resource bundle to retain
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NativeResourcesEntry {
    Pattern(String),
    Bundle(String),
}

impl NativeResourcesEntry {
    /// Class file of a type, e.g. `java.lang.String` becomes `java/lang/String.class`
    pub fn of_class_name(class_name: &str) -> Self {
        NativeResourcesEntry::Pattern(TypeName::new(class_name).to_resource_path())
    }

    pub fn of_pattern(pattern: impl Into<String>) -> Self {
        NativeResourcesEntry::Pattern(pattern.into())
    }

    pub fn of_bundle(name: impl Into<String>) -> Self {
        NativeResourcesEntry::Bundle(name.into())
    }
}

/// Deduplicating set of resource entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcesConfiguration {
    patterns: BTreeSet<String>,
    bundles: BTreeSet<String>,
}

impl ResourcesConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: NativeResourcesEntry) -> &mut Self {
        match entry {
            NativeResourcesEntry::Pattern(pattern) => self.patterns.insert(pattern),
            NativeResourcesEntry::Bundle(bundle) => self.bundles.insert(bundle),
        };
        self
    }

    pub fn patterns(&self) -> &BTreeSet<String> {
        &self.patterns
    }

    pub fn bundles(&self) -> &BTreeSet<String> {
        &self.bundles
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.bundles.is_empty()
    }

    pub fn merge(&mut self, other: &ResourcesConfiguration) {
        self.patterns.extend(other.patterns.iter().cloned());
        self.bundles.extend(other.bundles.iter().cloned());
    }

    pub fn to_resources_descriptor(&self) -> ResourcesDescriptor {
        ResourcesDescriptor {
            resources: ResourceIncludes { includes: self.patterns.iter().map(|p| PatternDescriptor { pattern: p.clone() }).collect() },
            bundles: self.bundles.iter().map(|b| BundleDescriptor { name: b.clone() }).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternDescriptor {
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIncludes {
    pub includes: Vec<PatternDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleDescriptor {
    pub name: String,
}

/// Snapshot of the resource registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourcesDescriptor {
    pub resources: ResourceIncludes,
    pub bundles: Vec<BundleDescriptor>,
}

impl ResourcesDescriptor {
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.resources.includes.iter().map(|p| p.pattern.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_patterns_deduplicate() {
        let mut config = ResourcesConfiguration::new();
        config.add(NativeResourcesEntry::of_class_name("java.lang.String"));
        config.add(NativeResourcesEntry::of_class_name("java.lang.String"));
        config.add(NativeResourcesEntry::of_class_name("java.lang.Integer"));

        let descriptor = config.to_resources_descriptor();
        assert_eq!(descriptor.patterns().collect::<Vec<_>>(), vec!["java/lang/Integer.class", "java/lang/String.class"]);
    }

    #[test]
    fn test_json_shape() {
        let mut config = ResourcesConfiguration::new();
        config.add(NativeResourcesEntry::of_pattern("application.properties")).add(NativeResourcesEntry::of_bundle("messages"));

        let json = serde_json::to_value(config.to_resources_descriptor()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "resources": { "includes": [{ "pattern": "application.properties" }] },
                "bundles": [{ "name": "messages" }]
            })
        );
    }
}

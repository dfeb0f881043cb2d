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

//! Configuration for bootstrap generation

use bootgen_core::nativex::NativeOptions;
use std::collections::BTreeSet;

/// Default simple name of the generated bootstrap class
pub const DEFAULT_BOOTSTRAP_CLASS_NAME: &str = "ContextBootstrapInitializer";

/// Configuration for bootstrap generation
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Simple name of the generated bootstrap class in every package
    pub bootstrap_class_name: String,

    /// Component names the default selector skips
    pub excluded_component_names: BTreeSet<String>,

    /// Declared types the default selector skips
    pub excluded_component_types: BTreeSet<String>,

    /// Options seeded into the registry and passed through to the result
    pub options: NativeOptions,

    /// Whether to generate event listener registration
    pub include_event_listeners: bool,

    /// Whether to write the infrastructure section
    pub include_infrastructure: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            bootstrap_class_name: DEFAULT_BOOTSTRAP_CLASS_NAME.to_string(),
            excluded_component_names: BTreeSet::new(),
            excluded_component_types: BTreeSet::new(),
            options: NativeOptions::new(),
            include_event_listeners: true,
            include_infrastructure: true,
        }
    }
}

impl GenerationConfig {
    /// Configuration that only writes component registrations
    pub fn components_only() -> Self {
        Self {
            include_event_listeners: false,
            include_infrastructure: false,
            ..Default::default()
        }
    }

    pub fn with_bootstrap_class_name(mut self, name: impl Into<String>) -> Self {
        self.bootstrap_class_name = name.into();
        self
    }

    pub fn with_excluded_component(mut self, name: impl Into<String>) -> Self {
        self.excluded_component_names.insert(name.into());
        self
    }

    pub fn with_excluded_type(mut self, type_name: impl Into<String>) -> Self {
        self.excluded_component_types.insert(type_name.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(key, value);
        self
    }

    pub fn with_event_listeners(mut self, enabled: bool) -> Self {
        self.include_event_listeners = enabled;
        self
    }

    pub fn with_infrastructure(mut self, enabled: bool) -> Self {
        self.include_infrastructure = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !is_identifier(&self.bootstrap_class_name) {
            return Err(format!("Bootstrap class name '{}' is not a valid identifier", self.bootstrap_class_name));
        }

        if self.options.iter().any(|(key, _)| key.trim().is_empty()) {
            return Err("Option keys must not be empty".to_string());
        }

        Ok(())
    }
}

/// Whether `name` is a valid Java identifier (ASCII subset)
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
        _ => false,
    }
}

/// Whether `name` is a valid dotted package name; the default package is empty
pub fn is_package_name(name: &str) -> bool {
    name.is_empty() || name.split('.').all(is_identifier)
}

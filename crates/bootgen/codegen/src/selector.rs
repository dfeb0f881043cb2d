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

//! Component selection

use crate::config::GenerationConfig;
use crate::error::{GenerationError, GeneratorResult};
use bootgen_core::ComponentDefinition;
use std::collections::BTreeSet;

/// Decides which components get explicit registration code
pub trait ComponentSelector: Send + Sync {
    /// `Ok(false)` skips the component; an error aborts the run
    fn select(&self, name: &str, definition: &ComponentDefinition) -> GeneratorResult<bool>;
}

/// Selects everything except denylisted names and declared types
#[derive(Debug, Clone, Default)]
pub struct DefaultComponentSelector {
    excluded_names: BTreeSet<String>,
    excluded_types: BTreeSet<String>,
}

impl DefaultComponentSelector {
    pub fn new(excluded_names: impl IntoIterator<Item = String>, excluded_types: impl IntoIterator<Item = String>) -> Self {
        Self { excluded_names: excluded_names.into_iter().collect(), excluded_types: excluded_types.into_iter().collect() }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self { excluded_names: config.excluded_component_names.clone(), excluded_types: config.excluded_component_types.clone() }
    }
}

impl ComponentSelector for DefaultComponentSelector {
    fn select(&self, name: &str, definition: &ComponentDefinition) -> GeneratorResult<bool> {
        let bean_class = match &definition.bean_class {
            Some(bean_class) if !bean_class.as_str().trim().is_empty() => bean_class,
            _ => return Err(GenerationError::invalid_definition(name, "no resolvable component type")),
        };
        Ok(!self.excluded_names.contains(name) && !self.excluded_types.contains(bean_class.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denylists() {
        let selector = DefaultComponentSelector::new(["skipped".to_string()], ["com.example.Skipped".to_string()]);
        assert!(selector.select("kept", &ComponentDefinition::of_type("com.example.Kept")).unwrap());
        assert!(!selector.select("skipped", &ComponentDefinition::of_type("com.example.Kept")).unwrap());
        assert!(!selector.select("other", &ComponentDefinition::of_type("com.example.Skipped")).unwrap());
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let selector = DefaultComponentSelector::default();
        let error = selector.select("broken", &ComponentDefinition::new()).unwrap_err();
        assert!(matches!(error, GenerationError::InvalidDefinition { ref name, .. } if name == "broken"));
        assert!(selector.select("blank", &ComponentDefinition::of_type(" ")).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = GenerationConfig::default().with_excluded_component("a");
        let selector = DefaultComponentSelector::from_config(&config);
        assert!(!selector.select("a", &ComponentDefinition::of_type("x.A")).unwrap());
    }
}

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

//! Class initialization registry

use serde::Serialize;
use std::collections::BTreeMap;

/// When a class or package is initialized; runtime outranks build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InitializationPhase {
    BuildTime,
    RunTime,
}

/// Class and package initialization requirements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitializationConfiguration {
    classes: BTreeMap<String, InitializationPhase>,
    packages: BTreeMap<String, InitializationPhase>,
}

fn record(target: &mut BTreeMap<String, InitializationPhase>, name: String, phase: InitializationPhase) {
    let slot = target.entry(name).or_insert(phase);
    *slot = (*slot).max(phase);
}

impl InitializationConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, name: impl Into<String>, phase: InitializationPhase) -> &mut Self {
        record(&mut self.classes, name.into(), phase);
        self
    }

    pub fn add_package(&mut self, name: impl Into<String>, phase: InitializationPhase) -> &mut Self {
        record(&mut self.packages, name.into(), phase);
        self
    }

    pub fn class_phase(&self, name: &str) -> Option<InitializationPhase> {
        self.classes.get(name).copied()
    }

    pub fn package_phase(&self, name: &str) -> Option<InitializationPhase> {
        self.packages.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.packages.is_empty()
    }

    pub fn merge(&mut self, other: &InitializationConfiguration) {
        for (name, phase) in &other.classes {
            record(&mut self.classes, name.clone(), *phase);
        }
        for (name, phase) in &other.packages {
            record(&mut self.packages, name.clone(), *phase);
        }
    }

    pub fn to_initialization_descriptor(&self) -> InitializationDescriptor {
        let select = |map: &BTreeMap<String, InitializationPhase>, phase: InitializationPhase| -> Vec<String> { map.iter().filter(|(_, p)| **p == phase).map(|(name, _)| name.clone()).collect() };
        InitializationDescriptor {
            build_time_classes: select(&self.classes, InitializationPhase::BuildTime),
            build_time_packages: select(&self.packages, InitializationPhase::BuildTime),
            runtime_classes: select(&self.classes, InitializationPhase::RunTime),
            runtime_packages: select(&self.packages, InitializationPhase::RunTime),
        }
    }
}

/// Snapshot of the initialization registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializationDescriptor {
    pub build_time_classes: Vec<String>,
    pub build_time_packages: Vec<String>,
    pub runtime_classes: Vec<String>,
    pub runtime_packages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_wins() {
        let mut config = InitializationConfiguration::new();
        config.add_class("a.A", InitializationPhase::RunTime);
        config.add_class("a.A", InitializationPhase::BuildTime);
        config.add_class("b.B", InitializationPhase::BuildTime);
        config.add_package("c", InitializationPhase::BuildTime);

        let descriptor = config.to_initialization_descriptor();
        assert_eq!(descriptor.runtime_classes, vec!["a.A".to_string()]);
        assert_eq!(descriptor.build_time_classes, vec!["b.B".to_string()]);
        assert_eq!(descriptor.build_time_packages, vec!["c".to_string()]);
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(InitializationConfiguration::new().to_initialization_descriptor()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "buildTimeClasses": [], "buildTimePackages": [], "runtimeClasses": [], "runtimePackages": [] })
        );
    }
}

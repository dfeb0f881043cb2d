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

//! Generation output

use crate::code::SourceFile;
use crate::error::GeneratorResult;
use bootgen_core::nativex::{ClassDescriptor, InitializationDescriptor, NativeOptions, ProxyDescriptor, ResourcesDescriptor, SerializationDescriptor};
use bootgen_core::NativeConfigurationRegistry;
use serde::Serialize;
use std::fmt;

/// Counters collected during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Components returned by the container
    pub components: usize,
    /// Components rejected by the selector
    pub skipped: usize,
    /// Components no supplier could handle
    pub unhandled: usize,
    /// Components with registration code
    pub written: usize,
}

/// Native-image configuration file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Reflection,
    Resources,
    Proxy,
    Initialization,
    Serialization,
    Jni,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 6] =
        [DescriptorKind::Reflection, DescriptorKind::Resources, DescriptorKind::Proxy, DescriptorKind::Initialization, DescriptorKind::Serialization, DescriptorKind::Jni];

    /// Conventional file name of the descriptor
    pub fn file_name(self) -> &'static str {
        match self {
            DescriptorKind::Reflection => "reflect-config.json",
            DescriptorKind::Resources => "resource-config.json",
            DescriptorKind::Proxy => "proxy-config.json",
            DescriptorKind::Initialization => "initialization-config.json",
            DescriptorKind::Serialization => "serialization-config.json",
            DescriptorKind::Jni => "jni-config.json",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Source files and native configuration produced by one run
#[derive(Debug, Clone)]
pub struct BootstrapGenerationResult {
    /// Main bootstrap class first, then per-package helpers by package
    pub source_files: Vec<SourceFile>,
    pub reflection: Vec<ClassDescriptor>,
    pub resources: ResourcesDescriptor,
    pub proxies: Vec<ProxyDescriptor>,
    pub initialization: InitializationDescriptor,
    pub serialization: Vec<SerializationDescriptor>,
    pub jni: Vec<ClassDescriptor>,
    pub options: NativeOptions,
    pub stats: GenerationStats,
}

impl BootstrapGenerationResult {
    /// Snapshot the registry alongside the rendered sources
    pub fn new(source_files: Vec<SourceFile>, registry: &NativeConfigurationRegistry, stats: GenerationStats) -> Self {
        Self {
            source_files,
            reflection: registry.reflection().to_class_descriptors(),
            resources: registry.resources().to_resources_descriptor(),
            proxies: registry.proxy().to_proxy_descriptors(),
            initialization: registry.initialization().to_initialization_descriptor(),
            serialization: registry.serialization().to_serialization_descriptors(),
            jni: registry.jni().to_class_descriptors(),
            options: registry.options().clone(),
            stats,
        }
    }

    pub fn main_source_file(&self) -> Option<&SourceFile> {
        self.source_files.first()
    }

    pub fn source_file(&self, relative_path: &str) -> Option<&SourceFile> {
        self.source_files.iter().find(|file| file.relative_path() == relative_path)
    }

    /// Reflection descriptor for a type, if one was requested
    pub fn reflection_descriptor(&self, type_name: &str) -> Option<&ClassDescriptor> {
        self.reflection.iter().find(|descriptor| descriptor.name.as_str() == type_name)
    }

    /// Pretty-printed JSON for one descriptor kind
    pub fn descriptor_json(&self, kind: DescriptorKind) -> GeneratorResult<String> {
        let json = match kind {
            DescriptorKind::Reflection => serde_json::to_string_pretty(&self.reflection)?,
            DescriptorKind::Resources => serde_json::to_string_pretty(&self.resources)?,
            DescriptorKind::Proxy => serde_json::to_string_pretty(&self.proxies)?,
            DescriptorKind::Initialization => serde_json::to_string_pretty(&self.initialization)?,
            DescriptorKind::Serialization => serde_json::to_string_pretty(&self.serialization)?,
            DescriptorKind::Jni => serde_json::to_string_pretty(&self.jni)?,
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootgen_core::nativex::{InitializationPhase, NativeResourcesEntry, TypeAccess};
    use bootgen_core::types::ExecutableRef;

    fn sample_registry() -> NativeConfigurationRegistry {
        let mut registry = NativeConfigurationRegistry::new();
        registry.reflection_mut().add_executable(ExecutableRef::default_constructor("com.example.A"));
        registry.reflection_mut().for_type("com.example.B").with_access([TypeAccess::DeclaredFields]);
        registry.jni_mut().for_type("com.example.Native").with_access([TypeAccess::DeclaredMethods]);
        registry.resources_mut().add(NativeResourcesEntry::of_class_name("com.example.A"));
        registry.proxy_mut().add(["com.example.Api"]);
        registry.initialization_mut().add_class("com.example.Init", InitializationPhase::BuildTime);
        registry.serialization_mut().add("com.example.Data");
        registry.options_mut().set("--verbose", "true");
        registry
    }

    #[test]
    fn test_snapshot() {
        let result = BootstrapGenerationResult::new(Vec::new(), &sample_registry(), GenerationStats::default());
        assert_eq!(result.reflection.len(), 2);
        assert!(result.reflection_descriptor("com.example.B").unwrap().has_access(TypeAccess::DeclaredFields));
        assert_eq!(result.jni.len(), 1);
        assert_eq!(result.options.get("--verbose"), Some("true"));
        assert!(result.main_source_file().is_none());
    }

    #[test]
    fn test_descriptor_json() {
        let result = BootstrapGenerationResult::new(Vec::new(), &sample_registry(), GenerationStats::default());

        let reflection: serde_json::Value = serde_json::from_str(&result.descriptor_json(DescriptorKind::Reflection).unwrap()).unwrap();
        assert_eq!(reflection[0]["name"], "com.example.A");
        assert_eq!(reflection[0]["methods"][0]["name"], "<init>");
        assert!(reflection[0].get("fields").is_none());
        assert_eq!(reflection[1]["allDeclaredFields"], true);

        let resources: serde_json::Value = serde_json::from_str(&result.descriptor_json(DescriptorKind::Resources).unwrap()).unwrap();
        assert_eq!(resources["resources"]["includes"][0]["pattern"], "com/example/A.class");

        let proxies: serde_json::Value = serde_json::from_str(&result.descriptor_json(DescriptorKind::Proxy).unwrap()).unwrap();
        assert_eq!(proxies[0]["interfaces"][0], "com.example.Api");

        let initialization: serde_json::Value = serde_json::from_str(&result.descriptor_json(DescriptorKind::Initialization).unwrap()).unwrap();
        assert_eq!(initialization["buildTimeClasses"][0], "com.example.Init");

        let serialization: serde_json::Value = serde_json::from_str(&result.descriptor_json(DescriptorKind::Serialization).unwrap()).unwrap();
        assert_eq!(serialization[0]["name"], "com.example.Data");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(DescriptorKind::Reflection.to_string(), "reflect-config.json");
        assert_eq!(DescriptorKind::ALL.len(), 6);
    }
}

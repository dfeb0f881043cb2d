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

//! Native configuration registry
//!
//! Everything a closed-world compiler must be told about: reflective access,
//! JNI access, resources, proxies, class initialization, serialization and
//! free-form options. All additions merge; nothing here ever fails.

pub mod access;
pub mod initialization;
pub mod options;
pub mod proxy;
pub mod reflection;
pub mod resources;
pub mod serialization;

pub use access::TypeAccess;
pub use initialization::{InitializationConfiguration, InitializationDescriptor, InitializationPhase};
pub use options::NativeOptions;
pub use proxy::{ProxyConfiguration, ProxyDescriptor};
pub use reflection::{ClassDescriptor, FieldDescriptor, MethodDescriptor, NativeReflectionEntry, ReflectionConfiguration};
pub use resources::{NativeResourcesEntry, ResourcesConfiguration, ResourcesDescriptor};
pub use serialization::{SerializationConfiguration, SerializationDescriptor};

/// Per-run accumulator of native configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeConfigurationRegistry {
    reflection: ReflectionConfiguration,
    jni: ReflectionConfiguration,
    resources: ResourcesConfiguration,
    proxy: ProxyConfiguration,
    initialization: InitializationConfiguration,
    serialization: SerializationConfiguration,
    options: NativeOptions,
}

impl NativeConfigurationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: NativeOptions) -> Self {
        Self { options, ..Self::default() }
    }

    pub fn reflection(&self) -> &ReflectionConfiguration {
        &self.reflection
    }

    pub fn reflection_mut(&mut self) -> &mut ReflectionConfiguration {
        &mut self.reflection
    }

    pub fn jni(&self) -> &ReflectionConfiguration {
        &self.jni
    }

    pub fn jni_mut(&mut self) -> &mut ReflectionConfiguration {
        &mut self.jni
    }

    pub fn resources(&self) -> &ResourcesConfiguration {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut ResourcesConfiguration {
        &mut self.resources
    }

    pub fn proxy(&self) -> &ProxyConfiguration {
        &self.proxy
    }

    pub fn proxy_mut(&mut self) -> &mut ProxyConfiguration {
        &mut self.proxy
    }

    pub fn initialization(&self) -> &InitializationConfiguration {
        &self.initialization
    }

    pub fn initialization_mut(&mut self) -> &mut InitializationConfiguration {
        &mut self.initialization
    }

    pub fn serialization(&self) -> &SerializationConfiguration {
        &self.serialization
    }

    pub fn serialization_mut(&mut self) -> &mut SerializationConfiguration {
        &mut self.serialization
    }

    pub fn options(&self) -> &NativeOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut NativeOptions {
        &mut self.options
    }

    /// Fold another registry into this one
    pub fn merge(&mut self, other: &NativeConfigurationRegistry) {
        self.reflection.merge(&other.reflection);
        self.jni.merge(&other.jni);
        self.resources.merge(&other.resources);
        self.proxy.merge(&other.proxy);
        self.initialization.merge(&other.initialization);
        self.serialization.merge(&other.serialization);
        self.options.merge(&other.options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExecutableRef, FieldRef};

    #[test]
    fn test_registry_sections_are_independent() {
        let mut registry = NativeConfigurationRegistry::new();
        registry.reflection_mut().add_executable(ExecutableRef::default_constructor("a.A"));
        registry.jni_mut().add_field(FieldRef::new("b.B", "handle"));
        registry.resources_mut().add(NativeResourcesEntry::of_class_name("a.A"));

        assert!(registry.reflection().contains("a.A"));
        assert!(!registry.reflection().contains("b.B"));
        assert!(registry.jni().contains("b.B"));
        assert_eq!(registry.resources().patterns().len(), 1);
    }

    #[test]
    fn test_merge() {
        let mut left = NativeConfigurationRegistry::new();
        left.options_mut().set("a", "1");
        let mut right = NativeConfigurationRegistry::new();
        right.options_mut().set("b", "2");
        right.serialization_mut().add("a.A");
        right.initialization_mut().add_class("a.A", InitializationPhase::RunTime);

        left.merge(&right);
        assert_eq!(left.options().len(), 2);
        assert!(left.serialization().contains("a.A"));
        assert_eq!(left.initialization().class_phase("a.A"), Some(InitializationPhase::RunTime));
    }
}

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

//! Native configuration registrar
//!
//! Runs after every component has been written. Container processors look at
//! the container as a whole (hints, property sources); component processors
//! look at the instance descriptors the writers produced.

use crate::error::GeneratorResult;
use crate::writer::InstanceDescriptor;
use bootgen_core::hints::transaction_management_hints;
use bootgen_core::nativex::NativeResourcesEntry;
use bootgen_core::types::{ExecutableRef, TypeName, TypeSystem};
use bootgen_core::{Container, NativeConfigurationRegistry, NativeHint};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Contributes native configuration derived from the whole container
pub trait ContainerConfigurationProcessor: Send + Sync {
    fn process(&self, registry: &mut NativeConfigurationRegistry, container: &dyn Container) -> GeneratorResult<()>;

    /// Processor name used in logs
    fn name(&self) -> &'static str;
}

/// Contributes native configuration derived from the written components
pub trait ComponentConfigurationProcessor: Send + Sync {
    fn process(&self, registry: &mut NativeConfigurationRegistry, container: &dyn Container, descriptors: &[InstanceDescriptor]) -> GeneratorResult<()>;

    /// Processor name used in logs
    fn name(&self) -> &'static str;
}

/// Applies every registered hint whose trigger type is present
pub struct HintsProcessor {
    hints: Vec<NativeHint>,
}

impl HintsProcessor {
    /// Processor with the built-in hint set
    pub fn new() -> Self {
        Self { hints: transaction_management_hints() }
    }

    pub fn with_hints(hints: Vec<NativeHint>) -> Self {
        Self { hints }
    }

    pub fn with_hint(mut self, hint: NativeHint) -> Self {
        self.hints.push(hint);
        self
    }

    pub fn hints(&self) -> &[NativeHint] {
        &self.hints
    }
}

impl Default for HintsProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Component types, their superclasses and every annotation found on them or on the container
fn present_types(container: &dyn Container) -> GeneratorResult<BTreeSet<TypeName>> {
    let types = container.type_system();
    let mut present: BTreeSet<TypeName> = container.metadata().annotations.iter().cloned().collect();
    for name in container.definition_names() {
        let definition = container.merged_definition(&name)?;
        let candidates = definition.bean_class.iter().cloned().chain(container.produced_type(&definition));
        for type_name in candidates {
            for descriptor in types.superclass_chain(&type_name) {
                present.insert(descriptor.name.clone());
                present.extend(descriptor.annotations.iter().cloned());
            }
            present.insert(type_name);
        }
    }
    Ok(present)
}

impl ContainerConfigurationProcessor for HintsProcessor {
    fn process(&self, registry: &mut NativeConfigurationRegistry, container: &dyn Container) -> GeneratorResult<()> {
        let present = present_types(container)?;
        let mut applied = 0;
        for hint in self.hints.iter().filter(|hint| hint.is_triggered_by(&present)) {
            hint.apply(registry, container.type_system());
            applied += 1;
        }
        debug!(present = present.len(), applied, "Applied native hints");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "hints"
    }
}

/// Makes classpath property sources available as resources
#[derive(Debug, Default)]
pub struct PropertySourceResourcesProcessor;

impl ContainerConfigurationProcessor for PropertySourceResourcesProcessor {
    fn process(&self, registry: &mut NativeConfigurationRegistry, container: &dyn Container) -> GeneratorResult<()> {
        for location in container.metadata().property_sources.iter().filter_map(|source| source.classpath_location()) {
            registry.resources_mut().add(NativeResourcesEntry::of_pattern(location));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "property-source-resources"
    }
}

/// Registers the members the container invokes reflectively at runtime
#[derive(Debug, Default)]
pub struct InjectionPointsProcessor;

impl InjectionPointsProcessor {
    fn is_public(types: &TypeSystem, executable: &ExecutableRef) -> bool {
        types.visibility(executable.declaring_type()).is_public() && types.executable_visibility(executable).is_public()
    }
}

impl ComponentConfigurationProcessor for InjectionPointsProcessor {
    fn process(&self, registry: &mut NativeConfigurationRegistry, container: &dyn Container, descriptors: &[InstanceDescriptor]) -> GeneratorResult<()> {
        let types = container.type_system();
        for descriptor in descriptors {
            if let Some(creator) = &descriptor.instance_creator {
                if !Self::is_public(types, creator) {
                    registry.reflection_mut().add_executable(creator.clone());
                }
                for parameter in creator.parameter_types().iter().filter(|p| !p.is_primitive()) {
                    if !registry.reflection().contains(parameter.as_str()) {
                        registry.reflection_mut().for_type(parameter.clone());
                    }
                }
            }

            for injection_point in &descriptor.injection_points {
                if !Self::is_public(types, &injection_point.write_method) {
                    registry.reflection_mut().add_executable(injection_point.write_method.clone());
                }
            }

            for method in descriptor.init_methods.iter().chain(&descriptor.destroy_methods) {
                registry.reflection_mut().add_executable(method.clone());
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "injection-points"
    }
}

/// Runs the container and component processors against the run's registry
pub struct NativeConfigurationRegistrar {
    container: Arc<dyn Container>,
    container_processors: Vec<Arc<dyn ContainerConfigurationProcessor>>,
    component_processors: Vec<Arc<dyn ComponentConfigurationProcessor>>,
}

impl NativeConfigurationRegistrar {
    /// Registrar with the built-in processors
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self::with_hints(container, Vec::new())
    }

    /// Built-in processors, with `extra_hints` added to the built-in hint set
    pub fn with_hints(container: Arc<dyn Container>, extra_hints: Vec<NativeHint>) -> Self {
        let mut hints = HintsProcessor::new();
        for hint in extra_hints {
            hints = hints.with_hint(hint);
        }
        Self {
            container,
            container_processors: vec![Arc::new(hints), Arc::new(PropertySourceResourcesProcessor)],
            component_processors: vec![Arc::new(InjectionPointsProcessor)],
        }
    }

    /// Registrar without any processor
    pub fn empty(container: Arc<dyn Container>) -> Self {
        Self { container, container_processors: Vec::new(), component_processors: Vec::new() }
    }

    /// Append a container processor; processors run in registration order
    pub fn with_container_processor(mut self, processor: Arc<dyn ContainerConfigurationProcessor>) -> Self {
        self.container_processors.push(processor);
        self
    }

    pub fn with_component_processor(mut self, processor: Arc<dyn ComponentConfigurationProcessor>) -> Self {
        self.component_processors.push(processor);
        self
    }

    pub fn process_container(&self, registry: &mut NativeConfigurationRegistry) -> GeneratorResult<()> {
        for processor in &self.container_processors {
            debug!(processor = processor.name(), "Running container processor");
            processor.process(registry, self.container.as_ref())?;
        }
        Ok(())
    }

    pub fn process_components(&self, registry: &mut NativeConfigurationRegistry, descriptors: &[InstanceDescriptor]) -> GeneratorResult<()> {
        for processor in &self.component_processors {
            debug!(processor = processor.name(), descriptors = descriptors.len(), "Running component processor");
            processor.process(registry, self.container.as_ref(), descriptors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootgen_core::nativex::TypeAccess;
    use bootgen_core::types::{ConstructorInfo, MethodInfo, TypeDescriptor};
    use bootgen_core::{ComponentDefinition, DefaultContainer, PropertySource, TypeHint, Visibility};

    const TRANSACTIONAL: &str = "org.springframework.transaction.annotation.Transactional";

    #[test]
    fn test_hints_triggered_by_component_annotation() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.Service").annotated_with(TRANSACTIONAL))
            .with_component("service", ComponentDefinition::of_type("com.example.Service"));
        let mut registry = NativeConfigurationRegistry::new();
        NativeConfigurationRegistrar::new(Arc::new(container)).process_container(&mut registry).unwrap();

        let entry = registry.reflection().get(TRANSACTIONAL).unwrap();
        assert!(entry.access().contains(&TypeAccess::PublicMethods));
        assert!(registry.reflection().contains("org.springframework.transaction.annotation.Propagation"));
    }

    #[test]
    fn test_untriggered_hints_are_ignored() {
        let container = DefaultContainer::new().with_component("plain", ComponentDefinition::of_type("com.example.Plain"));
        let mut registry = NativeConfigurationRegistry::new();
        NativeConfigurationRegistrar::new(Arc::new(container)).process_container(&mut registry).unwrap();
        assert!(registry.reflection().is_empty());
        assert!(registry.proxy().is_empty());
    }

    #[test]
    fn test_container_annotation_and_extra_hint() {
        let container = DefaultContainer::new().with_annotation("com.example.EnableThing");
        let hint = NativeHint::triggered_by("com.example.EnableThing").with_types(TypeHint::of(["com.example.ThingSupport"]).with_access([TypeAccess::DeclaredFields]));
        let mut registry = NativeConfigurationRegistry::new();
        NativeConfigurationRegistrar::with_hints(Arc::new(container), vec![hint]).process_container(&mut registry).unwrap();

        assert!(registry.reflection().get("com.example.ThingSupport").unwrap().access().contains(&TypeAccess::DeclaredFields));
    }

    #[test]
    fn test_classpath_property_sources_become_resources() {
        let container = DefaultContainer::new()
            .with_property_source(PropertySource::new("app", "classpath:/config/app.properties"))
            .with_property_source(PropertySource::new("disk", "file:/etc/app.properties"));
        let mut registry = NativeConfigurationRegistry::new();
        NativeConfigurationRegistrar::new(Arc::new(container)).process_container(&mut registry).unwrap();

        let patterns: Vec<&String> = registry.resources().patterns().iter().collect();
        assert_eq!(patterns, vec!["config/app.properties"]);
    }

    #[test]
    fn test_injection_points() {
        let container = DefaultContainer::new().with_type(
            TypeDescriptor::class("com.example.Repo")
                .with_constructor(ConstructorInfo::new(vec![TypeName::new("javax.sql.DataSource"), TypeName::new("int")]).with_visibility(Visibility::Protected))
                .with_method(MethodInfo::new("setName", vec![TypeName::new("java.lang.String")]).with_visibility(Visibility::Private))
                .with_method(MethodInfo::new("setSize", vec![TypeName::new("int")])),
        );
        let creator = ExecutableRef::constructor("com.example.Repo", vec![TypeName::new("javax.sql.DataSource"), TypeName::new("int")]);
        let private_setter = ExecutableRef::method("com.example.Repo", "setName", vec![TypeName::new("java.lang.String")]);
        let public_setter = ExecutableRef::method("com.example.Repo", "setSize", vec![TypeName::new("int")]);
        let init = ExecutableRef::method("com.example.Repo", "start", vec![]);
        let descriptor = InstanceDescriptor::new("repo", "com.example.Repo")
            .with_instance_creator(creator.clone())
            .with_injection_point("name", private_setter.clone(), true)
            .with_injection_point("size", public_setter.clone(), true)
            .with_init_method(init.clone());

        let mut registry = NativeConfigurationRegistry::new();
        NativeConfigurationRegistrar::new(Arc::new(container)).process_components(&mut registry, &[descriptor]).unwrap();

        let repo = registry.reflection().get("com.example.Repo").unwrap();
        assert!(repo.methods().contains(&creator));
        assert!(repo.methods().contains(&private_setter));
        assert!(repo.methods().contains(&init));
        assert!(!repo.methods().contains(&public_setter));
        assert!(registry.reflection().get("javax.sql.DataSource").unwrap().is_empty());
        assert!(!registry.reflection().contains("int"));
    }

    #[test]
    fn test_empty_registrar_does_nothing() {
        let container = DefaultContainer::new().with_property_source(PropertySource::new("app", "classpath:app.properties"));
        let registrar = NativeConfigurationRegistrar::empty(Arc::new(container));
        let mut registry = NativeConfigurationRegistry::new();
        registrar.process_container(&mut registry).unwrap();
        registrar.process_components(&mut registry, &[InstanceDescriptor::new("a", "com.example.A")]).unwrap();
        assert_eq!(registry, NativeConfigurationRegistry::new());
    }

    struct SerializableComponents;

    impl ComponentConfigurationProcessor for SerializableComponents {
        fn process(&self, registry: &mut NativeConfigurationRegistry, _container: &dyn Container, descriptors: &[InstanceDescriptor]) -> GeneratorResult<()> {
            for descriptor in descriptors {
                registry.serialization_mut().add(descriptor.user_type.clone());
            }
            Ok(())
        }

        fn name(&self) -> &'static str {
            "serializable-components"
        }
    }

    #[test]
    fn test_extra_component_processor_runs() {
        let registrar = NativeConfigurationRegistrar::empty(Arc::new(DefaultContainer::new())).with_component_processor(Arc::new(SerializableComponents));
        let mut registry = NativeConfigurationRegistry::new();
        registrar.process_components(&mut registry, &[InstanceDescriptor::new("a", "com.example.A")]).unwrap();
        assert_eq!(registry.serialization().to_serialization_descriptors().len(), 1);
    }
}

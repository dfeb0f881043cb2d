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

//! Generator behavior against mocked collaborators

mod common;

use bootgen_codegen::code::CodeBlock;
use bootgen_codegen::writer::default_suppliers;
use bootgen_codegen::{
    BootstrapGenerator, BootstrapWriterContext, ComponentSelector, ContainerAware, GenerationConfig, GenerationError, GeneratorResult, InstanceDescriptor, RegistrationWriter,
    RegistrationWriterSupplier,
};
use bootgen_core::{ComponentDefinition, Container, ContainerError, ContainerMetadata, ContainerResult, TypeSystem};
use common::*;
use mockall::mock;
use std::sync::{Arc, Mutex};

mock! {
    pub TestContainer {}

    impl Container for TestContainer {
        fn definition_names(&self) -> Vec<String>;
        fn merged_definition(&self, name: &str) -> ContainerResult<ComponentDefinition>;
        fn metadata(&self) -> &ContainerMetadata;
        fn type_system(&self) -> &TypeSystem;
    }
}

mock! {
    pub Selector {}

    impl ComponentSelector for Selector {
        fn select(&self, name: &str, definition: &ComponentDefinition) -> GeneratorResult<bool>;
    }
}

fn container_with(names: Vec<&'static str>) -> MockTestContainer {
    let mut container = MockTestContainer::new();
    container.expect_definition_names().returning(move || names.iter().map(|n| n.to_string()).collect());
    container.expect_metadata().return_const(ContainerMetadata::default());
    container.expect_type_system().return_const(TypeSystem::new());
    container
}

#[test]
fn test_container_error_propagates() {
    init_tracing();
    let mut container = container_with(vec!["ghost"]);
    container.expect_merged_definition().returning(|name| Err(ContainerError::NoSuchComponent(name.to_string())));

    let mut generator = BootstrapGenerator::new(GenerationConfig::default());
    let error = generator.generate(Arc::new(container), PACKAGE).unwrap_err();
    assert!(matches!(error, GenerationError::Container(ContainerError::NoSuchComponent(ref name)) if name == "ghost"));
}

#[test]
fn test_selector_sees_every_component_in_order() {
    init_tracing();
    let mut container = container_with(vec!["first", "second"]);
    container.expect_merged_definition().returning(|name| Ok(ComponentDefinition::of_type(format!("com.example.{}", name))));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&seen);
    let mut selector = MockSelector::new();
    selector.expect_select().times(2).returning(move |name, _| {
        recorded.lock().unwrap().push(name.to_string());
        Ok(false)
    });

    let mut generator = BootstrapGenerator::new(GenerationConfig::components_only()).with_selector(Box::new(selector));
    let result = generator.generate(Arc::new(container), PACKAGE).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["first".to_string(), "second".to_string()]);
    assert_eq!(result.stats.skipped, 2);
    assert!(!result.source_files[0].content.contains("registerBean"));
}

#[test]
fn test_selector_error_aborts() {
    init_tracing();
    let mut container = container_with(vec!["a"]);
    container.expect_merged_definition().returning(|_| Ok(ComponentDefinition::of_type("com.example.A")));
    let mut selector = MockSelector::new();
    selector.expect_select().returning(|name, _| Err(GenerationError::invalid_definition(name, "rejected")));

    let mut generator = BootstrapGenerator::new(GenerationConfig::default()).with_selector(Box::new(selector));
    assert!(matches!(generator.generate(Arc::new(container), PACKAGE), Err(GenerationError::InvalidDefinition { .. })));
}

/// Supplier that records the container it was given and writes a marker comment
#[derive(Default)]
struct RecordingSupplier {
    container: Option<Arc<dyn Container>>,
}

impl ContainerAware for RecordingSupplier {
    fn set_container(&mut self, container: Arc<dyn Container>) {
        self.container = Some(container);
    }
}

impl RegistrationWriterSupplier for RecordingSupplier {
    fn get(&self, name: &str, definition: &ComponentDefinition) -> Option<Box<dyn RegistrationWriter>> {
        let container = self.container.as_ref()?;
        let names = container.definition_names().len();
        Some(Box::new(MarkerWriter { descriptor: InstanceDescriptor::new(name, definition.bean_class.clone()?), names }))
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn as_container_aware(&mut self) -> Option<&mut dyn ContainerAware> {
        Some(self)
    }
}

struct MarkerWriter {
    descriptor: InstanceDescriptor,
    names: usize,
}

impl RegistrationWriter for MarkerWriter {
    fn write_registration(&self, _context: &mut BootstrapWriterContext, code: &mut CodeBlock) -> GeneratorResult<()> {
        code.add_comment(format!("{} of {}", self.descriptor.component_name, self.names));
        Ok(())
    }

    fn instance_descriptor(&self) -> &InstanceDescriptor {
        &self.descriptor
    }
}

#[test]
fn test_container_is_injected_into_aware_suppliers() {
    init_tracing();
    let mut container = container_with(vec!["a", "b"]);
    container.expect_merged_definition().returning(|name| Ok(ComponentDefinition::of_type(format!("com.example.{}", name.to_uppercase()))));

    let mut suppliers: Vec<Box<dyn RegistrationWriterSupplier>> = vec![Box::new(RecordingSupplier::default())];
    suppliers.extend(default_suppliers());
    let mut generator = BootstrapGenerator::new(GenerationConfig::components_only()).with_suppliers(suppliers);
    let result = generator.generate(Arc::new(container), PACKAGE).unwrap();

    let content = &result.source_files[0].content;
    assert!(content.contains("// a of 2"));
    assert!(content.contains("// b of 2"));
    assert!(!content.contains("registerBean"));
    assert_eq!(result.stats.written, 2);
}

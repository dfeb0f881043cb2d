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

//! Bootstrap generation engine

use crate::code::{CodeBlock, MethodSpec, Modifier};
use crate::config::{GenerationConfig, is_package_name};
use crate::context::BootstrapWriterContext;
use crate::error::{GenerationError, GeneratorResult};
use crate::event::EventListenerRegistrationGenerator;
use crate::infrastructure::InfrastructureWriter;
use crate::names;
use crate::registrar::{ComponentConfigurationProcessor, ContainerConfigurationProcessor, NativeConfigurationRegistrar};
use crate::result::{BootstrapGenerationResult, GenerationStats};
use crate::selector::{ComponentSelector, DefaultComponentSelector};
use crate::writer::{InstanceDescriptor, RegistrationWriter, RegistrationWriterSupplier, default_suppliers};
use bootgen_core::{ComponentDefinition, Container, NativeConfigurationRegistry, NativeHint};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Turns a populated container into bootstrap sources and native configuration
pub struct BootstrapGenerator {
    config: GenerationConfig,
    suppliers: Vec<Box<dyn RegistrationWriterSupplier>>,
    selector: Box<dyn ComponentSelector>,
    hints: Vec<NativeHint>,
    container_processors: Vec<Arc<dyn ContainerConfigurationProcessor>>,
    component_processors: Vec<Arc<dyn ComponentConfigurationProcessor>>,
}

impl BootstrapGenerator {
    /// Generator with the built-in suppliers and a selector built from `config`
    pub fn new(config: GenerationConfig) -> Self {
        let selector = DefaultComponentSelector::from_config(&config);
        Self { config, suppliers: default_suppliers(), selector: Box::new(selector), hints: Vec::new(), container_processors: Vec::new(), component_processors: Vec::new() }
    }

    /// Replace the supplier chain; suppliers are consulted in order
    pub fn with_suppliers(mut self, suppliers: Vec<Box<dyn RegistrationWriterSupplier>>) -> Self {
        self.suppliers = suppliers;
        self
    }

    pub fn with_selector(mut self, selector: Box<dyn ComponentSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Add a hint on top of the built-in hint set
    pub fn with_hint(mut self, hint: NativeHint) -> Self {
        self.hints.push(hint);
        self
    }

    /// Run `processor` after the built-in container processors
    pub fn with_container_processor(mut self, processor: Arc<dyn ContainerConfigurationProcessor>) -> Self {
        self.container_processors.push(processor);
        self
    }

    /// Run `processor` after the built-in component processors
    pub fn with_component_processor(mut self, processor: Arc<dyn ComponentConfigurationProcessor>) -> Self {
        self.component_processors.push(processor);
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the bootstrap class for `package_name`
    ///
    /// Components the suppliers cannot handle are logged and skipped. Any other
    /// failure aborts the run without a partial result.
    #[instrument(skip(self, container), fields(bootstrap_class = %self.config.bootstrap_class_name))]
    pub fn generate(&mut self, container: Arc<dyn Container>, package_name: &str) -> GeneratorResult<BootstrapGenerationResult> {
        self.config.validate().map_err(GenerationError::ConfigurationError)?;
        if !is_package_name(package_name) {
            return Err(GenerationError::ConfigurationError(format!("Invalid package name '{}'", package_name)));
        }

        let names = container.definition_names();
        info!(components = names.len(), "Starting bootstrap generation");

        let registry = NativeConfigurationRegistry::with_options(self.config.options.clone());
        let mut context = BootstrapWriterContext::with_registry(package_name, &self.config.bootstrap_class_name, registry);
        for supplier in &mut self.suppliers {
            if let Some(aware) = supplier.as_container_aware() {
                aware.set_container(Arc::clone(&container));
            }
        }

        let mut code = CodeBlock::new();
        if self.config.include_infrastructure {
            code.add_comment("infrastructure");
            InfrastructureWriter::new(container.metadata()).write_infrastructure(&mut code)?;
            code.add_blank_line();
        }

        let mut stats = GenerationStats { components: names.len(), ..GenerationStats::default() };
        let mut descriptors = Vec::new();
        for name in &names {
            let definition = container.merged_definition(name)?;
            if !self.selector.select(name, &definition)? {
                debug!(component = %name, "Component not selected");
                stats.skipped += 1;
                continue;
            }
            match self.resolve_writer(name, &definition) {
                Some(writer) => {
                    writer.write_registration(&mut context, &mut code)?;
                    descriptors.push(writer.instance_descriptor().clone());
                    stats.written += 1;
                }
                None => {
                    error!("Failed to handle component {} with definition {}", name, definition);
                    stats.unhandled += 1;
                }
            }
        }

        self.register_native_configuration(Arc::clone(&container), context.registry_mut(), &descriptors)?;

        if self.config.include_event_listeners {
            EventListenerRegistrationGenerator::new(&container.metadata().event_listeners).write_event_listeners_registration(&mut context, &mut code)?;
        }

        let initialize = MethodSpec::new("initialize")
            .with_modifiers([Modifier::Public])
            .annotated_with(names::OVERRIDE)
            .with_parameter(names::GENERIC_APPLICATION_CONTEXT, "context")
            .with_body(code);
        context.main_bootstrap_class_mut().add_method(initialize);

        let source_files = context.to_source_files();
        let result = BootstrapGenerationResult::new(source_files, context.registry(), stats);
        info!(
            source_files = result.source_files.len(),
            written = result.stats.written,
            skipped = result.stats.skipped,
            unhandled = result.stats.unhandled,
            reflection = result.reflection.len(),
            "Bootstrap generation complete"
        );
        Ok(result)
    }

    /// First writer offered by the supplier chain
    fn resolve_writer(&self, name: &str, definition: &ComponentDefinition) -> Option<Box<dyn RegistrationWriter>> {
        self.suppliers.iter().find_map(|supplier| {
            let writer = supplier.get(name, definition)?;
            debug!(component = %name, supplier = supplier.name(), "Resolved registration writer");
            Some(writer)
        })
    }

    fn register_native_configuration(&self, container: Arc<dyn Container>, registry: &mut NativeConfigurationRegistry, descriptors: &[InstanceDescriptor]) -> GeneratorResult<()> {
        let mut registrar = NativeConfigurationRegistrar::with_hints(container, self.hints.clone());
        for processor in &self.container_processors {
            registrar = registrar.with_container_processor(Arc::clone(processor));
        }
        for processor in &self.component_processors {
            registrar = registrar.with_component_processor(Arc::clone(processor));
        }
        registrar.process_container(registry)?;
        registrar.process_components(registry, descriptors)
    }
}

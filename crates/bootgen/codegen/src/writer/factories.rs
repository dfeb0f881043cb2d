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

//! Writers for components discovered from factories files

use super::{InstanceDescriptor, RegistrationWriter, RegistrationWriterSupplier};
use crate::code::{CodeArg, CodeBlock};
use crate::context::BootstrapWriterContext;
use crate::error::GeneratorResult;
use crate::names;
use bootgen_core::types::{ExecutableRef, TypeName};
use bootgen_core::ComponentDefinition;

/// Handles test execution listeners declared in factories files
#[derive(Debug, Default)]
pub struct TestExecutionListenerWriterSupplier;

impl TestExecutionListenerWriterSupplier {
    pub fn new() -> Self {
        Self
    }
}

impl RegistrationWriterSupplier for TestExecutionListenerWriterSupplier {
    fn get(&self, name: &str, definition: &ComponentDefinition) -> Option<Box<dyn RegistrationWriter>> {
        if !definition.is_factories_entry_for(names::TEST_EXECUTION_LISTENER) {
            return None;
        }
        let implementation = definition.bean_class.clone()?;
        Some(Box::new(TestExecutionListenerWriter::new(name, implementation)))
    }

    fn name(&self) -> &str {
        "test-execution-listener-factories"
    }
}

/// Adds a listener implementation to the static factories registry
pub struct TestExecutionListenerWriter {
    implementation: TypeName,
    descriptor: InstanceDescriptor,
}

impl TestExecutionListenerWriter {
    pub fn new(name: &str, implementation: TypeName) -> Self {
        let descriptor = InstanceDescriptor::new(name, implementation.clone()).with_instance_creator(ExecutableRef::default_constructor(implementation.clone()));
        Self { implementation, descriptor }
    }
}

impl RegistrationWriter for TestExecutionListenerWriter {
    fn write_registration(&self, context: &mut BootstrapWriterContext, code: &mut CodeBlock) -> GeneratorResult<()> {
        code.add_statement(
            "$T.names.add($T.class, $S)",
            [CodeArg::ty(names::STATIC_SPRING_FACTORIES), CodeArg::ty(names::TEST_EXECUTION_LISTENER), CodeArg::string(self.implementation.as_str())],
        );
        let implementation = self.implementation.clone();
        context.describe_reflection(|reflection| {
            reflection.add_executable(ExecutableRef::default_constructor(implementation));
        });
        Ok(())
    }

    fn instance_descriptor(&self) -> &InstanceDescriptor {
        &self.descriptor
    }
}

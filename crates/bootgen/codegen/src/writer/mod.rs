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

//! Registration writers
//!
//! Suppliers are consulted in order for each selected component; the first
//! one that returns a writer owns that component's registration code.

pub mod default;
pub mod descriptor;
pub mod factories;

use crate::code::CodeBlock;
use crate::context::BootstrapWriterContext;
use crate::error::GeneratorResult;
use bootgen_core::{ComponentDefinition, Container};
use std::sync::Arc;

pub use default::{DefaultRegistrationWriter, DefaultRegistrationWriterSupplier};
pub use descriptor::{InjectionPoint, InstanceDescriptor};
pub use factories::{TestExecutionListenerWriter, TestExecutionListenerWriterSupplier};

/// Writes the registration code for one component
pub trait RegistrationWriter {
    /// Append registration code, recording any native configuration it needs
    fn write_registration(&self, context: &mut BootstrapWriterContext, code: &mut CodeBlock) -> GeneratorResult<()>;

    /// Description of how the component's instance is created
    fn instance_descriptor(&self) -> &InstanceDescriptor;
}

/// Optional capability for suppliers that need to read the container
pub trait ContainerAware {
    fn set_container(&mut self, container: Arc<dyn Container>);
}

/// Produces a writer for the components it recognizes
pub trait RegistrationWriterSupplier: Send + Sync {
    /// `None` when this supplier does not handle the component
    fn get(&self, name: &str, definition: &ComponentDefinition) -> Option<Box<dyn RegistrationWriter>>;

    /// Supplier name used in logs
    fn name(&self) -> &str;

    fn as_container_aware(&mut self) -> Option<&mut dyn ContainerAware> {
        None
    }
}

/// Built-in suppliers in resolution order
pub fn default_suppliers() -> Vec<Box<dyn RegistrationWriterSupplier>> {
    vec![Box::new(TestExecutionListenerWriterSupplier::new()), Box::new(DefaultRegistrationWriterSupplier::new())]
}

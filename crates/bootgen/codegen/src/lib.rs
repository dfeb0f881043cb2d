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

//! Bootgen code generation
//!
//! Turns a populated component container into the source of a context
//! bootstrap class plus the native-image configuration that class needs.
//!
//! ## Pipeline
//!
//! 1. **Infrastructure**: profiles, property sources and the autowire resolver
//! 2. **Components**: each selected component is handed to the first supplier
//!    that offers a [`RegistrationWriter`]
//! 3. **Registrar**: hints and injection points feed the native registry
//! 4. **Event listeners**: one registration listing every annotated listener
//! 5. **Packaging**: bootstrap classes are rendered and the registry snapshotted
//!
//! ```ignore
//! let mut generator = BootstrapGenerator::new(GenerationConfig::default());
//! let result = generator.generate(Arc::new(container), "com.example")?;
//! let reflect_config = result.descriptor_json(DescriptorKind::Reflection)?;
//! ```

pub mod code;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod generator;
pub mod infrastructure;
pub mod names;
pub mod registrar;
pub mod result;
pub mod selector;
pub mod writer;

pub use config::GenerationConfig;
pub use context::{BootstrapClass, BootstrapWriterContext};
pub use error::{GenerationError, GeneratorResult};
pub use generator::BootstrapGenerator;
pub use registrar::{ComponentConfigurationProcessor, ContainerConfigurationProcessor, NativeConfigurationRegistrar};
pub use result::{BootstrapGenerationResult, DescriptorKind, GenerationStats};
pub use selector::{ComponentSelector, DefaultComponentSelector};
pub use writer::{ContainerAware, InstanceDescriptor, RegistrationWriter, RegistrationWriterSupplier};

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

//! Bootgen core
//!
//! Shared model for context bootstrap generation:
//!
//! - `types`: read-only type metadata (types, members, declaring-type lookups)
//! - `container`: the component container boundary and an in-memory implementation
//! - `nativex`: the native configuration registry (reflection, resources, proxies,
//!   initialization, serialization, JNI, options) and its descriptor snapshots
//! - `hints`: declarative native hints applied when a trigger type is present

pub mod container;
pub mod error;
pub mod hints;
pub mod nativex;
pub mod types;

pub use container::{
    ArgumentValue, ComponentDefinition, ComponentSource, Container, ContainerMetadata, DefaultContainer, EventListenerMethod, InstanceSource, PropertySource, PropertyValue, Role,
    Scope,
};
pub use error::{ContainerError, ContainerResult};
pub use hints::{NativeHint, TypeHint};
pub use nativex::{NativeConfigurationRegistry, TypeAccess};
pub use types::{ExecutableRef, FieldRef, TypeDescriptor, TypeKind, TypeName, TypeSystem, Visibility};

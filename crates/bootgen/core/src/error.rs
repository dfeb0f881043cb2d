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

//! Error types for container access

use thiserror::Error;

/// Errors raised by a component container
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("No component named '{0}' is defined")]
    NoSuchComponent(String),

    #[error("Component '{name}' declares unknown parent '{parent}'")]
    MissingParent { name: String, parent: String },

    #[error("Cyclic parent chain detected for component '{0}'")]
    CyclicParent(String),
}

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;

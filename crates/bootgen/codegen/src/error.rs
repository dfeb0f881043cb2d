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

//! Error types for bootstrap generation

use bootgen_core::ContainerError;
use thiserror::Error;

/// Errors that abort a generation run
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid definition for component '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("Failed to write registration for component '{name}': {reason}")]
    WriterFailed { name: String, reason: String },

    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenerationError {
    pub fn invalid_definition(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GenerationError::InvalidDefinition { name: name.into(), reason: reason.into() }
    }

    pub fn writer_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GenerationError::WriterFailed { name: name.into(), reason: reason.into() }
    }
}

/// Result type for generation operations
pub type GeneratorResult<T> = Result<T, GenerationError>;

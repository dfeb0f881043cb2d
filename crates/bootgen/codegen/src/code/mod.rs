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

//! Source code model
//!
//! A small builder for Java sources: fragments with type placeholders, method
//! bodies, methods, classes and rendered files with resolved imports.

pub mod block;
pub mod method;
pub mod source;
pub mod writer;

pub use block::{Code, CodeArg, CodeBlock, QualifiedNames, TypeRenderer, quote};
pub use method::{MethodSpec, Modifier, ParameterSpec};
pub use source::{ImportResolver, SourceFile, TypeSpec};
pub use writer::CodeWriter;

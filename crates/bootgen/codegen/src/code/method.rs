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

//! Method specifications

use super::block::{CodeBlock, TypeRenderer};
use super::writer::CodeWriter;
use bootgen_core::TypeName;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

/// Render modifiers in declaration order (access first)
pub(crate) fn render_modifiers(modifiers: &[Modifier]) -> String {
    let mut sorted = modifiers.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted.iter().map(|m| format!("{} ", m.as_str())).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub type_name: TypeName,
    pub name: String,
}

/// A generated method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<TypeName>,
    /// `None` renders as `void`
    pub return_type: Option<TypeName>,
    pub parameters: Vec<ParameterSpec>,
    pub body: CodeBlock,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), modifiers: Vec::new(), annotations: Vec::new(), return_type: None, parameters: Vec::new(), body: CodeBlock::new() }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn annotated_with(mut self, annotation: impl Into<TypeName>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn returning(mut self, return_type: impl Into<TypeName>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_parameter(mut self, type_name: impl Into<TypeName>, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterSpec { type_name: type_name.into(), name: name.into() });
        self
    }

    pub fn with_body(mut self, body: CodeBlock) -> Self {
        self.body = body;
        self
    }

    pub fn referenced_types(&self) -> BTreeSet<TypeName> {
        let mut types = self.body.referenced_types();
        types.extend(self.annotations.iter().cloned());
        types.extend(self.return_type.iter().cloned());
        types.extend(self.parameters.iter().map(|p| p.type_name.clone()));
        types
    }

    pub fn render(&self, writer: &mut CodeWriter, types: &dyn TypeRenderer) {
        for annotation in &self.annotations {
            writer.write_line(&format!("@{}", types.render_type(annotation)));
        }
        let return_type = self.return_type.as_ref().map(|t| types.render_type(t)).unwrap_or_else(|| "void".to_string());
        let parameters = self.parameters.iter().map(|p| format!("{} {}", types.render_type(&p.type_name), p.name)).collect::<Vec<_>>().join(", ");
        writer.write_line(&format!("{}{} {}({}) {{", render_modifiers(&self.modifiers), return_type, self.name, parameters));
        writer.indent();
        self.body.render(writer, types);
        writer.unindent();
        writer.write_line("}");
    }
}

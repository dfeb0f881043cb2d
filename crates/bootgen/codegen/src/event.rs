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

//! Event listener registration

use crate::code::{Code, CodeArg, CodeBlock};
use crate::context::BootstrapWriterContext;
use crate::error::GeneratorResult;
use crate::names;
use bootgen_core::EventListenerMethod;
use tracing::debug;

/// Registers the annotated event listener methods found by the scanner
pub struct EventListenerRegistrationGenerator<'a> {
    listeners: &'a [EventListenerMethod],
}

impl<'a> EventListenerRegistrationGenerator<'a> {
    pub fn new(listeners: &'a [EventListenerMethod]) -> Self {
        Self { listeners }
    }

    pub fn write_event_listeners_registration(&self, context: &mut BootstrapWriterContext, code: &mut CodeBlock) -> GeneratorResult<()> {
        if self.listeners.is_empty() {
            return Ok(());
        }
        debug!(listeners = self.listeners.len(), "Writing event listener registration");

        code.add_comment("event listeners");
        code.add_line(
            "context.registerBean($S, $T.class, () -> new $T(context, $T.of(",
            [CodeArg::string(names::EVENT_LISTENER_REGISTRAR), CodeArg::ty(names::EVENT_LISTENER_REGISTRAR), CodeArg::ty(names::EVENT_LISTENER_REGISTRAR), CodeArg::ty(names::LIST)],
        );
        code.indent();
        for (index, listener) in self.listeners.iter().enumerate() {
            let parameter_classes = Code::join(listener.method.parameter_types().iter().map(|p| Code::of(", $T.class", [CodeArg::ty(p.clone())])), "");
            let mut line = Code::of(
                "$T.forBean($S, $T.class).annotatedMethod($S$L)",
                [
                    CodeArg::ty(names::EVENT_LISTENER_METADATA),
                    CodeArg::string(&listener.component_name),
                    CodeArg::ty(listener.component_type.clone()),
                    CodeArg::string(listener.method.name()),
                    CodeArg::code(parameter_classes),
                ],
            );
            if index + 1 < self.listeners.len() {
                line.append_text(",");
            }
            code.add_line_code(line);

            let method = listener.method.clone();
            context.describe_reflection(|reflection| {
                reflection.add_executable(method);
            });
        }
        code.unindent();
        code.add_statement(")))", []);
        Ok(())
    }
}

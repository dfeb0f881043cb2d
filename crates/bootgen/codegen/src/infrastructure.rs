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

//! Application context infrastructure

use crate::code::{Code, CodeArg, CodeBlock};
use crate::error::GeneratorResult;
use crate::names;
use bootgen_core::ContainerMetadata;

/// Writes the context setup that precedes component registrations
pub struct InfrastructureWriter<'a> {
    metadata: &'a ContainerMetadata,
}

impl<'a> InfrastructureWriter<'a> {
    pub fn new(metadata: &'a ContainerMetadata) -> Self {
        Self { metadata }
    }

    pub fn write_infrastructure(&self, code: &mut CodeBlock) -> GeneratorResult<()> {
        code.add_statement("context.getDefaultListableBeanFactory().setAutowireCandidateResolver(new $T())", [CodeArg::ty(names::AUTOWIRE_CANDIDATE_RESOLVER)]);

        if !self.metadata.active_profiles.is_empty() {
            let profiles = Code::join(self.metadata.active_profiles.iter().map(|p| Code::of("$S", [CodeArg::string(p)])), ", ");
            code.add_statement("context.getEnvironment().setActiveProfiles($L)", [CodeArg::code(profiles)]);
        }

        for source in &self.metadata.property_sources {
            code.add_statement(
                "context.getEnvironment().getPropertySources().addLast(new $T($S, $S))",
                [CodeArg::ty(names::RESOURCE_PROPERTY_SOURCE), CodeArg::string(&source.name), CodeArg::string(&source.location)],
            );
        }
        Ok(())
    }
}

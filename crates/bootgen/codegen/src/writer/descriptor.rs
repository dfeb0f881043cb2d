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

//! Instance descriptors produced by registration writers

use bootgen_core::types::{ExecutableRef, TypeName};

/// Property written through a setter after instantiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPoint {
    pub property_name: String,
    pub write_method: ExecutableRef,
    pub required: bool,
}

/// How a written component is created and initialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    pub component_name: String,
    pub user_type: TypeName,
    /// Constructor or factory method, `None` when it could not be resolved
    pub instance_creator: Option<ExecutableRef>,
    pub injection_points: Vec<InjectionPoint>,
    pub init_methods: Vec<ExecutableRef>,
    pub destroy_methods: Vec<ExecutableRef>,
}

impl InstanceDescriptor {
    pub fn new(component_name: impl Into<String>, user_type: impl Into<TypeName>) -> Self {
        Self {
            component_name: component_name.into(),
            user_type: user_type.into(),
            instance_creator: None,
            injection_points: Vec::new(),
            init_methods: Vec::new(),
            destroy_methods: Vec::new(),
        }
    }

    pub fn with_instance_creator(mut self, creator: ExecutableRef) -> Self {
        self.instance_creator = Some(creator);
        self
    }

    pub fn with_injection_point(mut self, property_name: impl Into<String>, write_method: ExecutableRef, required: bool) -> Self {
        self.injection_points.push(InjectionPoint { property_name: property_name.into(), write_method, required });
        self
    }

    pub fn with_init_method(mut self, method: ExecutableRef) -> Self {
        self.init_methods.push(method);
        self
    }

    pub fn with_destroy_method(mut self, method: ExecutableRef) -> Self {
        self.destroy_methods.push(method);
        self
    }
}

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

//! Shared fixtures for the integration tests

#![allow(dead_code)]

use bootgen_core::types::{ConstructorInfo, MethodInfo, TypeDescriptor};
use bootgen_core::{ArgumentValue, ComponentDefinition, DefaultContainer, EventListenerMethod, ExecutableRef, PropertySource, PropertyValue, TypeName, Visibility};

pub const PACKAGE: &str = "com.example";
pub const TEST_EXECUTION_LISTENER: &str = "org.springframework.test.context.TestExecutionListener";
pub const LISTENER_IMPL: &str = "org.springframework.aot.factories.DemoTestExecutionListener";
pub const TRANSACTIONAL: &str = "org.springframework.transaction.annotation.Transactional";

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::DEBUG).try_init();
}

pub fn type_system() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::class("com.example.Repository").with_method(MethodInfo::new("setUrl", vec![TypeName::new("java.lang.String")])),
        TypeDescriptor::class("com.example.OrderService")
            .annotated_with(TRANSACTIONAL)
            .with_constructor(ConstructorInfo::new(vec![TypeName::new("com.example.Repository")]))
            .with_method(MethodInfo::new("start", vec![])),
        TypeDescriptor::class("com.example.internal.Cache")
            .with_visibility(Visibility::Package)
            .with_constructor(ConstructorInfo::new(vec![]).with_visibility(Visibility::Package)),
    ]
}

/// Container exercising infrastructure, components, hints and listeners
pub fn sample_container() -> DefaultContainer {
    let mut container = DefaultContainer::new()
        .with_property_source(PropertySource::new("application", "classpath:application.properties"))
        .with_active_profile("native")
        .with_component("repository", ComponentDefinition::of_type("com.example.Repository").with_property(PropertyValue::literal("url", "jdbc:h2:mem")))
        .with_component("orderService", ComponentDefinition::of_type("com.example.OrderService").with_init_method("start"))
        .with_component("cache", ComponentDefinition::of_type("com.example.internal.Cache").as_lazy())
        .with_component("listener", ComponentDefinition::from_factories(TEST_EXECUTION_LISTENER, LISTENER_IMPL))
        .with_event_listener(EventListenerMethod {
            component_name: "orderService".to_string(),
            component_type: TypeName::new("com.example.OrderService"),
            method: ExecutableRef::method("com.example.OrderService", "onReady", vec![TypeName::new("com.example.ReadyEvent")]),
        });
    for descriptor in type_system() {
        container.types_mut().register(descriptor);
    }
    container
}

/// Definition whose constructor argument points at another component
pub fn referencing(type_name: &str, component: &str) -> ComponentDefinition {
    ComponentDefinition::of_type(type_name).with_constructor_argument(0, ArgumentValue::Reference(component.to_string()))
}

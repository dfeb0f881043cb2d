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

//! Well-known type names referenced by generated code

pub const APPLICATION_CONTEXT_INITIALIZER: &str = "org.springframework.context.ApplicationContextInitializer";
pub const GENERIC_APPLICATION_CONTEXT: &str = "org.springframework.context.support.GenericApplicationContext";
pub const OVERRIDE: &str = "java.lang.Override";

pub const BEAN_DEFINITION: &str = "org.springframework.beans.factory.config.BeanDefinition";
pub const BEAN_UTILS: &str = "org.springframework.beans.BeanUtils";
pub const REFLECTION_UTILS: &str = "org.springframework.util.ReflectionUtils";
pub const AUTOWIRED: &str = "org.springframework.beans.factory.annotation.Autowired";

pub const ENVIRONMENT_TYPES: [&str; 2] = ["org.springframework.core.env.Environment", "org.springframework.core.env.ConfigurableEnvironment"];
pub const CONTEXT_TYPES: [&str; 6] = [
    "org.springframework.context.ApplicationContext",
    "org.springframework.context.ConfigurableApplicationContext",
    "org.springframework.context.support.GenericApplicationContext",
    "org.springframework.beans.factory.BeanFactory",
    "org.springframework.beans.factory.ListableBeanFactory",
    "org.springframework.core.io.ResourceLoader",
];

pub const AUTOWIRE_CANDIDATE_RESOLVER: &str = "org.springframework.context.annotation.ContextAnnotationAutowireCandidateResolver";
pub const RESOURCE_PROPERTY_SOURCE: &str = "org.springframework.core.io.support.ResourcePropertySource";

pub const STATIC_SPRING_FACTORIES: &str = "org.springframework.aot.StaticSpringFactories";
pub const TEST_EXECUTION_LISTENER: &str = "org.springframework.test.context.TestExecutionListener";

pub const EVENT_LISTENER_REGISTRAR: &str = "org.springframework.aot.context.event.EventListenerRegistrar";
pub const EVENT_LISTENER_METADATA: &str = "org.springframework.aot.context.event.EventListenerMetadata";
pub const LIST: &str = "java.util.List";

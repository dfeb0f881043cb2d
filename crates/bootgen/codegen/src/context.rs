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

//! Per-run writer context

use crate::code::{Code, CodeArg, MethodSpec, Modifier, SourceFile, TypeSpec};
use crate::names;
use bootgen_core::nativex::{NativeConfigurationRegistry, ReflectionConfiguration};
use bootgen_core::TypeName;
use std::collections::{BTreeMap, BTreeSet};

/// Generated bootstrap class for one package
#[derive(Debug, Clone)]
pub struct BootstrapClass {
    type_name: TypeName,
    is_main: bool,
    methods: Vec<MethodSpec>,
    method_names: BTreeSet<String>,
}

impl BootstrapClass {
    fn new(package_name: &str, class_name: &str, is_main: bool) -> Self {
        let type_name = if package_name.is_empty() { TypeName::new(class_name) } else { TypeName::new(format!("{}.{}", package_name, class_name)) };
        Self { type_name, is_main, methods: Vec::new(), method_names: BTreeSet::new() }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn package_name(&self) -> &str {
        self.type_name.package_name()
    }

    pub fn is_main(&self) -> bool {
        self.is_main
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.method_names.contains(name)
    }

    /// Reserve a unique method name: `base`, then `base1`, `base2`, ...
    pub fn allocate_method_name(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut counter = 1;
        while self.method_names.contains(&candidate) {
            candidate = format!("{}{}", base, counter);
            counter += 1;
        }
        self.method_names.insert(candidate.clone());
        candidate
    }

    pub fn add_method(&mut self, method: MethodSpec) {
        self.method_names.insert(method.name.clone());
        self.methods.push(method);
    }

    pub fn to_type_spec(&self) -> TypeSpec {
        let spec = TypeSpec::class(self.type_name.simple_name());
        let spec = if self.is_main {
            spec.with_modifiers([Modifier::Public]).implementing(Code::of(
                "$T<$T>",
                [CodeArg::ty(names::APPLICATION_CONTEXT_INITIALIZER), CodeArg::ty(names::GENERIC_APPLICATION_CONTEXT)],
            ))
        } else {
            spec.with_modifiers([Modifier::Public, Modifier::Final])
        };
        self.methods.iter().cloned().fold(spec, TypeSpec::with_method)
    }
}

/// Mutable state shared by every writer during one generation run
pub struct BootstrapWriterContext {
    package_name: String,
    class_name: String,
    main: BootstrapClass,
    others: BTreeMap<String, BootstrapClass>,
    registry: NativeConfigurationRegistry,
}

impl BootstrapWriterContext {
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::with_registry(package_name, class_name, NativeConfigurationRegistry::new())
    }

    pub fn with_registry(package_name: impl Into<String>, class_name: impl Into<String>, registry: NativeConfigurationRegistry) -> Self {
        let package_name = package_name.into();
        let class_name = class_name.into();
        let main = BootstrapClass::new(&package_name, &class_name, true);
        Self { package_name, class_name, main, others: BTreeMap::new(), registry }
    }

    /// Package of the main bootstrap class
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn main_bootstrap_class(&self) -> &BootstrapClass {
        &self.main
    }

    pub fn main_bootstrap_class_mut(&mut self) -> &mut BootstrapClass {
        &mut self.main
    }

    /// Bootstrap class of a package, created on first use
    pub fn bootstrap_class(&mut self, package_name: &str) -> &mut BootstrapClass {
        if package_name == self.package_name {
            return &mut self.main;
        }
        let class_name = &self.class_name;
        self.others.entry(package_name.to_string()).or_insert_with(|| BootstrapClass::new(package_name, class_name, false))
    }

    /// Name of the bootstrap class for a package, whether or not it exists yet
    pub fn bootstrap_class_name(&self, package_name: &str) -> TypeName {
        if package_name == self.package_name {
            return self.main.type_name().clone();
        }
        BootstrapClass::new(package_name, &self.class_name, false).type_name
    }

    pub fn has_bootstrap_class(&self, package_name: &str) -> bool {
        package_name == self.package_name || self.others.contains_key(package_name)
    }

    pub fn registry(&self) -> &NativeConfigurationRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut NativeConfigurationRegistry {
        &mut self.registry
    }

    /// Record reflective access requirements
    pub fn describe_reflection(&mut self, describe: impl FnOnce(&mut ReflectionConfiguration)) {
        describe(self.registry.reflection_mut());
    }

    /// Render every bootstrap class, main class first
    pub fn to_source_files(&self) -> Vec<SourceFile> {
        let main = SourceFile::render(&self.package_name, &self.main.to_type_spec());
        let others = self.others.iter().map(|(package, class)| SourceFile::render(package, &class.to_type_spec()));
        std::iter::once(main).chain(others).collect()
    }

    pub fn into_registry(self) -> NativeConfigurationRegistry {
        self.registry
    }
}

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

//! Type specifications and source file rendering

use super::block::{Code, TypeRenderer};
use super::method::{Modifier, MethodSpec, render_modifiers};
use super::writer::CodeWriter;
use bootgen_core::TypeName;
use std::collections::{BTreeMap, BTreeSet};

/// A generated top-level class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub superinterfaces: Vec<Code>,
    pub methods: Vec<MethodSpec>,
}

impl TypeSpec {
    pub fn class(name: impl Into<String>) -> Self {
        Self { name: name.into(), modifiers: Vec::new(), superinterfaces: Vec::new(), methods: Vec::new() }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn implementing(mut self, interface: Code) -> Self {
        self.superinterfaces.push(interface);
        self
    }

    pub fn with_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn referenced_types(&self) -> BTreeSet<TypeName> {
        let mut types = BTreeSet::new();
        for interface in &self.superinterfaces {
            types.extend(interface.referenced_types().cloned());
        }
        for method in &self.methods {
            types.extend(method.referenced_types());
        }
        types
    }
}

/// Rendered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package_name: String,
    pub type_name: TypeName,
    pub content: String,
}

impl SourceFile {
    /// Render a type into a compilation unit of the given package
    pub fn render(package_name: &str, spec: &TypeSpec) -> SourceFile {
        let type_name = qualify(package_name, &spec.name);
        let resolver = ImportResolver::new(package_name, &type_name, &spec.referenced_types());

        let mut writer = CodeWriter::new();
        if !package_name.is_empty() {
            writer.write_line(&format!("package {};", package_name));
            writer.blank_line();
        }
        let imports = resolver.imports();
        if !imports.is_empty() {
            for import in imports {
                writer.write_line(&format!("import {};", import));
            }
            writer.blank_line();
        }

        let mut header = format!("{}class {}", render_modifiers(&spec.modifiers), spec.name);
        if !spec.superinterfaces.is_empty() {
            let interfaces = spec.superinterfaces.iter().map(|i| i.render(&resolver)).collect::<Vec<_>>().join(", ");
            header.push_str(&format!(" implements {}", interfaces));
        }
        header.push_str(" {");
        writer.write_line(&header);
        writer.indent();
        for (index, method) in spec.methods.iter().enumerate() {
            if index > 0 {
                writer.blank_line();
            }
            method.render(&mut writer, &resolver);
        }
        writer.unindent();
        writer.write_line("}");

        SourceFile { package_name: package_name.to_string(), type_name, content: writer.into_string() }
    }

    /// Path relative to a source root, e.g. `com/example/Foo.java`
    pub fn relative_path(&self) -> String {
        format!("{}.java", self.type_name.as_str().replace('.', "/"))
    }
}

fn qualify(package_name: &str, simple_name: &str) -> TypeName {
    if package_name.is_empty() { TypeName::new(simple_name) } else { TypeName::new(format!("{}.{}", package_name, simple_name)) }
}

/// Strip array dimensions, returning the element type and the dimension count
fn element_type(name: &TypeName) -> (TypeName, usize) {
    let base = name.as_str().trim_end_matches("[]");
    let dimensions = (name.as_str().len() - base.len()) / 2;
    (TypeName::new(base), dimensions)
}

/// Decides which types are imported and how each type is written in one file
///
/// Types in `java.lang` and in the file's own package need no import. When two
/// referenced top-level types share a simple name, both are written fully
/// qualified.
pub struct ImportResolver {
    imports: BTreeSet<String>,
    qualified: BTreeSet<TypeName>,
}

impl ImportResolver {
    pub fn new(package_name: &str, own_type: &TypeName, referenced: &BTreeSet<TypeName>) -> Self {
        let mut by_simple_name: BTreeMap<String, BTreeSet<TypeName>> = BTreeMap::new();
        by_simple_name.entry(own_type.simple_name().to_string()).or_default().insert(own_type.clone());
        for name in referenced {
            let (element, _) = element_type(name);
            if element.is_primitive() {
                continue;
            }
            let top = element.top_level();
            by_simple_name.entry(top.simple_name().to_string()).or_default().insert(top);
        }

        let mut imports = BTreeSet::new();
        let mut qualified = BTreeSet::new();
        for tops in by_simple_name.into_values() {
            if tops.len() > 1 {
                qualified.extend(tops.into_iter().filter(|t| t != own_type));
                continue;
            }
            for top in tops {
                let package = top.package_name();
                if package != package_name && package != "java.lang" && !package.is_empty() {
                    imports.insert(top.as_str().to_string());
                }
            }
        }
        Self { imports, qualified }
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }
}

impl TypeRenderer for ImportResolver {
    fn render_type(&self, name: &TypeName) -> String {
        let (element, dimensions) = element_type(name);
        let mut rendered = if element.is_primitive() || self.qualified.contains(&element.top_level()) {
            element.canonical_name()
        } else {
            element.binary_simple_name().replace('$', ".")
        };
        for _ in 0..dimensions {
            rendered.push_str("[]");
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::block::{CodeArg, CodeBlock};

    fn resolver(names: &[&str]) -> ImportResolver {
        let referenced = names.iter().map(|n| TypeName::new(*n)).collect();
        ImportResolver::new("com.example", &TypeName::new("com.example.Boot"), &referenced)
    }

    #[test]
    fn test_imports_skip_java_lang_and_same_package() {
        let resolver = resolver(&["java.lang.String", "com.example.Foo", "org.other.Bar", "int", "org.other.Outer$Inner[]"]);
        assert_eq!(resolver.imports().iter().cloned().collect::<Vec<_>>(), vec!["org.other.Bar".to_string(), "org.other.Outer".to_string()]);
        assert_eq!(resolver.render_type(&TypeName::new("java.lang.String")), "String");
        assert_eq!(resolver.render_type(&TypeName::new("org.other.Outer$Inner[]")), "Outer.Inner[]");
        assert_eq!(resolver.render_type(&TypeName::new("int")), "int");
    }

    #[test]
    fn test_clashing_simple_names_are_qualified() {
        let resolver = resolver(&["a.Foo", "b.Foo", "c.Boot"]);
        assert!(resolver.imports().is_empty());
        assert_eq!(resolver.render_type(&TypeName::new("a.Foo")), "a.Foo");
        assert_eq!(resolver.render_type(&TypeName::new("b.Foo")), "b.Foo");
        assert_eq!(resolver.render_type(&TypeName::new("c.Boot")), "c.Boot");
        assert_eq!(resolver.render_type(&TypeName::new("com.example.Boot")), "Boot");
    }

    #[test]
    fn test_render_source_file() {
        let mut body = CodeBlock::new();
        body.add_statement("$T.out.println($S)", [CodeArg::ty("java.lang.System"), CodeArg::string("hi")]);
        let spec = TypeSpec::class("Boot")
            .with_modifiers([Modifier::Public])
            .implementing(Code::of("$T<$T>", [CodeArg::ty("org.other.Initializer"), CodeArg::ty("org.other.Context")]))
            .with_method(MethodSpec::new("run").with_modifiers([Modifier::Public]).with_body(body));

        let file = SourceFile::render("com.example", &spec);
        assert_eq!(file.type_name.as_str(), "com.example.Boot");
        assert_eq!(file.relative_path(), "com/example/Boot.java");
        assert_eq!(
            file.content,
            "package com.example;\n\nimport org.other.Context;\nimport org.other.Initializer;\n\npublic class Boot implements Initializer<Context> {\n  public void run() {\n    System.out.println(\"hi\");\n  }\n}\n"
        );
    }

    #[test]
    fn test_default_package() {
        let file = SourceFile::render("", &TypeSpec::class("Boot"));
        assert_eq!(file.content, "class Boot {\n}\n");
    }
}

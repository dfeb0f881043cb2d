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

//! Code fragments and blocks
//!
//! Format strings use the placeholders `$T` (type), `$S` (string literal),
//! `$L` (literal or nested code), `$N` (name) and `$$` (a dollar sign). A
//! placeholder without a matching argument is kept verbatim.

use super::writer::CodeWriter;
use bootgen_core::TypeName;
use std::collections::BTreeSet;
use std::fmt;

/// Argument substituted into a format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeArg {
    Type(TypeName),
    Str(String),
    Literal(String),
    Name(String),
    Code(Code),
}

impl CodeArg {
    pub fn ty(name: impl Into<TypeName>) -> Self {
        CodeArg::Type(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        CodeArg::Str(value.into())
    }

    pub fn literal(value: impl fmt::Display) -> Self {
        CodeArg::Literal(value.to_string())
    }

    pub fn name(value: impl Into<String>) -> Self {
        CodeArg::Name(value.into())
    }

    pub fn code(code: Code) -> Self {
        CodeArg::Code(code)
    }
}

/// Turns type names into the text used in a particular source file
pub trait TypeRenderer {
    fn render_type(&self, name: &TypeName) -> String;
}

/// Renders every type by its canonical, fully-qualified name
pub struct QualifiedNames;

impl TypeRenderer for QualifiedNames {
    fn render_type(&self, name: &TypeName) -> String {
        name.canonical_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text(String),
    Type(TypeName),
}

/// Single-line code fragment whose type references are resolved at render time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    parts: Vec<Part>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text without placeholders
    pub fn text(text: impl Into<String>) -> Self {
        let mut code = Self::new();
        code.push_text(&text.into());
        code
    }

    /// Expand a format string with its arguments
    pub fn of(format: &str, args: impl IntoIterator<Item = CodeArg>) -> Self {
        let mut code = Self::new();
        let mut args = args.into_iter();
        let mut chars = format.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '$' {
                code.push_char(c);
                continue;
            }
            match chars.peek().copied() {
                Some('$') => {
                    chars.next();
                    code.push_char('$');
                }
                Some(kind @ ('T' | 'S' | 'L' | 'N')) => {
                    chars.next();
                    match args.next() {
                        Some(arg) => code.push_arg(kind, arg),
                        None => {
                            code.push_char('$');
                            code.push_char(kind);
                        }
                    }
                }
                _ => code.push_char('$'),
            }
        }
        code
    }

    /// Join fragments with a separator
    pub fn join(codes: impl IntoIterator<Item = Code>, separator: &str) -> Self {
        let mut joined = Self::new();
        for (index, code) in codes.into_iter().enumerate() {
            if index > 0 {
                joined.push_text(separator);
            }
            joined.append(code);
        }
        joined
    }

    pub fn append(&mut self, other: Code) -> &mut Self {
        for part in other.parts {
            match part {
                Part::Text(text) => self.push_text(&text),
                Part::Type(name) => self.parts.push(Part::Type(name)),
            }
        }
        self
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.push_text(text);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn referenced_types(&self) -> impl Iterator<Item = &TypeName> {
        self.parts.iter().filter_map(|part| match part {
            Part::Type(name) => Some(name),
            Part::Text(_) => None,
        })
    }

    pub fn render(&self, types: &dyn TypeRenderer) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Type(name) => out.push_str(&types.render_type(name)),
            }
        }
        out
    }

    fn push_arg(&mut self, kind: char, arg: CodeArg) {
        match (kind, arg) {
            ('S', CodeArg::Code(code)) => self.push_text(&quote(&code.render(&QualifiedNames))),
            ('S', CodeArg::Type(name)) => self.push_text(&quote(name.as_str())),
            ('S', CodeArg::Str(value) | CodeArg::Literal(value) | CodeArg::Name(value)) => self.push_text(&quote(&value)),
            (_, CodeArg::Code(code)) => {
                self.append(code);
            }
            (_, CodeArg::Type(name)) => self.parts.push(Part::Type(name)),
            ('T', CodeArg::Str(name) | CodeArg::Literal(name) | CodeArg::Name(name)) => self.parts.push(Part::Type(TypeName::new(name))),
            (_, CodeArg::Str(value) | CodeArg::Literal(value) | CodeArg::Name(value)) => self.push_text(&value),
        }
    }

    fn push_char(&mut self, c: char) {
        let mut buffer = [0u8; 4];
        self.push_text(c.encode_utf8(&mut buffer));
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Part::Text(last)) = self.parts.last_mut() {
            last.push_str(text);
        } else {
            self.parts.push(Part::Text(text.to_string()));
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&QualifiedNames))
    }
}

/// Java string literal for `value`
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Code(Code),
    Statement(Code),
    Comment(String),
    Blank,
    Indent,
    Unindent,
}

/// Sequence of lines making up a method body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
    lines: Vec<Line>,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `code;`
    pub fn add_statement(&mut self, format: &str, args: impl IntoIterator<Item = CodeArg>) -> &mut Self {
        self.lines.push(Line::Statement(Code::of(format, args)));
        self
    }

    pub fn add_statement_code(&mut self, code: Code) -> &mut Self {
        self.lines.push(Line::Statement(code));
        self
    }

    /// Add a line without a trailing semicolon
    pub fn add_line(&mut self, format: &str, args: impl IntoIterator<Item = CodeArg>) -> &mut Self {
        self.lines.push(Line::Code(Code::of(format, args)));
        self
    }

    pub fn add_line_code(&mut self, code: Code) -> &mut Self {
        self.lines.push(Line::Code(code));
        self
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Comment(comment.into()));
        self
    }

    pub fn add_blank_line(&mut self) -> &mut Self {
        self.lines.push(Line::Blank);
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.lines.push(Line::Indent);
        self
    }

    pub fn unindent(&mut self) -> &mut Self {
        self.lines.push(Line::Unindent);
        self
    }

    /// Add `code {` and indent
    pub fn begin_control_flow(&mut self, format: &str, args: impl IntoIterator<Item = CodeArg>) -> &mut Self {
        let mut code = Code::of(format, args);
        code.append_text(" {");
        self.lines.push(Line::Code(code));
        self.indent()
    }

    /// Close the current block and open another: `}code {`
    pub fn next_control_flow(&mut self, format: &str, args: impl IntoIterator<Item = CodeArg>) -> &mut Self {
        self.unindent();
        let mut code = Code::text("}");
        code.append(Code::of(format, args)).append_text(" {");
        self.lines.push(Line::Code(code));
        self.indent()
    }

    /// Close the current block with `}`
    pub fn end_control_flow(&mut self) -> &mut Self {
        self.unindent();
        self.lines.push(Line::Code(Code::text("}")));
        self
    }

    /// Close the current block as a statement: `}code;`
    pub fn end_control_flow_with(&mut self, format: &str, args: impl IntoIterator<Item = CodeArg>) -> &mut Self {
        self.unindent();
        let mut code = Code::text("}");
        code.append(Code::of(format, args));
        self.lines.push(Line::Statement(code));
        self
    }

    /// Append all lines of another block
    pub fn add_block(&mut self, other: CodeBlock) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn referenced_types(&self) -> BTreeSet<TypeName> {
        let mut types = BTreeSet::new();
        for line in &self.lines {
            if let Line::Code(code) | Line::Statement(code) = line {
                types.extend(code.referenced_types().cloned());
            }
        }
        types
    }

    pub fn render(&self, writer: &mut CodeWriter, types: &dyn TypeRenderer) {
        for line in &self.lines {
            match line {
                Line::Code(code) => writer.write_line(&code.render(types)),
                Line::Statement(code) => writer.write_line(&format!("{};", code.render(types))),
                Line::Comment(comment) => writer.write_line(&format!("// {}", comment)),
                Line::Blank => writer.blank_line(),
                Line::Indent => writer.indent(),
                Line::Unindent => writer.unindent(),
            }
        }
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::new();
        self.render(&mut writer, &QualifiedNames);
        f.write_str(writer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let code = Code::of(
            "$T.names.add($T.class, $S) // $$ $N",
            [CodeArg::ty("org.springframework.aot.StaticSpringFactories"), CodeArg::ty("a.B$C"), CodeArg::string("x\"y"), CodeArg::name("bean")],
        );
        assert_eq!(code.to_string(), "org.springframework.aot.StaticSpringFactories.names.add(a.B.C.class, \"x\\\"y\") // $ bean");
        assert_eq!(code.referenced_types().count(), 2);
    }

    #[test]
    fn test_missing_arguments_are_kept() {
        let code = Code::of("new $T($L)", [CodeArg::ty("a.B")]);
        assert_eq!(code.to_string(), "new a.B($L)");
        assert_eq!(Code::of("cost: $5", []).to_string(), "cost: $5");
    }

    #[test]
    fn test_nested_code() {
        let args = Code::join([Code::of("$S", [CodeArg::string("a")]), Code::of("$T.class", [CodeArg::ty("a.B")])], ", ");
        let code = Code::of("call($L)", [CodeArg::code(args)]);
        assert_eq!(code.to_string(), "call(\"a\", a.B.class)");
        assert_eq!(code.referenced_types().collect::<Vec<_>>(), vec![&TypeName::new("a.B")]);
    }

    #[test]
    fn test_control_flow() {
        let mut block = CodeBlock::new();
        block.add_comment("setup");
        block.begin_control_flow("run(() ->", []);
        block.add_statement("go()", []);
        block.next_control_flow(", () ->", []);
        block.add_statement("stop()", []);
        block.end_control_flow_with(")", []);
        block.add_blank_line();

        assert_eq!(block.to_string(), "// setup\nrun(() -> {\n  go();\n}, () -> {\n  stop();\n});\n\n");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("a\\b\n"), "\"a\\\\b\\n\"");
    }
}

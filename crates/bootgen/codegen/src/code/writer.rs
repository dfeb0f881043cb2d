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

//! Indenting text writer used to render source files

/// Line-oriented text buffer that tracks indentation
#[derive(Clone)]
pub struct CodeWriter {
    buffer: String,
    indent_unit: String,
    depth: usize,
}

impl CodeWriter {
    /// Create a writer using two-space indentation
    pub fn new() -> Self {
        Self::with_indent("  ")
    }

    pub fn with_indent(unit: impl Into<String>) -> Self {
        Self { buffer: String::new(), indent_unit: unit.into(), depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease indentation; unbalanced calls stop at column zero
    pub fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Write one line at the current indentation
    pub fn write_line(&mut self, line: &str) {
        if line.is_empty() {
            self.buffer.push('\n');
            return;
        }
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent_unit);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Whether the last written line is blank (or nothing was written)
    pub fn ends_with_blank_line(&self) -> bool {
        self.buffer.is_empty() || self.buffer.ends_with("\n\n")
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut writer = CodeWriter::new();
        writer.write_line("class A {");
        writer.indent();
        writer.write_line("void run() {");
        writer.indent();
        writer.write_line("go();");
        writer.unindent();
        writer.write_line("}");
        writer.unindent();
        writer.write_line("}");
        assert_eq!(writer.as_str(), "class A {\n  void run() {\n    go();\n  }\n}\n");
    }

    #[test]
    fn test_unbalanced_unindent() {
        let mut writer = CodeWriter::with_indent("\t");
        writer.unindent();
        writer.write_line("x");
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.into_string(), "x\n");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut writer = CodeWriter::new();
        writer.indent();
        writer.write_line("");
        assert_eq!(writer.as_str(), "\n");
        writer.write_line("x");
        writer.blank_line();
        writer.blank_line();
        assert!(writer.ends_with_blank_line());
    }
}

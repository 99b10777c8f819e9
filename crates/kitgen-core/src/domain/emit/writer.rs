//! Indentation-aware Go source builder.
//!
//! Produces gofmt-shaped output: tab indentation, space-aligned columns in
//! struct bodies and composite literals, import specs sorted within groups.

/// One import spec, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    alias: Option<String>,
    path: String,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{alias} \"{}\"", self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// `name` if it is usable as a local identifier, otherwise `name` + `Value`.
///
/// `taken` lists identifiers already in scope at the use site.
pub fn local_ident(name: &str, taken: &[&str]) -> String {
    if GO_KEYWORDS.contains(&name) || taken.contains(&name) {
        format!("{name}Value")
    } else {
        name.to_string()
    }
}

/// Whether `name` can be declared as a fresh local next to `taken`.
pub fn is_free_ident(name: &str, taken: &[&str]) -> bool {
    is_identifier(name) && !GO_KEYWORDS.contains(&name) && !taken.contains(&name)
}

/// Letter or `_` first, then letters, digits or `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[derive(Debug, Default)]
pub struct GoWriter {
    buf: String,
    indent: usize,
}

impl GoWriter {
    /// Start a file with the scaffold header comment and package clause.
    pub fn file(header: &str, package: &str) -> Self {
        let mut w = Self::default();
        w.line(format!("// {header}"));
        w.blank();
        w.line(format!("package {package}"));
        w
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.buf.push('\t');
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Emit at most one blank line in a row.
    pub fn blank(&mut self) -> &mut Self {
        if !self.buf.is_empty() && !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
        self
    }

    /// Write `text` and indent what follows.
    pub fn open(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.line(text);
        self.indent += 1;
        self
    }

    /// Dedent and write `text`.
    pub fn close(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self.line(text)
    }

    /// Import declaration. Groups are separated by a blank line and sorted
    /// by path inside; a single spec uses the short form.
    pub fn imports(&mut self, groups: &[Vec<Import>]) -> &mut Self {
        let groups: Vec<Vec<&Import>> = groups
            .iter()
            .filter(|g| !g.is_empty())
            .map(|g| {
                let mut sorted: Vec<&Import> = g.iter().collect();
                sorted.sort_by(|a, b| a.path.cmp(&b.path));
                sorted
            })
            .collect();

        let total: usize = groups.iter().map(Vec::len).sum();
        if total == 0 {
            return self;
        }

        self.blank();
        if total == 1 {
            let only = groups[0][0];
            return self.line(format!("import {}", only.render()));
        }

        self.open("import (");
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                self.line("");
            }
            for spec in group {
                self.line(spec.render());
            }
        }
        self.close(")")
    }

    /// Rows whose cells are padded so every column but the last lines up.
    pub fn aligned(&mut self, rows: &[Vec<String>]) -> &mut Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i + 1 < row.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        for row in rows {
            let mut text = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i + 1 < row.len() {
                    text.push_str(cell);
                    let pad = widths[i] - cell.chars().count() + 1;
                    text.extend(std::iter::repeat_n(' ', pad));
                } else {
                    text.push_str(cell);
                }
            }
            self.line(text);
        }
        self
    }

    /// `type <name> struct { ... }`, collapsing to `struct{}` when empty.
    pub fn struct_type(&mut self, name: &str, fields: &[Vec<String>]) -> &mut Self {
        if fields.is_empty() {
            return self.line(format!("type {name} struct{{}}"));
        }
        self.open(format!("type {name} struct {{"));
        self.aligned(fields);
        self.close("}")
    }

    /// Finish with exactly one trailing newline.
    pub fn finish(self) -> String {
        let mut out = self.buf;
        while out.ends_with("\n\n") {
            out.pop();
        }
        out
    }
}

use std::io::{self, Write};

use crate::settings::Settings;
use crate::symbol::node::Symbol;

/// Branch markers used when drawing a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Unicode,
    Ascii,
}

impl RenderStyle {
    fn branch(&self) -> &'static str {
        match self {
            RenderStyle::Unicode => "├── ",
            RenderStyle::Ascii => "|-- ",
        }
    }

    fn last_branch(&self) -> &'static str {
        match self {
            RenderStyle::Unicode => "└── ",
            RenderStyle::Ascii => "`-- ",
        }
    }

    fn vertical(&self) -> &'static str {
        match self {
            RenderStyle::Unicode => "│   ",
            RenderStyle::Ascii => "|   ",
        }
    }
}

const BLANK: &str = "    ";

fn push_children(symbol: &Symbol, style: RenderStyle, prefix: &str, lines: &mut Vec<String>) {
    let count = symbol.children().len();
    for (i, child) in symbol.children().iter().enumerate() {
        let is_last = i + 1 == count;
        let (branch, continuation) = if is_last {
            (style.last_branch(), BLANK)
        } else {
            (style.branch(), style.vertical())
        };

        lines.push(format!("{}{}{}", prefix, branch, child));
        push_children(child, style, &format!("{}{}", prefix, continuation), lines);
    }
}

impl Symbol {
    /// One line per node, in pre-order
    pub fn render_lines(&self, style: RenderStyle) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        push_children(self, style, "", &mut lines);
        lines
    }

    pub fn tree_diagram(&self, style: RenderStyle) -> String {
        self.render_lines(style).join("\n")
    }

    /// # Errors
    ///
    /// Returns any I/O error raised by `writer`.
    pub fn render_to<W: Write>(&self, writer: &mut W, style: RenderStyle) -> io::Result<()> {
        for line in self.render_lines(style) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Diagram drawn with the style from `settings`
    pub fn tree_diagram_with(&self, settings: &Settings) -> String {
        self.tree_diagram(settings.render_style)
    }

    /// Print the tree diagram to stderr
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing to stderr.
    pub fn render(&self) -> io::Result<()> {
        self.render_with(&Settings::default())
    }

    /// Print the tree diagram to stderr using the style from `settings`
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing to stderr.
    pub fn render_with(&self, settings: &Settings) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{}", self.tree_diagram_with(settings))
    }
}

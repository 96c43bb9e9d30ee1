//! Structured command output.
//!
//! Handlers return typed content blocks and a presentation layer decides
//! how to render them, so the core has no rendering dependency.

use serde::{Deserialize, Serialize};

use crate::vfs::Entry;

/// One renderable unit of command output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Heading(String),
    Text(String),
    /// Label/value pairs, rendered as a two-column grid.
    Fields(Vec<(String, String)>),
    /// A plain bulleted list.
    Items(Vec<String>),
    /// Short badges (technologies, skills).
    Tags(Vec<String>),
    Link {
        label: String,
        url: String,
    },
    /// An image reference (the core never loads pixels).
    Image {
        alt: String,
        src: String,
    },
    /// A directory listing.
    Listing(Vec<Entry>),
    /// Verbatim text, monospace, no reflow (ASCII art).
    Preformatted(String),
}

/// How a result should be presented.
///
/// `Clear` is a sentinel: the caller wipes its displayed history instead
/// of printing anything. The core never keeps output history itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Normal,
    Success,
    Error,
    Warning,
    Info,
    System,
    Clear,
}

/// The content of one result: a kind plus its blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Output {
    pub kind: OutputKind,
    pub blocks: Vec<Block>,
}

impl Output {
    pub fn new(kind: OutputKind, blocks: Vec<Block>) -> Self {
        Self { kind, blocks }
    }

    /// A single plain-text line.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Normal, vec![Block::Text(text.into())])
    }

    /// An error-typed message. Accepts anything displayable, so
    /// [`crate::TermError`] values can be passed directly.
    pub fn error(message: impl ToString) -> Self {
        Self::new(OutputKind::Error, vec![Block::Text(message.to_string())])
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(OutputKind::System, vec![Block::Text(text.into())])
    }

    pub fn success(blocks: Vec<Block>) -> Self {
        Self::new(OutputKind::Success, blocks)
    }

    pub fn info(blocks: Vec<Block>) -> Self {
        Self::new(OutputKind::Info, blocks)
    }

    pub fn warning(blocks: Vec<Block>) -> Self {
        Self::new(OutputKind::Warning, blocks)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }

    /// Concatenated text of every block, for tests and plain renderers.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if !out.is_empty() {
                out.push('\n');
            }
            match block {
                Block::Heading(s) | Block::Text(s) | Block::Preformatted(s) => out.push_str(s),
                Block::Fields(pairs) => {
                    let rendered: Vec<String> =
                        pairs.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                    out.push_str(&rendered.join("\n"));
                }
                Block::Items(items) => out.push_str(&items.join("\n")),
                Block::Tags(tags) => out.push_str(&tags.join(", ")),
                Block::Link { label, url } => out.push_str(&format!("{label} ({url})")),
                Block::Image { alt, src } => out.push_str(&format!("[{alt}] {src}")),
                Block::Listing(entries) => {
                    let rendered: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
                    out.push_str(&rendered.join("  "));
                }
            }
        }
        out
    }
}

/// What one dispatched command produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandResult {
    pub output: Output,
    /// New current path, when the command navigated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    /// Admin status change (`login`/`logout`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_status: Option<bool>,
    /// Request to close the terminal; the caller hides it.
    #[serde(default)]
    pub close_terminal: bool,
}

impl CommandResult {
    /// The empty, successful no-op result.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_output(output: Output) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::from_output(Output::text(text))
    }

    pub fn error(message: impl ToString) -> Self {
        Self::from_output(Output::error(message))
    }

    /// The clear sentinel.
    pub fn clear() -> Self {
        Self::from_output(Output::new(OutputKind::Clear, Vec::new()))
    }

    pub fn with_new_path(mut self, path: impl Into<String>) -> Self {
        self.new_path = Some(path.into());
        self
    }

    pub fn with_admin_status(mut self, is_admin: bool) -> Self {
        self.admin_status = Some(is_admin);
        self
    }

    pub fn closing_terminal(mut self) -> Self {
        self.close_terminal = true;
        self
    }

    pub fn is_error(&self) -> bool {
        self.output.is_error()
    }

    pub fn is_clear(&self) -> bool {
        self.output.kind == OutputKind::Clear
    }
}

use serde::Serialize;

/// Inline styling flags carried by a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Emphasis {
    pub mention: bool,
}

/// A contiguous span of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub content: String,
    pub emphasis: Emphasis,
}

impl TextRun {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            emphasis: Emphasis { mention: false },
        }
    }

    pub fn mention(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            emphasis: Emphasis { mention: true },
        }
    }
}

/// Marker a list item was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// `- item`, rendered with a `* ` glyph
    Bullet,
    /// `* item`, rendered with an `o ` glyph
    Asterisk,
}

/// Presentation category the document service formats a paragraph with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyle {
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    NormalText,
}

/// Block-level elements scanned from the notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        /// Always 1, 2 or 3
        level: u8,
        runs: Vec<TextRun>,
    },
    ListItem {
        style: ListStyle,
        indent_level: usize,
        runs: Vec<TextRun>,
    },
    CheckboxItem {
        checked: bool,
        runs: Vec<TextRun>,
    },
    Paragraph {
        runs: Vec<TextRun>,
    },
    /// Verbatim line after a `---` separator; mentions are not styled here
    FooterLine {
        text: String,
    },
}

impl Block {
    pub fn named_style(&self) -> NamedStyle {
        match self {
            Block::Heading { level: 1, .. } => NamedStyle::Heading1,
            Block::Heading { level: 2, .. } => NamedStyle::Heading2,
            Block::Heading { .. } => NamedStyle::Heading3,
            _ => NamedStyle::NormalText,
        }
    }

    /// Runs of the block. Footer lines have none.
    pub fn runs(&self) -> &[TextRun] {
        match self {
            Block::Heading { runs, .. }
            | Block::ListItem { runs, .. }
            | Block::CheckboxItem { runs, .. }
            | Block::Paragraph { runs } => runs,
            Block::FooterLine { .. } => &[],
        }
    }

    /// Concatenated text of the block, trailing newline included.
    pub fn text(&self) -> String {
        match self {
            Block::FooterLine { text } => text.clone(),
            _ => self.runs().iter().map(|run| run.content.as_str()).collect(),
        }
    }
}

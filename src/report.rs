//! Human-readable summary of a scan, used to eyeball a conversion before it
//! is submitted anywhere.

use std::fmt;

use crate::block::{Block, NamedStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub block_count: usize,
    /// Style and first-run text of the leading blocks
    pub preview: Vec<(NamedStyle, String)>,
    pub checks: Checks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checks {
    pub heading_1: bool,
    pub heading_2: bool,
    pub checkbox: bool,
    pub mention: bool,
}

impl Report {
    pub fn from_blocks(blocks: &[Block], preview: usize) -> Self {
        let preview = blocks
            .iter()
            .take(preview)
            .map(|block| (block.named_style(), first_text(block).trim().to_string()))
            .collect();

        let checks = Checks {
            heading_1: blocks.iter().any(|b| b.named_style() == NamedStyle::Heading1),
            heading_2: blocks.iter().any(|b| b.named_style() == NamedStyle::Heading2),
            checkbox: blocks
                .iter()
                .any(|b| matches!(b, Block::CheckboxItem { .. })),
            mention: blocks
                .iter()
                .flat_map(Block::runs)
                .any(|run| run.emphasis.mention),
        };

        Self {
            block_count: blocks.len(),
            preview,
            checks,
        }
    }

    pub fn all_passed(&self) -> bool {
        let Checks {
            heading_1,
            heading_2,
            checkbox,
            mention,
        } = self.checks;
        heading_1 && heading_2 && checkbox && mention
    }
}

fn first_text(block: &Block) -> &str {
    match block {
        Block::FooterLine { text } => text,
        _ => block
            .runs()
            .first()
            .map(|run| run.content.as_str())
            .unwrap_or_default(),
    }
}

fn style_name(style: NamedStyle) -> &'static str {
    match style {
        NamedStyle::Heading1 => "HEADING_1",
        NamedStyle::Heading2 => "HEADING_2",
        NamedStyle::Heading3 => "HEADING_3",
        NamedStyle::NormalText => "NORMAL_TEXT",
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parsed {} document elements", self.block_count)?;

        if !self.preview.is_empty() {
            writeln!(f)?;
            writeln!(f, "First {} parsed elements:", self.preview.len())?;
            for (i, (style, text)) in self.preview.iter().enumerate() {
                writeln!(f, "  {}. [{}] {}", i + 1, style_name(*style), text)?;
            }
        }

        let mark = |ok: bool| if ok { "yes" } else { "no" };
        writeln!(f)?;
        writeln!(f, "Verification:")?;
        writeln!(f, "  - H1 heading found: {}", mark(self.checks.heading_1))?;
        writeln!(f, "  - H2 heading found: {}", mark(self.checks.heading_2))?;
        writeln!(f, "  - Checkboxes found: {}", mark(self.checks.checkbox))?;
        write!(f, "  - Mentions found: {}", mark(self.checks.mention))
    }
}

use crate::block::{Block, ListStyle, TextRun};
use crate::inline::tokenize;

/// Heading prefixes, longest first
const HEADINGS: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

const CHECKBOX: &str = "- [ ]";
const CHECKBOX_MARKER: &str = "[ ] ";
/// Checked boxes are unsupported and stay plain text
const CHECKED_BOXES: [&str; 2] = ["- [x]", "- [X]"];
const FOOTER_SEPARATOR: &str = "---";

/// Whitespace plus the ASCII file/group/record/unit separators
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// List markers and the glyph each is rendered with
const LISTS: [(&str, ListStyle, &str); 2] = [
    ("- ", ListStyle::Bullet, "* "),
    ("* ", ListStyle::Asterisk, "o "),
];

#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum ScanState {
    #[default]
    Scanning,
    /// After a `---` line: every line up to the next blank one is a footer line
    InFooter,
}

/// Parse notes markdown into a list of blocks.
///
/// Never fails: anything unrecognised becomes a paragraph.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut state = ScanState::default();

    for raw in markdown.lines() {
        let line = raw.trim_matches(is_blank);

        state = match state {
            ScanState::InFooter if line.is_empty() => ScanState::Scanning,
            ScanState::InFooter => {
                blocks.push(Block::FooterLine {
                    text: format!("{line}\n"),
                });
                ScanState::InFooter
            }
            ScanState::Scanning if line.starts_with(FOOTER_SEPARATOR) => ScanState::InFooter,
            ScanState::Scanning => {
                blocks.extend(classify_line(raw, line));
                ScanState::Scanning
            }
        };
    }

    log::debug!("scanned {} blocks", blocks.len());
    blocks
}

/// Classify one trimmed line. `raw` is the same line before trimming and is
/// only consulted for list indentation.
fn classify_line(raw: &str, line: &str) -> Option<Block> {
    if line.is_empty() {
        return None;
    }

    for (prefix, level) in HEADINGS {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(Block::Heading {
                level,
                runs: vec![TextRun::plain(format!("{rest}\n"))],
            });
        }
    }

    if let Some(rest) = line.strip_prefix(CHECKBOX) {
        let mut runs = vec![TextRun::plain(CHECKBOX_MARKER)];
        runs.extend(tokenize(rest));
        return Some(Block::CheckboxItem {
            checked: false,
            runs,
        });
    }

    if CHECKED_BOXES.iter().any(|prefix| line.starts_with(prefix)) {
        return Some(Block::Paragraph {
            runs: tokenize(line),
        });
    }

    for (marker, style, glyph) in LISTS {
        if let Some(rest) = line.strip_prefix(marker) {
            let mut runs = tokenize(rest);
            if let Some(first) = runs.first_mut() {
                first.content.insert_str(0, glyph);
            }
            return Some(Block::ListItem {
                style,
                indent_level: indent_level(raw),
                runs,
            });
        }
    }

    Some(Block::Paragraph {
        runs: tokenize(line),
    })
}

/// Count leading two-space groups
fn indent_level(raw: &str) -> usize {
    let mut level = 0;
    let mut rest = raw;
    while let Some(stripped) = rest.strip_prefix("  ") {
        level += 1;
        rest = stripped;
    }
    level
}

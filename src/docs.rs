use serde::Serialize;

use crate::block::{Block, NamedStyle, TextRun};
use crate::config::Config;
use crate::error::Error;

/// One top-level element of the document body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralElement {
    pub paragraph: Paragraph,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub elements: Vec<ParagraphElement>,
    pub paragraph_style: ParagraphStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    pub text_run: TextRunElement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRunElement {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub bold: bool,
    pub foreground_color: OptionalColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionalColor {
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub rgb_color: RgbColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub named_style_type: NamedStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_indent: Option<Dimension>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "PT")]
    Pt,
}

/// Convert blocks to document-service structural elements
pub fn blocks_to_docs(blocks: &[Block], config: &Config) -> Vec<StructuralElement> {
    let mention_style = mention_style(config);

    let elements: Vec<StructuralElement> = blocks
        .iter()
        .map(|block| StructuralElement {
            paragraph: Paragraph {
                elements: paragraph_elements(block, &mention_style),
                paragraph_style: ParagraphStyle {
                    named_style_type: block.named_style(),
                    left_indent: left_indent(block, config),
                },
            },
        })
        .collect();

    log::debug!("rendered {} structural elements", elements.len());
    elements
}

/// Serialize structural elements as pretty-printed JSON
pub fn to_json(elements: &[StructuralElement]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(elements)?)
}

fn mention_style(config: &Config) -> TextStyle {
    let (red, green, blue) = config.mention.color.to_unit_rgb();
    TextStyle {
        bold: config.mention.bold,
        foreground_color: OptionalColor {
            color: Color {
                rgb_color: RgbColor { red, green, blue },
            },
        },
    }
}

fn paragraph_elements(block: &Block, mention_style: &TextStyle) -> Vec<ParagraphElement> {
    match block {
        Block::FooterLine { text } => vec![ParagraphElement {
            text_run: TextRunElement {
                content: text.clone(),
                text_style: None,
            },
        }],
        _ => block
            .runs()
            .iter()
            .map(|run| run_element(run, mention_style))
            .collect(),
    }
}

fn run_element(run: &TextRun, mention_style: &TextStyle) -> ParagraphElement {
    ParagraphElement {
        text_run: TextRunElement {
            content: run.content.clone(),
            text_style: run.emphasis.mention.then(|| mention_style.clone()),
        },
    }
}

fn left_indent(block: &Block, config: &Config) -> Option<Dimension> {
    match block {
        Block::ListItem { indent_level, .. } => Some(Dimension {
            magnitude: *indent_level as f64 * config.list.indent,
            unit: Unit::Pt,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::{Config, HexColor};
    use crate::{markdown_to_docs, markdown_to_docs_with_config, markdown_to_json};

    fn to_value(markdown: &str) -> serde_json::Value {
        serde_json::to_value(markdown_to_docs(markdown)).unwrap()
    }

    #[test]
    fn heading() {
        assert_eq!(
            to_value("# Product Team Sync"),
            json!([{
                "paragraph": {
                    "elements": [{"textRun": {"content": "Product Team Sync\n"}}],
                    "paragraphStyle": {"namedStyleType": "HEADING_1"}
                }
            }])
        );
    }

    #[test]
    fn mention_gets_bold_blue() {
        assert_eq!(
            to_value("- [ ] @sarah: roadmap"),
            json!([{
                "paragraph": {
                    "elements": [
                        {"textRun": {"content": "[ ] "}},
                        {"textRun": {"content": " "}},
                        {"textRun": {
                            "content": "@sarah ",
                            "textStyle": {
                                "bold": true,
                                "foregroundColor": {
                                    "color": {"rgbColor": {"red": 0.0, "green": 0.0, "blue": 1.0}}
                                }
                            }
                        }},
                        {"textRun": {"content": ": roadmap\n"}}
                    ],
                    "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"}
                }
            }])
        );
    }

    #[test]
    fn list_indent_scales_with_level() {
        let value = to_value("* Completed\n  * Auth flow\n    * Caching");
        let indents: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|el| el["paragraph"]["paragraphStyle"]["leftIndent"].clone())
            .collect();
        assert_eq!(indents, vec![
            json!({"magnitude": 0.0, "unit": "PT"}),
            json!({"magnitude": 36.0, "unit": "PT"}),
            json!({"magnitude": 72.0, "unit": "PT"}),
        ]);
    }

    #[test]
    fn footer_is_plain_text() {
        assert_eq!(
            to_value("---\nRecorded by: @sarah"),
            json!([{
                "paragraph": {
                    "elements": [{"textRun": {"content": "Recorded by: @sarah\n"}}],
                    "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"}
                }
            }])
        );
    }

    #[test]
    fn config_changes_styling() {
        let mut config = Config::default();
        config.mention.bold = false;
        config.mention.color = HexColor {
            red: 0xff,
            green: 0,
            blue: 0,
        };
        config.list.indent = 10.0;

        let docs = markdown_to_docs_with_config("  - ask @mike", &config);
        let paragraph = &docs[0].paragraph;
        let style = paragraph.elements[1].text_run.text_style.as_ref().unwrap();
        assert!(!style.bold);
        assert_eq!(style.foreground_color.color.rgb_color.red, 1.0);
        assert_eq!(paragraph.paragraph_style.left_indent.unwrap().magnitude, 10.0);
    }

    #[test]
    fn json_output() {
        let json = markdown_to_json("Hello", &Config::default()).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"namedStyleType\": \"NORMAL_TEXT\""));
        assert_eq!(markdown_to_json("", &Config::default()).unwrap(), "[]");
    }
}

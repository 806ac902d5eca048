mod block;
mod config;
mod docs;
mod error;
mod inline;
mod parser;
mod report;

pub use block::{Block, Emphasis, ListStyle, NamedStyle, TextRun};
pub use config::{Config, HexColor, ListConfig, MentionConfig};
pub use docs::{
    Color, Dimension, OptionalColor, Paragraph, ParagraphElement, ParagraphStyle, RgbColor,
    StructuralElement, TextRunElement, TextStyle, Unit,
};
pub use error::Error;
pub use inline::tokenize;
pub use report::{Checks, Report};

/// Parse notes markdown into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown to document-service elements using default config.
pub fn markdown_to_docs(markdown: &str) -> Vec<StructuralElement> {
    markdown_to_docs_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to document-service elements with custom config.
pub fn markdown_to_docs_with_config(markdown: &str, config: &Config) -> Vec<StructuralElement> {
    let blocks = parse(markdown);
    docs::blocks_to_docs(&blocks, config)
}

/// Convert markdown to the JSON payload sent to the document service.
pub fn markdown_to_json(markdown: &str, config: &Config) -> Result<String, Error> {
    docs::to_json(&markdown_to_docs_with_config(markdown, config))
}

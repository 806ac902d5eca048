use std::sync::LazyLock;

use regex::Regex;

use crate::block::TextRun;

/// `@` followed by one or more word characters
static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("Invalid mention regex"));

/// Split a line into runs, isolating `@mention` tokens.
///
/// Every segment between mentions becomes a plain run, empty ones included,
/// so the first run is never a mention. Mention runs get a trailing space.
/// The last run always ends with a single newline, and the result is never
/// empty.
pub fn tokenize(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for m in MENTION.find_iter(text) {
        runs.push(TextRun::plain(&text[last..m.start()]));
        runs.push(TextRun::mention(format!("{} ", m.as_str())));
        last = m.end();
    }
    runs.push(TextRun::plain(&text[last..]));

    if let Some(run) = runs.last_mut() {
        run.content.push('\n');
    }

    runs
}

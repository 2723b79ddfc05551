/// Words per minute used by [`reading_minutes`].
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
/// A rendered unit of a blog post body.
pub enum Block {
    /// `## ` line.
    Heading2(String),
    /// `### ` line.
    Heading3(String),
    /// `- ` or `* ` line.
    ListItem(String),
    /// Consecutive plain lines joined with spaces.
    Paragraph(String),
}

/// Split a Markdown-like post body into blocks.
///
/// Only `##`/`###` headings and `-`/`*` list items are recognized; everything else is
/// paragraph text. Blank lines end a paragraph.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut out = Vec::new();
    let mut para: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let block = if let Some(rest) = line.strip_prefix("### ") {
            Some(Block::Heading3(rest.trim().to_string()))
        } else if let Some(rest) = line.strip_prefix("## ") {
            Some(Block::Heading2(rest.trim().to_string()))
        } else if let Some(rest) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            Some(Block::ListItem(rest.trim().to_string()))
        } else {
            None
        };

        match block {
            Some(block) => {
                flush(&mut para, &mut out);
                out.push(block);
            }
            None if line.is_empty() => flush(&mut para, &mut out),
            None => para.push(line),
        }
    }
    flush(&mut para, &mut out);
    out
}

/// Estimated reading time in whole minutes, never less than one.
pub fn reading_minutes(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

fn flush(para: &mut Vec<&str>, out: &mut Vec<Block>) {
    if !para.is_empty() {
        out.push(Block::Paragraph(para.join(" ")));
        para.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/blocks.rs"]
mod tests;

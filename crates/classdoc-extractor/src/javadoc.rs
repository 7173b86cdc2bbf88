//! Parse documentation comment bodies into [`Javadoc`] values

use crate::error::ExtractorError;
use classdoc_domain::{BlockTag, DescriptionElement, Javadoc};

/// Parse the body of a `/** ... */` comment (delimiters already removed)
pub fn parse(comment_body: &str) -> Javadoc {
    let lines = clean_lines(comment_body);

    let first_block = lines
        .iter()
        .position(|line| line.trim_start().starts_with('@'))
        .unwrap_or(lines.len());

    let description_text = lines[..first_block].join("\n");
    let description = parse_description(description_text.trim());
    let block_tags = parse_block_tags(&lines[first_block..]);

    Javadoc::new(description, block_tags)
}

/// Flatten a description into plain text.
///
/// Snippets are copied verbatim and inline tags contribute their trimmed
/// content. An unrecognized element means the parser produced something
/// this conversion was never written for, which is reported as a
/// contract violation rather than skipped.
pub fn description_text(javadoc: &Javadoc) -> Result<String, ExtractorError> {
    let mut text = String::new();
    for element in &javadoc.description {
        match element {
            DescriptionElement::Snippet(snippet) => text.push_str(snippet),
            DescriptionElement::InlineTag { content, .. } => text.push_str(content.trim()),
            DescriptionElement::Unrecognized { kind } => {
                return Err(ExtractorError::ContractViolation(kind.clone()));
            }
        }
    }
    Ok(text)
}

/// Strip the leading `*` decoration from every comment line
fn clean_lines(body: &str) -> Vec<String> {
    let mut lines: Vec<String> = body
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            match trimmed.strip_prefix('*') {
                Some(rest) => rest
                    .strip_prefix(|c: char| c == ' ' || c == '\t')
                    .unwrap_or(rest)
                    .to_string(),
                None => line.to_string(),
            }
        })
        .map(|line| if line.trim().is_empty() { String::new() } else { line })
        .collect();

    while lines.first().is_some_and(String::is_empty) {
        lines.remove(0);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Split description text into snippets and `{@tag content}` inline tags
fn parse_description(text: &str) -> Vec<DescriptionElement> {
    let mut elements = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{@") {
        let Some(len) = balanced_len(&rest[start..]) else {
            break;
        };
        if start > 0 {
            elements.push(DescriptionElement::snippet(&rest[..start]));
        }

        // between "{@" and the closing '}'
        let inner = &rest[start + 2..start + len - 1];
        let name_end = inner.find(char::is_whitespace).unwrap_or(inner.len());
        elements.push(DescriptionElement::inline_tag(
            &inner[..name_end],
            &inner[name_end..],
        ));
        rest = &rest[start + len..];
    }

    if !rest.is_empty() {
        elements.push(DescriptionElement::snippet(rest));
    }
    elements
}

/// Byte length of the brace group opening at the start of `text`,
/// or `None` if it is never closed
fn balanced_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_block_tags(lines: &[String]) -> Vec<BlockTag> {
    let mut tags: Vec<BlockTag> = Vec::new();
    for line in lines {
        let trimmed = line.trim_start();
        if let Some(tag) = trimmed.strip_prefix('@') {
            let name_end = tag.find(char::is_whitespace).unwrap_or(tag.len());
            tags.push(BlockTag {
                name: tag[..name_end].to_string(),
                content: tag[name_end..].trim().to_string(),
            });
        } else if let Some(current) = tags.last_mut() {
            if !current.content.is_empty() {
                current.content.push('\n');
            }
            current.content.push_str(line.trim());
        }
    }
    tags
}

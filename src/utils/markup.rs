//! Markdown to Jira wiki markup conversion.
//!
//! GitHub issue and comment bodies are written in GitHub-flavoured markdown;
//! Jira renders its own wiki markup. The conversion is line oriented:
//! fenced code blocks are copied verbatim (an unclosed fence runs to the end
//! of the text), block-level constructs (headings, lists, quotes, rules,
//! table headers) are rewritten per line, and inline constructs are
//! rewritten outside of code spans.

use log::*;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Marks bold text while italics are rewritten, so `*` produced for bold
/// cannot be picked up as an italic delimiter. Removed from the input
/// before conversion.
const BOLD_MARK: char = '\u{1}';

/// Errors that prevent a body from being converted.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// A conversion pattern failed to compile
    #[error("invalid conversion pattern: {0}")]
    Pattern(#[from] regex::Error),
}

struct Rules {
    heading: Regex,
    setext_underline: Regex,
    horizontal_rule: Regex,
    quote: Regex,
    bullet: Regex,
    ordered: Regex,
    table_separator: Regex,
    code_span: Regex,
    image: Regex,
    link: Regex,
    bold_stars: Regex,
    bold_underscores: Regex,
    italic: Regex,
    strikethrough: Regex,
}

impl Rules {
    fn new() -> Result<Rules, regex::Error> {
        Ok(Rules {
            heading: Regex::new(r"^(#{1,6})\s+(.*?)(?:\s+#+)?\s*$")?,
            setext_underline: Regex::new(r"^ {0,3}(=+|-+)\s*$")?,
            horizontal_rule: Regex::new(r"^\s*(?:(?:-\s*){3,}|(?:\*\s*){3,}|(?:_\s*){3,})$")?,
            quote: Regex::new(r"^\s*>\s?(.*)$")?,
            bullet: Regex::new(r"^(\s*)[-*+]\s+(.*)$")?,
            ordered: Regex::new(r"^(\s*)\d+[.)]\s+(.*)$")?,
            table_separator: Regex::new(r"^\s*\|?\s*:?-+:?\s*(?:\|\s*:?-+:?\s*)*\|?\s*$")?,
            code_span: Regex::new(r"`([^`]+)`")?,
            image: Regex::new(r#"!\[[^\]]*\]\(([^)\s]+)(?:\s+"[^"]*")?\)"#)?,
            link: Regex::new(r#"\[([^\]]+)\]\(([^)\s]+)(?:\s+"[^"]*")?\)"#)?,
            bold_stars: Regex::new(r"\*\*([^*\s](?:.*?\S)?)\*\*")?,
            bold_underscores: Regex::new(r"(^|\W)__([^_\s](?:.*?\S)?)__")?,
            italic: Regex::new(r"(^|[^*\w])\*([^*\s](?:[^*]*?[^*\s])?)\*")?,
            strikethrough: Regex::new(r"~~([^~]+)~~")?,
        })
    }

    fn convert(&self, text: &str) -> String {
        let normalized: String = text
            .replace("\r\n", "\n")
            .chars()
            .filter(|c| *c != BOLD_MARK)
            .collect();
        let lines: Vec<&str> = normalized.split('\n').collect();
        let mut output: Vec<String> = Vec::with_capacity(lines.len());

        let mut index = 0;
        while index < lines.len() {
            let line = lines[index];
            let trimmed = line.trim_start();

            if let Some(info) = trimmed.strip_prefix("```") {
                let language = info.trim();
                output.push(if language.is_empty() {
                    "{code}".to_string()
                } else {
                    format!("{{code:{}}}", language)
                });
                index += 1;
                while let Some(code_line) = lines.get(index) {
                    if code_line.trim_start().starts_with("```") {
                        break;
                    }
                    output.push((*code_line).to_string());
                    index += 1;
                }
                output.push("{code}".to_string());
                index += 1;
                continue;
            }

            let next_is_separator = lines
                .get(index + 1)
                .map(|next| self.table_separator.is_match(next))
                .unwrap_or(false);
            if trimmed.starts_with('|') && next_is_separator {
                output.push(self.table_header(trimmed));
                index += 2;
                continue;
            }

            let underline = lines
                .get(index + 1)
                .and_then(|next| self.setext_underline.captures(next));
            if let Some(caps) = underline.filter(|_| self.is_paragraph(line)) {
                let level = if caps[1].starts_with('=') { 1 } else { 2 };
                output.push(format!("h{}. {}", level, self.inline(line.trim())));
                index += 2;
                continue;
            }

            output.push(self.block(line));
            index += 1;
        }

        output.join("\n")
    }

    /// Whether the line is plain paragraph text rather than the start of
    /// another block construct.
    fn is_paragraph(&self, line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty()
            && !trimmed.starts_with("```")
            && !trimmed.starts_with('|')
            && !self.heading.is_match(line)
            && !self.horizontal_rule.is_match(line)
            && !self.quote.is_match(line)
            && !self.bullet.is_match(line)
            && !self.ordered.is_match(line)
    }

    fn block(&self, line: &str) -> String {
        if let Some(caps) = self.heading.captures(line) {
            return format!("h{}. {}", caps[1].len(), self.inline(&caps[2]));
        }
        if self.horizontal_rule.is_match(line) {
            return "----".to_string();
        }
        if let Some(caps) = self.quote.captures(line) {
            return format!("bq. {}", self.inline(&caps[1]));
        }
        if let Some(caps) = self.bullet.captures(line) {
            return format!(
                "{} {}",
                "*".repeat(nesting_depth(&caps[1])),
                self.inline(&caps[2])
            );
        }
        if let Some(caps) = self.ordered.captures(line) {
            return format!(
                "{} {}",
                "#".repeat(nesting_depth(&caps[1])),
                self.inline(&caps[2])
            );
        }
        self.inline(line)
    }

    fn table_header(&self, line: &str) -> String {
        let cells: Vec<String> = line
            .trim()
            .trim_matches('|')
            .split('|')
            .map(|cell| self.inline(cell.trim()))
            .collect();
        format!("||{}||", cells.join("||"))
    }

    /// Rewrite inline constructs, leaving the contents of code spans alone.
    fn inline(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        for caps in self.code_span.captures_iter(text) {
            if let Some(span) = caps.get(0) {
                result.push_str(&self.emphasis(&text[last..span.start()]));
                result.push_str("{{");
                result.push_str(&caps[1]);
                result.push_str("}}");
                last = span.end();
            }
        }
        result.push_str(&self.emphasis(&text[last..]));
        result
    }

    fn emphasis(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let text = self.image.replace_all(text, "!${1}!");
        let text = self.link.replace_all(&text, "[${1}|${2}]");
        let text = self.bold_stars.replace_all(&text, |caps: &Captures| {
            format!("{}{}{}", BOLD_MARK, &caps[1], BOLD_MARK)
        });
        let text = self.bold_underscores.replace_all(&text, |caps: &Captures| {
            format!("{}{}{}{}", &caps[1], BOLD_MARK, &caps[2], BOLD_MARK)
        });
        let text = self.italic.replace_all(&text, "${1}_${2}_");
        let text = self.strikethrough.replace_all(&text, "-${1}-");
        text.replace(BOLD_MARK, "*")
    }
}

/// List nesting level from leading indentation, two columns per level.
fn nesting_depth(indent: &str) -> usize {
    let width: usize = indent
        .chars()
        .map(|c| if c == '\t' { 2 } else { 1 })
        .sum();
    width / 2 + 1
}

fn rules() -> Result<&'static Rules, MarkupError> {
    static RULES: OnceLock<Result<Rules, regex::Error>> = OnceLock::new();
    RULES
        .get_or_init(Rules::new)
        .as_ref()
        .map_err(|e| MarkupError::Pattern(e.clone()))
}

/// Convert GitHub-flavoured markdown to Jira wiki markup.
///
pub fn try_markdown_to_jira(text: &str) -> Result<String, MarkupError> {
    Ok(rules()?.convert(text))
}

/// Convert GitHub-flavoured markdown to Jira wiki markup, returning the text
/// unchanged if it cannot be converted.
///
pub fn markdown_to_jira(text: &str) -> String {
    match try_markdown_to_jira(text) {
        Ok(converted) => converted,
        Err(e) => {
            warn!("Failed to convert markdown, keeping original text: {}", e);
            text.to_string()
        }
    }
}

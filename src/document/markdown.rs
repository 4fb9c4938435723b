use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// One code block as produced by the markdown tokenizer, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CodeBlockNode {
    /// Language tag (first token of the fence info string), if any.
    pub language: Option<String>,
    /// Remainder of the info string after the language tag, if any.
    pub meta: Option<String>,
    /// Raw block text without its final newline.
    pub value: String,
}

impl CodeBlockNode {
    /// Build a node from a fence info string such as `ts filename=a.ts highlight={1-2}`.
    pub fn from_info(info: &str, value: impl Into<String>) -> Self {
        let info = info.trim();
        let (language, meta) = match info.split_once(char::is_whitespace) {
            Some((lang, rest)) => (lang, rest.trim()),
            None => (info, ""),
        };
        Self {
            language: non_empty(language),
            meta: non_empty(meta),
            value: value.into(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Tokenize a markdown body and return its root-level code blocks in document order.
///
/// Everything that is not a code block (headings, prose, lists) is skipped. Code blocks nested
/// inside block quotes, list items, or other containers are skipped too.
#[tracing::instrument(skip(markdown), fields(bytes = markdown.len()))]
pub fn parse_code_blocks(markdown: &str) -> Vec<CodeBlockNode> {
    let mut out = Vec::new();
    let mut open: Option<(String, String)> = None;
    // Number of enclosing tags; a code block is root-level when it opens at depth 0.
    let mut depth = 0usize;
    let mut nested = 0usize;

    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                if depth == 0 {
                    let info = match kind {
                        CodeBlockKind::Fenced(info) => info.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    open = Some((info, String::new()));
                } else {
                    nested += 1;
                }
                depth += 1;
            }
            Event::Start(_) => depth += 1,
            Event::Text(text) => {
                if let Some((_, buf)) = open.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                depth = depth.saturating_sub(1);
                if let Some((info, mut buf)) = open.take() {
                    if buf.ends_with('\n') {
                        buf.pop();
                    }
                    out.push(CodeBlockNode::from_info(&info, buf));
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    if nested > 0 {
        tracing::trace!(nested, "skipped nested code blocks");
    }
    tracing::debug!(blocks = out.len(), "tokenized code blocks");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/markdown.rs"]
mod tests;

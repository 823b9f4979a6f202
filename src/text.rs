// src/text.rs
use crate::CodegenError;

/// Column limit for wrapped doc text, matching the usual source convention.
pub const DOC_WIDTH: usize = 80;

const DOC_PREFIX: &str = "Description: ";
const EMPTY_DESCRIPTION: &str = "Description: empty";

/// Maps a raw flag name onto an UPPER_SNAKE constant identifier.
///
/// Segments are split on anything that is not an ASCII letter or digit and
/// on lower-to-upper camelCase boundaries, so `"new-checkout-flow"` and
/// `"newCheckoutFlow"` both become `NEW_CHECKOUT_FLOW`. A name with no
/// usable characters at all, or one that would yield an identifier
/// starting with a digit, is a render error rather than a silently
/// uncompilable constant.
pub fn normalize(name: &str) -> Result<String, CodegenError> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if let Some(p) = prev {
                if c.is_ascii_uppercase()
                    && (p.is_ascii_lowercase() || p.is_ascii_digit())
                    && !current.is_empty()
                {
                    segments.push(std::mem::take(&mut current));
                }
            }
            current.push(c.to_ascii_uppercase());
            prev = Some(c);
        } else {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            prev = None;
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    if segments.is_empty() {
        return Err(CodegenError::Render(format!(
            "flag name {:?} contains no usable identifier characters",
            name
        )));
    }

    let identifier = segments.join("_");
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(CodegenError::Render(format!(
            "flag name {:?} normalizes to {}, which starts with a digit",
            name, identifier
        )));
    }

    Ok(identifier)
}

/// Turns a free-text description into wrapped doc text.
///
/// Absent or blank input yields the literal `"Description: empty"`.
/// Otherwise the text is re-wrapped to [`DOC_WIDTH`] columns; runs of
/// whitespace collapse but the word sequence is preserved exactly, and a
/// word longer than the limit is emitted whole rather than split.
pub fn format_description(description: Option<&str>) -> String {
    let text = description.map(str::trim).unwrap_or("");
    if text.is_empty() {
        return EMPTY_DESCRIPTION.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::from(DOC_PREFIX);
    let mut line_has_words = false;

    for word in text.split_whitespace() {
        let needed = if line_has_words {
            word.len() + 1
        } else {
            word.len()
        };
        if line_has_words && line.len() + needed > DOC_WIDTH {
            lines.push(std::mem::take(&mut line));
            line_has_words = false;
        }
        if line_has_words {
            line.push(' ');
        }
        line.push_str(word);
        line_has_words = true;
    }
    lines.push(line);

    lines.join("\n")
}

/// Extract a code block from a model response.
///
/// Looks for a fenced block tagged with `language` first, then any untagged
/// fenced block, and finally falls back to the whole input trimmed. The
/// model's output format is not guaranteed, so this never fails; the caller
/// must accept that the fallback may not be valid code.
pub fn extract_code(content: &str, language: &str) -> String {
    if let Some(body) = fenced_block(content, language) {
        return body.trim().to_string();
    }

    if let Some(body) = fenced_block(content, "") {
        return body.trim().to_string();
    }

    content.trim().to_string()
}

/// Body of the first fence opened by ```` ```<tag>\n ```` and terminated by
/// a closing fence. An unterminated fence is not a block; it falls through
/// to the next extraction step. The tag match is case-sensitive and exact:
/// an empty tag only matches a bare fence.
fn fenced_block<'a>(content: &'a str, tag: &str) -> Option<&'a str> {
    let marker = format!("```{tag}\n");
    let start = content.find(&marker)? + marker.len();
    let rest = &content[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}

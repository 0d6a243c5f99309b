//! Locating the JSON document in model output.
//!
//! Schema-constrained output is normally bare JSON, but some models still
//! wrap it in a markdown fence or add a sentence before it.

/// Extract the episode JSON from `response`.
///
/// Tries, in order: the object the response starts with (trailing prose is
/// dropped), a fenced code block, then the first balanced `{ ... }` object.
/// An unbalanced response that starts with `{` is returned whole so the
/// decoder can report where it breaks.
///
/// # Examples
///
/// ```
/// use storyboard_director::extract_json;
///
/// let fenced = "```json\n{\"episodeNumber\": 1}\n```";
/// assert_eq!(extract_json(fenced).as_deref(), Some("{\"episodeNumber\": 1}"));
/// assert_eq!(extract_json("no json here"), None);
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    let trimmed = response.trim();
    if trimmed.starts_with('{') {
        return extract_balanced(trimmed, '{', '}').or_else(|| Some(trimmed.to_string()));
    }

    if let Some(block) = extract_from_code_block(trimmed) {
        return Some(block);
    }

    extract_balanced(trimmed, '{', '}')
}

fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let after_fence = start + 3;
    // Skip the language tag line
    let content_start = response[after_fence..]
        .find('\n')
        .map(|n| after_fence + n + 1)
        .unwrap_or(after_fence);

    let body = match response[content_start..].find("```") {
        Some(end) => &response[content_start..content_start + end],
        // Truncated response
        None => &response[content_start..],
    };

    let body = body.trim();
    body.starts_with('{').then(|| body.to_string())
}

fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_passes_through() {
        assert_eq!(
            extract_json("  {\"a\": 1}\n").as_deref(),
            Some("{\"a\": 1}")
        );
    }

    #[test]
    fn bare_object_followed_by_prose() {
        assert_eq!(
            extract_json("{\"a\": {\"b\": 1}}\n完成").as_deref(),
            Some("{\"a\": {\"b\": 1}}")
        );
    }

    #[test]
    fn truncated_bare_object_is_kept_whole() {
        assert_eq!(
            extract_json("{\"a\": [1, 2").as_deref(),
            Some("{\"a\": [1, 2")
        );
    }

    #[test]
    fn fence_without_language_tag() {
        assert_eq!(
            extract_json("```\n{\"a\": 1}\n```").as_deref(),
            Some("{\"a\": 1}")
        );
    }

    #[test]
    fn object_after_prose_with_braces_in_strings() {
        let response = "分镜如下：{\"prompt\": \"剑光 } 如虹\", \"n\": {\"x\": 2}} 完成";
        assert_eq!(
            extract_json(response).as_deref(),
            Some("{\"prompt\": \"剑光 } 如虹\", \"n\": {\"x\": 2}}")
        );
    }
}

use std::collections::{HashMap, HashSet};

/// Render course markdown (syllabus, long description) to sanitized HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "h1", "h2", "h3", "h4", "br", "em", "strong", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td", "del",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllabus_renders_headings_and_lists() {
        let html = markdown_to_html("# Course Syllabus\n\n## Module 1: Basics\n- Hooks\n- Context\n");
        assert!(html.contains("<h1>Course Syllabus</h1>"), "{html}");
        assert!(html.contains("<h2>Module 1: Basics</h2>"), "{html}");
        assert!(html.contains("<li>Hooks</li>"), "{html}");
    }

    #[test]
    fn scripts_and_handlers_are_stripped() {
        let html = markdown_to_html("<script>alert(1)</script>\n\n[x](javascript:alert(1))");
        assert!(!html.contains("<script"), "{html}");
        assert!(!html.contains("javascript:"), "{html}");
    }
}

//! Pulling identity out of a feed response.

/// Header lines of the last response. With redirects followed, curl reports
/// every hop, each block starting with its `HTTP/` status line.
fn final_response(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .rposition(|line| line.trim_start().starts_with("HTTP/"))
        .unwrap_or(0);
    &lines[start..]
}

/// Header value by case-insensitive name from the last response's header lines.
pub(super) fn header_value(lines: &[String], name: &str) -> Option<String> {
    final_response(lines).iter().find_map(|line| {
        let (n, v) = line.trim().split_once(':')?;
        n.trim().eq_ignore_ascii_case(name).then(|| v.trim().to_string())
    })
}

/// ETag with weak marker and quotes removed.
pub(super) fn etag_id(lines: &[String]) -> Option<String> {
    let raw = header_value(lines, "etag")?;
    let tag = raw.strip_prefix("W/").unwrap_or(&raw).trim_matches('"');
    (!tag.is_empty()).then(|| tag.to_string())
}

/// Text of the first `<title>` element of an RSS/Atom/HTML document.
pub fn extract_title(document: &str) -> Option<String> {
    let lower = document.to_ascii_lowercase();
    let open = lower.find("<title")?;
    let content_start = open + lower[open..].find('>')? + 1;
    let content_end = content_start + lower[content_start..].find("</title>")?;

    let mut text = document[content_start..content_end].trim();
    if let Some(inner) = text
        .strip_prefix("<![CDATA[")
        .and_then(|t| t.strip_suffix("]]>"))
    {
        text = inner.trim();
    }
    if text.is_empty() {
        return None;
    }
    Some(
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&apos;", "'")
            .replace("&amp;", "&"),
    )
}

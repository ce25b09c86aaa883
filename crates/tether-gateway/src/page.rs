//! Minimal formatted page for text content.

use tether_core::ShortCode;

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders stored text content as an HTML page.
pub fn render(code: &ShortCode, content: &str, clicks: u64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Short Link Content</title>
</head>
<body>
    <main>
        <pre class="content">{content}</pre>
        <footer>Short code: {code} &middot; Views: {clicks}</footer>
    </main>
</body>
</html>
"#,
        content = escape_html(content),
        code = escape_html(code.as_str()),
        clicks = clicks,
    )
}

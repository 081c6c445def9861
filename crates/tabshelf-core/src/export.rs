//! Bookmark tree rendering: Netscape HTML export and plain-text outline

use tabshelf_storage::BookmarkTree;

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn pad(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

fn render_html(tree: &BookmarkTree, out: &mut String, indent: usize) {
    let node = &tree.node;
    let added = node.date_added.timestamp();

    pad(out, indent);
    match &node.url {
        Some(url) => {
            out.push_str(&format!(
                "<DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>\n",
                escape_html(url),
                added,
                escape_html(&node.title)
            ));
        }
        None => {
            out.push_str(&format!(
                "<DT><H3 ADD_DATE=\"{}\">{}</H3>\n",
                added,
                escape_html(&node.title)
            ));
            pad(out, indent);
            out.push_str("<DL><p>\n");
            for child in &tree.children {
                render_html(child, out, indent + 2);
            }
            pad(out, indent);
            out.push_str("</DL><p>\n");
        }
    }
}

/// Netscape bookmark file for `tree`, children in stored order.
pub fn export_bookmarks_html(tree: &BookmarkTree) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
    out.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n");
    out.push_str("<TITLE>Bookmarks</TITLE>\n");
    out.push_str("<H1>Bookmarks</H1>\n");
    out.push_str("<DL><p>\n");
    render_html(tree, &mut out, 2);
    out.push_str("</DL><p>\n");
    out
}

fn render_line(tree: &BookmarkTree, out: &mut String, depth: usize) {
    pad(out, depth * 2);
    match &tree.node.url {
        Some(url) => out.push_str(&format!("- {} ({})\n", tree.node.title, url)),
        None => {
            out.push_str(&format!("+ {}\n", tree.node.title));
            for child in &tree.children {
                render_line(child, out, depth + 1);
            }
        }
    }
}

/// Indented outline, `+` for folders and `-` for bookmarks.
pub fn render_outline(tree: &BookmarkTree) -> String {
    let mut out = String::new();
    render_line(tree, &mut out, 0);
    out
}

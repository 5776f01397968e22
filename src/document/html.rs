//! RenderNode → HTML
//!
//! 展示模式下分隔线是虚线；导出模式下分隔线变成 PDF 分页标记。
//! 所有文本都经过转义。

use crate::document::render::{Inline, RenderNode, CALLOUT_TITLE, REPORT_BANNER_SUBTITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Display,
    Export,
}

pub fn render_html(nodes: &[RenderNode], mode: RenderMode) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, mode);
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

fn write_node(out: &mut String, node: &RenderNode, mode: RenderMode) {
    match node {
        RenderNode::Heading {
            inlines,
            report_banner: true,
            ..
        } => {
            out.push_str("<div class=\"rtq-banner pdf-avoid-break\"><h1>");
            write_inlines(out, inlines);
            out.push_str("</h1><p class=\"rtq-subtitle\">");
            out.push_str(&escape_html(REPORT_BANNER_SUBTITLE));
            out.push_str("</p></div>\n");
        }
        RenderNode::Heading { level, inlines, .. } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{} class=\"pdf-avoid-break\">", level));
            write_inlines(out, inlines);
            out.push_str(&format!("</h{}>\n", level));
        }
        RenderNode::Paragraph(inlines) => {
            out.push_str("<p class=\"pdf-avoid-break\">");
            write_inlines(out, inlines);
            out.push_str("</p>\n");
        }
        RenderNode::Porque => {
            out.push_str("<p class=\"text-center font-bold porque pdf-avoid-break\">PORQUE</p>\n");
        }
        RenderNode::Alternative { label, text } => {
            out.push_str(&format!(
                "<div class=\"alternativa pdf-avoid-break\"><span class=\"font-bold\">{}</span><span>{}</span></div>\n",
                escape_html(label),
                escape_html(text)
            ));
        }
        RenderNode::TagList(tags) => {
            out.push_str("<div class=\"tags pdf-avoid-break\">");
            for tag in tags {
                out.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
            }
            out.push_str("</div>\n");
        }
        RenderNode::Callout(children) => {
            out.push_str("<blockquote class=\"callout pdf-avoid-break\"><div class=\"callout-title font-bold\">");
            out.push_str(&escape_html(CALLOUT_TITLE));
            out.push_str("</div>\n");
            for child in children {
                write_node(out, child, mode);
            }
            out.push_str("</blockquote>\n");
        }
        RenderNode::Quote(children) => {
            out.push_str("<blockquote class=\"pdf-avoid-break\">\n");
            for child in children {
                write_node(out, child, mode);
            }
            out.push_str("</blockquote>\n");
        }
        RenderNode::List { start, items } => {
            match start {
                Some(1) => out.push_str("<ol>\n"),
                Some(n) => out.push_str(&format!("<ol start=\"{}\">\n", n)),
                None => out.push_str("<ul>\n"),
            }
            for item in items {
                out.push_str("<li>");
                for child in item {
                    write_node(out, child, mode);
                }
                out.push_str("</li>\n");
            }
            out.push_str(if start.is_some() { "</ol>\n" } else { "</ul>\n" });
        }
        RenderNode::Table { head, rows } => {
            out.push_str("<table class=\"pdf-avoid-break\">\n<thead><tr>");
            for cell in head {
                out.push_str("<th>");
                write_inlines(out, cell);
                out.push_str("</th>");
            }
            out.push_str("</tr></thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str("<td>");
                    write_inlines(out, cell);
                    out.push_str("</td>");
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
        RenderNode::CodeBlock(code) => {
            out.push_str("<pre><code>");
            out.push_str(&escape_html(code));
            out.push_str("</code></pre>\n");
        }
        RenderNode::Rule => match mode {
            RenderMode::Display => out.push_str("<hr class=\"dashed\">\n"),
            RenderMode::Export => out.push_str("<div class=\"pdf-page-break\"></div>\n"),
        },
    }
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Strong(children) => {
                out.push_str("<strong>");
                write_inlines(out, children);
                out.push_str("</strong>");
            }
            Inline::Emphasis(children) => {
                out.push_str("<em>");
                write_inlines(out, children);
                out.push_str("</em>");
            }
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape_html(code));
                out.push_str("</code>");
            }
            Inline::Link { url, children } => {
                out.push_str(&format!("<a href=\"{}\">", escape_html(url)));
                write_inlines(out, children);
                out.push_str("</a>");
            }
            Inline::SoftBreak => out.push('\n'),
            Inline::LineBreak => out.push_str("<br>\n"),
        }
    }
}

//! Markdown → RenderNode 树
//!
//! 用 pulldown-cmark 解析事件流，按栈构建块级/行内节点。
//! 题目专用的几种块（PORQUE、选项行、标签、调整建议）只看段落的纯文本来识别，
//! 不依赖 markdown 结构。

use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use serde::Serialize;

use crate::document::splitter::GeneratedDocument;

static ALTERNATIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-e]\)\s").expect("Invalid alternative regex"));

/// 触发"调整建议"样式的关键词（小写比较）
const CALLOUT_KEYWORDS: [&str; 3] = ["autoavaliação", "ajuste", "melhoria"];

pub const CALLOUT_TITLE: &str = "Recomendação de Ajuste";
pub const REPORT_BANNER_SUBTITLE: &str = "Design Instrucional & Pedagogia";

/// 行内节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Code(String),
    Link { url: String, children: Vec<Inline> },
    SoftBreak,
    LineBreak,
}

/// 块级节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderNode {
    Heading {
        level: u8,
        inlines: Vec<Inline>,
        /// 一级标题且包含"Relatório Técnico"时渲染为报告横幅
        report_banner: bool,
    },
    Paragraph(Vec<Inline>),
    /// 断言-理由题中间居中的 PORQUE
    Porque,
    Alternative {
        label: String,
        text: String,
    },
    TagList(Vec<String>),
    /// 带"Recomendação de Ajuste"标题的引用块
    Callout(Vec<RenderNode>),
    Quote(Vec<RenderNode>),
    List {
        start: Option<u64>,
        items: Vec<Vec<RenderNode>>,
    },
    Table {
        head: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    CodeBlock(String),
    Rule,
}

/// 题目与报告分别渲染后的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub question: Vec<RenderNode>,
    pub report: Vec<RenderNode>,
}

impl RenderedDocument {
    pub fn from_document(doc: &GeneratedDocument) -> Self {
        Self {
            question: parse(&doc.question),
            report: parse(&doc.report),
        }
    }

    pub fn has_report(&self) -> bool {
        !self.report.is_empty()
    }
}

/// 解析 markdown 为块级节点列表
pub fn parse(markdown: &str) -> Vec<RenderNode> {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(markdown, Options::ENABLE_TABLES) {
        builder.handle(event);
    }
    builder.finish()
}

/// 行内节点的纯文本
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    collect_inline_text(inlines, &mut out);
    out
}

fn collect_inline_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(children)
            | Inline::Emphasis(children)
            | Inline::Link { children, .. } => collect_inline_text(children, out),
            Inline::SoftBreak | Inline::LineBreak => out.push('\n'),
        }
    }
}

/// 块级节点的纯文本（用于引用块关键词判断）
pub fn block_text(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            RenderNode::Heading { inlines, .. } | RenderNode::Paragraph(inlines) => {
                collect_inline_text(inlines, &mut out)
            }
            RenderNode::Porque => out.push_str("PORQUE"),
            RenderNode::Alternative { label, text } => {
                out.push_str(label);
                out.push_str(text);
            }
            RenderNode::TagList(tags) => out.push_str(&tags.join(" ")),
            RenderNode::Callout(children) | RenderNode::Quote(children) => {
                out.push_str(&block_text(children))
            }
            RenderNode::List { items, .. } => {
                for item in items {
                    out.push_str(&block_text(item));
                }
            }
            RenderNode::Table { head, rows } => {
                for cell in head.iter().chain(rows.iter().flatten()) {
                    collect_inline_text(cell, &mut out);
                }
            }
            RenderNode::CodeBlock(code) => out.push_str(code),
            RenderNode::Rule => {}
        }
        out.push('\n');
    }
    out
}

/// 根据段落纯文本决定节点类型
fn classify_paragraph(inlines: Vec<Inline>) -> RenderNode {
    let text = plain_text(&inlines);
    let text = text.trim();

    if text == "PORQUE" || text == "**PORQUE**" {
        return RenderNode::Porque;
    }

    if ALTERNATIVE_REGEX.is_match(text) {
        // 前两个字符是 ASCII 的"x)"
        return RenderNode::Alternative {
            label: text[..2].to_string(),
            text: text[2..].to_string(),
        };
    }

    if text.starts_with('#') {
        return RenderNode::TagList(
            text.split(' ')
                .map(|tag| tag.replacen('#', "", 1))
                .collect(),
        );
    }

    RenderNode::Paragraph(inlines)
}

fn classify_quote(children: Vec<RenderNode>) -> RenderNode {
    let text = block_text(&children).to_lowercase();
    if CALLOUT_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        RenderNode::Callout(children)
    } else {
        RenderNode::Quote(children)
    }
}

enum Frame {
    Quote(Vec<RenderNode>),
    List {
        start: Option<u64>,
        items: Vec<Vec<RenderNode>>,
    },
    Item(Vec<RenderNode>),
    /// `implicit` 为紧凑列表项中没有 Paragraph 事件包裹的文本
    Paragraph {
        inlines: Vec<Inline>,
        implicit: bool,
    },
    Heading {
        level: u8,
        inlines: Vec<Inline>,
    },
    Table {
        head: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    TableHead(Vec<Vec<Inline>>),
    TableRow(Vec<Vec<Inline>>),
    TableCell(Vec<Inline>),
    CodeBlock(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Link {
        url: String,
        children: Vec<Inline>,
    },
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<RenderNode>,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag_end) => self.end(tag_end),
            Event::Text(text) => {
                if let Some(Frame::CodeBlock(code)) = self.stack.last_mut() {
                    code.push_str(&text);
                } else {
                    self.push_inline(Inline::Text(text.to_string()));
                }
            }
            Event::Code(code) => self.push_inline(Inline::Code(code.to_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push_inline(Inline::Text(html.to_string()))
            }
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::LineBreak),
            Event::Rule => {
                self.close_implicit();
                self.push_block(RenderNode::Rule);
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => {
                self.close_implicit();
                Frame::Paragraph {
                    inlines: Vec::new(),
                    implicit: false,
                }
            }
            Tag::Heading { level, .. } => {
                self.close_implicit();
                Frame::Heading {
                    level: level as u8,
                    inlines: Vec::new(),
                }
            }
            Tag::BlockQuote { .. } => {
                self.close_implicit();
                Frame::Quote(Vec::new())
            }
            Tag::List(start) => {
                self.close_implicit();
                Frame::List {
                    start,
                    items: Vec::new(),
                }
            }
            Tag::Item => Frame::Item(Vec::new()),
            Tag::CodeBlock(_) => {
                self.close_implicit();
                Frame::CodeBlock(String::new())
            }
            Tag::Table(_) => {
                self.close_implicit();
                Frame::Table {
                    head: Vec::new(),
                    rows: Vec::new(),
                }
            }
            Tag::TableHead => Frame::TableHead(Vec::new()),
            Tag::TableRow => Frame::TableRow(Vec::new()),
            Tag::TableCell => Frame::TableCell(Vec::new()),
            Tag::Strong => Frame::Strong(Vec::new()),
            Tag::Emphasis => Frame::Emphasis(Vec::new()),
            Tag::Link { dest_url, .. } => Frame::Link {
                url: dest_url.to_string(),
                children: Vec::new(),
            },
            _ => return,
        };
        self.stack.push(frame);
    }

    fn end(&mut self, tag_end: TagEnd) {
        match tag_end {
            TagEnd::Paragraph => {
                if let Some(Frame::Paragraph { inlines, .. }) = self.stack.pop() {
                    self.push_block(classify_paragraph(inlines));
                }
            }
            TagEnd::Heading { .. } => {
                if let Some(Frame::Heading { level, inlines }) = self.stack.pop() {
                    let report_banner =
                        level == 1 && plain_text(&inlines).contains("Relatório Técnico");
                    self.push_block(RenderNode::Heading {
                        level,
                        inlines,
                        report_banner,
                    });
                }
            }
            TagEnd::BlockQuote { .. } => {
                self.close_implicit();
                if let Some(Frame::Quote(children)) = self.stack.pop() {
                    self.push_block(classify_quote(children));
                }
            }
            TagEnd::List { .. } => {
                if let Some(Frame::List { start, items }) = self.stack.pop() {
                    self.push_block(RenderNode::List { start, items });
                }
            }
            TagEnd::Item => {
                self.close_implicit();
                if let Some(Frame::Item(children)) = self.stack.pop() {
                    if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
                        items.push(children);
                    }
                }
            }
            TagEnd::CodeBlock => {
                if let Some(Frame::CodeBlock(code)) = self.stack.pop() {
                    self.push_block(RenderNode::CodeBlock(code));
                }
            }
            TagEnd::Table => {
                if let Some(Frame::Table { head, rows }) = self.stack.pop() {
                    self.push_block(RenderNode::Table { head, rows });
                }
            }
            TagEnd::TableHead => {
                if let Some(Frame::TableHead(cells)) = self.stack.pop() {
                    if let Some(Frame::Table { head, .. }) = self.stack.last_mut() {
                        *head = cells;
                    }
                }
            }
            TagEnd::TableRow => {
                if let Some(Frame::TableRow(cells)) = self.stack.pop() {
                    if let Some(Frame::Table { rows, .. }) = self.stack.last_mut() {
                        rows.push(cells);
                    }
                }
            }
            TagEnd::TableCell => {
                if let Some(Frame::TableCell(inlines)) = self.stack.pop() {
                    match self.stack.last_mut() {
                        Some(Frame::TableHead(cells)) | Some(Frame::TableRow(cells)) => {
                            cells.push(inlines)
                        }
                        _ => {}
                    }
                }
            }
            TagEnd::Strong => {
                if let Some(Frame::Strong(children)) = self.stack.pop() {
                    self.push_inline(Inline::Strong(children));
                }
            }
            TagEnd::Emphasis => {
                if let Some(Frame::Emphasis(children)) = self.stack.pop() {
                    self.push_inline(Inline::Emphasis(children));
                }
            }
            TagEnd::Link => {
                if let Some(Frame::Link { url, children }) = self.stack.pop() {
                    self.push_inline(Inline::Link { url, children });
                }
            }
            _ => {}
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        if matches!(self.stack.last(), Some(Frame::Item(_))) {
            self.stack.push(Frame::Paragraph {
                inlines: Vec::new(),
                implicit: true,
            });
        }

        match self.stack.last_mut() {
            Some(Frame::Paragraph { inlines, .. })
            | Some(Frame::Heading { inlines, .. })
            | Some(Frame::TableCell(inlines))
            | Some(Frame::Strong(inlines))
            | Some(Frame::Emphasis(inlines))
            | Some(Frame::Link {
                children: inlines, ..
            }) => inlines.push(inline),
            // 顶层游离的行内内容自成一段
            _ => self.push_block(RenderNode::Paragraph(vec![inline])),
        }
    }

    fn push_block(&mut self, node: RenderNode) {
        for frame in self.stack.iter_mut().rev() {
            match frame {
                Frame::Quote(children) | Frame::Item(children) => {
                    children.push(node);
                    return;
                }
                _ => {}
            }
        }
        self.root.push(node);
    }

    /// 紧凑列表项里的文本在遇到下一个块或列表项结束时收尾，不做题目专用识别
    fn close_implicit(&mut self) {
        if matches!(
            self.stack.last(),
            Some(Frame::Paragraph { implicit: true, .. })
        ) {
            if let Some(Frame::Paragraph { inlines, .. }) = self.stack.pop() {
                self.push_block(RenderNode::Paragraph(inlines));
            }
        }
    }

    fn finish(mut self) -> Vec<RenderNode> {
        self.close_implicit();
        self.root
    }
}

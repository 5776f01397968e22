//! 文档层：拆分 → 渲染 → 导出

pub mod export;
pub mod html;
pub mod render;
pub mod splitter;

pub use export::{Exporter, PdfPrinter, PdfTarget};
pub use html::{render_html, RenderMode};
pub use render::{Inline, RenderNode, RenderedDocument};
pub use splitter::{split, GeneratedDocument};

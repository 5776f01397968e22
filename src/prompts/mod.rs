//! 提示词层
//!
//! 把结构化请求编译成发给模型的完整指令文本，全部为纯函数

pub mod alternatives;
pub mod audit;
pub mod fragments;
pub mod generation;
pub mod system;

pub use audit::compile_audit;
pub use fragments::REPORT_HEADING;
pub use generation::{compile, compile_request, PromptOptions};
pub use system::SYSTEM_INSTRUCTION;

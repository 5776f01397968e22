pub mod flow;
pub mod session;

pub use flow::ExamFlow;
pub use session::{reduce, Action, ExportTarget, Mode, SessionState, Submission};

pub mod bloom;
pub mod catalog;
pub mod difficulty;
pub mod loaders;
pub mod question_type;
pub mod request;

pub use bloom::{BloomInfo, BloomLevel};
pub use catalog::QuestionTypeInfo;
pub use difficulty::DifficultyLevel;
pub use loaders::load_generation_form;
pub use question_type::{Alternative, MultipleRange, QuestionSpec, QuestionType};
pub use request::{GenerationForm, GenerationRequest, Quantity};

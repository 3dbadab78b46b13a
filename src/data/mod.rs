mod bank;
mod loader;

pub use bank::QuestionBank;
pub use loader::{LoadError, load_bundled_questions, load_questions_from_json, parse_questions};

pub mod cyclic;
pub mod lucky;
pub mod numerology;
pub mod oracle;
pub mod profile;
pub mod qa;
pub mod seeded;
pub mod signs;

pub use crate::domain::model::{Answer, AnswerSource, AstroProfile, BirthInput};
pub use crate::domain::ports::{AnswerProvider, ConfigProvider, Storage};
pub use crate::utils::error::Result;

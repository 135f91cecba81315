pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::chat_client::ChatClient;
pub use app::export::export_profile;
pub use app::key_store::KeyStore;
pub use config::cli::LocalStorage;
pub use config::toml_config::AppConfig;
pub use core::oracle::OracleEngine;
pub use core::profile::profile_from_birth;
pub use core::qa::qa_fallback;
pub use core::seeded::daily_message;
pub use domain::model::{
    Answer, AnswerSource, AstroProfile, BirthInput, ChineseAnimal, Element, Modality, ZodiacSign,
};
pub use utils::error::{AstroError, Result};

use crate::domain::model::AstroProfile;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn llm_base_url(&self) -> &str;
    fn llm_model(&self) -> &str;
    fn llm_temperature(&self) -> f32;
    fn request_timeout_seconds(&self) -> u64;
    fn data_dir(&self) -> &str;
}

/// 遠端回答來源，通常是 chat completion API
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn answer(&self, question: &str, profile: &AstroProfile) -> Result<String>;
}

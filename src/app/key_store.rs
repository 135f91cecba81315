use crate::core::Storage;
use crate::utils::error::{AstroError, Result};

pub const API_KEY_FILE: &str = "api_key";

/// 將聊天 API key 存放在呼叫端提供的 Storage
pub struct KeyStore<S: Storage> {
    storage: S,
}

impl<S: Storage> KeyStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn save(&self, key: &str) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("api_key", key)?;
        self.storage
            .write_file(API_KEY_FILE, key.trim().as_bytes())
            .await?;
        tracing::info!("🔑 API key saved");
        Ok(())
    }

    /// 尚未儲存或檔案為空時回傳 `Ok(None)`，其他讀取錯誤照樣回報
    pub async fn load(&self) -> Result<Option<String>> {
        match self.storage.read_file(API_KEY_FILE).await {
            Ok(bytes) => {
                let key = String::from_utf8_lossy(&bytes).trim().to_string();
                Ok((!key.is_empty()).then_some(key))
            }
            Err(AstroError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No stored API key: {}", e);
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("⚠️ Stored API key could not be read: {}", e);
                Err(e)
            }
        }
    }

    pub async fn clear(&self) -> Result<()> {
        self.storage.remove_file(API_KEY_FILE).await?;
        tracing::info!("🔑 API key cleared");
        Ok(())
    }
}

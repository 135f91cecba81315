use crate::core::{AnswerProvider, AstroProfile, ConfigProvider};
use crate::utils::error::{AstroError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

/// OpenAI 相容 `chat/completions` 端點的客戶端
pub struct ChatClient {
    client: Client,
    endpoint: String,
    model: String,
    temperature: f32,
    api_key: String,
}

impl ChatClient {
    pub fn new<C: ConfigProvider>(config: &C, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/chat/completions",
                config.llm_base_url().trim_end_matches('/')
            ),
            model: config.llm_model().to_string(),
            temperature: config.llm_temperature(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// 描述 profile 的系統提示詞，讓模型依此回答
pub fn system_prompt(profile: &AstroProfile) -> String {
    format!(
        "You are a warm, practical astrology guide. Answer in 3 to 5 sentences. \
         The person is {name}: Sun in {sign} ({element}, {modality}), Life Path {life_path}, \
         born in the Year of the {animal}. Their lucky color is {color} and lucky number is {number}. \
         Ground your advice in these traits and avoid medical, legal or financial certainty.",
        name = profile.name,
        sign = profile.sun_sign,
        element = profile.element,
        modality = profile.modality,
        life_path = profile.life_path,
        animal = profile.chinese_animal,
        color = profile.lucky_color,
        number = profile.lucky_number,
    )
}

#[async_trait]
impl AnswerProvider for ChatClient {
    async fn answer(&self, question: &str, profile: &AstroProfile) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt(profile),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: question.to_string(),
                },
            ],
        };

        tracing::debug!("Making chat request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Chat response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AstroError::LlmResponseError {
                message: format!("HTTP {}: {}", status.as_u16(), body.trim()),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or_else(|| AstroError::LlmResponseError {
                message: "Response contained no choices".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::AppConfig;
    use crate::domain::model::{ChineseAnimal, Element, Modality, ZodiacSign};

    fn profile() -> AstroProfile {
        AstroProfile {
            name: "Ada".to_string(),
            sun_sign: ZodiacSign::Leo,
            element: Element::Fire,
            modality: Modality::Fixed,
            life_path: 11,
            chinese_animal: ChineseAnimal::Dragon,
            lucky_color: "#FB8C00".to_string(),
            lucky_number: 3,
            summary: String::new(),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = AppConfig::from_toml_str(
            r#"
[llm]
base_url = "https://llm.example.com/v1/"
"#,
        )
        .unwrap();
        let client = ChatClient::new(&config, "sk-test".to_string()).unwrap();
        assert_eq!(client.endpoint(), "https://llm.example.com/v1/chat/completions");
    }

    #[test]
    fn test_system_prompt_mentions_profile() {
        let prompt = system_prompt(&profile());
        assert!(prompt.contains("Sun in Leo (Fire, Fixed)"));
        assert!(prompt.contains("Life Path 11"));
        assert!(prompt.contains("Year of the Dragon"));
    }
}

use crate::core::qa::qa_fallback;
use crate::domain::model::{Answer, AnswerSource, AstroProfile};
use crate::domain::ports::AnswerProvider;

/// 有設定遠端服務時優先使用，否則 (或失敗時) 改用規則式回答
pub struct OracleEngine<P: AnswerProvider> {
    provider: Option<P>,
}

impl<P: AnswerProvider> OracleEngine<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn offline() -> Self {
        Self { provider: None }
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn ask(&self, question: &str, profile: &AstroProfile) -> Answer {
        if let Some(provider) = &self.provider {
            tracing::debug!("Asking remote provider: {}", question);
            match provider.answer(question, profile).await {
                Ok(text) if !text.trim().is_empty() => {
                    return Answer {
                        text: text.trim().to_string(),
                        source: AnswerSource::Remote,
                    };
                }
                Ok(_) => {
                    tracing::warn!("⚠️ Remote provider returned an empty answer, using rule-based fallback");
                }
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Remote provider failed: {} (Category: {:?}), using rule-based fallback",
                        e,
                        e.category()
                    );
                    tracing::debug!("💡 {}", e.recovery_suggestion());
                }
            }
        }

        Answer {
            text: qa_fallback(question, profile),
            source: AnswerSource::RuleBased,
        }
    }
}

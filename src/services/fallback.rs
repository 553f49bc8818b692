//! Fallback classifier client
//!
//! When pattern matching is inconclusive the classifier sends the text to an
//! external language-model classifier constrained to the fixed intent
//! enumeration. The call is attempted at most once per classification and is
//! time-bounded by the caller; any failure degrades to `unknown` upstream.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::config::FallbackConfig;
use crate::error::{AppError, Result};
use crate::models::intent::Intent;

/// External intent classification backend
#[async_trait]
pub trait FallbackClassifier: Send + Sync {
    /// Classify text into one of the allowed intents with a confidence score
    async fn classify(&self, text: &str, allowed_intents: &[Intent]) -> Result<(Intent, f32)>;
}

/// OpenAI 兼容接口的分类客户端
pub struct OpenAiFallback {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiFallback {
    /// Build a client with the configured per-request timeout
    pub fn new(config: &FallbackConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn build_prompt(text: &str, allowed_intents: &[Intent]) -> String {
        let intent_list = allowed_intents
            .iter()
            .map(|i| format!("- {}", i.as_str()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Classify the following customer message into one of these intents:\n\
             {intent_list}\n\n\
             Message: \"{text}\"\n\n\
             Respond with only the intent name and confidence score (0.0-1.0) \
             separated by a comma."
        )
    }

    /// Parse "intent_name, 0.8" style replies
    fn parse_reply(reply: &str) -> Result<(Intent, f32)> {
        let (name, confidence) = reply
            .trim()
            .split_once(',')
            .ok_or_else(|| AppError::Fallback(format!("无法解析分类回复: {}", reply)))?;

        let intent = Intent::parse(name.trim())
            .ok_or_else(|| AppError::Fallback(format!("意图不在枚举内: {}", name.trim())))?;

        let confidence: f32 = confidence
            .trim()
            .parse()
            .map_err(|_| AppError::Fallback(format!("无法解析置信度: {}", confidence.trim())))?;

        Ok((intent, confidence.clamp(0.0, 1.0)))
    }
}

#[async_trait]
impl FallbackClassifier for OpenAiFallback {
    async fn classify(&self, text: &str, allowed_intents: &[Intent]) -> Result<(Intent, f32)> {
        let prompt = Self::build_prompt(text, allowed_intents);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "max_tokens": 50,
                "temperature": 0.1
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Fallback(format!(
                "外部分类调用失败: {}",
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let reply = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AppError::Fallback("分类回复为空".to_string()))?;

        Self::parse_reply(reply)
    }
}

/// Fallback used when no external service is configured
///
/// Always errors, so low-confidence classifications degrade to `unknown`
/// without a network dependency.
pub struct DisabledFallback;

#[async_trait]
impl FallbackClassifier for DisabledFallback {
    async fn classify(&self, _text: &str, _allowed_intents: &[Intent]) -> Result<(Intent, f32)> {
        Err(AppError::Fallback("外部分类服务未启用".to_string()))
    }
}

/// Create a fallback classifier from configuration
pub fn create_fallback_classifier(config: &FallbackConfig) -> Result<Box<dyn FallbackClassifier>> {
    if config.enabled && !config.api_key.is_empty() {
        Ok(Box::new(OpenAiFallback::new(config)?))
    } else {
        Ok(Box::new(DisabledFallback))
    }
}

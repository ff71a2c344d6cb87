//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、プロンプトをそのまま返します。
//! デバッグやテスト用に使用します（APIキー不要）。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({ "prompt": prompt }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際のAPI呼び出しは行わず、ペイロードをそのままレスポンス扱いにする
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        let prompt = v["prompt"].as_str().unwrap_or("");
        Ok(Some(format!("[echo] {}", prompt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_round_trip() {
        let provider = EchoProvider::new();
        let payload = provider.make_request_payload("Hello").unwrap();
        let request_json = serde_json::to_string(&payload).unwrap();
        let response_json = provider.make_http_request(&request_json).unwrap();
        let text = provider.parse_response_text(&response_json).unwrap();
        assert_eq!(text.as_deref(), Some("[echo] Hello"));
    }
}

//! Geminiプロバイダの実装

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::env;

/// デフォルトのモデル名
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// APIキーを読む環境変数名
const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Geminiプロバイダ
pub struct GeminiProvider {
    model: String,
    api_key: String,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// APIキーは構築時に`GOOGLE_API_KEY`から一度だけ読み込みます。
    ///
    /// # Arguments
    /// * `model` - モデル名（デフォルト: "gemini-2.0-flash"）
    ///
    /// # Returns
    /// * `Ok(Self)` - プロバイダ
    /// * `Err(Error)` - APIキー未設定
    pub fn new(model: Option<String>) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| Error::env(format!("{} environment variable is not set", API_KEY_ENV)))?;

        Ok(Self { model, api_key })
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }]
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        // エラーチェック
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // テキストを抽出
        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
            .map(|s| s.to_string());

        Ok(text)
    }
}

//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::LlmProvider;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Gemini
    Gemini,
    /// Echo（プロンプトを返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Gemini(GeminiProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        match self {
            Self::Gemini(p) => p.make_request_payload(prompt),
            Self::Echo(p) => p.make_request_payload(prompt),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gemini(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gemini(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（オプション、デフォルト値が使用される）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::Gemini => {
            let provider = GeminiProvider::new(model)?;
            Ok(AnyProvider::Gemini(provider))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}

/// ドライバーを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（オプション、デフォルト値が使用される）
pub fn create_driver(
    provider_type: ProviderType,
    model: Option<String>,
) -> Result<LlmDriver<AnyProvider>, Error> {
    let provider = create_provider(provider_type, model)?;
    Ok(LlmDriver::new(provider))
}

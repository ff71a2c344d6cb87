//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Echoなど）はこのトレイトを実装する必要があります。
/// 本ツールは1プロンプト=1呼び出しのため、会話履歴は扱いません。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - 自然言語のプロンプト
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - エラー
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Arguments
    /// * `response_json` - レスポンスJSON文字列
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - エラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}

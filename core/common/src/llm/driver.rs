//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。
//! ペイロード生成 → HTTP → テキスト抽出 → 後処理（コードフェンス除去）の順。

use crate::error::Error;
use crate::llm::provider::LlmProvider;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにプロンプトを送信してテキストを取得
    ///
    /// リトライ・タイムアウト調整は行わない（1呼び出し1試行）。
    ///
    /// # Arguments
    /// * `prompt` - 自然言語のプロンプト
    ///
    /// # Returns
    /// * `Ok(String)` - フェンス除去・トリム済みの応答テキスト
    /// * `Err(Error)` - エラー
    pub fn generate(&self, prompt: &str) -> Result<String, Error> {
        // リクエストペイロードを生成
        let payload = self.provider.make_request_payload(prompt)?;

        // JSON文字列に変換
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        // HTTPリクエストを実行
        let response_json = self.provider.make_http_request(&request_json)?;

        // レスポンスからテキストを抽出
        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::response("No text in response"))?;

        Ok(strip_sql_fence(&text))
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// 応答テキストから```sqlコードフェンスを除去してトリムする
///
/// 先頭の```sql（または```）と末尾の```を取り除き、前後の空白を削除します。
/// フェンスがないテキストはトリムのみ。
pub fn strip_sql_fence(text: &str) -> String {
    let trimmed = text.trim();
    let without_prefix = trimmed
        .strip_prefix("```sql")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_suffix = without_prefix
        .strip_suffix("```")
        .unwrap_or(without_prefix);
    without_suffix.trim().to_string()
}

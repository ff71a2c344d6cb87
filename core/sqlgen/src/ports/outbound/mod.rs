//! アウトバウンドポート

use common::error::Error;

/// テキスト生成の境界
///
/// 外部の生成AIサービスに1つのプロンプトを送り、テキスト応答を受け取る。
/// モデルクライアントはグローバルではなく、このトレイトのオブジェクトとして
/// 明示的に構築・注入されます（テスト時はスタブに差し替え）。
pub trait TextGenerator: Send + Sync {
    /// プロバイダ名（ログ用）
    fn name(&self) -> &str;

    /// プロンプトからテキストを生成
    ///
    /// # Arguments
    /// * `prompt` - 自然言語のプロンプト
    ///
    /// # Returns
    /// * `Ok(String)` - 整形済みの応答テキスト
    /// * `Err(Error)` - 生成失敗（ネットワーク・認証・レスポンス不正を包含）
    fn generate(&self, prompt: &str) -> Result<String, Error>;
}

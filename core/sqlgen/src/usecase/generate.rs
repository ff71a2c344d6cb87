//! 生成ユースケース（送信ハンドラの中核）
//!
//! 入力検証 → SQLクエリ生成 → 期待される出力・説明の生成、の順に
//! 逐次実行します。クエリ生成に失敗した場合は依存する2呼び出しを
//! スキップして1つのエラーを返します（暗黙の連鎖失敗の排除）。
//! 2番目・3番目の呼び出しの失敗は該当フィールドを`None`にするだけで、
//! 成功した分は返します。

use std::sync::Arc;

use common::error::Error;
use tracing::warn;

use crate::domain::prompt;
use crate::domain::{ResultBundle, UserDescription};
use crate::ports::outbound::TextGenerator;

/// 生成ユースケース
pub struct GenerateUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl GenerateUseCase {
    /// 新しいユースケースを作成
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// 説明文から結果バンドルを生成
    ///
    /// # Arguments
    /// * `raw_description` - フォームから受け取った生の説明文
    ///
    /// # Returns
    /// * `Ok(ResultBundle)` - 生成結果（部分的成功を含む）
    /// * `Err(Error::Validation)` - 入力が短すぎる（アダプターは呼ばれない）
    /// * `Err(Error)` - SQLクエリ生成の失敗
    pub fn run(&self, raw_description: &str) -> Result<ResultBundle, Error> {
        let description = UserDescription::parse(raw_description)?;

        // 1回目: SQLクエリ。失敗したら以降の呼び出しはスキップ。
        let sql_query = self.generator.generate(&prompt::query_prompt(&description))?;

        // 2回目・3回目はクエリにのみ依存し、失敗しても残りは返す
        let expected_output = self.generate_optional(&prompt::expected_output_prompt(&sql_query));
        let explanation = self.generate_optional(&prompt::explanation_prompt(&sql_query));

        Ok(ResultBundle {
            sql_query,
            expected_output,
            explanation,
        })
    }

    fn generate_optional(&self, prompt: &str) -> Option<String> {
        match self.generator.generate(prompt) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(provider = self.generator.name(), "generation failed: {}", e);
                None
            }
        }
    }
}

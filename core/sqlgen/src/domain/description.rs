//! ユーザー入力（自然言語の説明文）の検証

use common::error::Error;

/// トリム後の最小文字数
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// 入力が短すぎる場合のユーザー向け警告メッセージ
pub const SHORT_DESCRIPTION_WARNING: &str = "Por favor, forneça uma descrição mais detalhada.";

/// 検証済みのユーザー説明文
///
/// `parse`を通してのみ作成できるため、保持している文字列は常に
/// トリム済み・最小文字数以上であることが保証されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDescription(String);

impl UserDescription {
    /// 生の入力文字列を検証して作成
    ///
    /// # Arguments
    /// * `raw` - フォームから受け取った生の文字列
    ///
    /// # Returns
    /// * `Ok(Self)` - トリム済みの説明文
    /// * `Err(Error::Validation)` - トリム後10文字未満
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(Error::validation(SHORT_DESCRIPTION_WARNING));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 説明文を文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

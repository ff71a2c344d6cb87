//! 結果バンドルとダウンロード文書の組み立て

use serde::{Deserialize, Serialize};

/// ダウンロードファイル名（固定）
pub const EXPORT_FILE_NAME: &str = "dsa_resultado_query.sql";

/// ダウンロードのMIMEタイプ（固定）
pub const EXPORT_MIME_TYPE: &str = "text/plain";

/// 1回の送信で生成された3つのテキスト
///
/// SQLクエリは成功時に必ず存在します。期待される出力と説明は、
/// 生成に失敗した場合`None`のまま返されます（成功した分だけ表示する方針）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub sql_query: String,
    pub expected_output: Option<String>,
    pub explanation: Option<String>,
}

impl ResultBundle {
    /// 3つのフィールドを固定見出しで連結した1つの文書を作る
    ///
    /// `None`は空文字列として扱います。純粋関数であり、同じ入力に対して
    /// 常にバイト単位で同一の出力を返します。
    pub fn render_document(&self) -> String {
        format!(
            "Consulta SQL:\n{}\n\nSaída Esperada:\n{}\n\nExplicação:\n{}",
            self.sql_query,
            self.expected_output.as_deref().unwrap_or(""),
            self.explanation.as_deref().unwrap_or("")
        )
    }
}

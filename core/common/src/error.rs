//! エラーハンドリング
//!
//! クレート全体で使う統一エラー型。各バリアントは発生箇所（環境変数、HTTP、
//! JSON、レスポンス解析、入力検証、引数不正）に対応します。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// 環境変数・設定の不備
    #[error("{0}")]
    Env(String),
    /// HTTPリクエストの失敗
    #[error("{0}")]
    Http(String),
    /// JSONのシリアライズ/デシリアライズ失敗
    #[error("{0}")]
    Json(String),
    /// レスポンスが不正（テキストが取れない等）
    #[error("{0}")]
    Response(String),
    /// 入力検証エラー
    #[error("{0}")]
    Validation(String),
    /// コマンドライン引数の不正
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// 環境変数・設定エラーを作成
    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// HTTPエラーを作成
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// JSONエラーを作成
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// レスポンス不正エラーを作成
    pub fn response(msg: impl Into<String>) -> Self {
        Self::Response(msg.into())
    }

    /// 入力検証エラーを作成
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// 引数不正エラーを作成
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// 入力検証エラーかどうか
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// プロセス終了コード（sysexits準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Validation(_) => 64,
            Self::Env(_) => 78,
            Self::Http(_) => 69,
            Self::Json(_) | Self::Response(_) => 65,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::env("GOOGLE_API_KEY is not set");
        assert_eq!(err.to_string(), "GOOGLE_API_KEY is not set");
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::usage("bad flag").exit_code(), 64);
        assert_eq!(Error::validation("too short").exit_code(), 64);
        assert_eq!(Error::env("missing key").exit_code(), 78);
        assert_eq!(Error::http("timeout").exit_code(), 69);
        assert_eq!(Error::json("parse").exit_code(), 65);
        assert_eq!(Error::response("no text").exit_code(), 65);
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::validation("x").is_validation());
        assert!(!Error::http("x").is_validation());
    }
}

//! sqlgen共通ライブラリ
//!
//! アプリケーション本体（`sqlgen`）と共有される機能を提供します。

/// エラーハンドリング
pub mod error;

/// LLMドライバーとプロバイダ
pub mod llm;

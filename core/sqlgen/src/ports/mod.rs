//! ポート定義（usecaseが依存する境界）

pub mod outbound;

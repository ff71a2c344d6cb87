//! ドメイン型: 入力検証、プロンプト整形、結果バンドル

pub mod bundle;
pub mod description;
pub mod prompt;

pub use bundle::ResultBundle;
pub use description::UserDescription;

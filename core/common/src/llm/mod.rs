//! LLMドライバーとプロバイダの実装
//!
//! このモジュールは、異なるLLMプロバイダ（Gemini、Echo）で共通する処理を提供します。

pub mod driver;
pub mod provider;
pub mod gemini;
pub mod echo;
pub mod factory;

pub use driver::{strip_sql_fence, LlmDriver};
pub use provider::LlmProvider;
pub use factory::{create_driver, create_provider, AnyProvider, ProviderType};

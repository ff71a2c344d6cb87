//! 配線: 標準アダプタでユースケースとサーバー状態を組み立てる

use std::sync::Arc;

use common::error::Error;
use common::llm::{create_driver, ProviderType};

use crate::adapter::DriverTextGenerator;
use crate::cli::Config;
use crate::ports::outbound::TextGenerator;
use crate::server::AppState;
use crate::usecase::GenerateUseCase;

/// 配線: 設定からAppStateを組み立てる
///
/// モデルクライアントはここで一度だけ構築され、ポート経由で注入されます。
/// APIキー未設定はこの時点で設定エラーになります（echoは不要）。
pub fn wire(config: &Config) -> Result<AppState, Error> {
    let profile = config.profile.as_deref().unwrap_or("gemini");
    let provider_type = ProviderType::from_str(profile)
        .ok_or_else(|| Error::usage(format!("Unknown profile: {}", profile)))?;

    let driver = create_driver(provider_type, config.model.clone())?;
    let generator: Arc<dyn TextGenerator> = Arc::new(DriverTextGenerator::new(driver));
    Ok(AppState::new(Arc::new(GenerateUseCase::new(generator))))
}

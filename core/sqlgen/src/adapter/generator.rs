//! LlmDriverをTextGeneratorポートに適合させるアダプター

use common::error::Error;
use common::llm::{AnyProvider, LlmDriver, LlmProvider};

use crate::ports::outbound::TextGenerator;

/// ドライバー経由のテキスト生成アダプター
pub struct DriverTextGenerator {
    driver: LlmDriver<AnyProvider>,
}

impl DriverTextGenerator {
    /// 新しいアダプターを作成
    pub fn new(driver: LlmDriver<AnyProvider>) -> Self {
        Self { driver }
    }
}

impl TextGenerator for DriverTextGenerator {
    fn name(&self) -> &str {
        self.driver.provider().name()
    }

    fn generate(&self, prompt: &str) -> Result<String, Error> {
        self.driver.generate(prompt)
    }
}

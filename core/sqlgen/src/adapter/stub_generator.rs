//! テスト用: 固定の応答列を返すTextGenerator実装

use std::sync::Mutex;

use common::error::Error;

use crate::ports::outbound::TextGenerator;

/// テスト用スタブ
///
/// 与えられた応答を順番に返し、受け取ったプロンプトをすべて記録します。
/// 応答が尽きた後の呼び出しはレスポンスエラーになります。
pub struct StubGenerator {
    responses: Mutex<Vec<Result<String, Error>>>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(responses: Vec<Result<String, Error>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// 全呼び出しが成功するスタブ
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    /// 記録されたプロンプトのコピーを取得
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// 呼び出し回数
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl TextGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    fn generate(&self, prompt: &str) -> Result<String, Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::response("stub exhausted"));
        }
        responses.remove(0)
    }
}

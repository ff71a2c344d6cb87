//! sqlgen - AI SQLクエリジェネレータ（Text-to-SQL）
//!
//! 自然言語の説明からSQLクエリ・出力例・構文説明を生成する
//! 1ページのWebツール。

mod adapter;
mod cli;
mod domain;
mod page;
mod ports;
mod server;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use anyhow::Result;
use cli::{parse_args, Config, ParseOutcome};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    // .envファイルから環境変数を読み込む（存在しなくてもよい）
    dotenv::dotenv().ok();

    let config = match parse_args(std::env::args()) {
        Ok(ParseOutcome::Config(config)) => config,
        Ok(ParseOutcome::Exit(text)) => {
            println!("{}", text);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    };

    init_tracing(&config);

    let state = match wiring::wire(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    };

    server::run(state, &config.host, config.port).await
}

/// ロギングを初期化（--verboseでDEBUGに引き上げ）
fn init_tracing(config: &Config) {
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

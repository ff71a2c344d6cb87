//! コマンドライン引数の定義と解析

use clap::builder::ArgAction;
use clap::value_parser;
use common::error::Error;

/// デフォルトの待ち受けホスト（セキュリティのためlocalhostのみ）
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 8787;

/// サーバー設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 待ち受けホスト
    pub host: String,
    /// 待ち受けポート
    pub port: u16,
    /// -p / --profile: LLMプロバイダ（gemini | echo）
    pub profile: Option<String>,
    /// -m / --model: モデル名
    pub model: Option<String>,
    /// -v / --verbose: 不具合調査用の冗長ログを出力する
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            profile: None,
            model: None,
            verbose: false,
        }
    }
}

/// 解析結果: 通常の Config / ヘルプ・バージョン表示（出力して終了）
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    /// -h/-V が指定された（mainで表示して終了）
    Exit(String),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("sqlgen")
        .about("AI SQL query generator (text-to-SQL web tool)")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            clap::Arg::new("host")
                .long("host")
                .value_name("host")
                .help("Bind address (default: 127.0.0.1)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("port")
                .short('P')
                .long("port")
                .value_name("port")
                .help("Bind port (default: 8787)")
                .value_parser(value_parser!(u16))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (gemini, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gemini-2.0-flash)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
}

/// 引数を解析する
///
/// # Arguments
/// * `args` - プログラム名を含む引数リスト
///
/// # Returns
/// * `Ok(ParseOutcome)` - 設定、またはヘルプ/バージョンの表示テキスト
/// * `Err(Error::Usage)` - 引数不正
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = match build_clap_command().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            // -h / -V はエラーではなく表示して正常終了
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(ParseOutcome::Exit(e.to_string()))
                }
                _ => Err(Error::usage(e.to_string())),
            };
        }
    };

    let mut config = Config::default();
    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    config.profile = matches.get_one::<String>("profile").cloned();
    config.model = matches.get_one::<String>("model").cloned();
    config.verbose = matches.get_flag("verbose");

    Ok(ParseOutcome::Config(config))
}

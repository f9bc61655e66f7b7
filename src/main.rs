use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unit_converter_toolbox::app::{self, AppError};
use unit_converter_toolbox::config;
use unit_converter_toolbox::i18n::{self, keys, Translator};

#[derive(Debug, Parser)]
#[command(name = "unit_converter_toolbox", version, about = "Length/weight/volume/temperature unit converter")]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값 하나를 변환해 출력한다. 실패하면 빈 줄을 출력한다.
    Convert {
        /// 변환할 값 (숫자로 시작하는 문자열)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// 입력 단위 식별자 (예: mile)
        from: String,
        /// 변환 단위 식별자 (예: meter)
        to: String,
        /// 분류. 생략하면 입력 단위로 추정한다.
        #[arg(long, short)]
        category: Option<String>,
        /// 실패를 빈 줄 대신 오류로 보고한다.
        #[arg(long)]
        strict: bool,
    },
    /// 분류의 단위 목록을 출력한다.
    Units {
        category: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    init_tracing();
    let cli = Cli::parse();
    let lang = cli.lang.clone();
    if let Err(err) = try_run(cli) {
        let tr = Translator::new_with_pack(
            &i18n::resolve_language(lang.as_deref().unwrap_or("auto"), None),
            None,
        );
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Some(Command::Convert {
            value,
            from,
            to,
            category,
            strict,
        }) => {
            let line = app::convert_once(&value, &from, &to, category.as_deref(), strict)?;
            println!("{line}");
            Ok(())
        }
        Some(Command::Units { category }) => {
            for line in app::unit_listing(&category) {
                println!("{line}");
            }
            Ok(())
        }
        None => {
            let mut cfg = config::load_or_default_from(&cli.config)?;
            let lang = i18n::resolve_language(
                cli.lang.as_deref().unwrap_or("auto"),
                Some(cfg.language.as_str()),
            );
            let tr = Translator::new_with_pack(&lang, None);
            app::run(&mut cfg, &tr)
        }
    }
}


use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use yeast_converter::{app, config, conversion, i18n, logging, ui_cli, Converter, YeastKind};

/// 이스트(Active Dry / Instant / Fresh) 양을 g 단위로 환산한다.
#[derive(Debug, Parser)]
#[command(name = "yeast_converter_cli", version)]
struct Cli {
    /// 변환할 양 [g]. 생략하면 대화형 모드로 실행한다. 숫자가 아니면 0으로 본다.
    #[arg(short, long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// 원본 종류 (active-dry, instant, fresh)
    #[arg(short, long, value_parser = conversion::parse_kind)]
    from: Option<YeastKind>,

    /// 대상 종류 (active-dry, instant, fresh)
    #[arg(short, long, value_parser = conversion::parse_kind)]
    to: Option<YeastKind>,

    /// 설정 파일 경로
    #[arg(short, long, env = "YEAST_CONFIG")]
    config: Option<PathBuf>,

    /// UI 언어 (auto, en, ko)
    #[arg(short = 'L', long)]
    lang: Option<String>,

    /// 환산표를 출력하고 종료한다.
    #[arg(long)]
    table: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    let cfg = match config::load_or_default(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = i18n::Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
            eprintln!("{}: {}", tr.t(i18n::keys::ERROR_PREFIX), app::AppError::from(err));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.locales_dir.as_deref());
    match try_run(cli, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli, cfg: &config::Config, tr: &i18n::Translator) -> Result<(), app::AppError> {
    let mut stdout = io::stdout().lock();
    if cli.table {
        write!(stdout, "{}", ui_cli::render_table(tr))?;
        return Ok(());
    }
    let mut conv = Converter::new(
        cli.from.unwrap_or(cfg.default_from),
        cli.to.unwrap_or(cfg.default_to),
    );
    match cli.amount {
        Some(text) => {
            conv.set_input(text);
            app::run_once(&mut stdout, &conv)
        }
        None => {
            let mut stdin = io::stdin().lock();
            app::run(&mut stdin, &mut stdout, &mut conv, tr)
        }
    }
}

use std::io::{BufRead, Write};

use tracing::debug;

use crate::converter::Converter;
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// 한 번만 변환해 결과 한 줄을 출력한다.
pub fn run_once<W: Write>(out: &mut W, conv: &Converter) -> Result<(), AppError> {
    debug!(input = conv.input(), from = %conv.from_kind(), to = %conv.to_kind(), "one-shot conversion");
    writeln!(out, "{}", conv.output_line())?;
    Ok(())
}

/// 대화형 루프를 실행한다. 매 입력마다 결과를 즉시 다시 계산해 출력한다.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    conv: &mut Converter,
    tr: &Translator,
) -> Result<(), AppError> {
    writeln!(out, "=== {} ===", tr.t(keys::APP_TITLE))?;
    ui_cli::print_state(out, conv, tr)?;
    while let Some(line) = ui_cli::read_line(input, out, tr.t(keys::PROMPT_AMOUNT))? {
        match ui_cli::parse_command(&line) {
            Command::Amount(text) => conv.set_input(text),
            Command::From(arg) => ui_cli::handle_kind_change(out, tr, &arg, |k| conv.set_from_kind(k))?,
            Command::To(arg) => ui_cli::handle_kind_change(out, tr, &arg, |k| conv.set_to_kind(k))?,
            Command::Swap => conv.swap_kinds(),
            Command::Table => {
                write!(out, "{}", ui_cli::render_table(tr))?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{}", tr.t(keys::CLI_HELP))?;
                continue;
            }
            Command::Quit => break,
            Command::Unknown(_) => {
                writeln!(out, "{}", tr.t(keys::CLI_UNKNOWN_COMMAND))?;
                continue;
            }
        }
        ui_cli::print_state(out, conv, tr)?;
    }
    writeln!(out, "{}", tr.t(keys::APP_EXIT))?;
    Ok(())
}

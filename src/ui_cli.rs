use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::converter::Converter;
use crate::i18n::{keys, Translator};
use crate::units::{multiplier, YeastKind};

/// 대화형 모드에서 한 줄 입력이 뜻하는 동작.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 새 입력값. 해석은 변환기가 관대하게 처리한다.
    Amount(String),
    From(String),
    To(String),
    Swap,
    Table,
    Help,
    Quit,
    Unknown(String),
}

/// 입력 한 줄을 명령으로 해석한다. `:`로 시작하지 않으면 모두 입력값이다.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Amount(line.to_string());
    };
    let (cmd, arg) = match rest.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (rest, ""),
    };
    match cmd.to_lowercase().as_str() {
        "from" => Command::From(arg.to_string()),
        "to" => Command::To(arg.to_string()),
        "swap" => Command::Swap,
        "table" => Command::Table,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝나면 None.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// 현재 상태를 두 줄로 출력한다.
pub fn print_state<W: Write>(out: &mut W, conv: &Converter, tr: &Translator) -> Result<(), AppError> {
    writeln!(
        out,
        "{:<8} {:<10} {:>12}",
        tr.t(keys::LABEL_FROM),
        conv.from_kind().label(),
        conv.input_line()
    )?;
    writeln!(
        out,
        "{:<8} {:<10} {:>12}",
        tr.t(keys::LABEL_TO),
        conv.to_kind().label(),
        conv.output_line()
    )?;
    Ok(())
}

/// 3x3 환산표를 문자열로 만든다.
pub fn render_table(tr: &Translator) -> String {
    let mut s = format!("{}\n{:<12}", tr.t(keys::TABLE_HEADING), tr.t(keys::TABLE_CORNER));
    for to in YeastKind::ALL {
        s.push_str(&format!("{:>12}", to.label()));
    }
    s.push('\n');
    for from in YeastKind::ALL {
        s.push_str(&format!("{:<12}", from.label()));
        for to in YeastKind::ALL {
            s.push_str(&format!("{:>12.2}", multiplier(from, to)));
        }
        s.push('\n');
    }
    s
}

/// 입력 가능한 종류 코드 안내. 예: `Kinds: active-dry, instant, fresh`.
pub fn kind_options_hint(tr: &Translator) -> String {
    format!(
        "{} {}",
        tr.t(keys::CLI_KIND_OPTIONS),
        YeastKind::ALL.map(YeastKind::code).join(", ")
    )
}

/// 종류 변경 명령을 처리한다. 알 수 없는 종류면 안내만 하고 상태는 그대로 둔다.
pub fn handle_kind_change<W: Write>(
    out: &mut W,
    tr: &Translator,
    arg: &str,
    apply: impl FnOnce(YeastKind),
) -> Result<(), AppError> {
    match YeastKind::parse(arg) {
        Some(kind) => apply(kind),
        None => {
            writeln!(out, "{} {arg}", tr.t(keys::CLI_UNKNOWN_KIND))?;
            writeln!(out, "{}", kind_options_hint(tr))?;
        }
    }
    Ok(())
}

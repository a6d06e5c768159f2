//! 대화형 CLI 루프를 메모리 입출력으로 돌려본다.
use yeast_converter::app;
use yeast_converter::i18n::Translator;
use yeast_converter::{Converter, YeastKind};

fn session(script: &str, conv: &mut Converter) -> String {
    let mut input = script.as_bytes();
    let mut out = Vec::new();
    app::run(&mut input, &mut out, conv, &Translator::new("en")).expect("session");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn each_line_rederives_output() {
    let mut conv = Converter::default();
    let out = session("100\n", &mut conv);
    assert!(out.contains("423 g"), "{out}");
    assert!(out.trim_end().ends_with("Bye."));
}

#[test]
fn kind_commands_change_state() {
    let mut conv = Converter::default();
    let out = session("10\n:from instant\n:to active dry\n", &mut conv);
    assert_eq!(conv.from_kind(), YeastKind::Instant);
    assert_eq!(conv.to_kind(), YeastKind::ActiveDry);
    assert_eq!(conv.output(), "12.50");
    assert!(out.contains("12.50 g"), "{out}");
}

#[test]
fn unknown_kind_leaves_state_alone() {
    let mut conv = Converter::default();
    let out = session(":from sourdough\n", &mut conv);
    assert_eq!(conv.from_kind(), YeastKind::ActiveDry);
    assert!(out.contains("Unknown yeast kind: sourdough"), "{out}");
    assert!(out.contains("Kinds: active-dry, instant, fresh"), "{out}");
}

#[test]
fn garbage_amount_is_zero_not_an_error() {
    let mut conv = Converter::default();
    let out = session("abc\n", &mut conv);
    assert!(out.contains("0 g"), "{out}");
    assert_eq!(conv.output(), "0");
}

#[test]
fn quit_stops_before_remaining_lines() {
    let mut conv = Converter::default();
    session("5\n:swap\n:q\n100\n", &mut conv);
    assert_eq!(conv.input(), "5");
    assert_eq!(conv.from_kind(), YeastKind::Fresh);
    assert_eq!(conv.output(), "1.15");
}

#[test]
fn one_shot_prints_single_line() {
    let mut conv = Converter::new(YeastKind::Fresh, YeastKind::Instant);
    conv.set_input("1");
    let mut out = Vec::new();
    app::run_once(&mut out, &conv).expect("io");
    assert_eq!(String::from_utf8(out).expect("utf8"), "0.18 g\n");
}

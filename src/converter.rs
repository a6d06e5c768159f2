//! 입력 문자열과 두 선택값을 들고, 결과는 읽을 때마다 다시 계산하는 변환기 상태.

use crate::format::{format_amount, with_unit};
use crate::quantity::ConversionRequest;
use crate::units::YeastKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    input: String,
    from_kind: YeastKind,
    to_kind: YeastKind,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(YeastKind::ActiveDry, YeastKind::Fresh)
    }
}

impl Converter {
    pub fn new(from_kind: YeastKind, to_kind: YeastKind) -> Self {
        Self {
            input: String::new(),
            from_kind,
            to_kind,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// GUI 텍스트 필드에 직접 바인딩할 때 쓴다.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn from_kind(&self) -> YeastKind {
        self.from_kind
    }

    pub fn to_kind(&self) -> YeastKind {
        self.to_kind
    }

    pub fn set_from_kind(&mut self, kind: YeastKind) {
        self.from_kind = kind;
    }

    pub fn set_to_kind(&mut self, kind: YeastKind) {
        self.to_kind = kind;
    }

    /// 원본/대상 종류를 맞바꾼다. 입력값은 그대로 둔다.
    pub fn swap_kinds(&mut self) {
        std::mem::swap(&mut self.from_kind, &mut self.to_kind);
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::from_input(&self.input, self.from_kind, self.to_kind)
    }

    pub fn amount(&self) -> f64 {
        self.request().amount
    }

    pub fn value(&self) -> f64 {
        self.request().evaluate()
    }

    pub fn output(&self) -> String {
        format_amount(self.value())
    }

    /// 입력 쪽 표시. 비어 있으면 placeholder인 0을 보여준다.
    pub fn input_line(&self) -> String {
        let shown = if self.input.trim().is_empty() {
            "0"
        } else {
            self.input.trim()
        };
        with_unit(shown)
    }

    pub fn output_line(&self) -> String {
        with_unit(&self.output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_screen() {
        let c = Converter::default();
        assert_eq!(c.from_kind(), YeastKind::ActiveDry);
        assert_eq!(c.to_kind(), YeastKind::Fresh);
        assert_eq!(c.input(), "");
        assert_eq!(c.output(), "0");
    }

    #[test]
    fn every_change_rederives_output() {
        let mut c = Converter::default();
        c.set_input("100");
        assert_eq!(c.output(), "423");
        c.set_to_kind(YeastKind::Instant);
        assert_eq!(c.output(), "80");
        c.set_from_kind(YeastKind::Fresh);
        assert_eq!(c.output(), "18");
        c.input_mut().push('0');
        assert_eq!(c.output(), "180");
    }

    #[test]
    fn swap_keeps_input() {
        let mut c = Converter::new(YeastKind::Instant, YeastKind::ActiveDry);
        c.set_input("10");
        assert_eq!(c.output(), "12.50");
        c.swap_kinds();
        assert_eq!(c.from_kind(), YeastKind::ActiveDry);
        assert_eq!(c.to_kind(), YeastKind::Instant);
        assert_eq!(c.output(), "8");
    }

    #[test]
    fn display_lines_carry_gram_suffix() {
        let mut c = Converter::default();
        assert_eq!(c.input_line(), "0 g");
        assert_eq!(c.output_line(), "0 g");
        c.set_input(" 3 ");
        assert_eq!(c.input_line(), "3 g");
        assert_eq!(c.output_line(), "12.69 g");
    }

    #[test]
    fn malformed_input_shows_zero() {
        let mut c = Converter::default();
        c.set_input("abc");
        assert_eq!(c.amount(), 0.0);
        assert_eq!(c.output_line(), "0 g");
    }
}

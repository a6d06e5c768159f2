use crate::units::{convert_yeast, YeastKind};

/// 사용자 문자열을 g 수량으로 해석한다. 빈 값, 숫자가 아닌 값, 무한대/NaN은 0으로 본다.
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// 한 번의 재계산에만 쓰이는 변환 요청.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from_kind: YeastKind,
    pub to_kind: YeastKind,
}

impl ConversionRequest {
    pub fn new(amount: f64, from_kind: YeastKind, to_kind: YeastKind) -> Self {
        Self {
            amount,
            from_kind,
            to_kind,
        }
    }

    /// 입력창 문자열로부터 요청을 만든다.
    pub fn from_input(text: &str, from_kind: YeastKind, to_kind: YeastKind) -> Self {
        Self::new(parse_amount(text), from_kind, to_kind)
    }

    pub fn evaluate(&self) -> f64 {
        convert_yeast(self.amount, self.from_kind, self.to_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_is_lenient() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("  3 "), 3.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("1,5"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn parse_amount_keeps_negative_values() {
        assert_eq!(parse_amount("-4"), -4.0);
    }

    #[test]
    fn request_from_garbage_evaluates_to_zero() {
        let req = ConversionRequest::from_input("abc", YeastKind::ActiveDry, YeastKind::Fresh);
        assert_eq!(req.amount, 0.0);
        assert_eq!(req.evaluate(), 0.0);
    }

    #[test]
    fn request_evaluates_through_table() {
        let req = ConversionRequest::from_input("10", YeastKind::Instant, YeastKind::ActiveDry);
        assert_eq!(req.evaluate(), 12.5);
    }
}

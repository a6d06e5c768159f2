//! 결과 값을 화면용 문자열로 만든다.

/// 정수이면 소수점 없이, 아니면 소수점 둘째 자리까지 표시한다.
///
/// 반올림은 표준 `{:.2}` 포맷을 따른다(이진 값 기준, 정확히 중간이면 짝수 쪽).
/// 천 단위 구분자는 쓰지 않는다. NaN/무한대와 -0은 "0"으로 표시하고,
/// 반올림해서 0이 되는 음수(-0.001)는 부호 없이 "0.00"으로 표시한다.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    if value % 1.0 == 0.0 {
        return format!("{value:.0}");
    }
    let s = format!("{value:.2}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| matches!(b, b'0' | b'.')) => rest.to_string(),
        _ => s,
    }
}

/// 단위 표기를 붙인다. 예: `423 g`.
pub fn with_unit(text: &str) -> String {
    format!("{text} {}", crate::units::GRAM_SUFFIX)
}

/// 금액을 보고서용 통화 문자열로 만든다.
///
/// `$` 기호 뒤에 천 단위 구분 쉼표를 넣고 소수점 둘째 자리까지 항상 표기한다
/// (예: `$217,907.87`, `$0.00`). 음수는 `$-1,234.50` 형태가 된다.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    // -0.004 같은 값은 반올림 뒤 "0.00"이 되므로 부호를 붙이지 않는다
    if unsigned == "0.00" {
        return String::from("$0.00");
    }
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("${sign}{}.{frac_part}", group_thousands(int_part))
}

/// 정수부 문자열에 세 자리마다 쉼표를 넣는다.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

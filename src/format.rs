//! 변환 결과를 화면에 표시하기 위한 문자열 포맷.
//!
//! 반올림은 정확한 십진 전개를 기준으로 하며, 정확히 중간값이면 0에서 먼 쪽으로 올린다.

/// 이 값보다 작은 절댓값은 지수 표기로 표시한다.
pub const SCIENTIFIC_BELOW: f64 = 0.0001;
/// 이 값보다 큰 절댓값은 지수 표기로 표시한다.
pub const SCIENTIFIC_ABOVE: f64 = 1_000_000.0;

const FIXED_DIGITS: usize = 8;
const EXPONENT_DIGITS: usize = 6;
const HISTORY_DIGITS: usize = 4;

// f64의 정확한 십진 전개를 모두 담을 수 있는 자릿수.
const EXACT_DIGITS: usize = 1100;

/// 변환 결과 필드에 표시할 문자열을 만든다.
///
/// - `|x| < 0.0001` 또는 `|x| > 1_000_000`: 가수 소수 6자리 지수 표기 (`1.609344e+9`)
/// - 그 외: 소수 8자리 고정 표기 후 끝의 0과 소수점 제거 (`1609.344`)
pub fn format_result(value: f64) -> String {
    let abs = value.abs();
    if abs < SCIENTIFIC_BELOW || abs > SCIENTIFIC_ABOVE {
        to_exponential(value, EXPONENT_DIGITS)
    } else {
        strip_trailing_zeros(to_fixed(value, FIXED_DIGITS))
    }
}

/// 변환 기록에 쓰는 결과값 표기(소수 4자리 고정).
pub fn format_history_result(value: f64) -> String {
    if value.abs() >= 1e21 {
        return format_magnitude(value);
    }
    to_fixed(value, HISTORY_DIGITS)
}

/// 입력값을 있는 그대로 되돌려 보여준다. 최단 왕복 표기를 쓰고
/// `|x| >= 1e21` 또는 `|x| < 1e-6`이면 지수 표기로 바꾼다.
pub fn format_magnitude(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        with_signed_exponent(&format!("{value:e}"))
    } else {
        format!("{value}")
    }
}

/// 소수점 이하 `digits` 자리 고정 표기.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let value = normalize_zero(value);
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let all: String = int_part.chars().chain(frac_part.chars()).collect();
    let keep = int_part.len() + digits;
    let (mut rounded, carried) = round_half_up(&all, keep);
    let int_len = if carried {
        int_part.len() + 1
    } else {
        int_part.len()
    };
    if digits > 0 {
        rounded.insert(int_len, '.');
    }
    // 반올림 결과가 0이어도 음수 입력이면 부호를 유지한다. (-0.00001 → -0.0000)
    if value < 0.0 {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// 가수 소수 `digits` 자리 지수 표기. 지수에는 항상 부호를 붙인다.
pub fn to_exponential(value: f64, digits: usize) -> String {
    let value = normalize_zero(value);
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let all: String = mantissa.chars().filter(|c| *c != '.').collect();
    let (mut rounded, carried) = round_half_up(&all, digits + 1);
    if carried {
        rounded.truncate(digits + 1);
        exponent += 1;
    }
    if digits > 0 {
        rounded.insert(1, '.');
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let exp_sign = if exponent < 0 { "-" } else { "+" };
    format!("{sign}{rounded}e{exp_sign}{}", exponent.abs())
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// 숫자 문자열을 앞에서 `keep` 자리만 남기고 반올림한다.
/// 자리올림으로 길이가 늘었으면 두 번째 값이 true이다.
fn round_half_up(digits: &str, keep: usize) -> (String, bool) {
    let bytes = digits.as_bytes();
    let mut kept: Vec<u8> = bytes.iter().take(keep).copied().collect();
    while kept.len() < keep {
        kept.push(b'0');
    }
    let round_up = bytes.get(keep).is_some_and(|d| *d >= b'5');
    if !round_up {
        return (String::from_utf8_lossy(&kept).into_owned(), false);
    }
    let mut idx = kept.len();
    while idx > 0 {
        idx -= 1;
        if kept[idx] == b'9' {
            kept[idx] = b'0';
        } else {
            kept[idx] += 1;
            return (String::from_utf8_lossy(&kept).into_owned(), false);
        }
    }
    kept.insert(0, b'1');
    (String::from_utf8_lossy(&kept).into_owned(), true)
}

/// `100.50000000` → `100.5`, `100.00000000` → `100`
fn strip_trailing_zeros(mut s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    let trimmed_len = s.trim_end_matches('0').len();
    if trimmed_len < s.len() {
        s.truncate(trimmed_len);
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

fn with_signed_exponent(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s.to_string(),
    }
}

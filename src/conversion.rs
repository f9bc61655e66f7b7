use tracing::debug;

use crate::format;
use crate::history::{ConversionRecord, History};
use crate::quantity::{Category, Unit};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 비어 있거나 숫자가 아닌 입력, 또는 유한하지 않은 값
    InvalidMagnitude(String),
    /// 알 수 없는 단위 문자열 (온도에서만 오류로 취급)
    UnknownUnit(String),
    /// 알 수 없는 분류 문자열
    UnknownCategory(String),
    /// 서로 다른 분류의 단위끼리 변환 요청
    CategoryMismatch(Category, Category),
    /// 결과가 유한한 수가 아님(오버플로)
    NonFiniteResult,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidMagnitude(s) => write!(f, "숫자가 아닌 입력: {s:?}"),
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnknownCategory(c) => write!(f, "알 수 없는 분류: {c}"),
            ConversionError::CategoryMismatch(a, b) => {
                write!(f, "분류가 다른 단위끼리는 변환할 수 없습니다: {a} → {b}")
            }
            ConversionError::NonFiniteResult => write!(f, "변환 결과가 유한한 수가 아닙니다"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 입력 문자열 앞부분의 숫자를 읽는다.
///
/// 앞쪽 공백은 건너뛰고, 부호/정수부/소수부/지수부로 이뤄진 가장 긴 접두부를 쓴다.
/// 뒤에 붙은 문자는 무시한다(`"12kg"` → 12). 숫자가 없거나 유한하지 않으면 오류.
pub fn parse_magnitude(text: &str) -> Result<f64, ConversionError> {
    let invalid = || ConversionError::InvalidMagnitude(text.to_string());
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return Err(invalid());
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    let value: f64 = s[..end].parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// 타입이 지정된 단위끼리 변환한다. 두 단위는 같은 분류여야 한다.
pub fn convert_units(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    ensure_finite(value)?;
    let result = match (from, to) {
        (Unit::Length(a), Unit::Length(b)) => convert_length(value, a, b),
        (Unit::Weight(a), Unit::Weight(b)) => convert_weight(value, a, b),
        (Unit::Volume(a), Unit::Volume(b)) => convert_volume(value, a, b),
        (Unit::Temperature(a), Unit::Temperature(b)) => convert_temperature(value, a, b),
        _ => {
            return Err(ConversionError::CategoryMismatch(
                from.category(),
                to.category(),
            ))
        }
    };
    check_result(result)
}

/// 문자열로 전달된 단위 식별자로 변환한다.
///
/// 온도는 섭씨를 거쳐 변환하며 모르는 단위는 `UnknownUnit` 오류다.
/// 길이/무게/체적은 `값 × f_src / f_dst`로 계산하고, 분류에 없는 단위는
/// 배율 1(기준 단위)로 취급한다. 기존 동작과의 호환을 위한 규칙이다.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: Category,
) -> Result<f64, ConversionError> {
    ensure_finite(value)?;
    let result = if category.is_linear() {
        let to_base = value * linear_factor(category, from_unit);
        to_base / linear_factor(category, to_unit)
    } else {
        let from = parse_temperature_unit(from_unit)?;
        let to = parse_temperature_unit(to_unit)?;
        convert_temperature(value, from, to)
    };
    check_result(result)
}

/// 분류 식별자까지 문자열로 받는 변환.
pub fn convert_str(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConversionError> {
    let category = parse_category(category)?;
    convert(value, from_unit, to_unit, category)
}

pub fn parse_category(s: &str) -> Result<Category, ConversionError> {
    Category::from_id(s).ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
}

fn linear_factor(category: Category, unit: &str) -> f64 {
    Unit::parse(category, unit)
        .and_then(Unit::factor)
        .unwrap_or(1.0)
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::from_id(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

fn ensure_finite(value: f64) -> Result<(), ConversionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConversionError::InvalidMagnitude(value.to_string()))
    }
}

fn check_result(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::NonFiniteResult)
    }
}

/// 변환기. 변환 기록을 소유하며, 입력창처럼 실패를 조용히 빈 문자열로 돌려준다.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    history: History,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 입력 문자열을 변환하고 성공하면 기록을 남긴다. 실패하면 기록은 바뀌지 않는다.
    pub fn try_convert_input(
        &mut self,
        text: &str,
        from_unit: &str,
        to_unit: &str,
        category: Category,
    ) -> Result<f64, ConversionError> {
        let value = parse_magnitude(text)?;
        let result = convert(value, from_unit, to_unit, category)?;
        self.history.push(ConversionRecord::new(
            value,
            from_unit,
            result,
            to_unit,
            category,
        ));
        Ok(result)
    }

    /// 결과 필드에 들어갈 문자열. 어떤 오류든 빈 문자열이 된다.
    pub fn convert_input(
        &mut self,
        text: &str,
        from_unit: &str,
        to_unit: &str,
        category: &str,
    ) -> String {
        let outcome = parse_category(category)
            .and_then(|c| self.try_convert_input(text, from_unit, to_unit, c));
        match outcome {
            Ok(v) => format::format_result(v),
            Err(e) => {
                debug!(error = %e, "conversion suppressed");
                String::new()
            }
        }
    }
}

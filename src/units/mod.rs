//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod temperature;
pub mod volume;
pub mod weight;

pub use length::{convert_length, LengthUnit};
pub use temperature::{convert_temperature, from_celsius, to_celsius, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
pub use weight::{convert_weight, WeightUnit};

/// 표시 라벨에서 괄호 속 기호를 떼어낸 이름을 돌려준다. (`Meter (m)` → `Meter`)
pub fn short_label(label: &str) -> &str {
    label.split('(').next().unwrap_or(label).trim()
}

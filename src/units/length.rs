use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Decameter,
    Hectometer,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// 목록 표시 순서(미터법 작은 단위 → 큰 단위, 이후 야드파운드법).
    pub const ALL: [LengthUnit; 13] = [
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Decimeter,
        LengthUnit::Meter,
        LengthUnit::Decameter,
        LengthUnit::Hectometer,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// 1 단위가 몇 미터인지 반환한다.
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Nanometer => 0.000_000_001,
            LengthUnit::Micrometer => 0.000_001,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Decimeter => 0.1,
            LengthUnit::Meter => 1.0,
            LengthUnit::Decameter => 10.0,
            LengthUnit::Hectometer => 100.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nanometer",
            LengthUnit::Micrometer => "micrometer",
            LengthUnit::Millimeter => "millimeter",
            LengthUnit::Centimeter => "centimeter",
            LengthUnit::Decimeter => "decimeter",
            LengthUnit::Meter => "meter",
            LengthUnit::Decameter => "decameter",
            LengthUnit::Hectometer => "hectometer",
            LengthUnit::Kilometer => "kilometer",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "foot",
            LengthUnit::Yard => "yard",
            LengthUnit::Mile => "mile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "Nanometer (nm)",
            LengthUnit::Micrometer => "Micrometer (μm)",
            LengthUnit::Millimeter => "Millimeter (mm)",
            LengthUnit::Centimeter => "Centimeter (cm)",
            LengthUnit::Decimeter => "Decimeter (dm)",
            LengthUnit::Meter => "Meter (m)",
            LengthUnit::Decameter => "Decameter (dam)",
            LengthUnit::Hectometer => "Hectometer (hm)",
            LengthUnit::Kilometer => "Kilometer (km)",
            LengthUnit::Inch => "Inch (in)",
            LengthUnit::Foot => "Foot (ft)",
            LengthUnit::Yard => "Yard (yd)",
            LengthUnit::Mile => "Mile (mi)",
        }
    }

    /// 식별자(`meter`, `mile` 등)로 단위를 찾는다. 정확히 일치해야 한다.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.id() == id)
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    value * unit.factor()
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    value_m / unit.factor()
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

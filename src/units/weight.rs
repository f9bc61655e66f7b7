use serde::{Deserialize, Serialize};

/// 질량(무게) 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Microgram,
    Milligram,
    Centigram,
    Decigram,
    Gram,
    Decagram,
    Hectogram,
    Kilogram,
    Ton,
    Ounce,
    Pound,
    Stone,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 12] = [
        WeightUnit::Microgram,
        WeightUnit::Milligram,
        WeightUnit::Centigram,
        WeightUnit::Decigram,
        WeightUnit::Gram,
        WeightUnit::Decagram,
        WeightUnit::Hectogram,
        WeightUnit::Kilogram,
        WeightUnit::Ton,
        WeightUnit::Ounce,
        WeightUnit::Pound,
        WeightUnit::Stone,
    ];

    /// 1 단위가 몇 kg인지 반환한다. 톤은 미터톤(1000 kg)이다.
    pub fn factor(self) -> f64 {
        match self {
            WeightUnit::Microgram => 0.000_000_001,
            WeightUnit::Milligram => 0.000_001,
            WeightUnit::Centigram => 0.000_01,
            WeightUnit::Decigram => 0.0001,
            WeightUnit::Gram => 0.001,
            WeightUnit::Decagram => 0.01,
            WeightUnit::Hectogram => 0.1,
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Ton => 1000.0,
            WeightUnit::Ounce => 0.028_349_5,
            WeightUnit::Pound => 0.453_592,
            WeightUnit::Stone => 6.350_29,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            WeightUnit::Microgram => "microgram",
            WeightUnit::Milligram => "milligram",
            WeightUnit::Centigram => "centigram",
            WeightUnit::Decigram => "decigram",
            WeightUnit::Gram => "gram",
            WeightUnit::Decagram => "decagram",
            WeightUnit::Hectogram => "hectogram",
            WeightUnit::Kilogram => "kilogram",
            WeightUnit::Ton => "ton",
            WeightUnit::Ounce => "ounce",
            WeightUnit::Pound => "pound",
            WeightUnit::Stone => "stone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeightUnit::Microgram => "Microgram (μg)",
            WeightUnit::Milligram => "Milligram (mg)",
            WeightUnit::Centigram => "Centigram (cg)",
            WeightUnit::Decigram => "Decigram (dg)",
            WeightUnit::Gram => "Gram (g)",
            WeightUnit::Decagram => "Decagram (dag)",
            WeightUnit::Hectogram => "Hectogram (hg)",
            WeightUnit::Kilogram => "Kilogram (kg)",
            WeightUnit::Ton => "Metric Ton (t)",
            WeightUnit::Ounce => "Ounce (oz)",
            WeightUnit::Pound => "Pound (lb)",
            WeightUnit::Stone => "Stone (st)",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.id() == id)
    }
}

fn to_kg(value: f64, unit: WeightUnit) -> f64 {
    value * unit.factor()
}

fn from_kg(value: f64, unit: WeightUnit) -> f64 {
    value / unit.factor()
}

/// 질량을 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}

use serde::{Deserialize, Serialize};

use crate::units::{self, LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};

/// 다루는 측정 분류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Length,
    Weight,
    Volume,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Temperature,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Temperature => "temperature",
        }
    }

    /// 식별자 문자열로 분류를 찾는다. 식별자는 정확히 일치해야 한다.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// 선형 배율로 변환하는 분류인지 여부. 온도만 아핀 변환을 쓴다.
    pub fn is_linear(self) -> bool {
        !matches!(self, Category::Temperature)
    }

    /// 분류의 기준 단위. 초기화/지우기 시 기본 선택값으로 쓴다.
    pub fn base_unit(self) -> Unit {
        match self {
            Category::Length => Unit::Length(LengthUnit::Meter),
            Category::Weight => Unit::Weight(WeightUnit::Kilogram),
            Category::Volume => Unit::Volume(VolumeUnit::Liter),
            Category::Temperature => Unit::Temperature(TemperatureUnit::Celsius),
        }
    }

    /// 분류에 속한 단위를 표시 순서대로 반환한다.
    pub fn units(self) -> Vec<Unit> {
        match self {
            Category::Length => LengthUnit::ALL.into_iter().map(Unit::Length).collect(),
            Category::Weight => WeightUnit::ALL.into_iter().map(Unit::Weight).collect(),
            Category::Volume => VolumeUnit::ALL.into_iter().map(Unit::Volume).collect(),
            Category::Temperature => TemperatureUnit::ALL
                .into_iter()
                .map(Unit::Temperature)
                .collect(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// 분류별 단위 enum을 감싼 태그드 유니온. 분류 간 혼용은 타입 수준에서 구분된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "unit", rename_all = "snake_case")]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Volume(VolumeUnit),
    Temperature(TemperatureUnit),
}

impl Unit {
    pub fn category(self) -> Category {
        match self {
            Unit::Length(_) => Category::Length,
            Unit::Weight(_) => Category::Weight,
            Unit::Volume(_) => Category::Volume,
            Unit::Temperature(_) => Category::Temperature,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Unit::Length(u) => u.id(),
            Unit::Weight(u) => u.id(),
            Unit::Volume(u) => u.id(),
            Unit::Temperature(u) => u.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Length(u) => u.label(),
            Unit::Weight(u) => u.label(),
            Unit::Volume(u) => u.label(),
            Unit::Temperature(u) => u.label(),
        }
    }

    /// 기호를 뺀 라벨. 변환 기록 문구에 쓴다.
    pub fn short_label(self) -> &'static str {
        units::short_label(self.label())
    }

    /// 기준 단위 대비 선형 배율. 온도는 배율이 없으므로 None.
    pub fn factor(self) -> Option<f64> {
        match self {
            Unit::Length(u) => Some(u.factor()),
            Unit::Weight(u) => Some(u.factor()),
            Unit::Volume(u) => Some(u.factor()),
            Unit::Temperature(_) => None,
        }
    }

    /// 주어진 분류 안에서 식별자로 단위를 찾는다.
    pub fn parse(category: Category, id: &str) -> Option<Unit> {
        match category {
            Category::Length => LengthUnit::from_id(id).map(Unit::Length),
            Category::Weight => WeightUnit::from_id(id).map(Unit::Weight),
            Category::Volume => VolumeUnit::from_id(id).map(Unit::Volume),
            Category::Temperature => TemperatureUnit::from_id(id).map(Unit::Temperature),
        }
    }

    /// 분류를 모를 때 모든 분류에서 식별자를 찾는다. 단위 식별자는 분류 간에 겹치지 않는다.
    pub fn find(id: &str) -> Option<Unit> {
        Category::ALL
            .into_iter()
            .find_map(|c| Unit::parse(c, id))
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// 분류 식별자 문자열에 해당하는 단위 목록. 모르는 분류면 빈 목록이다.
pub fn units_for_category(category_id: &str) -> Vec<Unit> {
    Category::from_id(category_id)
        .map(Category::units)
        .unwrap_or_default()
}

/// 단위 식별자로 분류를 추정한다. 입력 단위를 먼저 보고, 모르면 변환 단위를 본다.
pub fn infer_category(from_unit: &str, to_unit: &str) -> Option<Category> {
    Unit::find(from_unit)
        .or_else(|| Unit::find(to_unit))
        .map(Unit::category)
}

use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다. 야드파운드 단위는 미국 액량 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Microliter,
    Milliliter,
    Centiliter,
    Deciliter,
    Liter,
    Decaliter,
    Hectoliter,
    Kiloliter,
    Teaspoon,
    Tablespoon,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 15] = [
        VolumeUnit::Microliter,
        VolumeUnit::Milliliter,
        VolumeUnit::Centiliter,
        VolumeUnit::Deciliter,
        VolumeUnit::Liter,
        VolumeUnit::Decaliter,
        VolumeUnit::Hectoliter,
        VolumeUnit::Kiloliter,
        VolumeUnit::Teaspoon,
        VolumeUnit::Tablespoon,
        VolumeUnit::FluidOunce,
        VolumeUnit::Cup,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
    ];

    /// 1 단위가 몇 리터인지 반환한다.
    pub fn factor(self) -> f64 {
        match self {
            VolumeUnit::Microliter => 0.000_001,
            VolumeUnit::Milliliter => 0.001,
            VolumeUnit::Centiliter => 0.01,
            VolumeUnit::Deciliter => 0.1,
            VolumeUnit::Liter => 1.0,
            VolumeUnit::Decaliter => 10.0,
            VolumeUnit::Hectoliter => 100.0,
            VolumeUnit::Kiloliter => 1000.0,
            VolumeUnit::Teaspoon => 0.004_928_92,
            VolumeUnit::Tablespoon => 0.014_786_8,
            VolumeUnit::FluidOunce => 0.029_573_5,
            VolumeUnit::Cup => 0.236_588,
            VolumeUnit::Pint => 0.473_176,
            VolumeUnit::Quart => 0.946_353,
            VolumeUnit::Gallon => 3.785_41,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            VolumeUnit::Microliter => "microliter",
            VolumeUnit::Milliliter => "milliliter",
            VolumeUnit::Centiliter => "centiliter",
            VolumeUnit::Deciliter => "deciliter",
            VolumeUnit::Liter => "liter",
            VolumeUnit::Decaliter => "decaliter",
            VolumeUnit::Hectoliter => "hectoliter",
            VolumeUnit::Kiloliter => "kiloliter",
            VolumeUnit::Teaspoon => "teaspoon",
            VolumeUnit::Tablespoon => "tablespoon",
            VolumeUnit::FluidOunce => "fluid_ounce",
            VolumeUnit::Cup => "cup",
            VolumeUnit::Pint => "pint",
            VolumeUnit::Quart => "quart",
            VolumeUnit::Gallon => "gallon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Microliter => "Microliter (μL)",
            VolumeUnit::Milliliter => "Milliliter (mL)",
            VolumeUnit::Centiliter => "Centiliter (cL)",
            VolumeUnit::Deciliter => "Deciliter (dL)",
            VolumeUnit::Liter => "Liter (L)",
            VolumeUnit::Decaliter => "Decaliter (daL)",
            VolumeUnit::Hectoliter => "Hectoliter (hL)",
            VolumeUnit::Kiloliter => "Kiloliter (kL)",
            VolumeUnit::Teaspoon => "Teaspoon (tsp)",
            VolumeUnit::Tablespoon => "Tablespoon (tbsp)",
            VolumeUnit::FluidOunce => "Fluid Ounce (fl oz)",
            VolumeUnit::Cup => "Cup",
            VolumeUnit::Pint => "Pint (pt)",
            VolumeUnit::Quart => "Quart (qt)",
            VolumeUnit::Gallon => "Gallon (gal)",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.id() == id)
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    value * unit.factor()
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    value_l / unit.factor()
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let l = to_liter(value, from);
    from_liter(l, to)
}

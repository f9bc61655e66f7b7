//! 단위표 불변식 테스트.
use unit_converter_toolbox::quantity::{infer_category, units_for_category, Category, Unit};
use unit_converter_toolbox::units::short_label;

#[test]
fn base_units_have_factor_one() {
    for category in Category::ALL {
        let base = category.base_unit();
        assert_eq!(base.category(), category);
        if category.is_linear() {
            assert_eq!(base.factor(), Some(1.0), "{category}");
        } else {
            assert_eq!(base.factor(), None);
        }
    }
}

#[test]
fn linear_factors_are_strictly_positive() {
    for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
        for unit in category.units() {
            let factor = unit.factor().expect("linear unit has a factor");
            assert!(factor > 0.0, "{unit} factor {factor}");
        }
    }
}

#[test]
fn every_unit_belongs_to_exactly_one_category() {
    for category in Category::ALL {
        for unit in category.units() {
            assert_eq!(unit.category(), category);
            let owners: Vec<Category> = Category::ALL
                .into_iter()
                .filter(|c| Unit::parse(*c, unit.id()).is_some())
                .collect();
            assert_eq!(owners, vec![category], "{unit}");
            assert_eq!(Unit::find(unit.id()), Some(unit));
        }
    }
}

#[test]
fn unit_lists_follow_display_order() {
    let length: Vec<&str> = units_for_category("length").iter().map(|u| u.id()).collect();
    assert_eq!(length.len(), 13);
    assert_eq!(length.first(), Some(&"nanometer"));
    assert_eq!(length.last(), Some(&"mile"));
    assert_eq!(units_for_category("weight").len(), 12);
    assert_eq!(units_for_category("volume").len(), 15);
    let temperature: Vec<&str> = units_for_category("temperature")
        .iter()
        .map(|u| u.id())
        .collect();
    assert_eq!(temperature, vec!["celsius", "fahrenheit", "kelvin"]);
}

#[test]
fn unknown_category_has_no_units() {
    assert!(units_for_category("speed").is_empty());
    assert!(units_for_category("").is_empty());
    assert_eq!(Category::from_id("volume"), Some(Category::Volume));
    assert_eq!(Category::from_id("Volume"), None);
    assert!(units_for_category(" length").is_empty());
}

#[test]
fn unit_ids_parse_exactly() {
    assert!(Unit::parse(Category::Volume, "fluid_ounce").is_some());
    assert!(Unit::parse(Category::Volume, " Fluid_Ounce ").is_none());
    assert!(Unit::parse(Category::Length, "Mile").is_none());
    assert!(Unit::find("CELSIUS").is_none());
    assert!(Unit::parse(Category::Length, "kelvin").is_none());
}

#[test]
fn category_is_inferred_from_source_then_destination() {
    assert_eq!(infer_category("mile", "meter"), Some(Category::Length));
    assert_eq!(infer_category("pound", "furlong"), Some(Category::Weight));
    assert_eq!(infer_category("furlong", "kelvin"), Some(Category::Temperature));
    // 입력 단위가 우선한다.
    assert_eq!(infer_category("cup", "gram"), Some(Category::Volume));
    assert_eq!(infer_category("furlong", "parsec"), None);
    assert_eq!(infer_category("Mile", "METER"), None);
}

#[test]
fn short_labels_drop_symbols() {
    assert_eq!(short_label("Meter (m)"), "Meter");
    assert_eq!(short_label("Fluid Ounce (fl oz)"), "Fluid Ounce");
    assert_eq!(short_label("Cup"), "Cup");
    let ton = Unit::find("ton").expect("ton");
    assert_eq!(ton.short_label(), "Metric Ton");
}

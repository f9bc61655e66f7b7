//! 결과 표시 포맷 골든 테스트.
use unit_converter_toolbox::format::{
    format_history_result, format_magnitude, format_result, to_exponential, to_fixed,
};

#[test]
fn fixed_range_strips_trailing_zeros() {
    assert_eq!(format_result(1609.344), "1609.344");
    assert_eq!(format_result(100.0), "100");
    assert_eq!(format_result(0.5), "0.5");
    assert_eq!(format_result(-12.25), "-12.25");
    assert_eq!(format_result(1.0 / 3.0), "0.33333333");
    assert_eq!(format_result(2.0 / 3.0), "0.66666667");
}

#[test]
fn range_boundaries_stay_fixed() {
    assert_eq!(format_result(0.0001), "0.0001");
    assert_eq!(format_result(1_000_000.0), "1000000");
    assert_eq!(format_result(-1_000_000.0), "-1000000");
}

#[test]
fn outside_range_uses_scientific_notation() {
    assert_eq!(format_result(1_000_001.0), "1.000001e+6");
    assert_eq!(format_result(1_609_344_000.0), "1.609344e+9");
    assert_eq!(format_result(0.00005), "5.000000e-5");
    assert_eq!(format_result(-0.00000025), "-2.500000e-7");
    assert_eq!(format_result(0.0), "0.000000e+0");
    assert_eq!(format_result(-0.0), "0.000000e+0");
}

#[test]
fn exact_halves_round_away_from_zero() {
    assert_eq!(format_result(1_234_568.5), "1.234569e+6");
    assert_eq!(to_fixed(0.03125, 4), "0.0313");
    assert_eq!(to_fixed(-0.03125, 4), "-0.0313");
    assert_eq!(to_fixed(2.5, 0), "3");
}

#[test]
fn rounding_carries_into_exponent() {
    assert_eq!(to_exponential(9_999_999.6, 6), "1.000000e+7");
    assert_eq!(to_fixed(9.99996, 4), "10.0000");
}

#[test]
fn history_result_has_four_decimals() {
    assert_eq!(format_history_result(1609.344), "1609.3440");
    assert_eq!(format_history_result(0.011), "0.0110");
    assert_eq!(format_history_result(32.0), "32.0000");
    assert_eq!(format_history_result(-0.00001), "-0.0000");
}

#[test]
fn magnitude_echo_uses_shortest_form() {
    assert_eq!(format_magnitude(1.0), "1");
    assert_eq!(format_magnitude(1.5), "1.5");
    assert_eq!(format_magnitude(-0.0), "0");
    assert_eq!(format_magnitude(123_456.789), "123456.789");
    assert_eq!(format_magnitude(0.000001), "0.000001");
    assert_eq!(format_magnitude(1e21), "1e+21");
    assert_eq!(format_magnitude(1.5e-7), "1.5e-7");
}

//! 화면 이벤트 디스패치 흐름 테스트.
use std::io;

use unit_converter_toolbox::app::{
    convert_once, unit_listing, AppError, AppState, ConverterApp, UiEvent,
};
use unit_converter_toolbox::config::Config;
use unit_converter_toolbox::conversion::ConversionError;
use unit_converter_toolbox::quantity::Category;

#[test]
fn initial_state_uses_base_units() {
    let app = ConverterApp::new(Category::Length);
    let state = app.state();
    assert_eq!(state.input, "1");
    assert_eq!(state.from_unit, "meter");
    assert_eq!(state.to_unit, "meter");
    assert_eq!(state.output, "");
    assert!(app.history().is_empty());

    let weight = ConverterApp::new(Category::Weight);
    assert_eq!(weight.state().from_unit, "kilogram");
}

#[test]
fn events_drive_live_conversion() {
    let mut app = ConverterApp::new(Category::Length);
    assert_eq!(app.dispatch(UiEvent::ValueInput("2".into())).output, "2");
    assert_eq!(
        app.dispatch(UiEvent::FromUnitChanged("kilometer".into())).output,
        "2000"
    );
    let state = app.dispatch(UiEvent::Swap);
    assert_eq!(state.from_unit, "meter");
    assert_eq!(state.to_unit, "kilometer");
    assert_eq!(state.output, "0.002");
    assert_eq!(app.history().len(), 3);
}

#[test]
fn category_change_resets_and_converts() {
    let mut app = ConverterApp::new(Category::Length);
    app.dispatch(UiEvent::ValueInput("42".into()));
    let state = app.dispatch(UiEvent::CategoryChanged("temperature".into()));
    assert_eq!(state.category, Category::Temperature);
    assert_eq!(state.input, "1");
    assert_eq!(state.from_unit, "celsius");
    assert_eq!(state.output, "1");
    let state = app.dispatch(UiEvent::ToUnitChanged("fahrenheit".into()));
    assert_eq!(state.output, "33.8");
    assert_eq!(
        app.history().latest().map(|r| r.to_string()),
        Some("1 Celsius = 33.8000 Fahrenheit".to_string())
    );
}

#[test]
fn unknown_category_is_ignored() {
    let mut app = ConverterApp::new(Category::Volume);
    app.dispatch(UiEvent::ValueInput("3".into()));
    let before = app.state().clone();
    let after = app.dispatch(UiEvent::CategoryChanged("speed".into())).clone();
    assert_eq!(before, after);
}

#[test]
fn invalid_value_blanks_output_without_history() {
    let mut app = ConverterApp::new(Category::Length);
    app.dispatch(UiEvent::ValueInput("5".into()));
    assert_eq!(app.history().len(), 1);
    assert_eq!(app.dispatch(UiEvent::ValueInput("abc".into())).output, "");
    assert_eq!(app.dispatch(UiEvent::ValueInput(String::new())).output, "");
    assert_eq!(app.history().len(), 1);
}

#[test]
fn clear_restores_defaults_but_keeps_history() {
    let mut app = ConverterApp::new(Category::Temperature);
    app.dispatch(UiEvent::ValueInput("30".into()));
    app.dispatch(UiEvent::ToUnitChanged("kelvin".into()));
    let state = app.dispatch(UiEvent::Clear);
    assert_eq!(
        *state,
        AppState {
            category: Category::Temperature,
            input: "1".into(),
            from_unit: "celsius".into(),
            to_unit: "celsius".into(),
            output: String::new(),
        }
    );
    assert_eq!(app.history().len(), 2);
    app.clear_history();
    assert!(app.history().is_empty());
}

#[test]
fn default_category_comes_from_config() {
    let mut cfg = Config::default();
    cfg.default_category = Category::Volume;
    let app = ConverterApp::from_config(&cfg);
    assert_eq!(app.state().category, Category::Volume);
    assert_eq!(app.state().to_unit, "liter");
}

#[test]
fn one_shot_conversion_infers_category() {
    assert_eq!(
        convert_once("1", "mile", "meter", None, false),
        Ok("1609.344".to_string())
    );
    // 입력 단위를 모르면 변환 단위의 분류를 쓴다.
    assert_eq!(
        convert_once("100", "furlong", "celsius", None, true),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    assert_eq!(
        convert_once("2", "furlong", "meter", None, true),
        Ok("2".to_string())
    );
    assert_eq!(
        convert_once("0", "celsius", "fahrenheit", Some("temperature"), true),
        Ok("32".to_string())
    );
}

#[test]
fn one_shot_failures_are_blank_unless_strict() {
    assert_eq!(convert_once("abc", "mile", "meter", None, false), Ok(String::new()));
    assert_eq!(convert_once("1", "furlong", "parsec", None, false), Ok(String::new()));
    assert_eq!(
        convert_once("1", "meter", "foot", Some("speed"), false),
        Ok(String::new())
    );

    assert!(matches!(
        convert_once("abc", "mile", "meter", None, true),
        Err(ConversionError::InvalidMagnitude(_))
    ));
    assert_eq!(
        convert_once("1", "meter", "foot", Some("speed"), true),
        Err(ConversionError::UnknownCategory("speed".to_string()))
    );
    assert_eq!(
        convert_once("1", "furlong", "parsec", None, true),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    assert_eq!(
        convert_once("1", "rankine", "kelvin", Some("temperature"), true),
        Err(ConversionError::UnknownUnit("rankine".to_string()))
    );
}

#[test]
fn strict_failure_maps_to_app_error() {
    let err: AppError = convert_once("x", "meter", "foot", None, true).unwrap_err().into();
    assert!(matches!(err, AppError::Conversion(_)));
    assert!(!err.is_input_closed());
}

#[test]
fn unit_listing_is_tab_separated() {
    let lines = unit_listing("temperature");
    assert_eq!(
        lines,
        vec!["celsius\tCelsius (°C)", "fahrenheit\tFahrenheit (°F)", "kelvin\tKelvin (K)"]
    );
    assert_eq!(unit_listing("length").len(), 13);
    assert!(unit_listing("speed").is_empty());
}

#[test]
fn closed_input_is_recognised() {
    let closed = AppError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    assert!(closed.is_input_closed());
    let other = AppError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert!(!other.is_input_closed());
}

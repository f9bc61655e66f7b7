//! 설정 파일과 언어팩 테스트.
use std::fs;
use std::path::PathBuf;

use unit_converter_toolbox::config::{self, Config};
use unit_converter_toolbox::i18n::{self, keys, Language, Translator};
use unit_converter_toolbox::quantity::Category;

fn temp_config(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "unit_converter_toolbox_{name}_{}.toml",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_config_is_created_with_defaults() {
    let path = temp_config("create");
    let cfg = config::load_or_default_from(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.default_category, Category::Length);
    let _ = fs::remove_file(&path);
}

#[test]
fn saved_config_round_trips() {
    let path = temp_config("roundtrip");
    let mut cfg = config::load_or_default_from(&path).expect("load");
    cfg.language = "ko-kr".to_string();
    cfg.default_category = Category::Temperature;
    cfg.save().expect("save");

    let reloaded = config::load_or_default_from(&path).expect("reload");
    assert_eq!(reloaded.language, "ko-kr");
    assert_eq!(reloaded.default_category, Category::Temperature);
    let _ = fs::remove_file(&path);
}

#[test]
fn partial_config_uses_defaults_for_missing_keys() {
    let cfg: Config = toml::from_str("default_category = \"volume\"\n").expect("parse");
    assert_eq!(cfg.default_category, Category::Volume);
    assert_eq!(cfg.language, "auto");
}

#[test]
fn broken_config_reports_parse_error() {
    let path = temp_config("broken");
    fs::write(&path, "default_category = \"speed\"\n").expect("write");
    let err = config::load_or_default_from(&path).unwrap_err();
    assert!(matches!(err, config::ConfigError::Serde(_)), "{err}");
    let _ = fs::remove_file(&path);
}

#[test]
fn built_in_strings_follow_language() {
    let en = Translator::new("en-us");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::APP_EXIT), "Exiting.");
    let ko = Translator::new("ko");
    assert_eq!(ko.language_code(), "ko");
    assert_eq!(ko.t(keys::APP_EXIT), "프로그램을 종료합니다.");
    assert_eq!(ko.t("no.such.key"), "");
}

#[test]
fn language_pack_is_consulted_before_built_in_strings() {
    let tr = Translator::new_with_pack("en-us", None);
    assert_eq!(tr.lookup(keys::APP_EXIT).as_deref(), Some("Exiting."));
    assert_eq!(tr.lookup(keys::CATEGORY_TEMPERATURE).as_deref(), Some("Temperature"));
    // 언어팩에 없는 키는 내장 문자열로 폴백한다.
    assert_eq!(tr.lookup(keys::PROMPT_VALUE), None);
    assert_eq!(tr.t(keys::PROMPT_VALUE), "Value: ");
}

#[test]
fn bundled_packs_agree_with_built_in_strings() {
    let packs = [
        ("en-us", include_str!("../locales/en-us.toml")),
        ("ko-kr", include_str!("../locales/ko-kr.toml")),
    ];
    for (code, src) in packs {
        let built_in = Translator::new(code);
        let pack = i18n::parse_toml_to_map(src).expect("pack");
        for (key, value) in &pack {
            assert_eq!(built_in.t(key), value.as_str(), "{code} {key}");
        }
    }
}

#[test]
fn error_prefix_follows_language() {
    assert_eq!(Translator::new_with_pack("en-us", None).t(keys::ERROR_PREFIX), "Error");
    assert_eq!(Translator::new_with_pack("ko-kr", None).t(keys::ERROR_PREFIX), "오류");
}

#[test]
fn nested_pack_tables_flatten_to_dotted_keys() {
    let map = i18n::parse_toml_to_map("[main_menu]\ntitle = \"T\"\n[a.b]\nc = \"d\"\n")
        .expect("map");
    assert_eq!(map.get("main_menu.title").map(String::as_str), Some("T"));
    assert_eq!(map.get("a.b.c").map(String::as_str), Some("d"));
    assert!(i18n::parse_toml_to_map("n = 1\n").is_none());
}

#[test]
fn template_placeholders_are_filled() {
    let tr = Translator::new("en");
    assert_eq!(
        tr.tf(keys::RESULT_LINE, &[("output", "1609.344"), ("unit", "Meter (m)")]),
        "Result: 1609.344 Meter (m)"
    );
    assert_eq!(i18n::fill_template("{a}-{a}", &[("a", "x")]), "x-x");
}

#[test]
fn language_resolution_prefers_cli_then_config() {
    assert_eq!(i18n::resolve_language("ko", None), "ko-kr");
    assert_eq!(i18n::resolve_language("en-uk", Some("ko")), "en-us");
    assert_eq!(i18n::resolve_language("auto", Some("ko-KR")), "ko-kr");
}

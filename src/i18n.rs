use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_STATUS: &str = "main_menu.status";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_FROM_UNIT: &str = "main_menu.from_unit";
    pub const MAIN_MENU_TO_UNIT: &str = "main_menu.to_unit";
    pub const MAIN_MENU_SWAP: &str = "main_menu.swap";
    pub const MAIN_MENU_CATEGORY: &str = "main_menu.category";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_CLEAR: &str = "main_menu.clear";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_UNIT: &str = "prompt.unit";
    pub const PROMPT_CATEGORY: &str = "prompt.category";
    pub const RESULT_LINE: &str = "result.line";
    pub const RESULT_EMPTY: &str = "result.empty";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_CLEARED: &str = "history.cleared";
    pub const CLEAR_DONE: &str = "clear.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const CATEGORY_LENGTH: &str = "category.length";
    pub const CATEGORY_WEIGHT: &str = "category.weight";
    pub const CATEGORY_VOLUME: &str = "category.volume";
    pub const CATEGORY_TEMPERATURE: &str = "category.temperature";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        debug!(
            lang = lang_code,
            pack = overrides.is_some(),
            "translator ready"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며, 영어 문자열이 없으면 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> Cow<'_, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Borrowed(v.as_str());
        }
        let s = match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        Cow::Borrowed(s)
    }

    /// `{name}` 자리표시자를 채운 번역.
    pub fn tf(&self, key: &str, vars: &[(&str, &str)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// `{name}` 형태 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블은 `a.b` 형태의 점 구분 키로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 단위 변환기 ===",
        MAIN_MENU_STATUS => "[{category}] {input} {from} → {to} = {output}",
        MAIN_MENU_CONVERT => "1) 값 입력 및 변환",
        MAIN_MENU_FROM_UNIT => "2) 입력 단위 변경",
        MAIN_MENU_TO_UNIT => "3) 변환 단위 변경",
        MAIN_MENU_SWAP => "4) 단위 서로 바꾸기",
        MAIN_MENU_CATEGORY => "5) 분류 변경",
        MAIN_MENU_HISTORY => "6) 변환 기록",
        MAIN_MENU_CLEAR => "7) 지우기",
        MAIN_MENU_SETTINGS => "8) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_UNIT => "단위 번호 또는 이름: ",
        PROMPT_CATEGORY => "분류 번호 또는 이름: ",
        RESULT_LINE => "변환 결과: {output} {unit}",
        RESULT_EMPTY => "변환 결과: (없음)",
        HISTORY_HEADING => "\n-- 최근 변환 기록 --",
        HISTORY_EMPTY => "변환 기록이 없습니다.",
        HISTORY_CLEARED => "변환 기록을 지웠습니다.",
        CLEAR_DONE => "입력을 초기화했습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "언어: {language}, 기본 분류: {category}",
        SETTINGS_OPTIONS => "1) 언어 변경  2) 기본 분류 변경  3) 변환 기록 지우기",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        CATEGORY_LENGTH => "길이",
        CATEGORY_WEIGHT => "무게",
        CATEGORY_VOLUME => "체적",
        CATEGORY_TEMPERATURE => "온도",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Unit Converter Toolbox ===",
        MAIN_MENU_STATUS => "[{category}] {input} {from} → {to} = {output}",
        MAIN_MENU_CONVERT => "1) Enter value and convert",
        MAIN_MENU_FROM_UNIT => "2) Change source unit",
        MAIN_MENU_TO_UNIT => "3) Change target unit",
        MAIN_MENU_SWAP => "4) Swap units",
        MAIN_MENU_CATEGORY => "5) Change category",
        MAIN_MENU_HISTORY => "6) Recent conversions",
        MAIN_MENU_CLEAR => "7) Clear",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        PROMPT_VALUE => "Value: ",
        PROMPT_UNIT => "Unit number or name: ",
        PROMPT_CATEGORY => "Category number or name: ",
        RESULT_LINE => "Result: {output} {unit}",
        RESULT_EMPTY => "Result: (none)",
        HISTORY_HEADING => "\n-- Recent conversions --",
        HISTORY_EMPTY => "No conversions yet.",
        HISTORY_CLEARED => "History cleared.",
        CLEAR_DONE => "Input reset.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Language: {language}, default category: {category}",
        SETTINGS_OPTIONS => "1) Language  2) Default category  3) Clear history",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        CATEGORY_LENGTH => "Length",
        CATEGORY_WEIGHT => "Weight",
        CATEGORY_VOLUME => "Volume",
        CATEGORY_TEMPERATURE => "Temperature",
        _ => return None,
    };
    Some(s)
}

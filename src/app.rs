use std::io;

use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError, Converter};
use crate::format;
use crate::history::History;
use crate::i18n::{keys, Translator};
use crate::quantity::{self, Category};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// 표준 입력이 닫혀 더 읽을 수 없는 경우. 대화형 모드에서는 종료로 처리한다.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 초기화/지우기 시 입력창에 들어가는 값.
pub const DEFAULT_INPUT: &str = "1";

/// 변환 화면의 상태. 입력창/단위 선택/결과창 값을 그대로 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub category: Category,
    pub input: String,
    pub from_unit: String,
    pub to_unit: String,
    pub output: String,
}

impl AppState {
    /// 분류의 기본 상태: 입력 "1", 양쪽 모두 기준 단위, 결과 비움.
    pub fn for_category(category: Category) -> Self {
        let base = category.base_unit().id().to_string();
        Self {
            category,
            input: DEFAULT_INPUT.to_string(),
            from_unit: base.clone(),
            to_unit: base,
            output: String::new(),
        }
    }
}

/// 화면에서 들어오는 이벤트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ValueInput(String),
    FromUnitChanged(String),
    ToUnitChanged(String),
    CategoryChanged(String),
    Swap,
    Clear,
}

/// 화면 상태와 변환기를 함께 소유하는 컨트롤러.
#[derive(Debug, Clone)]
pub struct ConverterApp {
    state: AppState,
    converter: Converter,
}

impl ConverterApp {
    pub fn new(category: Category) -> Self {
        Self {
            state: AppState::for_category(category),
            converter: Converter::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_category)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn history(&self) -> &History {
        self.converter.history()
    }

    pub fn clear_history(&mut self) {
        self.converter.clear_history();
    }

    /// 이벤트를 처리하고 갱신된 상태를 돌려준다.
    pub fn dispatch(&mut self, event: UiEvent) -> &AppState {
        debug!(?event, "ui event");
        match event {
            UiEvent::ValueInput(text) => {
                self.state.input = text;
                self.perform_conversion();
            }
            UiEvent::FromUnitChanged(unit) => {
                self.state.from_unit = unit;
                self.perform_conversion();
            }
            UiEvent::ToUnitChanged(unit) => {
                self.state.to_unit = unit;
                self.perform_conversion();
            }
            UiEvent::CategoryChanged(id) => match Category::from_id(&id) {
                Some(category) => {
                    self.state = AppState::for_category(category);
                    self.perform_conversion();
                }
                None => debug!(category = %id, "unknown category ignored"),
            },
            UiEvent::Swap => {
                std::mem::swap(&mut self.state.from_unit, &mut self.state.to_unit);
                self.perform_conversion();
            }
            UiEvent::Clear => {
                self.state = AppState::for_category(self.state.category);
            }
        }
        &self.state
    }

    fn perform_conversion(&mut self) {
        let AppState {
            category,
            input,
            from_unit,
            to_unit,
            ..
        } = &self.state;
        let output = self
            .converter
            .convert_input(input, from_unit, to_unit, category.id());
        self.state.output = output;
    }
}

/// 단발 변환 명령의 출력 줄을 만든다.
///
/// 분류를 생략하면 입력 단위, 다음으로 변환 단위에서 추정한다.
/// `strict`가 아니면 어떤 실패든 빈 줄이 되고, `strict`면 오류를 그대로 돌려준다.
pub fn convert_once(
    value: &str,
    from_unit: &str,
    to_unit: &str,
    category: Option<&str>,
    strict: bool,
) -> Result<String, ConversionError> {
    let category = match category {
        Some(id) => conversion::parse_category(id),
        None => quantity::infer_category(from_unit, to_unit)
            .ok_or_else(|| ConversionError::UnknownUnit(from_unit.to_string())),
    };
    let outcome = category.and_then(|c| {
        let value = conversion::parse_magnitude(value)?;
        conversion::convert(value, from_unit, to_unit, c)
    });
    match outcome {
        Ok(result) => Ok(format::format_result(result)),
        Err(e) if !strict => {
            debug!(error = %e, "conversion suppressed");
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

/// `units` 명령의 출력 줄(`id<TAB>label`). 모르는 분류면 비어 있다.
pub fn unit_listing(category: &str) -> Vec<String> {
    quantity::units_for_category(category)
        .into_iter()
        .map(|u| format!("{}\t{}", u.id(), u.label()))
        .collect()
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 입력이 닫히면 종료 메뉴와 같이 끝낸다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut app = ConverterApp::from_config(config);
    loop {
        let step = match ui_cli::main_menu(tr, &app)? {
            MenuChoice::Convert => ui_cli::handle_convert(tr, &mut app),
            MenuChoice::FromUnit => ui_cli::handle_unit_change(tr, &mut app, true),
            MenuChoice::ToUnit => ui_cli::handle_unit_change(tr, &mut app, false),
            MenuChoice::Swap => ui_cli::handle_swap(tr, &mut app),
            MenuChoice::Category => ui_cli::handle_category(tr, &mut app),
            MenuChoice::History => ui_cli::handle_history(tr, &app),
            MenuChoice::Clear => ui_cli::handle_clear(tr, &mut app),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config, &mut app).and_then(|()| {
                    config.save()?;
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                    Ok(())
                })
            }
            MenuChoice::Exit => break,
        };
        match step {
            Err(e) if e.is_input_closed() => {
                println!();
                break;
            }
            other => other?,
        }
    }
    config.save()?;
    println!("{}", tr.t(keys::APP_EXIT));
    Ok(())
}

use std::io::{self, Write};

use crate::app::{AppError, ConverterApp, UiEvent};
use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::quantity::{Category, Unit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    FromUnit,
    ToUnit,
    Swap,
    Category,
    History,
    Clear,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator, app: &ConverterApp) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", status_line(tr, app));
    for key in [
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_FROM_UNIT,
        keys::MAIN_MENU_TO_UNIT,
        keys::MAIN_MENU_SWAP,
        keys::MAIN_MENU_CATEGORY,
        keys::MAIN_MENU_HISTORY,
        keys::MAIN_MENU_CLEAR,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(&tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            // 입력 스트림이 닫히면 종료로 처리한다.
            Err(e) if e.is_input_closed() => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::FromUnit),
            "3" => return Ok(MenuChoice::ToUnit),
            "4" => return Ok(MenuChoice::Swap),
            "5" => return Ok(MenuChoice::Category),
            "6" => return Ok(MenuChoice::History),
            "7" => return Ok(MenuChoice::Clear),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn status_line(tr: &Translator, app: &ConverterApp) -> String {
    let state = app.state();
    tr.tf(
        keys::MAIN_MENU_STATUS,
        &[
            ("category", category_name(tr, state.category).as_str()),
            ("input", state.input.as_str()),
            ("from", unit_display(state.category, &state.from_unit).as_str()),
            ("to", unit_display(state.category, &state.to_unit).as_str()),
            ("output", state.output.as_str()),
        ],
    )
}

/// 값 입력 메뉴. 입력창처럼 숫자가 아니면 결과가 비워진다.
pub fn handle_convert(tr: &Translator, app: &mut ConverterApp) -> Result<(), AppError> {
    let text = read_line(&tr.t(keys::PROMPT_VALUE))?;
    let state = app.dispatch(UiEvent::ValueInput(text.trim().to_string()));
    print_result(tr, state.category, &state.output, &state.to_unit);
    Ok(())
}

/// 입력(true) 또는 변환(false) 단위를 바꾼다.
pub fn handle_unit_change(
    tr: &Translator,
    app: &mut ConverterApp,
    source: bool,
) -> Result<(), AppError> {
    let category = app.state().category;
    let units = category.units();
    for (i, unit) in units.iter().enumerate() {
        println!("{:>2}) {}", i + 1, unit.label());
    }
    let sel = read_line(&tr.t(keys::PROMPT_UNIT))?;
    let id = select_unit(&units, sel.trim());
    let event = if source {
        UiEvent::FromUnitChanged(id)
    } else {
        UiEvent::ToUnitChanged(id)
    };
    let state = app.dispatch(event);
    print_result(tr, state.category, &state.output, &state.to_unit);
    Ok(())
}

/// 번호면 목록에서 고르고, 아니면 입력한 식별자를 그대로 쓴다.
fn select_unit(units: &[Unit], sel: &str) -> String {
    sel.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| units.get(i))
        .map(|u| u.id().to_string())
        .unwrap_or_else(|| sel.to_string())
}

pub fn handle_swap(tr: &Translator, app: &mut ConverterApp) -> Result<(), AppError> {
    let state = app.dispatch(UiEvent::Swap);
    print_result(tr, state.category, &state.output, &state.to_unit);
    Ok(())
}

/// 분류 변경 메뉴.
pub fn handle_category(tr: &Translator, app: &mut ConverterApp) -> Result<(), AppError> {
    let category = read_category(tr)?;
    let state = app.dispatch(UiEvent::CategoryChanged(category));
    print_result(tr, state.category, &state.output, &state.to_unit);
    Ok(())
}

/// 최근 변환 기록을 최신순으로 출력한다.
pub fn handle_history(tr: &Translator, app: &ConverterApp) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    if app.history().is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
    }
    for line in app.history().lines() {
        println!("  {line}");
    }
    Ok(())
}

pub fn handle_clear(tr: &Translator, app: &mut ConverterApp) -> Result<(), AppError> {
    app.dispatch(UiEvent::Clear);
    println!("{}", tr.t(keys::CLEAR_DONE));
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경 사항은 호출한 쪽에서 저장한다.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    app: &mut ConverterApp,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT,
            &[
                ("language", cfg.language.as_str()),
                ("category", category_name(tr, cfg.default_category).as_str()),
            ],
        )
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line("auto / ko / en: ")?;
            let lang = lang.trim();
            cfg.language = if lang.is_empty() || lang.eq_ignore_ascii_case("auto") {
                "auto".to_string()
            } else {
                i18n::resolve_language(lang, None)
            };
        }
        "2" => match Category::from_id(&read_category(tr)?) {
            Some(category) => cfg.default_category = category,
            None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        },
        "3" => {
            app.clear_history();
            println!("{}", tr.t(keys::HISTORY_CLEARED));
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 분류 목록을 보여주고 선택한 분류 식별자를 돌려준다.
fn read_category(tr: &Translator) -> Result<String, AppError> {
    for (i, c) in Category::ALL.iter().enumerate() {
        println!("{}) {} ({})", i + 1, category_name(tr, *c), c.id());
    }
    let sel = read_line(&tr.t(keys::PROMPT_CATEGORY))?;
    let sel = sel.trim();
    let id = sel
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Category::ALL.get(i))
        .map(|c| c.id().to_string())
        .unwrap_or_else(|| sel.to_string());
    Ok(id)
}

/// 분류의 화면 이름.
pub fn category_name(tr: &Translator, category: Category) -> String {
    let key = match category {
        Category::Length => keys::CATEGORY_LENGTH,
        Category::Weight => keys::CATEGORY_WEIGHT,
        Category::Volume => keys::CATEGORY_VOLUME,
        Category::Temperature => keys::CATEGORY_TEMPERATURE,
    };
    tr.t(key).into_owned()
}

fn unit_display(category: Category, id: &str) -> String {
    Unit::parse(category, id)
        .map(|u| u.label().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn print_result(tr: &Translator, category: Category, output: &str, to_unit: &str) {
    if output.is_empty() {
        println!("{}", tr.t(keys::RESULT_EMPTY));
    } else {
        println!(
            "{}",
            tr.tf(
                keys::RESULT_LINE,
                &[("output", output), ("unit", unit_display(category, to_unit).as_str())],
            )
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

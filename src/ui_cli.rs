use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::{Catalog, CatalogError, Resolved};
use crate::i18n::{keys, Language, Translator};
use crate::view::{self, chrome_text, ItemMeta, Page, SectionView};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Page(Page),
    ToggleLanguage,
    Exit,
}

/// 메뉴 입력 한 줄을 해석한다. 번호는 `Page::ALL` 순서(1부터)를 따른다.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    let sel = input.trim();
    if sel.eq_ignore_ascii_case("l") {
        return Some(MenuChoice::ToggleLanguage);
    }
    if sel == "0" {
        return Some(MenuChoice::Exit);
    }
    let n = sel.parse::<usize>().ok()?;
    Page::ALL.get(n.checked_sub(1)?).copied().map(MenuChoice::Page)
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    for (i, page) in Page::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(page.label_key()));
    }
    println!("{}", tr.t(keys::MENU_TOGGLE_LANGUAGE));
    println!("{}", tr.t(keys::MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 페이지 하나를 출력한다. 없는 섹션은 부분 출력 대신 "표시할 수 없음" 안내만 남긴다.
pub fn render_page<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    page: Page,
    lang: Language,
) -> Result<(), AppError> {
    let tr = Translator::new(lang);
    match page.group() {
        Some(group) => match view::section_view(catalog, group, lang) {
            Ok(section) => render_section(out, &section, &tr)?,
            Err(CatalogError::NotFound(what)) => {
                log::warn!("section unavailable: {what}");
                writeln!(out, "\n-- {} --", tr.t(page.label_key()))?;
                writeln!(out, "{}", tr.t(keys::NOT_AVAILABLE))?;
            }
            Err(e) => return Err(e.into()),
        },
        None if page == Page::Home => render_home(out, lang)?,
        None => render_about(out, lang)?,
    }
    out.flush()?;
    Ok(())
}

/// 콘텐츠 섹션을 카드 형태의 텍스트로 출력한다.
pub fn render_section<W: Write>(
    out: &mut W,
    section: &SectionView<'_>,
    tr: &Translator,
) -> io::Result<()> {
    writeln!(out, "\n-- {} --", section.title.primary)?;
    for block in section.by_category() {
        if let Some(category) = block.category {
            writeln!(out, "\n[{}]", category.primary)?;
        }
        for item in block.items {
            writeln!(out)?;
            match &item.meta {
                ItemMeta::Narrative { title: Some(title) } => {
                    writeln!(out, "# {}", title.primary)?;
                    write_card(out, item.text, 2)?;
                }
                ItemMeta::Scenario {
                    keep_in_mind,
                    phrasing_direction,
                    visual,
                } => {
                    writeln!(out, "* {}", item.text.primary)?;
                    write_secondary(out, item.text, 4)?;
                    if let Some(k) = keep_in_mind {
                        write_labeled(out, tr.t(keys::SCENARIO_KEEP_IN_MIND), *k)?;
                    }
                    if let Some(p) = phrasing_direction {
                        write_labeled(out, tr.t(keys::SCENARIO_PHRASING), *p)?;
                    }
                    if let Some(v) = visual {
                        let name = v.title.map(|t| t.primary).unwrap_or(v.key);
                        writeln!(out, "  {}: {}", tr.t(keys::SCENARIO_VISUAL), name)?;
                        write_card(out, v.text, 4)?;
                    }
                }
                _ => write_card(out, item.text, 2)?,
            }
        }
    }
    Ok(())
}

fn render_home<W: Write>(out: &mut W, lang: Language) -> io::Result<()> {
    let tr = Translator::new(lang);
    writeln!(out, "\n=== {} ===", tr.t(keys::APP_TITLE))?;
    writeln!(out)?;
    write_card(out, chrome_text(keys::HOME_INTRO, lang), 2)?;
    writeln!(out)?;
    let shortcuts = [
        keys::HOME_TALK_PARENTS,
        keys::HOME_TALK_STUDENTS,
        keys::HOME_TALK_COLLEAGUES,
    ]
    .map(|k| format!("[{}]", tr.t(k)));
    // 세 바로가기 모두 문구 페이지(메뉴 2번)로 이어진다.
    writeln!(out, "  {}  -> 2) {}", shortcuts.join(" "), tr.t(keys::MENU_PHRASES))?;
    writeln!(out)?;
    write_card(out, chrome_text(keys::HOME_TIP, lang), 2)?;
    Ok(())
}

fn render_about<W: Write>(out: &mut W, lang: Language) -> io::Result<()> {
    let tr = Translator::new(lang);
    writeln!(out, "\n-- {} --\n", tr.t(keys::MENU_ABOUT))?;
    write_card(out, chrome_text(keys::ABOUT_DISCLAIMER, lang), 2)?;
    writeln!(out, "\n{}", tr.t(keys::ABOUT_LAYERS_TITLE))?;
    for key in [
        keys::ABOUT_LAYER_LANGUAGE,
        keys::ABOUT_LAYER_VISUAL,
        keys::ABOUT_LAYER_INTERACTION,
    ] {
        writeln!(out, "- {}", tr.t(key))?;
    }
    Ok(())
}

/// 주 텍스트를 들여쓰고, 보조 텍스트는 괄호로 한 단계 더 들여쓴다.
fn write_card<W: Write>(out: &mut W, text: Resolved<'_>, indent: usize) -> io::Result<()> {
    for line in text.primary.lines() {
        writeln!(out, "{:indent$}{line}", "")?;
    }
    write_secondary(out, text, indent + 2)
}

fn write_secondary<W: Write>(out: &mut W, text: Resolved<'_>, indent: usize) -> io::Result<()> {
    if text.secondary == text.primary {
        return Ok(());
    }
    for line in text.secondary.lines() {
        writeln!(out, "{:indent$}({line})", "")?;
    }
    Ok(())
}

fn write_labeled<W: Write>(out: &mut W, label: &str, text: Resolved<'_>) -> io::Result<()> {
    writeln!(out, "  {label}: {}", text.primary)?;
    write_secondary(out, text, 4)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        // 입력 스트림이 닫히면 종료로 취급한다.
        return Ok("0".into());
    }
    Ok(buf)
}

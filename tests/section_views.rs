use neurodiversity_toolkit::catalog::{Catalog, CatalogError, GroupId};
use neurodiversity_toolkit::i18n::{keys, Language, Translator};
use neurodiversity_toolkit::ui_cli::{parse_menu_choice, render_page, MenuChoice};
use neurodiversity_toolkit::view::{chrome_text, section_view, ItemMeta, Page};

fn catalog() -> Catalog {
    Catalog::load().expect("built-in content must validate")
}

fn rendered(catalog: &Catalog, page: Page, lang: Language) -> String {
    let mut out = Vec::new();
    render_page(&mut out, catalog, page, lang).expect("render");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn phrase_section_groups_consecutive_categories() {
    let c = catalog();
    let section = section_view(&c, GroupId::Phrases, Language::En).unwrap();
    assert_eq!(section.title.primary, "Phrases & Scripts");
    assert_eq!(section.title.secondary, "フレーズとスクリプト");

    let blocks = section.by_category();
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0].category.map(|c| c.primary),
        Some("First conversation with parents")
    );
    assert_eq!(blocks[0].items.len(), 2);
    assert_eq!(blocks[1].category.map(|c| c.secondary), Some("生徒に説明するとき"));
    assert_eq!(blocks[1].items[0].key, "students.different_paths");
}

#[test]
fn section_items_follow_group_order_in_both_languages() {
    let c = catalog();
    for id in GroupId::ALL {
        let expected: Vec<&str> = c.get_group(id).unwrap().keys().collect();
        for lang in Language::ALL {
            let section = section_view(&c, id, lang).unwrap();
            let keys: Vec<&str> = section.items.iter().map(|i| i.key).collect();
            assert_eq!(keys, expected, "{id} in {lang}");
        }
    }
}

#[test]
fn scenario_items_carry_guidance_and_visual() {
    let c = catalog();
    let section = section_view(&c, GroupId::Scenarios, Language::Jp).unwrap();
    let first = &section.items[0];
    assert_eq!(first.text.primary, "保護者に気になる点を伝えたい");
    match &first.meta {
        ItemMeta::Scenario {
            keep_in_mind,
            phrasing_direction,
            visual,
        } => {
            assert_eq!(keep_in_mind.map(|k| k.primary), Some("関係性を優先し、断定を避ける"));
            assert_eq!(
                phrasing_direction.map(|p| p.primary),
                Some("強みから話し始め、協力をお願いする形にする")
            );
            let visual = visual.as_ref().expect("visual");
            assert_eq!(visual.key, "dots");
            assert_eq!(visual.title.map(|t| t.primary), Some("ドットの物語"));
            assert!(visual.text.secondary.starts_with("Thoughts are like dots"));
        }
        other => panic!("unexpected meta {other:?}"),
    }
}

#[test]
fn page_names_parse_and_unknown_sections_are_not_found() {
    assert_eq!("home".parse::<Page>().unwrap(), Page::Home);
    assert_eq!("visuals".parse::<Page>().unwrap(), Page::VisualNarratives);
    assert_eq!("scenarios".parse::<Page>().unwrap(), Page::Scenarios);
    assert!(matches!("colleagues".parse::<Page>(), Err(CatalogError::NotFound(_))));
    assert_eq!(Page::Home.group(), None);
    assert_eq!(Page::Phrases.group(), Some(GroupId::Phrases));
}

#[test]
fn menu_input_maps_to_pages() {
    assert_eq!(parse_menu_choice("1\n"), Some(MenuChoice::Page(Page::Home)));
    assert_eq!(parse_menu_choice(" 4 "), Some(MenuChoice::Page(Page::Scenarios)));
    assert_eq!(parse_menu_choice("5"), Some(MenuChoice::Page(Page::About)));
    assert_eq!(parse_menu_choice("l"), Some(MenuChoice::ToggleLanguage));
    assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
    assert_eq!(parse_menu_choice("6"), None);
    assert_eq!(parse_menu_choice("x"), None);
}

#[test]
fn rendered_scenarios_show_primary_with_secondary_annotation() {
    let c = catalog();
    let out = rendered(&c, Page::Scenarios, Language::En);
    assert!(out.contains("* Talking to a parent about concerns"));
    assert!(out.contains("(保護者に気になる点を伝えたい)"));
    assert!(out.contains("Keep in mind: Put the relationship first"));
    assert!(out.contains("Suggested metaphor: The dots story"));
    assert!(out.contains("Thoughts are like dots."));
}

#[test]
fn rendered_phrases_put_category_headings_before_items() {
    let c = catalog();
    let out = rendered(&c, Page::Phrases, Language::Jp);
    let heading = out.find("[保護者と初めて話すとき]").expect("category heading");
    let item = out.find("〇〇さんは").expect("first phrase");
    let students = out.find("[生徒に説明するとき]").expect("second heading");
    assert!(heading < item && item < students);
    assert!(out.contains("(Your child shows strong focus"));
}

#[test]
fn home_and_about_pages_use_static_text() {
    let c = catalog();
    let home = rendered(&c, Page::Home, Language::Jp);
    assert!(home.contains("言葉を選ぶことは、関係を守ることです。"));
    assert!(home.contains("[保護者と話す] [生徒と話す] [同僚と話す]"));

    let about = rendered(&c, Page::About, Language::En);
    assert!(about.contains("Three Layers"));
    assert!(about.contains("not intended for diagnosis"));
    assert!(about.contains("Visual Layer: metaphors of dots, waves and paths"));
}

#[test]
fn chrome_text_pairs_both_languages() {
    let tip = chrome_text(keys::HOME_TIP, Language::En);
    assert!(tip.primary.starts_with("Today's tip"));
    assert!(tip.secondary.starts_with("今日のヒント"));
    let flipped = chrome_text(keys::HOME_TIP, Language::Jp);
    assert_eq!((flipped.primary, flipped.secondary), (tip.secondary, tip.primary));
}

#[test]
fn every_page_renders_its_own_heading() {
    let c = catalog();
    for lang in Language::ALL {
        let home = rendered(&c, Page::Home, lang);
        let about = rendered(&c, Page::About, lang);
        let tr = Translator::new(lang);
        assert!(home.contains(tr.t(keys::APP_TITLE)));
        assert!(about.contains(&format!("-- {} --", tr.t(keys::MENU_ABOUT))));
        for page in [Page::Phrases, Page::VisualNarratives, Page::Scenarios] {
            let out = rendered(&c, page, lang);
            let group = page.group().expect("content page");
            let title = c.get_group(group).unwrap().title.resolve(lang).primary;
            assert!(out.contains(title), "{group} in {lang}");
        }
    }
}

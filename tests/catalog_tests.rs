use neurodiversity_toolkit::catalog::{Catalog, CatalogError, GroupId};
use neurodiversity_toolkit::i18n::Language;

fn catalog() -> Catalog {
    Catalog::load().expect("built-in content must validate")
}

#[test]
fn built_in_catalog_has_every_group_in_display_order() {
    let c = catalog();
    let ids: Vec<GroupId> = c.groups().iter().map(|g| g.id).collect();
    assert_eq!(ids, GroupId::ALL.to_vec());
    for group in c.groups() {
        assert!(!group.is_empty(), "{} is empty", group.id);
    }
}

#[test]
fn resolve_text_swaps_primary_and_secondary() {
    let c = catalog();
    for group in c.groups() {
        for entity in group.entities() {
            let jp = c.resolve_text(entity, Language::Jp);
            let en = c.resolve_text(entity, Language::En);
            assert_eq!(jp.primary, entity.text_jp());
            assert_eq!(jp.secondary, entity.text_en());
            assert_eq!(en.primary, jp.secondary);
            assert_eq!(en.secondary, jp.primary);
            assert!(!jp.primary.is_empty() && !jp.secondary.is_empty(), "{}", entity.key);
            // 같은 언어로 두 번 조회해도 결과가 같다.
            assert_eq!(c.resolve_text(entity, Language::En), en);
        }
    }
}

#[test]
fn every_scenario_resolves_its_visual_narrative() {
    let c = catalog();
    assert!(!c.scenarios().is_empty());
    for scenario in c.scenarios() {
        let visual_ref = scenario.visual_ref.as_deref().expect("scenario without visual_ref");
        let narrative = c.resolve_visual(scenario).expect("dangling visual_ref");
        assert_eq!(narrative.key, visual_ref);
        assert!(c.visual_narratives().iter().any(|n| n.key == narrative.key));
    }
}

#[test]
fn group_order_does_not_depend_on_language() {
    let c = catalog();
    for id in GroupId::ALL {
        let before: Vec<String> = c.get_group(id).unwrap().keys().map(String::from).collect();
        for entity in c.get_group(id).unwrap().entities() {
            let _ = c.resolve_text(entity, Language::En);
        }
        let after_en: Vec<String> = c.get_group(id).unwrap().keys().map(String::from).collect();
        for entity in c.get_group(id).unwrap().entities() {
            let _ = c.resolve_text(entity, Language::Jp);
        }
        let after_jp: Vec<String> = c.get_group(id).unwrap().keys().map(String::from).collect();
        assert_eq!(before, after_en);
        assert_eq!(before, after_jp);
    }
}

#[test]
fn parent_concerns_scenario_end_to_end() {
    let c = catalog();
    let scenario = c
        .get_entity(GroupId::Scenarios, "parent_concerns")
        .expect("parent_concerns scenario");
    assert_eq!(scenario.visual_ref.as_deref(), Some("dots"));

    let text = c.resolve_text(scenario, Language::En);
    assert_eq!(text.primary, "Talking to a parent about concerns");
    assert_eq!(text.secondary, "保護者に気になる点を伝えたい");

    let visual = c.resolve_visual(scenario).expect("dots narrative");
    assert_eq!(visual.key, "dots");
    assert!(visual.text_en().starts_with("Thoughts are like dots"));
    assert_eq!(visual.title.as_ref().map(|t| t.jp.as_str()), Some("ドットの物語"));
}

#[test]
fn phrases_keep_definition_order_and_categories() {
    let c = catalog();
    let keys: Vec<&str> = c.phrases().iter().map(|p| p.key.as_str()).collect();
    assert_eq!(
        keys,
        ["parents_first.focus", "parents_first.together", "students.different_paths"]
    );
    let first = &c.phrases()[0];
    let category = first.category.as_ref().expect("category");
    assert_eq!(category.get(Language::Jp), "保護者と初めて話すとき");
    assert_eq!(category.get(Language::En), "First conversation with parents");
}

#[test]
fn unknown_group_name_is_not_found() {
    let c = catalog();
    let err = c.get_group_by_name("colleagues").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    assert!(c.get_group_by_name("visuals").is_ok());
    assert!(c.get_group_by_name("Scenarios").is_ok());
}

#[test]
fn unknown_entity_key_is_not_found() {
    let c = catalog();
    let err = c.get_entity(GroupId::VisualNarratives, "spirals").unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotFound("`spirals` in group `visual_narratives`".into())
    );
}

#[test]
fn resolve_visual_on_entity_without_reference_is_not_found() {
    let c = catalog();
    let phrase = &c.phrases()[0];
    assert!(matches!(c.resolve_visual(phrase), Err(CatalogError::NotFound(_))));
}

#[test]
fn catalog_can_be_shared_across_threads() {
    let c = std::sync::Arc::new(catalog());
    let handles: Vec<_> = Language::ALL
        .into_iter()
        .map(|lang| {
            let c = std::sync::Arc::clone(&c);
            std::thread::spawn(move || {
                c.scenarios()
                    .iter()
                    .map(|s| c.resolve_text(s, lang).primary.to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0][0], "保護者に気になる点を伝えたい");
    assert_eq!(results[1][0], "Talking to a parent about concerns");
}

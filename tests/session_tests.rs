use std::sync::Arc;

use neurodiversity_toolkit::i18n::{keys, Language};
use neurodiversity_toolkit::session::{Session, SessionError, SessionRegistry};

#[test]
fn toggle_flips_and_returns_new_language() {
    let mut s = Session::new(Language::Jp);
    assert_eq!(s.toggle(), Language::En);
    assert_eq!(s.language(), Language::En);
    assert_eq!(s.translator().t(keys::MENU_HOME), "Home / Today");
    assert_eq!(s.toggle(), Language::Jp);
    assert_eq!(Session::default().language(), Language::Jp);
}

#[test]
fn sessions_do_not_see_each_other() {
    let registry = SessionRegistry::new();
    let a = registry.open(Language::Jp);
    let b = registry.open(Language::Jp);
    assert_ne!(a, b);

    registry.toggle(a).unwrap();
    assert_eq!(registry.language(a).unwrap(), Language::En);
    assert_eq!(registry.language(b).unwrap(), Language::Jp);

    registry.set_language(b, Language::En).unwrap();
    registry.toggle(a).unwrap();
    assert_eq!(registry.language(a).unwrap(), Language::Jp);
    assert_eq!(registry.language(b).unwrap(), Language::En);
}

#[test]
fn closed_session_is_not_found() {
    let registry = SessionRegistry::new();
    let id = registry.open(Language::En);
    registry.close(id).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.language(id), Err(SessionError::NotFound(id)));
    assert_eq!(registry.toggle(id), Err(SessionError::NotFound(id)));
    assert_eq!(registry.close(id), Err(SessionError::NotFound(id)));
}

#[test]
fn concurrent_toggles_stay_per_session() {
    let registry = Arc::new(SessionRegistry::new());
    let ids: Vec<_> = (0..8).map(|_| registry.open(Language::Jp)).collect();
    let handles: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let registry = Arc::clone(&registry);
            // i번째 세션은 i번 토글한다.
            std::thread::spawn(move || {
                for _ in 0..i {
                    registry.toggle(id).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    for (i, id) in ids.into_iter().enumerate() {
        let expected = if i % 2 == 0 { Language::Jp } else { Language::En };
        assert_eq!(registry.language(id).unwrap(), expected);
    }
    assert_eq!(registry.len(), 8);
}

//! TOML 콘텐츠 정의를 읽어 불변식을 검사한 뒤 모델로 변환한다.
//! 검증은 로드 시점에 한 번만, 빠짐없이 수행한다.

use std::collections::HashSet;

use serde::Deserialize;

use crate::catalog::model::{Bilingual, ContentEntity, ContentGroup, GroupId};
use crate::catalog::Violation;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDef {
    #[serde(default)]
    groups: Vec<GroupDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupDef {
    id: GroupId,
    #[serde(default)]
    title_jp: String,
    #[serde(default)]
    title_en: String,
    #[serde(default)]
    entities: Vec<EntityDef>,
}

/// 필드 이름은 `_jp`/`_en` 접미사 쌍을 그대로 따른다.
/// 본문이 빠진 경우도 파싱 오류가 아니라 빈 문자열 위반으로 보고하도록 기본값을 둔다.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityDef {
    key: String,
    category_jp: Option<String>,
    category_en: Option<String>,
    title_jp: Option<String>,
    title_en: Option<String>,
    #[serde(default)]
    text_jp: String,
    #[serde(default)]
    text_en: String,
    visual_ref: Option<String>,
    keep_in_mind_jp: Option<String>,
    keep_in_mind_en: Option<String>,
    phrasing_direction_jp: Option<String>,
    phrasing_direction_en: Option<String>,
}

/// TOML 문자열을 파싱하고 검증까지 마친 그룹 목록을 `GroupId::ALL` 순서로 반환한다.
pub(crate) fn parse(src: &str) -> Result<Vec<ContentGroup>, Violation> {
    let def: CatalogDef = toml::from_str(src).map_err(|e| Violation::Malformed(e.to_string()))?;
    build(def)
}

fn build(def: CatalogDef) -> Result<Vec<ContentGroup>, Violation> {
    let mut seen_groups = HashSet::new();
    for group in &def.groups {
        if !seen_groups.insert(group.id) {
            return Err(Violation::DuplicateGroup(group.id));
        }
    }
    if let Some(missing) = GroupId::ALL.iter().find(|id| !seen_groups.contains(id)) {
        return Err(Violation::MissingGroup(*missing));
    }

    let mut groups = Vec::with_capacity(def.groups.len());
    for group in def.groups {
        groups.push(build_group(group)?);
    }
    groups.sort_by_key(|g| g.id);

    check_visual_refs(&groups)?;
    Ok(groups)
}

fn build_group(def: GroupDef) -> Result<ContentGroup, Violation> {
    let id = def.id;
    let title = required_pair(id, "<group>", "title", def.title_jp, def.title_en)?;

    let mut keys = HashSet::new();
    let mut entities = Vec::with_capacity(def.entities.len());
    for e in def.entities {
        if e.key.trim().is_empty() {
            return Err(Violation::EmptyKey(id));
        }
        check_trimmed(id, "key", &e.key)?;
        if !keys.insert(e.key.clone()) {
            return Err(Violation::DuplicateKey { group: id, key: e.key });
        }
        entities.push(build_entity(id, e)?);
    }
    Ok(ContentGroup::new(id, title, entities))
}

fn build_entity(group: GroupId, e: EntityDef) -> Result<ContentEntity, Violation> {
    let key = e.key.as_str();
    let text = required_pair(group, key, "text", e.text_jp, e.text_en)?;
    let category = optional_pair(group, key, "category", e.category_jp, e.category_en)?;
    let title = optional_pair(group, key, "title", e.title_jp, e.title_en)?;
    let keep_in_mind = optional_pair(group, key, "keep_in_mind", e.keep_in_mind_jp, e.keep_in_mind_en)?;
    let phrasing_direction = optional_pair(
        group,
        key,
        "phrasing_direction",
        e.phrasing_direction_jp,
        e.phrasing_direction_en,
    )?;
    if let Some(r) = &e.visual_ref {
        if r.trim().is_empty() {
            return Err(Violation::EmptyText {
                group,
                key: e.key.clone(),
                field: "visual_ref".into(),
            });
        }
        check_trimmed(group, "visual_ref", r)?;
    }
    Ok(ContentEntity {
        key: e.key,
        category,
        title,
        text,
        visual_ref: e.visual_ref,
        keep_in_mind,
        phrasing_direction,
    })
}

fn check_trimmed(group: GroupId, field: &str, value: &str) -> Result<(), Violation> {
    if value.trim() != value {
        return Err(Violation::PaddedIdentifier {
            group,
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn required_pair(
    group: GroupId,
    key: &str,
    field: &str,
    jp: String,
    en: String,
) -> Result<Bilingual, Violation> {
    for (value, suffix) in [(&jp, "jp"), (&en, "en")] {
        if value.trim().is_empty() {
            return Err(Violation::EmptyText {
                group,
                key: key.to_string(),
                field: format!("{field}_{suffix}"),
            });
        }
    }
    Ok(Bilingual::new(jp, en))
}

/// 선택 필드는 둘 다 없거나 둘 다 있어야 한다. 한쪽만 있으면 언어 하나가 조용히 비게 된다.
fn optional_pair(
    group: GroupId,
    key: &str,
    field: &str,
    jp: Option<String>,
    en: Option<String>,
) -> Result<Option<Bilingual>, Violation> {
    match (jp, en) {
        (None, None) => Ok(None),
        (Some(jp), Some(en)) => required_pair(group, key, field, jp, en).map(Some),
        _ => Err(Violation::IncompletePair {
            group,
            key: key.to_string(),
            field: field.to_string(),
        }),
    }
}

fn check_visual_refs(groups: &[ContentGroup]) -> Result<(), Violation> {
    let narratives = groups
        .iter()
        .find(|g| g.id == GroupId::VisualNarratives)
        .ok_or(Violation::MissingGroup(GroupId::VisualNarratives))?;
    for group in groups {
        for entity in group.entities() {
            if let Some(r) = &entity.visual_ref {
                if narratives.get(r).is_none() {
                    return Err(Violation::DanglingVisualRef {
                        group: group.id,
                        key: entity.key.clone(),
                        visual_ref: r.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

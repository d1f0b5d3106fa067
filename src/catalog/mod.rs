//! 이중 언어 콘텐츠 카탈로그.
//!
//! 프로세스 시작 시 내장 정의(`content.toml`)로부터 한 번 만들어지고 이후에는 읽기 전용이다.
//! 불변식 검사는 `load()` 안에서 모두 끝나므로, 로드에 성공한 카탈로그에서는
//! 모든 `visual_ref`가 해석되고 모든 본문이 두 언어 모두 비어 있지 않다.

mod definition;
pub mod model;

pub use model::*;

use thiserror::Error;

use crate::i18n::Language;

const BUILT_IN_CONTENT: &str = include_str!("content.toml");

/// 카탈로그 조회/로드 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 정의 자체가 불변식을 어김. 이 카탈로그로는 어떤 콘텐츠도 제공하면 안 된다.
    #[error("content schema violation: {0}")]
    SchemaViolation(#[from] Violation),
    /// 고정 목록 밖의 그룹/키 요청
    #[error("{0} not found")]
    NotFound(String),
}

/// 스키마 위반의 구체적인 내용.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("malformed definition: {0}")]
    Malformed(String),
    #[error("group `{0}` is defined more than once")]
    DuplicateGroup(GroupId),
    #[error("group `{0}` is missing")]
    MissingGroup(GroupId),
    #[error("empty key in group `{0}`")]
    EmptyKey(GroupId),
    /// 앞뒤 공백이 붙은 키/참조. `"dots "`와 `"dots"`가 다른 키로 취급되는 것을 막는다.
    #[error("`{field}` value `{value}` in group `{group}` has leading or trailing whitespace")]
    PaddedIdentifier {
        group: GroupId,
        field: String,
        value: String,
    },
    #[error("duplicate key `{key}` in group `{group}`")]
    DuplicateKey { group: GroupId, key: String },
    #[error("empty `{field}` for `{key}` in group `{group}`")]
    EmptyText {
        group: GroupId,
        key: String,
        field: String,
    },
    #[error("`{field}` of `{key}` in group `{group}` is given in only one language")]
    IncompletePair {
        group: GroupId,
        key: String,
        field: String,
    },
    #[error("`{key}` in group `{group}` refers to unknown visual narrative `{visual_ref}`")]
    DanglingVisualRef {
        group: GroupId,
        key: String,
        visual_ref: String,
    },
}

/// 검증을 통과한 불변 콘텐츠 테이블.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// `GroupId::ALL` 순서로 정렬되어 있다.
    groups: Vec<ContentGroup>,
}

impl Catalog {
    /// 내장 정의로 카탈로그를 만든다.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILT_IN_CONTENT)
    }

    /// 임의의 TOML 정의를 같은 검증 절차로 읽는다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let groups = definition::parse(src).map_err(|v| {
            log::error!("content definition rejected: {v}");
            CatalogError::SchemaViolation(v)
        })?;
        let catalog = Self { groups };
        log::info!(
            "content catalog loaded: {} phrases, {} visual narratives, {} scenarios",
            catalog.group_len(GroupId::Phrases),
            catalog.group_len(GroupId::VisualNarratives),
            catalog.group_len(GroupId::Scenarios),
        );
        Ok(catalog)
    }

    /// 표시 순서대로 모든 그룹을 돌려준다.
    pub fn groups(&self) -> &[ContentGroup] {
        &self.groups
    }

    pub fn get_group(&self, id: GroupId) -> Result<&ContentGroup, CatalogError> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("group `{id}`")))
    }

    /// 그룹 이름 문자열로 조회한다. 고정 목록 밖이면 `NotFound`.
    pub fn get_group_by_name(&self, name: &str) -> Result<&ContentGroup, CatalogError> {
        self.get_group(name.parse()?)
    }

    pub fn get_entity(&self, id: GroupId, key: &str) -> Result<&ContentEntity, CatalogError> {
        self.get_group(id)?
            .get(key)
            .ok_or_else(|| CatalogError::NotFound(format!("`{key}` in group `{id}`")))
    }

    pub fn phrases(&self) -> &[ContentEntity] {
        self.entities_of(GroupId::Phrases)
    }

    pub fn visual_narratives(&self) -> &[ContentEntity] {
        self.entities_of(GroupId::VisualNarratives)
    }

    pub fn scenarios(&self) -> &[ContentEntity] {
        self.entities_of(GroupId::Scenarios)
    }

    /// 선택 언어 본문을 주 텍스트로, 나머지 언어를 보조 텍스트로 반환한다.
    pub fn resolve_text<'a>(&self, entity: &'a ContentEntity, lang: Language) -> Resolved<'a> {
        entity.text.resolve(lang)
    }

    /// 상황 가이드의 `visual_ref`를 따라가 비유 이야기를 찾는다.
    /// 로드 검증 이후에는 실패할 수 없으므로, 실패는 내부 불일치로 기록한다.
    pub fn resolve_visual(&self, scenario: &ContentEntity) -> Result<&ContentEntity, CatalogError> {
        let Some(visual_ref) = scenario.visual_ref.as_deref() else {
            return Err(CatalogError::NotFound(format!(
                "visual narrative for `{}`",
                scenario.key
            )));
        };
        self.get_entity(GroupId::VisualNarratives, visual_ref)
            .inspect_err(|e| {
                log::error!("catalog inconsistency: `{}` -> {e}", scenario.key);
            })
    }

    fn entities_of(&self, id: GroupId) -> &[ContentEntity] {
        self.get_group(id).map(|g| g.entities()).unwrap_or(&[])
    }

    fn group_len(&self, id: GroupId) -> usize {
        self.entities_of(id).len()
    }
}

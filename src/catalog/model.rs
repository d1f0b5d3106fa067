use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::i18n::Language;

/// 콘텐츠 그룹 식별자. 고정된 세 가지 외에는 존재하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupId {
    Phrases,
    VisualNarratives,
    Scenarios,
}

impl GroupId {
    /// 표시 순서. 언어 선택과 무관하게 항상 이 순서다.
    pub const ALL: [GroupId; 3] = [GroupId::Phrases, GroupId::VisualNarratives, GroupId::Scenarios];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::Phrases => "phrases",
            GroupId::VisualNarratives => "visual_narratives",
            GroupId::Scenarios => "scenarios",
        }
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phrases" => Ok(GroupId::Phrases),
            "visual_narratives" | "visuals" => Ok(GroupId::VisualNarratives),
            "scenarios" => Ok(GroupId::Scenarios),
            other => Err(CatalogError::NotFound(format!("group `{other}`"))),
        }
    }
}

/// 일본어/영어 한 쌍의 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bilingual {
    pub jp: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(jp: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            jp: jp.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Jp => &self.jp,
            Language::En => &self.en,
        }
    }

    /// 선택 언어를 주 텍스트로, 반대 언어를 보조 텍스트로 묶는다.
    pub fn resolve(&self, lang: Language) -> Resolved<'_> {
        Resolved {
            primary: self.get(lang),
            secondary: self.get(lang.other()),
        }
    }
}

/// 화면에 크게 보일 주 텍스트와 작게 덧붙일 보조 텍스트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub primary: &'a str,
    pub secondary: &'a str,
}

/// 이중 언어 콘텐츠 한 건. 문구, 비유 이야기, 상황 가이드가 모두 이 형태다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntity {
    pub key: String,
    /// 섹션 안에서 항목을 묶는 짧은 라벨
    pub category: Option<Bilingual>,
    /// 본문과 별도로 보여줄 제목 (비유 이야기의 "ドットの物語" 등)
    pub title: Option<Bilingual>,
    pub text: Bilingual,
    /// 상황 가이드가 추천하는 비유 이야기 키
    pub visual_ref: Option<String>,
    pub keep_in_mind: Option<Bilingual>,
    pub phrasing_direction: Option<Bilingual>,
}

impl ContentEntity {
    pub fn text_jp(&self) -> &str {
        &self.text.jp
    }

    pub fn text_en(&self) -> &str {
        &self.text.en
    }
}

/// 메뉴 한 섹션에 함께 표시되는 항목 묶음. 항목 순서가 표시 순서다.
#[derive(Debug, Clone)]
pub struct ContentGroup {
    pub id: GroupId,
    pub title: Bilingual,
    entities: Vec<ContentEntity>,
    index: HashMap<String, usize>,
}

impl ContentGroup {
    /// 키 중복이 없다는 전제로 호출된다 (검증은 definition 모듈에서 끝난다).
    pub(crate) fn new(id: GroupId, title: Bilingual, entities: Vec<ContentEntity>) -> Self {
        let index = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
        Self {
            id,
            title,
            entities,
            index,
        }
    }

    pub fn entities(&self) -> &[ContentEntity] {
        &self.entities
    }

    pub fn get(&self, key: &str) -> Option<&ContentEntity> {
        self.index.get(key).map(|&i| &self.entities[i])
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.key.as_str())
    }
}

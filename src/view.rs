//! 카탈로그를 화면용 (주 텍스트, 보조 텍스트, 메타데이터) 목록으로 펼친다.
//! CLI와 GUI가 같은 뷰를 그리므로 표시 규칙은 여기 한 곳에만 둔다.

use std::str::FromStr;

use crate::catalog::{Catalog, CatalogError, ContentEntity, GroupId, Resolved};
use crate::i18n::{keys, Language, Translator};

/// 사이드 메뉴 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Phrases,
    VisualNarratives,
    Scenarios,
    About,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Phrases,
        Page::VisualNarratives,
        Page::Scenarios,
        Page::About,
    ];

    /// 콘텐츠 그룹과 1:1로 대응하는 페이지만 Some.
    pub fn group(self) -> Option<GroupId> {
        match self {
            Page::Phrases => Some(GroupId::Phrases),
            Page::VisualNarratives => Some(GroupId::VisualNarratives),
            Page::Scenarios => Some(GroupId::Scenarios),
            Page::Home | Page::About => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => keys::MENU_HOME,
            Page::Phrases => keys::MENU_PHRASES,
            Page::VisualNarratives => keys::MENU_VISUALS,
            Page::Scenarios => keys::MENU_SCENARIOS,
            Page::About => keys::MENU_ABOUT,
        }
    }
}

impl From<GroupId> for Page {
    fn from(id: GroupId) -> Self {
        match id {
            GroupId::Phrases => Page::Phrases,
            GroupId::VisualNarratives => Page::VisualNarratives,
            GroupId::Scenarios => Page::Scenarios,
        }
    }
}

impl FromStr for Page {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "today" => Ok(Page::Home),
            "about" => Ok(Page::About),
            other => other.parse::<GroupId>().map(Page::from),
        }
    }
}

/// 한 섹션의 화면 데이터.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub group: GroupId,
    pub title: Resolved<'a>,
    pub items: Vec<ItemView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub key: &'a str,
    pub text: Resolved<'a>,
    pub meta: ItemMeta<'a>,
}

/// 그룹별로 본문 옆에 붙는 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemMeta<'a> {
    Phrase {
        category: Option<Resolved<'a>>,
    },
    Narrative {
        title: Option<Resolved<'a>>,
    },
    Scenario {
        keep_in_mind: Option<Resolved<'a>>,
        phrasing_direction: Option<Resolved<'a>>,
        visual: Option<VisualView<'a>>,
    },
}

/// 상황 가이드가 추천하는 비유 이야기.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualView<'a> {
    pub key: &'a str,
    pub title: Option<Resolved<'a>>,
    pub text: Resolved<'a>,
}

/// 같은 분류가 연속된 항목 묶음. 원래 화면은 분류마다 소제목을 하나씩 둔다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBlock<'s, 'a> {
    pub category: Option<Resolved<'a>>,
    pub items: Vec<&'s ItemView<'a>>,
}

impl<'a> SectionView<'a> {
    /// 항목 순서를 유지한 채 연속된 같은 분류끼리 묶는다.
    pub fn by_category<'s>(&'s self) -> Vec<CategoryBlock<'s, 'a>> {
        let mut blocks: Vec<CategoryBlock<'s, 'a>> = Vec::new();
        for item in &self.items {
            let category = match &item.meta {
                ItemMeta::Phrase { category } => *category,
                _ => None,
            };
            match blocks.last_mut() {
                Some(last) if last.category == category => last.items.push(item),
                _ => blocks.push(CategoryBlock {
                    category,
                    items: vec![item],
                }),
            }
        }
        blocks
    }
}

/// 그룹 하나를 선택 언어 기준으로 펼친다.
pub fn section_view(
    catalog: &Catalog,
    group: GroupId,
    lang: Language,
) -> Result<SectionView<'_>, CatalogError> {
    let content = catalog.get_group(group)?;
    let items = content
        .entities()
        .iter()
        .map(|entity| item_view(catalog, group, entity, lang))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SectionView {
        group,
        title: content.title.resolve(lang),
        items,
    })
}

fn item_view<'a>(
    catalog: &'a Catalog,
    group: GroupId,
    entity: &'a ContentEntity,
    lang: Language,
) -> Result<ItemView<'a>, CatalogError> {
    let meta = match group {
        GroupId::Phrases => ItemMeta::Phrase {
            category: entity.category.as_ref().map(|c| c.resolve(lang)),
        },
        GroupId::VisualNarratives => ItemMeta::Narrative {
            title: entity.title.as_ref().map(|t| t.resolve(lang)),
        },
        GroupId::Scenarios => {
            let visual = match entity.visual_ref {
                Some(_) => {
                    let narrative = catalog.resolve_visual(entity)?;
                    Some(VisualView {
                        key: &narrative.key,
                        title: narrative.title.as_ref().map(|t| t.resolve(lang)),
                        text: catalog.resolve_text(narrative, lang),
                    })
                }
                None => None,
            };
            ItemMeta::Scenario {
                keep_in_mind: entity.keep_in_mind.as_ref().map(|k| k.resolve(lang)),
                phrasing_direction: entity.phrasing_direction.as_ref().map(|p| p.resolve(lang)),
                visual,
            }
        }
    };
    Ok(ItemView {
        key: &entity.key,
        text: catalog.resolve_text(entity, lang),
        meta,
    })
}

/// 홈/소개 페이지처럼 카탈로그 밖에 있는 화면 문구를 같은 (주, 보조) 형태로 만든다.
pub fn chrome_text(key: &str, lang: Language) -> Resolved<'static> {
    Resolved {
        primary: Translator::new(lang).t(key),
        secondary: Translator::new(lang.other()).t(key),
    }
}

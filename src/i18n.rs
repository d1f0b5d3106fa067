use sys_locale::get_locale;

/// 화면 문자열(메뉴, 정적 페이지, 라벨) 키를 모아두는 네임스페이스.
/// 콘텐츠 본문은 catalog 모듈이 담당하고 여기에는 UI 크롬만 둔다.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const NOT_AVAILABLE: &str = "general.not_available";

    pub const NAV_HEADING: &str = "nav.heading";
    pub const NAV_LANGUAGE: &str = "nav.language";
    pub const MENU_HOME: &str = "menu.home";
    pub const MENU_PHRASES: &str = "menu.phrases";
    pub const MENU_VISUALS: &str = "menu.visuals";
    pub const MENU_SCENARIOS: &str = "menu.scenarios";
    pub const MENU_ABOUT: &str = "menu.about";
    pub const MENU_TOGGLE_LANGUAGE: &str = "menu.toggle_language";
    pub const MENU_EXIT: &str = "menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const LANGUAGE_SWITCHED: &str = "language.switched";

    pub const HOME_INTRO: &str = "home.intro";
    pub const HOME_TALK_PARENTS: &str = "home.talk_parents";
    pub const HOME_TALK_STUDENTS: &str = "home.talk_students";
    pub const HOME_TALK_COLLEAGUES: &str = "home.talk_colleagues";
    pub const HOME_TIP: &str = "home.tip";

    pub const ABOUT_DISCLAIMER: &str = "about.disclaimer";
    pub const ABOUT_LAYERS_TITLE: &str = "about.layers_title";
    pub const ABOUT_LAYER_LANGUAGE: &str = "about.layer_language";
    pub const ABOUT_LAYER_VISUAL: &str = "about.layer_visual";
    pub const ABOUT_LAYER_INTERACTION: &str = "about.layer_interaction";

    pub const SCENARIO_KEEP_IN_MIND: &str = "scenario.keep_in_mind";
    pub const SCENARIO_PHRASING: &str = "scenario.phrasing_direction";
    pub const SCENARIO_VISUAL: &str = "scenario.visual";

    pub const SETTINGS_TITLE: &str = "settings.title";
    pub const SETTINGS_DEFAULT_LANGUAGE: &str = "settings.default_language";
    pub const SETTINGS_LANGUAGE_AUTO: &str = "settings.language_auto";
    pub const SETTINGS_UI_SCALE: &str = "settings.ui_scale";
    pub const SETTINGS_FONT: &str = "settings.font";
    pub const SETTINGS_PICK_FONT: &str = "settings.pick_font";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_SAVE_DISABLED: &str = "settings.save_disabled";
    pub const FONT_MISSING: &str = "settings.font_missing";
}

/// 표시 언어. 원본 화면의 기본 선택이 일본어이므로 `Jp`가 기본값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Jp,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Jp, Language::En];

    /// 언어 코드나 표시 이름을 해석한다. 알 수 없는 값은 None.
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        match c.as_str() {
            "ja" | "jp" | "jpn" | "日本語" => Some(Language::Jp),
            "en" | "eng" | "english" => Some(Language::En),
            other if other.starts_with("ja") => Some(Language::Jp),
            other if other.starts_with("en") => Some(Language::En),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Jp => "ja",
            Language::En => "en",
        }
    }

    /// 언어 선택 라디오에 쓰는 자국어 이름.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Jp => "日本語",
            Language::En => "English",
        }
    }

    /// 보조 텍스트로 함께 보여줄 반대쪽 언어.
    pub fn other(&self) -> Self {
        match self {
            Language::Jp => Language::En,
            Language::En => Language::Jp,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.native_name())
    }
}

/// UI 문자열 번역기. 언어 하나만 들고 다니므로 세션마다 가볍게 만든다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 일본어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ja(key)),
            Language::Jp => ja(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어를 결정한다. 모두 실패하면 일본어.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> Language {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_default()
}

fn normalize_lang(code: &str) -> Option<Language> {
    match code.trim().to_lowercase().as_str() {
        "auto" | "" => None,
        other => Language::from_code(other),
    }
}

fn normalize_locale_string(loc: &str) -> Option<Language> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ja" => Some(Language::Jp),
        "en" => Some(Language::En),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(lang) = normalize_locale_string(&value) {
                return Some(lang);
            }
        }
    }
    None
}

fn ja(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "エラー",
        APP_EXIT => "終了します。",
        APP_TITLE => "Neurodiversity Communication Toolkit",
        NOT_AVAILABLE => "この項目は現在表示できません。",
        NAV_HEADING => "メニュー",
        NAV_LANGUAGE => "Language / 言語",
        MENU_HOME => "ホーム / 今日",
        MENU_PHRASES => "フレーズとスクリプト",
        MENU_VISUALS => "ビジュアルと物語のツール",
        MENU_SCENARIOS => "場面別ガイド",
        MENU_ABOUT => "このツールについて",
        MENU_TOGGLE_LANGUAGE => "L) English に切り替える",
        MENU_EXIT => "0) 終了",
        PROMPT_MENU_SELECT => "メニュー選択: ",
        INVALID_SELECTION_RETRY => "入力が正しくありません。もう一度選んでください。",
        LANGUAGE_SWITCHED => "表示言語:",
        HOME_INTRO => "日本の教育現場で、やさしく、安心して\n神経多様性について話すための支援ツール",
        HOME_TALK_PARENTS => "保護者と話す",
        HOME_TALK_STUDENTS => "生徒と話す",
        HOME_TALK_COLLEAGUES => "同僚と話す",
        HOME_TIP => "今日のヒント: 言葉を選ぶことは、関係を守ることです。",
        ABOUT_DISCLAIMER => {
            "このツールは、診断や医療目的のものではありません。\n日本の文化や教育現場に配慮した\nコミュニケーション支援のためのものです。"
        }
        ABOUT_LAYERS_TITLE => "三つのレイヤー",
        ABOUT_LAYER_LANGUAGE => "言語レイヤー: 言葉のトーンと選び方",
        ABOUT_LAYER_VISUAL => "視覚レイヤー: ドット・波・道の比喩",
        ABOUT_LAYER_INTERACTION => "対話レイヤー: 会話の流れ",
        SCENARIO_KEEP_IN_MIND => "大切にすること",
        SCENARIO_PHRASING => "言葉の方向性",
        SCENARIO_VISUAL => "おすすめの比喩",
        SETTINGS_TITLE => "設定",
        SETTINGS_DEFAULT_LANGUAGE => "起動時の言語",
        SETTINGS_LANGUAGE_AUTO => "システムに合わせる",
        SETTINGS_UI_SCALE => "表示倍率",
        SETTINGS_FONT => "日本語フォント",
        SETTINGS_PICK_FONT => "フォントを選ぶ…",
        SETTINGS_SAVE => "設定を保存",
        SETTINGS_SAVED => "保存しました。",
        SETTINGS_SAVE_DISABLED => "config.toml を読み込めなかったため保存しません。ファイルを直してから再起動してください。",
        FONT_MISSING => "日本語フォントが見つかりません。設定からフォントファイルを選んでください。",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        NOT_AVAILABLE => "This section is not available.",
        NAV_HEADING => "Menu",
        MENU_HOME => "Home / Today",
        MENU_PHRASES => "Phrases & Scripts",
        MENU_VISUALS => "Visual & Narrative Tools",
        MENU_SCENARIOS => "Guides for Situations",
        MENU_ABOUT => "About the Framework",
        MENU_TOGGLE_LANGUAGE => "L) Switch to 日本語",
        MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        LANGUAGE_SWITCHED => "Display language:",
        HOME_INTRO => {
            "A support tool for talking about neurodiversity\ngently and safely in Japanese schools"
        }
        HOME_TALK_PARENTS => "Talk with parents",
        HOME_TALK_STUDENTS => "Talk with students",
        HOME_TALK_COLLEAGUES => "Talk with colleagues",
        HOME_TIP => "Today's tip: choosing words carefully protects relationships.",
        ABOUT_DISCLAIMER => {
            "This tool is not intended for diagnosis or medical purposes.\nIt supports communication with care for\nJapanese culture and school settings."
        }
        ABOUT_LAYERS_TITLE => "Three Layers",
        ABOUT_LAYER_LANGUAGE => "Language Layer: tone and choice of words",
        ABOUT_LAYER_VISUAL => "Visual Layer: metaphors of dots, waves and paths",
        ABOUT_LAYER_INTERACTION => "Interaction Layer: the flow of conversation",
        SCENARIO_KEEP_IN_MIND => "Keep in mind",
        SCENARIO_PHRASING => "Phrasing direction",
        SCENARIO_VISUAL => "Suggested metaphor",
        SETTINGS_TITLE => "Settings",
        SETTINGS_DEFAULT_LANGUAGE => "Startup language",
        SETTINGS_LANGUAGE_AUTO => "Follow system",
        SETTINGS_UI_SCALE => "UI scale",
        SETTINGS_FONT => "Japanese font",
        SETTINGS_PICK_FONT => "Choose font…",
        SETTINGS_SAVE => "Save settings",
        SETTINGS_SAVED => "Saved.",
        SETTINGS_SAVE_DISABLED => "config.toml could not be read, so settings are not saved. Fix the file and restart.",
        FONT_MISSING => "No Japanese font found. Choose a font file in settings.",
        _ => return None,
    })
}

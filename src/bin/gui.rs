#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use rfd::FileDialog;
use std::{fs, path::Path};
use neurodiversity_toolkit::{
    catalog::{Catalog, CatalogError, Resolved},
    config,
    i18n::{self, keys, Language, Translator},
    session::Session,
    view::{self, chrome_text, ItemMeta, Page, SectionView},
};

/// 차분한 저자극 테마 색상.
const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(0xFA, 0xFA, 0xFA);
const CARD_BG: egui::Color32 = egui::Color32::WHITE;
const CONTENT_MAX_WIDTH: f32 = 720.0;

#[derive(Debug, Parser)]
#[command(name = "neurodiversity_toolkit", version, about)]
struct Args {
    /// 시작 언어: auto | ja | en
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    // 설정 파일이 깨져 있어도 창은 연다. 대신 그 파일을 기본값으로 덮어쓰지 않는다.
    let loaded = config::load_or_fallback();
    neurodiversity_toolkit::app::init_logging(&loaded.config);
    if let Some(e) = &loaded.error {
        log::warn!("{e}; using default settings, saving is disabled");
    }
    let can_save = loaded.can_save();
    let app_cfg = loaded.config;
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));

    // 검증에 실패한 카탈로그로는 창을 열지 않는다.
    let catalog = match Catalog::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Neurodiversity Communication Toolkit",
        options,
        Box::new(move |cc| {
            let font = setup_fonts(&cc.egui_ctx, app_cfg.font_path.as_deref());
            if let Err(e) = &font {
                log::warn!("{e}");
            }
            cc.egui_ctx.set_pixels_per_point(config::clamp_ui_scale(app_cfg.ui_scale));
            Box::new(GuiApp::new(app_cfg, catalog, lang, font.is_ok(), can_save))
        }),
    )
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
/// 기본 라틴 폰트 뒤에 붙여 일본어 글리프의 대체 폰트로 쓴다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 일본어를 표시할 폰트를 찾는다.
/// 1) 설정의 font_path
/// 2) assets/fonts/ 아래 프로젝트 폰트
/// 3) Windows/macOS/Linux 시스템 폰트
/// 모두 실패하면 기본 폰트를 유지하고 Err로 사용자 지정을 유도한다.
fn setup_fonts(ctx: &egui::Context, configured: Option<&str>) -> Result<String, String> {
    if let Some(path) = configured {
        match load_custom_font(ctx, path) {
            Ok(()) => return Ok(path.to_string()),
            Err(e) => log::warn!("configured font unusable: {e}"),
        }
    }

    let mut candidates: Vec<String> = vec![
        "assets/fonts/NotoSansJP-Regular.ttf".into(),
        "assets/fonts/NotoSansCJKjp-Regular.otf".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["YuGothM.ttc", "meiryo.ttc", "msgothic.ttc"] {
            candidates.push(fonts.join(cand).to_string_lossy().into_owned());
        }
    }
    candidates.extend(
        [
            "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
            "/System/Library/Fonts/Hiragino Sans GB.ttc",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/takao-gothic/TakaoGothic.ttf",
        ]
        .map(String::from),
    );

    for cand in candidates {
        let p = Path::new(&cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "japanese_font");
            log::debug!("using font {cand}");
            return Ok(cand);
        }
    }
    Err("Japanese font not found. Please set a font (.ttf/.ttc/.otf) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 흰 배경, 둥근 모서리, 옅은 그림자의 카드.
fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(CARD_BG)
        .rounding(egui::Rounding::same(16.0))
        .inner_margin(egui::Margin::same(19.0))
        .outer_margin(egui::Margin::symmetric(0.0, 8.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 6.0,
            spread: 0.0,
            color: egui::Color32::from_black_alpha(13),
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// 주 텍스트와 그 아래 작은 보조 텍스트. 둘이 같으면 보조 텍스트는 생략한다.
fn bilingual_text(ui: &mut egui::Ui, text: Resolved<'_>) {
    ui.add(egui::Label::new(text.primary).wrap(true));
    secondary_text(ui, text);
}

fn secondary_text(ui: &mut egui::Ui, text: Resolved<'_>) {
    if text.secondary != text.primary {
        ui.add(egui::Label::new(egui::RichText::new(text.secondary).small().weak()).wrap(true));
    }
}

fn bilingual_card(ui: &mut egui::Ui, text: Resolved<'_>) {
    card(ui, |ui| bilingual_text(ui, text));
}

struct GuiApp {
    config: config::Config,
    catalog: Catalog,
    session: Session,
    page: Page,
    ui_scale: f32,
    /// 설정 파일을 정상적으로 읽었을 때만 true.
    can_save: bool,
    show_settings_modal: bool,
    font_missing: bool,
    lang_input: String,
    font_path_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(
        config: config::Config,
        catalog: Catalog,
        lang: Language,
        font_loaded: bool,
        can_save: bool,
    ) -> Self {
        log::info!("GUI language resolved: {}, font_loaded={font_loaded}", lang.as_code());
        let lang_input = config.language.clone();
        let font_path_input = config.font_path.clone().unwrap_or_default();
        let ui_scale = config::clamp_ui_scale(config.ui_scale);
        Self {
            config,
            catalog,
            session: Session::new(lang),
            page: Page::Home,
            ui_scale,
            can_save,
            show_settings_modal: false,
            font_missing: !font_loaded,
            lang_input,
            font_path_input,
            settings_status: None,
        }
    }

    fn tr(&self) -> Translator {
        self.session.translator()
    }

    /// 사이드 메뉴: 언어 선택 + 페이지 목록.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr();
        ui.style_mut().wrap = Some(false);
        ui.label(tr.t(keys::NAV_LANGUAGE));
        let mut lang = self.session.language();
        for option in Language::ALL {
            ui.radio_value(&mut lang, option, option.native_name());
        }
        if lang != self.session.language() {
            self.session.set_language(lang);
            log::debug!("GUI language switched to {}", lang.as_code());
        }
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.heading(tr.t(keys::NAV_HEADING));
            ui.add_space(8.0);
        });
        for page in Page::ALL {
            let selected = self.page == page;
            let button = egui::Button::new(tr.t(page.label_key()))
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.page = page;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_home(&mut self, ui: &mut egui::Ui) {
        let lang = self.session.language();
        let tr = self.tr();
        ui.heading(tr.t(keys::APP_TITLE));
        bilingual_card(ui, chrome_text(keys::HOME_INTRO, lang));
        ui.columns(3, |cols| {
            for (col, key) in cols.iter_mut().zip([
                keys::HOME_TALK_PARENTS,
                keys::HOME_TALK_STUDENTS,
                keys::HOME_TALK_COLLEAGUES,
            ]) {
                let button = egui::Button::new(tr.t(key)).min_size(egui::vec2(col.available_width(), 36.0));
                if col.add(button).clicked() {
                    self.page = Page::Phrases;
                }
            }
        });
        bilingual_card(ui, chrome_text(keys::HOME_TIP, lang));
    }

    fn ui_about(&mut self, ui: &mut egui::Ui) {
        let lang = self.session.language();
        let tr = self.tr();
        ui.heading(tr.t(keys::MENU_ABOUT));
        bilingual_card(ui, chrome_text(keys::ABOUT_DISCLAIMER, lang));
        ui.strong(tr.t(keys::ABOUT_LAYERS_TITLE));
        for key in [
            keys::ABOUT_LAYER_LANGUAGE,
            keys::ABOUT_LAYER_VISUAL,
            keys::ABOUT_LAYER_INTERACTION,
        ] {
            ui.label(format!("• {}", tr.t(key)));
        }
    }

    /// 콘텐츠 섹션. 조회 실패 시 부분 화면 대신 안내 문구만 보인다.
    fn ui_section(&self, ui: &mut egui::Ui, page: Page) {
        let tr = self.tr();
        let Some(group) = page.group() else {
            return;
        };
        match view::section_view(&self.catalog, group, self.session.language()) {
            Ok(section) => section_ui(ui, &section, &tr),
            Err(e) => {
                if let CatalogError::NotFound(what) = &e {
                    log::warn!("section unavailable: {what}");
                } else {
                    log::error!("{e}");
                }
                ui.heading(tr.t(page.label_key()));
                ui.label(tr.t(keys::NOT_AVAILABLE));
            }
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr();
        let mut open = self.show_settings_modal;
        egui::Window::new(tr.t(keys::SETTINGS_TITLE))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::SETTINGS_DEFAULT_LANGUAGE));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), tr.t(keys::SETTINGS_LANGUAGE_AUTO));
                        ui.selectable_value(&mut self.lang_input, "ja".into(), "日本語");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                    });
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_UI_SCALE));
                let scale_slider = egui::Slider::new(&mut self.ui_scale, config::UI_SCALE_RANGE).suffix(" x");
                if ui.add(scale_slider).changed() {
                    ctx.set_pixels_per_point(self.ui_scale);
                }
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_FONT));
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.font_path_input);
                    if ui.button(tr.t(keys::SETTINGS_PICK_FONT)).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            self.font_path_input = path.display().to_string();
                        }
                    }
                });
                if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
                    self.save_settings(ctx, &tr);
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    fn save_settings(&mut self, ctx: &egui::Context, tr: &Translator) {
        if !self.can_save {
            self.settings_status = Some(tr.t(keys::SETTINGS_SAVE_DISABLED).to_string());
            return;
        }
        let font_path = self.font_path_input.trim();
        if font_path.is_empty() {
            self.config.font_path = None;
        } else {
            match load_custom_font(ctx, font_path) {
                Ok(()) => {
                    self.config.font_path = Some(font_path.to_string());
                    self.font_missing = false;
                }
                Err(e) => {
                    self.settings_status = Some(e);
                    return;
                }
            }
        }
        self.config.language = self.lang_input.clone();
        self.config.ui_scale = self.ui_scale;
        self.settings_status = Some(match self.config.save() {
            Ok(()) => tr.t(keys::SETTINGS_SAVED).to_string(),
            Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        });
    }
}

fn section_ui(ui: &mut egui::Ui, section: &SectionView<'_>, tr: &Translator) {
    ui.heading(section.title.primary);
    secondary_text(ui, section.title);
    for block in section.by_category() {
        if let Some(category) = block.category {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(category.primary).strong().size(18.0));
        }
        for item in block.items {
            match &item.meta {
                ItemMeta::Narrative { title } => {
                    if let Some(title) = title {
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new(title.primary).strong().size(18.0));
                    }
                    bilingual_card(ui, item.text);
                }
                ItemMeta::Scenario {
                    keep_in_mind,
                    phrasing_direction,
                    visual,
                } => {
                    card(ui, |ui| {
                        ui.label(egui::RichText::new(item.text.primary).strong());
                        secondary_text(ui, item.text);
                        ui.add_space(6.0);
                        for (label, value) in [
                            (keys::SCENARIO_KEEP_IN_MIND, keep_in_mind),
                            (keys::SCENARIO_PHRASING, phrasing_direction),
                        ] {
                            if let Some(value) = value {
                                ui.add(
                                    egui::Label::new(format!("{}: {}", tr.t(label), value.primary))
                                        .wrap(true),
                                );
                                secondary_text(ui, *value);
                            }
                        }
                        if let Some(v) = visual {
                            let name = v.title.map(|t| t.primary).unwrap_or(v.key);
                            ui.add_space(4.0);
                            ui.label(format!("{}: {}", tr.t(keys::SCENARIO_VISUAL), name));
                            ui.indent(v.key, |ui| bilingual_text(ui, v.text));
                        }
                    });
                }
                ItemMeta::Phrase { .. } => bilingual_card(ui, item.text),
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.panel_fill = PAGE_BG;
        style.visuals.window_fill = PAGE_BG;
        ctx.set_style(style);

        let tr = self.tr();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(tr.t(keys::SETTINGS_TITLE)).clicked() {
                    self.show_settings_modal = true;
                }
            });
            if self.font_missing {
                ui.colored_label(ui.visuals().warn_fg_color, tr.t(keys::FONT_MISSING));
            }
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(160.0)
            .default_width(220.0)
            .max_width(360.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(width);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            match self.page {
                                Page::Home => self.ui_home(ui),
                                Page::About => self.ui_about(ui),
                                page => self.ui_section(ui, page),
                            }
                        });
                    });
                });
        });
    }
}

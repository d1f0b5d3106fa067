use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// GUI 배율 허용 범위. 설정 화면 슬라이더와 같은 범위다.
pub const UI_SCALE_RANGE: RangeInclusive<f32> = 0.8..=1.6;

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 언어: "auto" | "ja" | "en"
    pub language: String,
    /// GUI에서 사용할 일본어 폰트 경로 (.ttf/.ttc/.otf)
    pub font_path: Option<String>,
    /// GUI 배율
    pub ui_scale: f32,
    /// env_logger 기본 필터. RUST_LOG가 있으면 그쪽이 우선한다.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            font_path: None,
            ui_scale: 1.0,
            log_level: "info".into(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(CONFIG_FILE))
}

/// 지정 경로에서 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 써 둔다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        let scale = clamp_ui_scale(cfg.ui_scale);
        if scale != cfg.ui_scale {
            log::warn!("ui_scale {} out of range, using {scale}", cfg.ui_scale);
            cfg.ui_scale = scale;
        }
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        log::info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

/// 손으로 고친 값이 범위를 벗어나면 가장 가까운 끝값으로, 숫자가 아니면 기본값으로 맞춘다.
pub fn clamp_ui_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(*UI_SCALE_RANGE.start(), *UI_SCALE_RANGE.end())
    } else {
        Config::default().ui_scale
    }
}

/// 읽기에 실패해도 실행은 계속하는 쪽(GUI)을 위한 로드 결과.
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    /// 읽지 못한 원인. 있으면 `config`는 기본값이다.
    pub error: Option<ConfigError>,
}

impl Loaded {
    /// 깨진 파일을 기본값으로 덮어쓰지 않도록, 정상 로드된 경우에만 저장을 허용한다.
    pub fn can_save(&self) -> bool {
        self.error.is_none()
    }
}

pub fn load_or_fallback() -> Loaded {
    load_or_fallback_from(Path::new(CONFIG_FILE))
}

/// 로드에 실패하면 기본 설정으로 대신하고 원인을 함께 돌려준다.
pub fn load_or_fallback_from(path: &Path) -> Loaded {
    match load_or_default_from(path) {
        Ok(config) => Loaded { config, error: None },
        Err(e) => Loaded {
            config: Config::default(),
            error: Some(e),
        },
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

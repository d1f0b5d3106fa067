use std::io;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::i18n::keys;
use crate::session::Session;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// 콘텐츠 정의 오류 또는 없는 섹션 요청
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

/// env_logger를 초기화한다. RUST_LOG가 없으면 설정의 log_level을 쓴다.
pub fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    // 테스트 등에서 두 번 호출되어도 무시한다.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(catalog: &Catalog, session: &mut Session) -> Result<(), AppError> {
    let stdout = io::stdout();
    loop {
        let tr = session.translator();
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Page(page) => {
                let mut out = stdout.lock();
                ui_cli::render_page(&mut out, catalog, page, session.language())?;
            }
            MenuChoice::ToggleLanguage => {
                let lang = session.toggle();
                println!("{} {}", session.translator().t(keys::LANGUAGE_SWITCHED), lang);
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

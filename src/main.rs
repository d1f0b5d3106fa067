use std::io;
use std::process::ExitCode;

use clap::Parser;
use neurodiversity_toolkit::{app, catalog::Catalog, config, i18n, session::Session, ui_cli, view::Page};

/// 터미널용 커뮤니케이션 툴킷.
#[derive(Debug, Parser)]
#[command(name = "neurodiversity_toolkit_cli", version, about)]
struct Args {
    /// 표시 언어: auto | ja | en
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 한 섹션만 출력하고 종료: home | phrases | visuals | scenarios | about
    #[arg(short, long)]
    section: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정과 카탈로그를 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let args = Args::parse();
    match try_run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args) -> Result<(), app::AppError> {
    let cfg = config::load_or_default()?;
    app::init_logging(&cfg);
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    log::debug!("CLI language resolved: {}", lang.as_code());

    // 스키마 위반이면 어떤 화면도 그리기 전에 여기서 끝난다.
    let catalog = Catalog::load()?;
    let mut session = Session::new(lang);

    if let Some(section) = args.section {
        let page: Page = section.parse()?;
        let mut out = io::stdout().lock();
        ui_cli::render_page(&mut out, &catalog, page, session.language())?;
        return Ok(());
    }
    app::run(&catalog, &mut session)
}

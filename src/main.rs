use clap::Parser;
use frontdesk::Site;
use frontdesk::core::config::{CliOverrides, load_config, resolve};
use frontdesk::core::site::SiteContent;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frontdesk", about = "Terminal front desk for a small organisation's site")]
struct Args {
    /// Site content file (TOML). The bundled site is used when omitted.
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Page to open first, like visiting the site with `#page`
    #[arg(short, long)]
    page: Option<String>,

    /// Log level for frontdesk.log (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to frontdesk.log in current directory.
    // It starts at the CLI/env level so config loading is logged, and is
    // narrowed to the resolved level afterwards.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("frontdesk.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    let early_level = args
        .log_level
        .clone()
        .or_else(|| std::env::var("FRONTDESK_LOG_LEVEL").ok());
    log::set_max_level(parse_level(early_level.as_deref().unwrap_or("debug")));

    let file_config = load_config().map_err(|e| {
        log::error!("Failed to load config: {}", e);
        Error::new(ErrorKind::InvalidData, e)
    })?;
    let config = resolve(
        &file_config,
        &CliOverrides {
            content_file: args.content,
            start_page: args.page,
            log_level: args.log_level,
        },
    );
    log::set_max_level(parse_level(&config.log_level));

    log::info!(
        "Frontdesk starting up (content: {}, start page: {:?})",
        config
            .content_file
            .as_ref()
            .map_or("bundled".to_string(), |p| p.display().to_string()),
        config.site.start_page
    );

    let content = match &config.content_file {
        Some(path) => SiteContent::load(path),
        None => SiteContent::bundled(),
    }
    .map_err(|e| {
        log::error!("Failed to load site content: {}", e);
        Error::new(ErrorKind::InvalidData, e)
    })?;

    frontdesk::tui::run(Site::new(content, &config.site))
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Debug)
}

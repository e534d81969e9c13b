use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::server::{self, Mode, ServerConfig};

fn print_banner() {
    const BANNER: &str = r#"
        __
  ___ _/ /__ ___  ___  ________
 / _ `/  '_// _ \/ _ \/ __(_-<
 \_,_/_/\_\/ .__/\___/_/ /___/
          /_/
    jokes, motivations & proverbs
    "#;
    print!("{}", BANNER.bold());
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "enabled"
    } else {
        "disabled"
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    server: ServerConfig,
    log: String,
    no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let defaults = ServerConfig::default();

    let api_route_raw = args
        .api_route
        .or(cfg.api_route)
        .unwrap_or_else(|| defaults.api_route.clone());
    let api_route = crate::utils::normalize_base_path(&api_route_raw)
        .map_err(|e| format!("invalid api_route '{api_route_raw}': {e}"))?;

    let item_limit = args
        .item_limit
        .or(cfg.item_limit)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    if item_limit == 0 {
        return Err("invalid item_limit, expected positive integer".to_string());
    }

    let port = args.port.or(cfg.port).unwrap_or(defaults.port);
    if port == 0 {
        return Err("invalid port, expected 1-65535".to_string());
    }

    let mode = args
        .mode
        .or(cfg.mode)
        .map(|m| Mode::parse(&m))
        .unwrap_or(defaults.mode);

    let frontend_dir = args
        .frontend_dir
        .or(cfg.frontend_dir)
        .map(|p| config::expand_tilde(&p))
        .unwrap_or(defaults.frontend_dir);
    let data_dir = args
        .data_dir
        .or(cfg.data_dir)
        .map(|p| config::expand_tilde(&p))
        .unwrap_or(defaults.data_dir);

    let server = ServerConfig {
        host: args.host.or(cfg.host).unwrap_or(defaults.host),
        port,
        api_route,
        item_limit,
        enable_frontend: args
            .enable_frontend
            .or(cfg.enable_frontend)
            .unwrap_or(defaults.enable_frontend),
        frontend_dir,
        data_dir,
        mode,
    };

    let log = match args.verbose {
        0 => args.log.or(cfg.log).unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    Ok(RunConfig {
        server,
        log,
        no_color: args.no_color || cfg.no_color.unwrap_or(false),
    })
}

fn init_tracing(filter: &str, no_color: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(!no_color)
        .try_init();
}

fn print_summary(run: &RunConfig) {
    let server = &run.server;
    format_kv_line("Listen", &format!("{}:{}", server.host, server.port));
    format_kv_line("API", &server.api_route);
    format_kv_line("Page size", &server.item_limit.to_string());
    format_kv_line("Data", &server.data_dir.display().to_string());
    let frontend = if server.enable_frontend {
        format!("{} ({})", format_bool(true), server.frontend_dir.display())
    } else {
        format_bool(false).to_string()
    };
    format_kv_line("Frontend", &frontend);
    let mode = match server.mode {
        Mode::Production => "production (HTTPS enforced)".green(),
        Mode::Development => "development".yellow(),
    };
    format_kv_line("Mode", &mode.to_string());
    println!();
}

fn resolve_config(args: &CliArgs) -> Result<ConfigFile, String> {
    match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false),
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true),
            None => Ok(ConfigFile::default()),
        },
    }
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let cfg = resolve_config(&args)?;
    let run = build_run_config(args, cfg)?;

    if run.no_color {
        colored::control::set_override(false);
    }
    init_tracing(&run.log, run.no_color);
    print_banner();
    print_summary(&run);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(server::serve(run.server))
        .map_err(|e| e.to_string())
}

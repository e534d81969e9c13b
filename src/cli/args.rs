use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "akpors",
    version,
    about = "jokes, motivations and proverbs over HTTP",
    long_about = "Akpors serves paginated and single-item access to jokes, motivations and proverbs as JSON, and can serve the bundled web frontend.\n\nExamples:\n  akpors\n  akpors --port 8080 --item-limit 20\n  akpors --mode development --enable-frontend --frontend-dir ./frontend/dist\n  akpors --config ~/.akpors/config.yml\n\nTip: every server setting can also come from the environment (PORT, CONFIG_API_ROUTE, NODE_ENV, ...)."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v debug, -vv trace)."
    )]
    pub verbose: u8,

    #[arg(
        long = "log",
        value_name = "FILTER",
        help_heading = "Output",
        help = "Log filter directive (e.g. info, akpors=debug). RUST_LOG wins when set."
    )]
    pub log: Option<String>,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.akpors/config.yml when present)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'd',
        long = "data-dir",
        env = "DATA_DIR",
        value_name = "DIR",
        help_heading = "Input",
        help = "Directory holding the pidgin-*.json fixtures."
    )]
    pub data_dir: Option<String>,

    #[arg(
        short = 'p',
        long = "port",
        env = "PORT",
        value_name = "PORT",
        help_heading = "Server",
        help = "Port to listen on."
    )]
    pub port: Option<u16>,

    #[arg(
        long = "host",
        env = "HOST",
        value_name = "HOST",
        help_heading = "Server",
        help = "Address to bind."
    )]
    pub host: Option<String>,

    #[arg(
        short = 'a',
        long = "api-route",
        env = "CONFIG_API_ROUTE",
        value_name = "PATH",
        help_heading = "Server",
        help = "Base path the JSON API is mounted under."
    )]
    pub api_route: Option<String>,

    #[arg(
        short = 'l',
        long = "item-limit",
        env = "CONFIG_RESPONSE_ITEM_LIMIT",
        value_name = "N",
        help_heading = "Server",
        help = "Records returned per list page."
    )]
    pub item_limit: Option<usize>,

    #[arg(
        short = 'm',
        long = "mode",
        env = "NODE_ENV",
        value_name = "MODE",
        help_heading = "Server",
        help = "production or development. Production redirects plain HTTP to HTTPS."
    )]
    pub mode: Option<String>,

    #[arg(
        short = 'f',
        long = "enable-frontend",
        env = "CONFIG_ENABLE_FRONTEND",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new(),
        help_heading = "Frontend",
        help = "Serve the bundled static frontend."
    )]
    pub enable_frontend: Option<bool>,

    #[arg(
        long = "frontend-dir",
        env = "FRONTEND_DIR",
        value_name = "DIR",
        help_heading = "Frontend",
        help = "Directory of the built frontend (must contain 404.html)."
    )]
    pub frontend_dir: Option<String>,
}

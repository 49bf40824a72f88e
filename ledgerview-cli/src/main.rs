use clap::Parser;
use ledgerview::{ApiClient, Config, DashboardView, ReportsView, Route};
use std::path::PathBuf;

mod render;

#[derive(clap::Parser, Debug)]
struct Args {
    /// Page to open (dashboard, reports); anything else opens the dashboard
    #[clap(default_value = "")]
    route: String,

    /// Config file (defaults to $LEDGERVIEW_CONFIG or /etc/ledgerview/ledgerview.toml)
    #[clap(long)]
    config: Option<PathBuf>,

    /// Base URL of the API, overriding the config file
    #[clap(long)]
    url: Option<String>,

    /// Send every request to the API instead of answering from mock rules
    #[clap(long)]
    live: bool,

    /// YAML file with mock rules replacing the built-in ones
    #[clap(long, conflicts_with = "live")]
    mocks: Option<PathBuf>,

    /// Print the view state as JSON
    #[clap(long)]
    json: bool,

    /// Disable colorized output
    #[clap(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };
    if let Some(url) = args.url {
        cfg.api.base_url = url;
    }
    if args.live {
        cfg.mock.enabled = false;
    }
    if let Some(path) = args.mocks {
        cfg.mock.enabled = true;
        cfg.mock.rules_path = Some(path);
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cfg.logging.level.as_str()),
    )
    .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let api = ApiClient::from_config(&cfg)?;

    match Route::resolve(&args.route) {
        Route::Dashboard => {
            let mut view = DashboardView::new(api);
            view.load().await;
            if args.json {
                render::print_json(&serde_json::json!({
                    "route": Route::Dashboard.path(),
                    "stats": view.stats(),
                    "transactions": view.transactions(),
                }))?;
            } else {
                render::dashboard(&view);
            }
        }
        Route::Reports => {
            let mut view = ReportsView::new(api);
            view.load().await;
            if args.json {
                render::print_json(&serde_json::json!({
                    "route": Route::Reports.path(),
                    "reports": view.reports(),
                }))?;
            } else {
                render::reports(&view);
            }
        }
    }

    Ok(())
}

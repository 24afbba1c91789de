//! CarMarket terminal client.
//!
//! Renders the current page as text and reads one command per line. Requests run in
//! the background; the page is redrawn as their results arrive.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use carmarket::infra::api::{HttpMarketplaceApi, InMemoryMarketplace, MarketplaceApi};
use carmarket::infra::app_config::{AppConfig, load_config};
use carmarket::infra::lookup::{HttpVehicleCatalog, StaticCatalog, VehicleCatalog};
use carmarket::infra::storage::LocalStorage;
use carmarket::ui::app::state::ToastVariant;
use carmarket::ui::app::{Event, HELP, Input, MarketApp, parse_command};
use carmarket::ui::views;

#[derive(Parser, Debug)]
#[command(name = "carmarket")]
#[command(version)]
#[command(about = "Browse, sell and track cars from the terminal", long_about = None)]
struct Args {
    /// Backend REST API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Vehicle make/model lookup base URL
    #[arg(long)]
    lookup_url: Option<String>,

    /// Base URL listing image paths are resolved against (defaults to the API URL)
    #[arg(long)]
    image_url: Option<String>,

    /// Run against a built-in demo backend (demo@carmarket.ma / demo)
    #[arg(long)]
    offline: bool,

    /// Page to open first
    #[arg(default_value = "/")]
    path: String,
}

impl Args {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(url) = &self.lookup_url {
            config.lookup_base_url = url.clone();
        }
        if let Some(url) = &self.image_url {
            config.image_base_url = Some(url.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("carmarket=info"))
        .init();

    let args = Args::parse();
    let config = args.apply(
        load_config()
            .context("Failed to load configuration")?
            .with_env_overrides(),
    );

    let (api, catalog, storage) = services(args.offline, &config);
    let mut app = MarketApp::new(api, catalog, storage, config.image_base_url());
    app.open(&args.path);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_screen(&mut app);
    prompt()?;
    loop {
        let redraw = match app.next_event(&mut lines).await.context("Failed to read input")? {
            Event::Input(None) => break,
            Event::Completed => true,
            Event::Input(Some(line)) => match parse_command(&line, &app.state.ui.route) {
                Ok(Input::Nothing) => false,
                Ok(Input::Help) => {
                    println!("{}", HELP);
                    false
                }
                Ok(Input::Actions(actions)) => {
                    for action in actions {
                        app.dispatch(action);
                    }
                    true
                }
                Err(err) => {
                    let palette = app.state.ui.theme.palette();
                    println!("{}", palette.paint(palette.danger, &err.to_string()));
                    false
                }
            },
        };
        if app.state.ui.should_quit {
            break;
        }
        if redraw {
            print_screen(&mut app);
        }
        prompt()?;
    }
    Ok(())
}

type Services = (
    Arc<dyn MarketplaceApi>,
    Arc<dyn VehicleCatalog>,
    Arc<LocalStorage>,
);

fn services(offline: bool, config: &AppConfig) -> Services {
    if offline {
        log::info!("offline mode, using the demo backend");
        let api: Arc<dyn MarketplaceApi> = Arc::new(InMemoryMarketplace::with_demo_data());
        let catalog: Arc<dyn VehicleCatalog> = Arc::new(StaticCatalog::demo());
        return (api, catalog, Arc::new(LocalStorage::in_memory()));
    }
    log::info!("backend at {}", config.api_base_url);
    let api: Arc<dyn MarketplaceApi> = Arc::new(HttpMarketplaceApi::new(&config.api_base_url));
    let catalog: Arc<dyn VehicleCatalog> =
        Arc::new(HttpVehicleCatalog::new(&config.lookup_base_url));
    (api, catalog, Arc::new(LocalStorage::open_default()))
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush().context("Failed to write to stdout")
}

/// Print the page, then the toasts raised since the last screen.
fn print_screen(app: &mut MarketApp) {
    let palette = app.state.ui.theme.palette();
    println!();
    let screen = views::render(&app.state, &app.image_base_url);
    let mut lines = screen.lines();
    if let Some(navbar) = lines.next() {
        println!("{}", palette.paint(palette.accent, navbar));
    }
    for line in lines {
        if line.starts_with("!! ") {
            println!("{}", palette.paint(palette.danger, line));
        } else {
            println!("{}", line);
        }
    }
    for toast in std::mem::take(&mut app.state.ui.toasts) {
        let color = match toast.variant {
            ToastVariant::Default => palette.success,
            ToastVariant::Destructive => palette.danger,
        };
        println!(
            "{}",
            palette.paint(color, &format!("* {}: {}", toast.title, toast.description))
        );
    }
    println!("{}", palette.paint(palette.muted, "Type 'help' for commands."));
}

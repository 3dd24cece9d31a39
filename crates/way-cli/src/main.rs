use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("way error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = way_config::WayConfig::load_with_dotenv()?;
    let mut ctx = context::AppContext::init(config);
    let format = cli.format;

    match &cli.command {
        cli::Commands::List(args) => commands::list::handle(args, &mut ctx, format).await,
        cli::Commands::Show(args) => commands::show::handle(args, &mut ctx, format).await,
        cli::Commands::View(args) => commands::view::handle(args, &mut ctx, format).await,
        cli::Commands::Analytics(args) => {
            commands::analytics::handle(args, &mut ctx, format).await
        }
        cli::Commands::Wireframes(args) => {
            commands::wireframes::handle(args, &mut ctx, format).await
        }
        cli::Commands::Export(args) => commands::export::handle(args, &mut ctx, format).await,
        cli::Commands::Generate(args) => commands::generate::handle(args, &mut ctx, format).await,
        cli::Commands::SetStatus(args) => {
            commands::set_status::handle(args, &mut ctx, format).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WAYPOINT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use v6ready_api::AppState;
use v6ready_domain::{rank, CliOverrides, ScanMode};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "v6ready")]
#[command(version)]
#[command(about = "IPv6 readiness checker for DNS domains")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Print the full per-category address listing for each domain
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Batch mode: read domains from stdin; 4 = IPv4-only filter,
    /// 6 = IPv6-only filter, 1 = errors only, anything else = counts
    #[arg(long, value_name = "MODE")]
    check: Option<i64>,

    /// Number of concurrent workers in batch mode
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Domains to check interactively
    domains: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind.clone(),
        workers: cli.jobs,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config);

    let services = di::Services::new(&config)?;

    // Batch mode: classify domains piped through stdin.
    if let Some(mode) = cli.check {
        let mode = ScanMode::from_flag(mode);
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        services.scan_batch.execute(stdin, mode).await?;
        return Ok(());
    }

    // Interactive mode: rate each domain given on the command line.
    if !cli.domains.is_empty() {
        for name in &cli.domains {
            match services.resolve_domain.execute(name).await {
                Ok(record) => {
                    if cli.verbose {
                        print!("{record}");
                    }
                    println!("{} : {}", record.domain, rank(Some(&record)));
                }
                Err(e) => println!("{name}: error {e}"),
            }
        }
        return Ok(());
    }

    // No arguments: serve the web front end.
    info!("Starting v6ready v{}", env!("CARGO_PKG_VERSION"));
    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
    let state = AppState {
        resolve_domain: services.resolve_domain.clone(),
    };
    server::start_web_server(web_addr, state).await?;

    Ok(())
}

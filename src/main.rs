//! cueclub - Pool-table rental dashboard

use chrono::Utc;
use clap::Parser;
use cueclub::{
    billing::BillCalculator,
    cli::{Cli, Command, parse_table, parse_time_arg},
    client::HttpSessionClient,
    dashboard::Dashboard,
    error::Result,
    output::get_formatter,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Quiet by default; --verbose turns on info output and honours RUST_LOG
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cueclub=info"))
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !is_terminal::is_terminal(std::io::stdout()) {
        colored::control::set_override(false);
    }

    let config = cli.club_config()?;
    info!(
        "Using timezone {}, hourly rate {:.2}",
        config.timezone.display_name(),
        config.rate.hourly_rate
    );
    let formatter = get_formatter(cli.json);

    let client = HttpSessionClient::from_config(&config);
    let dashboard = Dashboard::new(client, config);
    let config = dashboard.config();
    let tz = &config.timezone;

    match cli.command {
        None | Some(Command::Tables) => {
            let board = dashboard.board().await?;
            println!("{}", formatter.format_board(&board, tz));
        }

        Some(Command::Start(args)) => {
            let table = parse_table(args.table)?;
            if args.yes {
                dashboard.start_game(table, &args.player).await?;
                eprintln!("Game started for Table No: {table}");
            } else {
                dashboard.check_start(table, &args.player).await?;
                eprintln!(
                    "Start a game for Table {table}?\nPlayer: {}\nRun again with --yes to confirm.",
                    args.player.trim()
                );
            }
        }

        Some(Command::End(args)) => {
            let table = parse_table(args.table)?;
            let receipt = dashboard.prepare_end(table, Utc::now()).await?;
            println!("{}", formatter.format_receipt(&receipt, tz));

            if args.yes {
                dashboard.finalize_end(&receipt).await?;
                eprintln!("Game successfully ended.");
            } else {
                eprintln!("Run again with --yes to record this bill.");
            }
        }

        Some(Command::History) => {
            let sessions = dashboard.history().await?;
            println!("{}", formatter.format_history(&sessions, tz));
        }

        Some(Command::Earnings) => {
            let summary = dashboard.earnings().await?;
            println!("{}", formatter.format_earnings(&summary));
        }

        Some(Command::Bill(args)) => {
            // Offline: no request is sent
            let start = parse_time_arg(&args.start, tz)?;
            let end = parse_time_arg(&args.end, tz)?;
            let breakdown = BillCalculator::compute_bill(Some(start), Some(end), &config.rate);
            println!("{}", formatter.format_bill(&breakdown));
        }
    }

    Ok(())
}

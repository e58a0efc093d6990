use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;

use cinema_tickets::{
    gateways::blackhole::{BlackholePaymentService, BlackholeSeatReservationService},
    models::{order::AccountId, ticket::TicketRequest},
    TicketService, TicketServiceConfig,
};

#[derive(Parser, Debug)]
#[command(name = "cinema-tickets")]
#[command(about = "Validate, price and book a cinema ticket order", long_about = None)]
struct Cli {
    /// Account to charge; must be positive
    #[arg(allow_negative_numbers = true)]
    account_id: AccountId,

    /// Tickets as <category>=<count>, e.g. adult=2 child=1 infant=1
    requests: Vec<TicketRequest>,

    /// JSON file with max_tickets and prices
    #[arg(long, env = "CINEMA_TICKETS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => TicketServiceConfig::from_file(path)?,
        None => TicketServiceConfig::default(),
    };

    let service = TicketService::with_config(
        config,
        BlackholePaymentService::default(),
        BlackholeSeatReservationService::default(),
    );
    service.purchase(cli.account_id, cli.requests).await?;
    println!("Purchase completed for account {}", cli.account_id);
    Ok(())
}

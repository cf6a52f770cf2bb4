//! sdgraph command-line interface
//!
//! Runs the broadcast queries against the configured backend and prints JSON.

use clap::{Parser, Subcommand};
use sdgraph::{
    config::Settings,
    context::AppContext,
    core::Identifier,
    model::{BroadcastDay, BroadcastServiceStub},
    object_set::ObjectSetExt,
    queries, Error, Result,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "sdgraph")]
#[command(about = "Query schema.org broadcast graphs", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List broadcast services
    Services,
    /// Local day of the earliest broadcast of a service
    FirstDay { service: String },
    /// Local day of the latest broadcast of a service
    LastDay { service: String },
    /// Playlist of one local broadcast day
    Playlist {
        #[arg(long)]
        service: String,
        /// Day as YYYY-MM-DD in the service's time zone
        #[arg(long)]
        date: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let context = AppContext::from_settings(&cli.settings)?;
    let object_set = context.object_set();

    match cli.command {
        Command::Services => print(&queries::broadcast_services(object_set).await?),
        Command::FirstDay { service } => {
            let service = service_stub(&context, &service).await?;
            print(&queries::first_broadcast_day(object_set, &service).await?)
        }
        Command::LastDay { service } => {
            let service = service_stub(&context, &service).await?;
            print(&queries::last_broadcast_day(object_set, &service).await?)
        }
        Command::Playlist { service, date } => {
            let service = service_stub(&context, &service).await?;
            let day = BroadcastDay::parse(&date, service.broadcast_timezone.as_deref())?;
            print(&queries::playlist_for_day(object_set, &service, &day).await?)
        }
    }
}

async fn service_stub(context: &AppContext, id: &str) -> Result<BroadcastServiceStub> {
    let identifier = Identifier::parse(id)?;
    context
        .object_set()
        .fetch_stub::<BroadcastServiceStub>(&identifier)
        .await?
        .ok_or_else(|| Error::Config(format!("no broadcast service {}", identifier)))
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

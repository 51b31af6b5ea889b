//! # eventbook: command-line events page
//!
//! Composition root that wires the GraphQL gateway into the events page and
//! drives it from the command line.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialise `tracing` from the configured filter
//! - Construct the GraphQL gateway (adapter) and the event service
//! - Mount the events page and replay the requested interaction on it
//! - Print the resulting view
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eventbook_adapter_graphql_reqwest::GraphqlGateway;
use eventbook_app::page::{Action, EventsPage};
use eventbook_app::services::event_service::EventService;
use eventbook_domain::draft::DraftField;
use eventbook_domain::error::{EventBookError, NotFoundError};
use eventbook_domain::id::EventId;
use eventbook_domain::session::Session;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "eventbook", version, about = "Browse, publish and book events")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "eventbook.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List every event.
    List,
    /// Show the details of one event.
    Show { id: String },
    /// Book an event.
    Book { id: String },
    /// Publish a new event (requires a session token).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        /// Start time, e.g. `2024-01-01T10:00`.
        #[arg(long)]
        date: String,
        #[arg(long)]
        description: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let gateway = GraphqlGateway::new(&config.graphql)?;
    tracing::debug!(endpoint = gateway.endpoint(), "using GraphQL endpoint");
    let service = EventService::new(gateway);
    let session = config.session();
    let mut page = EventsPage::new(config.page_config());

    service.dispatch(&mut page, &session, Action::Mount).await;

    match cli.command {
        CliCommand::List => print!("{}", render::list_view(&page, &session)),
        CliCommand::Show { id } => {
            open_detail(&service, &mut page, &session, &id).await?;
            if let Some(event) = page.overlay().selected() {
                print!("{}", render::detail_view(event));
            }
            service.dispatch(&mut page, &session, Action::Cancel).await;
        }
        CliCommand::Book { id } => {
            open_detail(&service, &mut page, &session, &id).await?;
            service.dispatch(&mut page, &session, Action::Book).await;
            eprintln!("booking is not available yet");
        }
        CliCommand::Create {
            title,
            price,
            date,
            description,
        } => {
            if !EventsPage::can_create(&session) {
                tracing::warn!("no session token configured; the server will likely refuse");
            }
            service
                .dispatch(&mut page, &session, Action::StartCreate)
                .await;
            for (field, value) in [
                (DraftField::Title, title),
                (DraftField::Price, price),
                (DraftField::Date, date),
                (DraftField::Description, description),
            ] {
                service
                    .dispatch(&mut page, &session, Action::Edit(field, value))
                    .await;
            }
            service
                .dispatch(&mut page, &session, Action::ConfirmCreate)
                .await;
            print!("{}", render::list_view(&page, &session));
        }
    }

    service.dispatch(&mut page, &session, Action::Unmount).await;
    Ok(())
}

async fn open_detail(
    service: &EventService<GraphqlGateway>,
    page: &mut EventsPage,
    session: &Session,
    id: &str,
) -> Result<(), EventBookError> {
    let id: EventId = id.parse()?;
    service
        .dispatch(page, session, Action::Select(id.clone()))
        .await;
    if page.overlay().selected().is_none() {
        return Err(NotFoundError {
            entity: "Event",
            id: id.into_inner(),
        }
        .into());
    }
    Ok(())
}

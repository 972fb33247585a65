use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use urchintai_client::client::types::{
    DEFAULT_PROPERTY_ROOMS_ENDPOINT, DEFAULT_ROOM_DETAILS_ENDPOINT, DEFAULT_USER_AGENT,
};
use urchintai_client::models::{ListingKind, VacancyReport};
use urchintai_client::{
    ClientConfig, Endpoints, PropertyCode, RequestSender, RoomCode, Session, UrClient,
};

#[derive(Parser, Debug)]
#[command(
    name = "urchintai",
    about = "Check vacancy of UR Chintai properties and rooms",
    version
)]
struct Cli {
    /// Request timeout in seconds, 0 disables it
    #[arg(
        long,
        env = "URCHINTAI_TIMEOUT_SECS",
        default_value_t = 30,
        global = true
    )]
    timeout_secs: u64,

    #[arg(
        long,
        env = "URCHINTAI_USER_AGENT",
        default_value = DEFAULT_USER_AGENT,
        global = true
    )]
    user_agent: String,

    #[arg(
        long,
        env = "URCHINTAI_PROPERTY_ROOMS_ENDPOINT",
        default_value = DEFAULT_PROPERTY_ROOMS_ENDPOINT,
        global = true
    )]
    property_rooms_endpoint: String,

    #[arg(
        long,
        env = "URCHINTAI_ROOM_DETAILS_ENDPOINT",
        default_value = DEFAULT_ROOM_DETAILS_ENDPOINT,
        global = true
    )]
    room_details_endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a property has any vacant room
    Property(PropertyArgs),
    /// Check whether a single room is vacant
    Room(RoomArgs),
    /// Print the name of the property shown on a listing page
    Name {
        /// Property or room page URL
        url: String,
    },
}

#[derive(Args, Debug)]
struct PropertyArgs {
    /// Property page URL, ignored when a full code is given
    #[arg(long)]
    url: Option<String>,
    #[arg(long, requires_all = ["house_code", "kind"])]
    store_code: Option<String>,
    #[arg(long, requires_all = ["store_code", "kind"])]
    house_code: Option<String>,
    #[arg(long = "type", requires_all = ["store_code", "house_code"])]
    kind: Option<String>,
}

impl PropertyArgs {
    fn code(&self) -> Result<Option<PropertyCode>> {
        match (&self.store_code, &self.house_code, &self.kind) {
            (Some(store), Some(house), Some(kind)) => Ok(Some(
                PropertyCode::new(store.as_str(), house.as_str(), kind.as_str())
                    .context("Invalid property code")?,
            )),
            _ => Ok(None),
        }
    }
}

#[derive(Args, Debug)]
struct RoomArgs {
    /// Room page URL, ignored when a full code is given
    #[arg(long)]
    url: Option<String>,
    #[arg(long, requires_all = ["house_code", "kind", "room_id"])]
    store_code: Option<String>,
    #[arg(long, requires_all = ["store_code", "kind", "room_id"])]
    house_code: Option<String>,
    #[arg(long = "type", requires_all = ["store_code", "house_code", "room_id"])]
    kind: Option<String>,
    #[arg(long, requires_all = ["store_code", "house_code", "kind"])]
    room_id: Option<String>,
}

impl RoomArgs {
    fn code(&self) -> Result<Option<RoomCode>> {
        match (&self.store_code, &self.house_code, &self.kind, &self.room_id) {
            (Some(store), Some(house), Some(kind), Some(room)) => Ok(Some(
                RoomCode::new(store.as_str(), house.as_str(), kind.as_str(), room.as_str())
                    .context("Invalid room code")?,
            )),
            _ => Ok(None),
        }
    }
}

impl Cli {
    fn config(&self) -> ClientConfig {
        ClientConfig {
            endpoints: Endpoints {
                property_rooms: self.property_rooms_endpoint.clone(),
                room_details: self.room_details_endpoint.clone(),
            },
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let session = Session::new(&config).context("Failed to create HTTP session")?;
    let client = UrClient::with_endpoints(
        RequestSender::new(&session),
        config.endpoints.clone(),
    );

    match &cli.command {
        Command::Property(args) => {
            let code = args.code()?;
            info!("Checking property vacancy...");
            let vacant = client
                .is_property_vacant(args.url.as_deref(), code.as_ref())
                .await
                .context("Property vacancy check failed")?;

            let listing = listing_label(code.map(|c| c.to_string()), args.url.as_deref());
            print_report(&VacancyReport::new(ListingKind::Property, listing, vacant))?;
        }
        Command::Room(args) => {
            let code = args.code()?;
            info!("Checking room vacancy...");
            let vacant = client
                .is_room_vacant(args.url.as_deref(), code.as_ref())
                .await
                .context("Room vacancy check failed")?;

            let listing = listing_label(code.map(|c| c.to_string()), args.url.as_deref());
            print_report(&VacancyReport::new(ListingKind::Room, listing, vacant))?;
        }
        Command::Name { url } => {
            info!("Loading listing page {}", url);
            let name = client
                .get_property_name(Some(url.as_str()))
                .await
                .context("Failed to read property name")?;
            println!("{}", name);
        }
    }

    Ok(())
}

fn listing_label(code: Option<String>, url: Option<&str>) -> String {
    code.or_else(|| url.map(str::to_string)).unwrap_or_default()
}

fn print_report(report: &VacancyReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

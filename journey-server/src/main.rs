use std::net::SocketAddr;
use std::time::Duration;

use tracing::{debug, warn};

use journey_server::hafas::{HafasClient, HafasConfig};
use journey_server::poller::{JourneyPoller, JourneyQuery};
use journey_server::stations;
use journey_server::web::{AppState, create_router};

/// How often to poll for journeys (2 minutes).
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get the station pair from the environment
    let origin_input = std::env::var("JOURNEY_ORIGIN").expect("JOURNEY_ORIGIN not set");
    let destination_input =
        std::env::var("JOURNEY_DESTINATION").expect("JOURNEY_DESTINATION not set");

    let direct_only = std::env::var("JOURNEY_DIRECT_ONLY")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let offset_mins: i64 = std::env::var("JOURNEY_OFFSET_MINS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let poll_interval = std::env::var("JOURNEY_POLL_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_POLL_INTERVAL);

    // Create HAFAS client
    let client = HafasClient::new(HafasConfig::default()).expect("Failed to create HAFAS client");

    // Resolve the station pair (fail fast if lookup fails)
    println!("Resolving stations...");
    let origin = stations::resolve(&client, &origin_input)
        .await
        .expect("Failed to resolve origin station");
    let destination = stations::resolve(&client, &destination_input)
        .await
        .expect("Failed to resolve destination station");
    println!("Monitoring {origin} -> {destination}");

    let query = JourneyQuery::new(origin, destination, direct_only)
        .with_offset(chrono::Duration::minutes(offset_mins));
    let poller = JourneyPoller::new(client, query);

    // Spawn background task to poll on the fixed interval. The first tick
    // fires immediately; a failed tick keeps the previous connections.
    let poller_bg = poller.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_interval);
        loop {
            interval.tick().await;
            match poller_bg.poll().await {
                Ok(count) => debug!(count, "poll complete"),
                Err(e) => warn!(error = %e, "poll failed, keeping previous connections"),
            }
        }
    });

    // Build app state
    let state = AppState::new(poller);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Journey monitor listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health       - Health check");
    println!("  GET  /status       - Next departure status");
    println!("  GET  /connections  - Full connection list");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

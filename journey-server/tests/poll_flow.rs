//! End-to-end poll flow tests against a mock HAFAS server.

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use journey_server::domain::{Station, StationId};
use journey_server::hafas::{HafasClient, HafasConfig};
use journey_server::poller::{JourneyPoller, JourneyQuery};
use journey_server::stations;

fn client_for(server: &MockServer) -> HafasClient {
    let config = HafasConfig::default()
        .with_base_url(server.uri())
        .with_timeout(5);
    HafasClient::new(config).unwrap()
}

fn station(id: &str, name: &str) -> Station {
    Station::new(StationId::parse(id).unwrap(), name)
}

fn poller_for(server: &MockServer, direct_only: bool) -> JourneyPoller {
    let query = JourneyQuery::new(
        station("8011160", "Berlin Hbf"),
        station("8010205", "Leipzig Hbf"),
        direct_only,
    );
    JourneyPoller::new(client_for(server), query)
}

fn journey_json(name: &str, departure: &str, arrival: &str, delay: i64) -> String {
    format!(
        r#"{{
            "legs": [{{
                "departure": "{departure}",
                "plannedDeparture": "{departure}",
                "arrival": "{arrival}",
                "plannedArrival": "{arrival}",
                "departureDelay": {delay},
                "arrivalDelay": {delay},
                "line": {{"name": "{name}", "product": "nationalExpress", "mode": "train"}}
            }}]
        }}"#
    )
}

fn single_journey_body(delay: i64) -> String {
    format!(
        r#"{{"journeys": [{}]}}"#,
        journey_json(
            "ICE 1601",
            "2026-02-11T14:37:00+01:00",
            "2026-02-11T15:42:00+01:00",
            delay
        )
    )
}

fn three_journeys_body() -> String {
    format!(
        r#"{{"journeys": [{}, {}, {}]}}"#,
        journey_json(
            "ICE 1601",
            "2026-02-11T14:37:00+01:00",
            "2026-02-11T15:42:00+01:00",
            0
        ),
        journey_json(
            "ICE 1603",
            "2026-02-11T15:37:00+01:00",
            "2026-02-11T16:42:00+01:00",
            0
        ),
        journey_json(
            "ICE 1605",
            "2026-02-11T16:37:00+01:00",
            "2026-02-11T17:42:00+01:00",
            0
        )
    )
}

#[tokio::test]
async fn on_time_journey_displays_bare_departure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .and(query_param("from", "8011160"))
        .and(query_param("to", "8010205"))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_journey_body(0)))
        .mount(&server)
        .await;

    let poller = poller_for(&server, true);
    let count = poller.poll().await.unwrap();
    assert_eq!(count, 1);

    let status = poller.status().await;
    assert_eq!(status.state.as_deref(), Some("14:37"));
    assert!(status.connection.unwrap().on_time);
}

#[tokio::test]
async fn delayed_journey_appends_delay_to_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_journey_body(300)))
        .mount(&server)
        .await;

    let poller = poller_for(&server, true);
    poller.poll().await.unwrap();

    let status = poller.status().await;
    assert_eq!(status.state.as_deref(), Some("14:37 + 0:05:00"));
}

#[tokio::test]
async fn direct_only_requests_zero_transfers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .and(query_param("transfers", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_journey_body(0)))
        .expect(1)
        .mount(&server)
        .await;

    let poller = poller_for(&server, true);
    poller.poll().await.unwrap();
}

#[tokio::test]
async fn unrestricted_query_omits_transfers_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .and(query_param_is_missing("transfers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_journey_body(0)))
        .expect(1)
        .mount(&server)
        .await;

    let poller = poller_for(&server, false);
    poller.poll().await.unwrap();
}

#[tokio::test]
async fn three_journeys_keep_api_order_and_expose_lookahead() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(three_journeys_body()))
        .mount(&server)
        .await;

    let poller = poller_for(&server, true);
    assert_eq!(poller.poll().await.unwrap(), 3);

    let connections = poller.connections().await;
    let services: Vec<&str> = connections.iter().map(|c| c.service.as_str()).collect();
    assert_eq!(services, ["ICE 1601", "ICE 1603", "ICE 1605"]);

    let status = poller.status().await;
    assert_eq!(status.state.as_deref(), Some("14:37"));
    assert_eq!(status.next.as_deref(), Some("15:37"));
    assert_eq!(status.next_on.as_deref(), Some("16:37"));
}

#[tokio::test]
async fn empty_response_is_zero_connections_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"journeys": []}"#))
        .mount(&server)
        .await;

    let poller = poller_for(&server, false);
    assert_eq!(poller.poll().await.unwrap(), 0);

    let status = poller.status().await;
    assert_eq!(status.state, None);
    assert_eq!(status.connection, None);
}

#[tokio::test]
async fn failed_poll_preserves_previous_connections() {
    let server = MockServer::start().await;

    // First poll succeeds, every later request fails
    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_journey_body(0)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let poller = poller_for(&server, true);
    assert_eq!(poller.poll().await.unwrap(), 1);

    let result = poller.poll().await;
    assert!(result.is_err());

    // The list from the successful poll is still visible
    let status = poller.status().await;
    assert_eq!(status.state.as_deref(), Some("14:37"));
}

#[tokio::test]
async fn multi_leg_journey_reports_first_leg_end_to_end() {
    let server = MockServer::start().await;

    let body = r#"{
        "journeys": [{
            "legs": [
                {
                    "departure": "2026-02-11T14:00:00+01:00",
                    "plannedDeparture": "2026-02-11T14:00:00+01:00",
                    "arrival": "2026-02-11T14:30:00+01:00",
                    "plannedArrival": "2026-02-11T14:30:00+01:00",
                    "departureDelay": 0,
                    "arrivalDelay": 0,
                    "line": {"name": "RE 3306", "product": "regional", "mode": "train"}
                },
                {
                    "departure": "2026-02-11T14:45:00+01:00",
                    "plannedDeparture": "2026-02-11T14:45:00+01:00",
                    "arrival": "2026-02-11T16:00:00+01:00",
                    "plannedArrival": "2026-02-11T16:00:00+01:00",
                    "departureDelay": 600,
                    "arrivalDelay": 600,
                    "line": {"name": "ICE 845", "product": "nationalExpress", "mode": "train"}
                }
            ]
        }]
    }"#;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let poller = poller_for(&server, false);
    assert_eq!(poller.poll().await.unwrap(), 1);

    let connections = poller.connections().await;
    assert_eq!(connections[0].service, "RE 3306");
    assert_eq!(connections[0].departure_time(), "14:00");
    // The second leg's delay never surfaces
    assert_eq!(connections[0].arrival_delay, Some(0));
}

#[tokio::test]
async fn setup_then_poll_flow() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("query", "Berlin Hbf"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"type": "stop", "id": "8011160", "name": "Berlin Hbf"}]"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("query", "Leipzig Hbf"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"type": "stop", "id": "8010205", "name": "Leipzig Hbf"}]"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/journeys"))
        .and(query_param("from", "8011160"))
        .and(query_param("to", "8010205"))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_journey_body(300)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let origin = stations::resolve(&client, "Berlin Hbf").await.unwrap();
    let destination = stations::resolve(&client, "Leipzig Hbf").await.unwrap();

    let poller = JourneyPoller::new(client, JourneyQuery::new(origin, destination, true));
    poller.poll().await.unwrap();

    let status = poller.status().await;
    assert_eq!(status.state.as_deref(), Some("14:37 + 0:05:00"));
}

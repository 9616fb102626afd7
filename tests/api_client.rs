mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::sample_body;
use pokecard::api::{FetchError, PokeApiClient, PokemonSource};
use pokecard::config::ApiConfig;

fn client_for(mock: &MockBackend) -> PokeApiClient {
    let config = ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    };
    PokeApiClient::new(&config).expect("client")
}

#[tokio::test]
async fn fetch_decodes_record() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(sample_body(4))).await;
    let client = client_for(&mock);

    let pokemon = client.fetch(4).await.expect("record");
    assert_eq!(pokemon.id, 4);
    assert_eq!(pokemon.name, "mon-4");
    assert_eq!(pokemon.stats.len(), 6);
    assert_eq!(pokemon.type_names().collect::<Vec<_>>(), vec!["grass", "poison"]);

    assert_eq!(mock.requested_paths().await, vec!["/api/v2/pokemon/4"]);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(sample_body(7))).await;
    let config = ApiConfig {
        base_url: format!("{}/", mock.base_url()),
        ..ApiConfig::default()
    };
    let client = PokeApiClient::new(&config).unwrap();
    assert_eq!(client.record_url(7).unwrap().path(), "/api/v2/pokemon/7");
    assert!(client.fetch(7).await.is_ok());
}

#[tokio::test]
async fn not_found_maps_to_status() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404)).await;
    let client = client_for(&mock);

    let err = client.fetch(9).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { id: 9, status: 404 }));
    assert_eq!(err.user_message(), "No Pokémon with that number");
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"id": "not a number"}"#)).await;
    let client = client_for(&mock);

    let err = client.fetch(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { id: 1, .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(sample_body(1)).with_delay(2_500))
        .await;
    let client = client_for(&mock);

    let err = client.fetch(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout { id: 1, duration: 1 }));
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ApiConfig {
        base_url: format!("http://127.0.0.1:{port}/api/v2/pokemon"),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    let client = PokeApiClient::new(&config).unwrap();

    let err = client.fetch(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Connection { id: 1, .. }));
}

#[test]
fn invalid_base_url_is_reported() {
    let config = ApiConfig {
        base_url: "::not a url".to_string(),
        ..ApiConfig::default()
    };
    let client = PokeApiClient::new(&config).unwrap();
    assert!(matches!(
        client.record_url(1),
        Err(FetchError::InvalidUrl { .. })
    ));
}

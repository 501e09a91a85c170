//! PokeApiClient against a throwaway local HTTP server.
mod common;

use dexroll::config::{ApiConfig, RollConfig};
use dexroll::dex::{DexSource, PokeApiClient, RollError, Roller};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves `/api/v2/pokemon/*` and `/api/v2/pokemon-species/*` from the #25 fixtures,
/// `/broken/*` with invalid JSON, and 404 for anything else.
async fn spawn_fixture_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                loop {
                    let n = match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => n,
                    };
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") || read == buf.len() {
                        break;
                    }
                }
                let head = String::from_utf8_lossy(&buf[..read]).to_string();
                let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, body) = if path.starts_with("/api/v2/pokemon-species/") {
                    ("200 OK", common::SPECIES_25_JSON.to_string())
                } else if path.starts_with("/api/v2/pokemon/") {
                    ("200 OK", common::CREATURE_25_JSON.to_string())
                } else if path.starts_with("/broken/") {
                    ("200 OK", "{\"id\": \"not a number\"".to_string())
                } else {
                    ("404 Not Found", "{}".to_string())
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{}", addr)
}

fn client_for(base_url: String) -> PokeApiClient {
    let config = ApiConfig {
        base_url,
        timeout_seconds: 5,
    };
    // Bypass any proxy from the environment; the server is on loopback.
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("reqwest client");
    PokeApiClient::with_client(&config, http)
}

#[tokio::test]
async fn fetches_and_decodes_both_endpoints() {
    let base = spawn_fixture_server().await;
    let client = client_for(format!("{}/api/v2", base));

    let creature = client.creature(25).await.expect("creature");
    assert_eq!(creature.id, 25);
    assert_eq!(creature.name, "pikachu");
    assert_eq!(creature.stats.len(), 6);

    let species = client.species(25).await.expect("species");
    assert_eq!(species.generation.name, "generation-i");
    assert_eq!(species.flavor_text_entries.len(), 3);
}

#[tokio::test]
async fn full_roll_over_http() {
    let base = spawn_fixture_server().await;
    let client = client_for(format!("{}/api/v2/", base));
    let settings = RollConfig {
        seed: Some(5),
        ..RollConfig::default()
    };
    let mut roller = Roller::new(client, settings);
    let record = roller.roll_for(25).await.expect("roll");
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.types, vec!["electric".to_string()]);
    assert_eq!(record.generation, "I");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = spawn_fixture_server().await;
    let client = client_for(format!("{}/missing", base));
    match client.creature(1).await {
        Err(RollError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/missing/pokemon/1"));
        }
        other => panic!("expected 404 status error, got {:?}", other.map(|c| c.id)),
    }
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let base = spawn_fixture_server().await;
    let client = client_for(format!("{}/broken", base));
    let err = client.species(7).await.unwrap_err();
    assert!(matches!(err, RollError::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(format!("http://{}/api/v2", addr));
    let err = client.creature(1).await.unwrap_err();
    assert!(matches!(err, RollError::Http(_)), "got {:?}", err);
}

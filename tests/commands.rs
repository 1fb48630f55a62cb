mod common;

use common::{refused_url, MockServer};
use house_price_cli::commands::{self, Command};
use house_price_cli::ApiClient;

fn run(api: &ApiClient, command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    commands::run(api, command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn locations_prints_one_per_line() {
    let server = MockServer::respond(200, r#"{"locations": ["Indira Nagar", "Whitefield"]}"#);
    let api = ApiClient::new(&server.url).unwrap();

    let output = run(&api, Command::Locations).unwrap();
    assert_eq!(output, "Indira Nagar\nWhitefield\n");
    assert_eq!(server.received().path, "/locations");
}

#[test]
fn predict_prints_estimate() {
    let server = MockServer::respond(200, r#"{"estimated_price": 83.456}"#);
    let api = ApiClient::new(&server.url).unwrap();

    let command = Command::Predict {
        location: "Whitefield".into(),
        sqft: 1200.0,
        bhk: 3,
        bath: 2,
    };
    let output = run(&api, command).unwrap();
    assert_eq!(
        output,
        "Estimated price for a 3 BHK, 2 bath, 1200 sqft home in Whitefield: 83.46\n"
    );

    let request = server.received();
    assert_eq!(request.path, "/predict");
    assert_eq!(request.json()["location"], "Whitefield");
}

#[test]
fn health_prints_backend_message() {
    let server = MockServer::respond(200, r#"{"message": "Hello, Friends!"}"#);
    let api = ApiClient::new(&server.url).unwrap();

    let output = run(&api, Command::Health).unwrap();
    assert_eq!(output, "Backend is up: Hello, Friends!\n");
}

#[test]
fn health_failure_uses_generic_message() {
    let api = ApiClient::new(&refused_url()).unwrap();

    let err = run(&api, Command::Health).unwrap_err();
    assert_eq!(err.to_string(), "Backend is not responding");
}

#[test]
fn locations_failure_keeps_status() {
    let server = MockServer::respond(500, r#"{"detail":"boom"}"#);
    let api = ApiClient::new(&server.url).unwrap();

    let err = run(&api, Command::Locations).unwrap_err();
    assert!(err.to_string().contains("500"));
}

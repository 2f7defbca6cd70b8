use outfit_core::{
    LookupError, OpenMeteoConfig, WeatherCondition, WeatherObservation, WeatherProvider,
    WeatherResolver, provider::open_meteo::OpenMeteoProvider, provider_from_config,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenMeteoProvider {
    OpenMeteoProvider::new(server.uri(), server.uri(), "en".to_string())
}

async fn mount_geocode(server: &MockServer, name: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", name))
        .and(query_param("count", "1"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn geocode_returns_first_match() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        "tokyo",
        json!({ "results": [{ "latitude": 35.69, "longitude": 139.69, "name": "Tokyo" }] }),
    )
    .await;

    let place = provider_for(&server).geocode("tokyo").await.expect("geocode should succeed");

    assert_eq!(place.name, "Tokyo");
    assert_eq!(place.latitude, 35.69);
    assert_eq!(place.longitude, 139.69);
}

#[tokio::test]
async fn geocode_without_results_is_no_match() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Zzyzxville", json!({ "generationtime_ms": 0.4 })).await;

    let err = provider_for(&server).geocode("Zzyzxville").await.unwrap_err();

    assert!(matches!(err, LookupError::NoMatch(ref name) if name == "Zzyzxville"));
}

#[tokio::test]
async fn geocode_server_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = provider_for(&server).geocode("Paris").await.unwrap_err();

    match err {
        LookupError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn current_conditions_reads_current_block() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("current", "temperature_2m,relative_humidity_2m,weather_code"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": { "temperature_2m": 18.4, "relative_humidity_2m": 64, "weather_code": 3 }
        })))
        .mount(&server)
        .await;

    let current = provider_for(&server).current_conditions(48.85, 2.35).await.unwrap();

    assert_eq!(current.temperature_c, 18.4);
    assert_eq!(current.humidity_pct, 64);
    assert_eq!(current.weather_code, 3);
}

#[tokio::test]
async fn malformed_forecast_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server).current_conditions(0.0, 0.0).await.unwrap_err();

    assert!(matches!(err, LookupError::Parse { .. }));
}

#[tokio::test]
async fn resolver_end_to_end_success() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        "berlin",
        json!({ "results": [{ "latitude": 52.52, "longitude": 13.41, "name": "Berlin" }] }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "52.52"))
        .and(query_param("longitude", "13.41"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": { "temperature_2m": 29.6, "relative_humidity_2m": 40, "weather_code": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = OpenMeteoConfig {
        geocoding_url: server.uri(),
        forecast_url: server.uri(),
        language: "en".to_string(),
    };
    let resolver = WeatherResolver::new(provider_from_config(&config));

    let obs = resolver.resolve("berlin").await;

    assert_eq!(obs.city, "Berlin");
    assert_eq!(obs.temperature, 30);
    assert_eq!(obs.condition, WeatherCondition::Hot);
    assert_eq!(obs.description, "Hot day at 30°C - stay cool!");
    assert_eq!(obs.humidity, 40);
}

#[tokio::test]
async fn resolver_falls_back_for_unknown_city() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Zzyzxville", json!({ "results": [] })).await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = WeatherResolver::new(Box::new(provider_for(&server)));

    let obs = resolver.resolve("Zzyzxville").await;

    assert_eq!(obs, WeatherObservation::fallback("Zzyzxville"));
}

#[tokio::test]
async fn resolver_falls_back_when_forecast_unavailable() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        "rome",
        json!({ "results": [{ "latitude": 41.9, "longitude": 12.5, "name": "Rome" }] }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let resolver = WeatherResolver::new(Box::new(provider_for(&server)));

    let obs = resolver.resolve("rome").await;

    assert_eq!(obs, WeatherObservation::fallback("rome"));
}

//! End-to-end client flow against a mock server.

use chrono::NaiveDate;
use cronometer_client::{Client, ClientError, ClientOptions, ExportKind};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOGIN_PAGE: &str = r#"
<html><body>
<form method="post" action="/login">
    <input type="text" name="username">
    <input type="password" name="password">
    <input type="hidden" name="anticsrf" value="tok123">
</form>
</body></html>
"#;

const SERVINGS_CSV: &str = "\
Day,Time,Group,Food Name,Amount,Category,Energy (kcal),Protein (g)
2023-07-06,8:30 AM,Breakfast,Oatmeal,1.5 cup,Food,150.5,5.2
2023-07-06,12:15 PM,Lunch,Chicken Breast,6 oz,Food,280,52.1
";

fn client_for(server: &MockServer) -> Client {
    Client::new(ClientOptions {
        base_url: Some(server.uri()),
        ..ClientOptions::default()
    })
    .expect("client construction")
}

/// Mounts the login page and login endpoint mocks shared by most tests.
async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_PAGE))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("anticsrf=tok123"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sesnonce=abc123; Path=/")
                .set_body_string(r#"{"redirect":"/app","success":true,"error":""}"#),
        )
        .mount(server)
        .await;
}

/// Mounts the GWT authenticate mock, which requires the session cookie
/// issued at login.
async fn mount_authenticate(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/cronometer/app"))
        .and(body_string_contains("|authenticate|"))
        .and(header("cookie", "sesnonce=abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("//OK[3112423,5,4,3,2,1,[\"x\"],0,7]"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_stores_session_state() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_authenticate(&server).await;

    let mut client = client_for(&server);
    client.login("user@example.com", "hunter2").await.unwrap();

    assert!(client.session().is_authenticated());
    assert_eq!(client.session().nonce(), Some("abc123"));
    assert_eq!(client.session().user_id(), Some("3112423"));
}

#[tokio::test]
async fn test_full_flow_login_export_parse_logout() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_authenticate(&server).await;

    Mock::given(method("POST"))
        .and(path("/cronometer/app"))
        .and(body_string_contains("|generateAuthorizationToken|"))
        .and(body_string_contains("|abc123|"))
        .and(body_string_contains("|3112423|3600|"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("//OK[\"45c1aa2a9aa1460ab0b34bf4bbbf2fb2\"]"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/export"))
        .and(query_param("nonce", "45c1aa2a9aa1460ab0b34bf4bbbf2fb2"))
        .and(query_param("generate", "servings"))
        .and(query_param("start", "2023-07-06"))
        .and(query_param("end", "2023-07-07"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SERVINGS_CSV))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/cronometer/app"))
        .and(body_string_contains("|logout|"))
        .respond_with(ResponseTemplate::new(200).set_body_string("//OK[]"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("user@example.com", "hunter2").await.unwrap();

    let start = NaiveDate::from_ymd_opt(2023, 7, 6).unwrap();
    let end = NaiveDate::from_ymd_opt(2023, 7, 7).unwrap();
    let servings = client.export_servings_parsed(start, end).await.unwrap();

    assert_eq!(servings.len(), 2);
    assert_eq!(servings[0].food_name, "Oatmeal");
    assert_eq!(servings[0].group, "Breakfast");
    assert!((servings[0].quantity_value - 1.5).abs() < f64::EPSILON);
    assert_eq!(servings[0].quantity_units, "cup");
    assert!((servings[0].nutrients.energy_kcal - 150.5).abs() < f64::EPSILON);
    assert!((servings[1].nutrients.protein_g - 52.1).abs() < f64::EPSILON);

    client.logout().await.unwrap();
    assert!(!client.session().is_authenticated());
    assert_eq!(client.session().nonce(), None);
}

#[tokio::test]
async fn test_rejected_login_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_PAGE))
        .mount(&server)
        .await;

    // The server sets a cookie even on rejection; the client must not
    // keep it as a session.
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sesnonce=rejected; Path=/")
                .set_body_string(
                    r#"{"redirect":"","success":false,"error":"Incorrect username or password."}"#,
                ),
        )
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client
        .login("user@example.com", "wrong")
        .await
        .unwrap_err();

    match err {
        ClientError::LoginRejected(message) => {
            assert_eq!(message, "Incorrect username or password.");
        }
        other => panic!("expected LoginRejected, got {other:?}"),
    }
    assert!(!client.session().is_authenticated());
    assert_eq!(client.session().nonce(), None);
}

#[tokio::test]
async fn test_missing_anticsrf_input_fails_login() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>maintenance</body></html>"),
        )
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.login("user@example.com", "pw").await.unwrap_err();
    assert!(matches!(err, ClientError::TokenNotFound));
}

#[tokio::test]
async fn test_unparseable_authenticate_response() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/cronometer/app"))
        .respond_with(ResponseTemplate::new(200).set_body_string("//EX[2,1,[\"boom\"],0,7]"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.login("user@example.com", "pw").await.unwrap_err();
    assert!(matches!(err, ClientError::AuthParse(_)));
}

#[tokio::test]
async fn test_export_error_carries_status_and_body() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_authenticate(&server).await;

    Mock::given(method("POST"))
        .and(path("/cronometer/app"))
        .and(body_string_contains("|generateAuthorizationToken|"))
        .respond_with(ResponseTemplate::new(200).set_body_string("//OK[\"tok\"]"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("user@example.com", "pw").await.unwrap();

    let start = NaiveDate::from_ymd_opt(2023, 7, 6).unwrap();
    let err = client
        .export(ExportKind::Servings, start, start)
        .await
        .unwrap_err();

    match err {
        ClientError::HttpStatus {
            operation,
            status,
            body,
        } => {
            assert_eq!(operation, "export");
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

//! Probe-client tests against a local mock registry.
//!
//! These exercise the full probe path: tarball URL construction → HEAD
//! request → status classification, for public, private, and misbehaving
//! registries.

use pkgprobe::{Package, PrivateRegistry, ProbeError, RegistryClient, RegistryConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn package(name: &str, version: &str, private: bool) -> Package {
    Package {
        name: name.to_string(),
        version: version.to_string(),
        private,
    }
}

fn public_only(url: String) -> RegistryConfig {
    RegistryConfig {
        public_url: url,
        private: None,
        private_prefix: None,
    }
}

#[tokio::test]
async fn found_on_public_missing_on_private() {
    let public = MockServer::start().await;
    let private = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/react/-/react-18.2.0.tgz"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&public)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/react/-/react-18.2.0.tgz"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&private)
        .await;

    let client = RegistryClient::new(RegistryConfig {
        public_url: public.uri(),
        private: Some(PrivateRegistry {
            url: private.uri(),
            auth_token: None,
        }),
        private_prefix: None,
    })
    .expect("valid config");

    let status = client
        .probe(&package("react", "18.2.0", false))
        .await
        .expect("probe should classify cleanly");

    assert_eq!(status.public, Some(true));
    assert_eq!(status.private, Some(false));
    assert!(!status.is_problematic());
}

#[tokio::test]
async fn private_package_checks_only_the_private_registry() {
    let public = MockServer::start().await;
    let private = MockServer::start().await;

    // Any hit on the public registry would be a bug; leave it unmocked so
    // wiremock answers 404 and the assertion below catches the request.
    Mock::given(method("HEAD"))
        .and(path("/secret-lib/-/secret-lib-2.0.0.tgz"))
        .and(header("authorization", "token-123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&private)
        .await;

    let client = RegistryClient::new(RegistryConfig {
        public_url: public.uri(),
        private: Some(PrivateRegistry {
            url: private.uri(),
            auth_token: Some("token-123".to_string()),
        }),
        private_prefix: Some("secret-".to_string()),
    })
    .expect("valid config");

    let status = client
        .probe(&package("secret-lib", "2.0.0", true))
        .await
        .expect("probe should classify cleanly");

    assert_eq!(status.public, None);
    assert_eq!(status.private, Some(true));
    assert!(!status.is_problematic());

    let public_hits = public.received_requests().await.unwrap_or_default();
    assert!(
        public_hits.is_empty(),
        "private packages must never hit the public registry"
    );
}

#[tokio::test]
async fn missing_everywhere_is_problematic_not_an_error() {
    let public = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&public)
        .await;

    let client = RegistryClient::new(public_only(public.uri())).expect("valid config");

    let status = client
        .probe(&package("ghost", "0.0.1", false))
        .await
        .expect("404 is an answer, not a failure");

    assert_eq!(status.public, Some(false));
    assert!(status.is_problematic());
}

#[tokio::test]
async fn unexpected_status_is_a_probe_error() {
    let public = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&public)
        .await;

    let client = RegistryClient::new(public_only(public.uri())).expect("valid config");

    let err = client
        .probe(&package("flaky", "1.0.0", false))
        .await
        .expect_err("503 must surface as an error");

    match err {
        ProbeError::UnexpectedStatus { status, package } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(package, "flaky@1.0.0");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn private_package_without_private_registry_fails() {
    let public = MockServer::start().await;
    let client = RegistryClient::new(public_only(public.uri())).expect("valid config");

    let err = client
        .probe(&package("secret-lib", "2.0.0", true))
        .await
        .expect_err("nowhere to check a private package");

    assert!(matches!(err, ProbeError::NoPrivateRegistry { .. }));
}

#[tokio::test]
async fn unreachable_registry_is_a_transport_error() {
    // Reserve a port, then shut the server down so nothing listens on it.
    let server = MockServer::start().await;
    let dead_uri = server.uri();
    drop(server);

    let client = RegistryClient::new(public_only(dead_uri)).expect("valid config");

    let err = client
        .probe(&package("react", "18.2.0", false))
        .await
        .expect_err("probe against a closed port must fail");

    assert!(matches!(err, ProbeError::Http { .. }));
}

#[test]
fn invalid_registry_url_is_rejected_at_construction() {
    let err = RegistryClient::new(public_only("::not a url::".to_string()))
        .expect_err("config must be validated");
    assert_eq!(err.as_label(), "invalid_registry_url");
}

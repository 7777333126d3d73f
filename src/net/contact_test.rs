use futures::executor::block_on;

use super::*;

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Nice site".to_owned(),
    }
}

fn config_with_endpoint(endpoint: Option<&str>) -> SiteConfig {
    SiteConfig { contact_endpoint: endpoint.map(str::to_owned), ..SiteConfig::default() }
}

#[test]
fn default_transport_is_simulated_two_seconds() {
    assert_eq!(ContactTransport::default(), ContactTransport::Simulated { delay: Duration::from_secs(2) });
}

#[test]
fn from_config_without_endpoint_simulates() {
    assert_eq!(ContactTransport::from_config(&config_with_endpoint(None)), ContactTransport::default());
    assert_eq!(ContactTransport::from_config(&config_with_endpoint(Some("   "))), ContactTransport::default());
}

#[test]
fn from_config_with_endpoint_uses_http() {
    assert_eq!(
        ContactTransport::from_config(&config_with_endpoint(Some(" /api/contact "))),
        ContactTransport::Http { endpoint: "/api/contact".to_owned() }
    );
}

#[test]
fn simulated_send_always_succeeds() {
    let transport = ContactTransport::default();
    assert!(block_on(transport.send(&message())).is_ok());
}

#[test]
fn http_send_is_unavailable_off_browser() {
    let transport = ContactTransport::Http { endpoint: "/api/contact".to_owned() };
    let err = block_on(transport.send(&message())).unwrap_err();
    assert!(matches!(err, ContactError::Unavailable));
}

#[test]
fn non_success_status_is_rejected() {
    assert!(rejected_status(200).is_ok());
    assert!(rejected_status(204).is_ok());
    assert!(matches!(rejected_status(500), Err(ContactError::Rejected { status: 500 })));
    assert!(matches!(rejected_status(302), Err(ContactError::Rejected { status: 302 })));
}

#[test]
fn errors_render_descriptive_messages() {
    assert_eq!(ContactError::Rejected { status: 422 }.to_string(), "server rejected message: 422");
    assert_eq!(ContactError::Transport("offline".to_owned()).to_string(), "transport failed: offline");
}

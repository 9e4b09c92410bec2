//! Unit tests for the transaction engine.

use rstest::rstest;
use serde_json::json;

use super::*;
use crate::context::NO_ERROR;
use crate::error::{TransportError, UNKNOWN_REMOTE_ERROR};
use crate::tests::{MockAgent, agent_replying, agent_expecting};

#[rstest]
#[case::unscoped(Service::Unscoped, json!({ "command": "list-commands" }))]
#[case::empty_list(Service::Multiple(Vec::new()), json!({ "command": "list-commands" }))]
#[case::single(
    Service::single("dhcp4"),
    json!({ "command": "list-commands", "service": ["dhcp4"] })
)]
#[case::multiple(
    Service::Multiple(vec!["dhcp4".into(), "dhcp6".into()]),
    json!({ "command": "list-commands", "service": ["dhcp4", "dhcp6"] })
)]
fn service_field_follows_selector(#[case] service: Service, #[case] expected: Value) {
    let mut context = Context::with_transport(agent_expecting(expected, r#"[{"result":0}]"#));
    context
        .execute("list-commands", service, None)
        .expect("transaction succeeds");
}

#[test]
fn arguments_move_into_request() {
    let expected = json!({
        "command": "subnet4-get",
        "service": ["dhcp4"],
        "arguments": { "id": 7 }
    });
    let mut context = Context::with_transport(agent_expecting(expected, r#"[{"result":0}]"#));
    context
        .execute("subnet4-get", Service::single("dhcp4"), Some(json!({ "id": 7 })))
        .expect("transaction succeeds");
}

#[test]
fn success_returns_owned_entries() {
    let mut context = Context::with_transport(agent_replying(
        r#"[{"result":0,"text":"2 IPv4 subnets found","arguments":{"subnets":[]}}]"#,
    ));
    let response = context
        .execute("subnet4-list", Service::single("dhcp4"), None)
        .expect("transaction succeeds");
    assert_eq!(context.last_error(), NO_ERROR);
    assert_eq!(response.arguments(), Some(&json!({ "subnets": [] })));
    let entries = response.into_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries.first().and_then(|e| e.text.as_deref()),
        Some("2 IPv4 subnets found")
    );
}

#[test]
fn first_failing_entry_decides_the_outcome() {
    let mut context = Context::with_transport(agent_replying(
        r#"[{"result":0},{"result":1,"text":"unable to forward command"},{"result":3}]"#,
    ));
    let error = context
        .execute(
            "config-get",
            Service::Multiple(vec!["dhcp4".into(), "dhcp6".into(), "d2".into()]),
            None,
        )
        .expect_err("second service failed");
    assert!(matches!(error, TransactionError::Remote { index: 1, code: 1, .. }));
    assert_eq!(context.last_error(), "unable to forward command");
}

#[test]
fn failure_without_text_reads_unknown_error() {
    let mut context = Context::with_transport(agent_replying(r#"[{"result":2}]"#));
    let error = context
        .execute("config-reload", Service::single("dhcp4"), None)
        .expect_err("result 2 fails");
    assert_eq!(error.kind(), ErrorKind::Remote);
    assert_eq!(context.last_error(), UNKNOWN_REMOTE_ERROR);
}

#[test]
fn transport_failure_stops_before_parsing() {
    let mut agent = MockAgent::new();
    agent.expect_send().times(1).returning(|_| {
        Err(TransportError::Status {
            endpoint: "http://127.0.0.1:8000/".into(),
            status: 500,
        })
    });
    let mut context = Context::with_transport(agent);
    let error = context
        .execute("status-get", Service::single("dhcp4"), None)
        .expect_err("transport failed");
    assert_eq!(error.kind(), ErrorKind::Transport);
    assert!(
        context.last_error().contains("500"),
        "{}",
        context.last_error()
    );
}

#[test]
fn unparseable_reply_is_a_protocol_kind_failure() {
    let mut context = Context::with_transport(agent_replying("<html>"));
    let error = context
        .execute("version-get", Service::Unscoped, None)
        .expect_err("reply is not JSON");
    assert!(matches!(error, TransactionError::Parse(_)));
    assert_eq!(error.kind(), ErrorKind::Protocol);
    assert!(context.last_error().starts_with("failed to parse response"));
}

#[rstest]
#[case::object(r#"{"result":0}"#, "not an array")]
#[case::empty("[]", "empty")]
#[case::scalar("[1]", "element 0 is not an object")]
#[case::missing_result(r#"[{"text":"ok"}]"#, "element 0 has no integer result")]
#[case::fractional_result(r#"[{"result":0.5}]"#, "element 0 has no integer result")]
#[case::text_type(r#"[{"result":0},{"result":0,"text":5}]"#, "element 1 has a non-string text")]
fn structural_violations_are_reported(#[case] reply: &'static str, #[case] expected: &str) {
    let mut context = Context::with_transport(agent_replying(reply));
    let error = context
        .execute("list-commands", Service::Unscoped, None)
        .expect_err("reply is malformed");
    assert!(
        matches!(&error, TransactionError::Protocol { reason } if reason.contains(expected)),
        "unexpected error: {error:?}"
    );
    assert!(context.last_error().contains(expected));
}

#[test]
fn context_recovers_after_failure() {
    let mut agent = MockAgent::new();
    let mut replies = vec![
        br#"[{"result":0}]"#.to_vec(),
        br#"[{"result":1,"text":"boom"}]"#.to_vec(),
    ];
    agent
        .expect_send()
        .times(2)
        .returning(move |_| {
            replies
                .pop()
                .ok_or_else(|| std::io::Error::other("drained").into())
        });
    let mut context = Context::with_transport(agent);

    context
        .execute("status-get", Service::single("dhcp4"), None)
        .expect_err("first call fails");
    assert_eq!(context.last_error(), "boom");

    context
        .execute("status-get", Service::single("dhcp4"), None)
        .expect("second call succeeds");
    assert_eq!(context.last_error(), NO_ERROR);
}

#[test]
fn response_serialises_as_result_array() {
    let response = Response {
        entries: vec![ResultEntry {
            result: 0,
            text: None,
            arguments: Some(json!({ "hash": "abc" })),
        }],
    };
    let encoded = serde_json::to_value(&response).expect("response serialises");
    assert_eq!(
        encoded,
        json!([{ "result": 0, "arguments": { "hash": "abc" } }])
    );
}

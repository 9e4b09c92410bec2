//! Behavioural tests for command transactions using `rstest-bdd`.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::{MockAgent, agent_replying};
use crate::context::Context;
use crate::error::{ErrorKind, TransactionError};
use crate::transaction::Response;

#[derive(Default)]
struct TestWorld {
    context: Option<Context<MockAgent>>,
    outcome: Option<Result<Response, TransactionError>>,
}

impl TestWorld {
    fn context(&mut self) -> &mut Context<MockAgent> {
        self.context.as_mut().expect("agent not configured")
    }

    fn outcome(&self) -> &Result<Response, TransactionError> {
        self.outcome.as_ref().expect("no command was sent")
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

#[given("an agent that reports the service is unknown")]
fn given_unknown_service(world: &RefCell<TestWorld>) {
    world.borrow_mut().context = Some(Context::with_transport(agent_replying(
        r#"[{"result":1,"text":"service not found"}]"#,
    )));
}

#[given("an agent that lists its commands")]
fn given_listing_agent(world: &RefCell<TestWorld>) {
    world.borrow_mut().context = Some(Context::with_transport(agent_replying(
        r#"[{"result":0,"arguments":["list-commands","status-get"]}]"#,
    )));
}

#[given("an agent that answers with garbage")]
fn given_garbage_agent(world: &RefCell<TestWorld>) {
    world.borrow_mut().context = Some(Context::with_transport(agent_replying("<html>")));
}

#[when("list-commands is sent to {service}")]
fn when_list_commands(world: &RefCell<TestWorld>, service: String) {
    let mut world = world.borrow_mut();
    let outcome = world.context().list_commands(service.trim_matches('"'));
    world.outcome = Some(outcome);
}

#[then("the transaction fails as a remote error")]
fn then_remote_failure(world: &RefCell<TestWorld>) {
    let world = world.borrow();
    let error = world
        .outcome()
        .as_ref()
        .expect_err("transaction should fail");
    assert_eq!(error.kind(), ErrorKind::Remote);
}

#[then("the transaction fails as a protocol error")]
fn then_protocol_failure(world: &RefCell<TestWorld>) {
    let world = world.borrow();
    let error = world
        .outcome()
        .as_ref()
        .expect_err("transaction should fail");
    assert_eq!(error.kind(), ErrorKind::Protocol);
}

#[then("the transaction succeeds")]
fn then_success(world: &RefCell<TestWorld>) {
    let world = world.borrow();
    assert!(
        world.outcome().is_ok(),
        "unexpected failure: {:?}",
        world.outcome()
    );
}

#[then("the last error reads {text}")]
fn then_last_error(world: &RefCell<TestWorld>, text: String) {
    let mut world = world.borrow_mut();
    assert_eq!(world.context().last_error(), text.trim_matches('"'));
}

#[then("the response lists {count} commands")]
fn then_command_count(world: &RefCell<TestWorld>, count: usize) {
    let world = world.borrow();
    let response = world
        .outcome()
        .as_ref()
        .expect("transaction should succeed");
    let listed = response
        .arguments()
        .and_then(serde_json::Value::as_array)
        .map_or(0, Vec::len);
    assert_eq!(listed, count);
}

#[scenario(path = "tests/features/transaction.feature")]
fn transaction_behaviour(world: RefCell<TestWorld>) {
    let _ = world;
}

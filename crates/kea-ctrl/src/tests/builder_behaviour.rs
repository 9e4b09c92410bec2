//! Behavioural tests for configuration building using `rstest-bdd`.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

use super::RefuseNth;
use crate::builder::{ConfigBuilder, build_dhcp4_config};
use crate::document::BuildResult;
use crate::error::BuildError;
use crate::model::{ConfigModel, OptionData, Pool4, Reservation4, Subnet4};

#[derive(Default)]
struct TestWorld {
    model: ConfigModel,
    outcome: Option<BuildResult>,
}

impl TestWorld {
    fn subnet(&mut self) -> &mut Subnet4 {
        self.model
            .dhcp4
            .subnets
            .last_mut()
            .expect("no subnet configured")
    }

    fn document(&self) -> &Value {
        self.outcome
            .as_ref()
            .expect("configuration was not built")
            .as_ref()
            .expect("build should succeed")
    }

    fn error(&self) -> &BuildError {
        self.outcome
            .as_ref()
            .expect("configuration was not built")
            .as_ref()
            .expect_err("build should fail")
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

#[given("a subnet {id} covering {prefix}")]
fn given_subnet(world: &RefCell<TestWorld>, id: u32, prefix: String) {
    world.borrow_mut().model.dhcp4.subnets.push(Subnet4 {
        id,
        subnet: prefix.trim_matches('"').to_owned(),
        ..Subnet4::default()
    });
}

#[given("the subnet has the pool {range}")]
fn given_pool(world: &RefCell<TestWorld>, range: String) {
    world.borrow_mut().subnet().pools.push(Pool4 {
        pool: range.trim_matches('"').to_owned(),
        ..Pool4::default()
    });
}

#[given("the subnet has option {code} with data {data}")]
fn given_option(world: &RefCell<TestWorld>, code: u16, data: String) {
    world.borrow_mut().subnet().option_data.push(OptionData {
        code: Some(code),
        data: data.trim_matches('"').to_owned(),
        ..OptionData::default()
    });
}

#[given("the subnet has a reservation without an identifier")]
fn given_anonymous_reservation(world: &RefCell<TestWorld>) {
    world.borrow_mut().subnet().reservations.push(Reservation4 {
        ip_address: Some("192.0.2.50".into()),
        ..Reservation4::default()
    });
}

#[when("the DHCPv4 configuration is built")]
fn when_built(world: &RefCell<TestWorld>) {
    let mut world = world.borrow_mut();
    let outcome = build_dhcp4_config(&world.model);
    world.outcome = Some(outcome);
}

#[when("the DHCPv4 configuration is built refusing attach {position}")]
fn when_built_refusing(world: &RefCell<TestWorld>, position: usize) {
    let mut world = world.borrow_mut();
    let builder = ConfigBuilder::with_policy(RefuseNth::new(position));
    let outcome = builder.dhcp4(&world.model);
    world.outcome = Some(outcome);
}

#[then("subnet {index} has the pool {range}")]
fn then_pool(world: &RefCell<TestWorld>, index: usize, range: String) {
    let world = world.borrow();
    let pool = world
        .document()
        .pointer(&format!("/subnet4/{index}/pools/0/pool"))
        .and_then(Value::as_str);
    assert_eq!(pool, Some(range.trim_matches('"')));
}

#[then("subnet {index} has option code {code}")]
fn then_option(world: &RefCell<TestWorld>, index: usize, code: u64) {
    let world = world.borrow();
    let built = world
        .document()
        .pointer(&format!("/subnet4/{index}/option-data/0/code"))
        .and_then(Value::as_u64);
    assert_eq!(built, Some(code));
}

#[then("subnet {index} has no reservations")]
fn then_no_reservations(world: &RefCell<TestWorld>, index: usize) {
    let world = world.borrow();
    let reservations = world
        .document()
        .pointer(&format!("/subnet4/{index}/reservations"))
        .and_then(Value::as_array)
        .expect("reservations array missing");
    assert!(
        reservations.is_empty(),
        "unexpected reservations: {reservations:?}"
    );
}

#[then("the build fails because the reservation has no identifier")]
fn then_identifier_failure(world: &RefCell<TestWorld>) {
    let world = world.borrow();
    assert!(
        matches!(world.error(), BuildError::ReservationIdentifier { .. }),
        "unexpected error: {:?}",
        world.error()
    );
}

#[then("the build fails with a rejected attach")]
fn then_rejected(world: &RefCell<TestWorld>) {
    let world = world.borrow();
    assert!(
        matches!(world.error(), BuildError::Rejected { .. }),
        "unexpected error: {:?}",
        world.error()
    );
}

#[scenario(path = "tests/features/configuration.feature")]
fn configuration_behaviour(world: RefCell<TestWorld>) {
    let _ = world;
}

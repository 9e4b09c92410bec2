//! Subnets and shared networks.
//!
//! A subnet always carries its `pools`, `option-data` and `reservations`
//! arrays (and `pd-pools` for DHCPv6), empty when the model has none.

use std::convert;

use serde_json::Value;

use crate::document::{AttachPolicy, BuildResult, Object, object, required_text, scalar, text};
use crate::error::BuildError;
use crate::model::{SharedNetwork4, SharedNetwork6, Subnet4, Subnet6, Tristate};

use super::{ConfigBuilder, present};

impl<P: AttachPolicy> ConfigBuilder<P> {
    pub(super) fn subnet4(&self, subnet: &Subnet4) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(&mut entry, "id", scalar(subnet.id))?;
        composer.try_add(
            &mut entry,
            "subnet",
            required_text("subnet4", "subnet", &subnet.subnet),
        )?;
        self.lifetimes(&mut entry, &subnet.lifetimes, false)?;
        composer.try_add_some(
            &mut entry,
            "interface",
            present(subnet.interface.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "client-class",
            present(subnet.client_class.as_ref()).map(text),
        )?;
        composer.try_add(
            &mut entry,
            "pools",
            composer.array(&subnet.pools, |pool| self.pool4(pool)),
        )?;
        composer.try_add(&mut entry, "option-data", self.options(&subnet.option_data))?;
        composer.try_add(
            &mut entry,
            "reservations",
            composer.array(&subnet.reservations, |reservation| self.reservation4(reservation)),
        )?;
        self.user_context(&mut entry, &subnet.user_context)?;
        Ok(object(entry))
    }

    pub(super) fn subnet6(&self, subnet: &Subnet6) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(&mut entry, "id", scalar(subnet.id))?;
        composer.try_add(
            &mut entry,
            "subnet",
            required_text("subnet6", "subnet", &subnet.subnet),
        )?;
        self.lifetimes(&mut entry, &subnet.lifetimes, true)?;
        composer.try_add_some(
            &mut entry,
            "interface",
            present(subnet.interface.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "client-class",
            present(subnet.client_class.as_ref()).map(text),
        )?;
        composer.try_add(
            &mut entry,
            "pools",
            composer.array(
                subnet.pools.iter().filter_map(|pool| self.pool6(pool)),
                convert::identity,
            ),
        )?;
        composer.try_add(
            &mut entry,
            "pd-pools",
            composer.array(
                subnet.pools.iter().filter_map(|pool| self.prefix_pool(pool)),
                convert::identity,
            ),
        )?;
        composer.try_add(&mut entry, "option-data", self.options(&subnet.option_data))?;
        composer.try_add(
            &mut entry,
            "reservations",
            composer.array(&subnet.reservations, |reservation| self.reservation6(reservation)),
        )?;
        self.user_context(&mut entry, &subnet.user_context)?;
        Ok(object(entry))
    }

    pub(super) fn shared_network4(&self, network: &SharedNetwork4) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "name",
            required_text("shared-network", "name", &network.name),
        )?;
        composer.try_add_some(
            &mut entry,
            "interface",
            present(network.interface.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "option-data",
            self.nested_options(&network.option_data),
        )?;
        composer.try_add(
            &mut entry,
            "subnet4",
            composer.array(&network.subnets, |subnet| self.subnet4(subnet)),
        )?;
        Ok(object(entry))
    }

    pub(super) fn shared_network6(&self, network: &SharedNetwork6) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "name",
            required_text("shared-network", "name", &network.name),
        )?;
        composer.try_add_some(
            &mut entry,
            "interface",
            present(network.interface.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "option-data",
            self.nested_options(&network.option_data),
        )?;
        composer.try_add(
            &mut entry,
            "subnet6",
            composer.array(&network.subnets, |subnet| self.subnet6(subnet)),
        )?;
        Ok(object(entry))
    }

    fn user_context(
        &self,
        parent: &mut Object,
        context: &Tristate<Value>,
    ) -> Result<(), BuildError> {
        let built = match context {
            Tristate::Absent => None,
            Tristate::Null => Some(Ok(Value::Null)),
            Tristate::Value(value) => Some(Ok(value.clone())),
        };
        self.composer.try_add_some(parent, "user-context", built)
    }
}

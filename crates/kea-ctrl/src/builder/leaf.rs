//! Leaf entries: options, pools, reservations and the small records that
//! populate section arrays.

use crate::document::{AttachPolicy, BuildResult, Object, object, required_text, scalar, text};
use crate::error::BuildError;
use crate::model::{
    ClientClass, DnsServer, HookLibrary, LoggerOutput, OptionData, Pool4, Pool6, Reservation4,
    Reservation6, TsigKey,
};

use super::{ConfigBuilder, present};

impl<P: AttachPolicy> ConfigBuilder<P> {
    pub(super) fn option(&self, option: &OptionData) -> BuildResult {
        let name = present(option.name.as_ref());
        if name.is_none() && option.code.is_none() {
            return Err(BuildError::OptionIdentity);
        }
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add_some(&mut entry, "name", name.map(text))?;
        composer.try_add_some(&mut entry, "code", option.code.map(scalar))?;
        composer.try_add_some(
            &mut entry,
            "space",
            present(option.space.as_ref()).map(text),
        )?;
        composer.try_add_some(&mut entry, "csv-format", option.csv_format.map(scalar))?;
        composer.try_add(&mut entry, "data", text(&option.data))?;
        composer.try_add_some(&mut entry, "always-send", option.always_send.map(scalar))?;
        Ok(object(entry))
    }

    /// `option-data` array; always present.
    pub(super) fn options(&self, options: &[OptionData]) -> BuildResult {
        self.composer.array(options, |option| self.option(option))
    }

    /// `option-data` array, left out when there are no options.
    pub(super) fn nested_options(&self, options: &[OptionData]) -> Option<BuildResult> {
        (!options.is_empty()).then(|| self.options(options))
    }

    pub(super) fn pool4(&self, pool: &Pool4) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "pool",
            required_text("pool4", "pool", &pool.pool),
        )?;
        composer.try_add_some(
            &mut entry,
            "client-class",
            present(pool.client_class.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "option-data",
            self.nested_options(&pool.option_data),
        )?;
        Ok(object(entry))
    }

    /// Address pools and prefix pools share one model list; each builder
    /// picks its own kind.
    pub(super) fn pool6(&self, pool: &Pool6) -> Option<BuildResult> {
        match pool {
            Pool6::Address { pool, client_class } => {
                Some(self.address_pool(pool, client_class.as_ref()))
            }
            Pool6::Prefix { .. } => None,
        }
    }

    pub(super) fn prefix_pool(&self, pool: &Pool6) -> Option<BuildResult> {
        match pool {
            Pool6::Prefix {
                prefix,
                prefix_len,
                delegated_len,
                client_class,
            } => Some(self.delegated_pool(
                prefix,
                *prefix_len,
                *delegated_len,
                client_class.as_ref(),
            )),
            Pool6::Address { .. } => None,
        }
    }

    fn address_pool(&self, pool: &str, client_class: Option<&String>) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(&mut entry, "pool", required_text("pool6", "pool", pool))?;
        composer.try_add_some(&mut entry, "client-class", present(client_class).map(text))?;
        Ok(object(entry))
    }

    fn delegated_pool(
        &self,
        prefix: &str,
        prefix_len: u8,
        delegated_len: u8,
        client_class: Option<&String>,
    ) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "prefix",
            required_text("pd-pool", "prefix", prefix),
        )?;
        composer.try_add(&mut entry, "prefix-len", scalar(prefix_len))?;
        composer.try_add(&mut entry, "delegated-len", scalar(delegated_len))?;
        composer.try_add_some(&mut entry, "client-class", present(client_class).map(text))?;
        Ok(object(entry))
    }

    pub(super) fn reservation4(&self, reservation: &Reservation4) -> BuildResult {
        let hw_address = present(reservation.hw_address.as_ref());
        let client_id = present(reservation.client_id.as_ref());
        let circuit_id = present(reservation.circuit_id.as_ref());
        if hw_address.is_none() && client_id.is_none() && circuit_id.is_none() {
            return Err(BuildError::ReservationIdentifier {
                entity: "reservation4",
            });
        }
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add_some(&mut entry, "hw-address", hw_address.map(text))?;
        composer.try_add_some(&mut entry, "client-id", client_id.map(text))?;
        composer.try_add_some(&mut entry, "circuit-id", circuit_id.map(text))?;
        composer.try_add_some(
            &mut entry,
            "ip-address",
            present(reservation.ip_address.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "hostname",
            present(reservation.hostname.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "client-classes",
            self.nested_strings(&reservation.client_classes),
        )?;
        composer.try_add_some(
            &mut entry,
            "option-data",
            self.nested_options(&reservation.option_data),
        )?;
        Ok(object(entry))
    }

    pub(super) fn reservation6(&self, reservation: &Reservation6) -> BuildResult {
        let duid = present(reservation.duid.as_ref());
        let hw_address = present(reservation.hw_address.as_ref());
        if duid.is_none() && hw_address.is_none() {
            return Err(BuildError::ReservationIdentifier {
                entity: "reservation6",
            });
        }
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add_some(&mut entry, "duid", duid.map(text))?;
        composer.try_add_some(&mut entry, "hw-address", hw_address.map(text))?;
        composer.try_add_some(
            &mut entry,
            "ip-addresses",
            self.nested_strings(&reservation.ip_addresses),
        )?;
        composer.try_add_some(
            &mut entry,
            "prefixes",
            self.nested_strings(&reservation.prefixes),
        )?;
        composer.try_add_some(
            &mut entry,
            "hostname",
            present(reservation.hostname.as_ref()).map(text),
        )?;
        composer.try_add_some(
            &mut entry,
            "client-classes",
            self.nested_strings(&reservation.client_classes),
        )?;
        composer.try_add_some(
            &mut entry,
            "option-data",
            self.nested_options(&reservation.option_data),
        )?;
        Ok(object(entry))
    }

    pub(super) fn client_class(&self, class: &ClientClass) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "name",
            required_text("client-class", "name", &class.name),
        )?;
        composer.try_add_some(&mut entry, "test", present(class.test.as_ref()).map(text))?;
        composer.try_add_some(
            &mut entry,
            "option-data",
            self.nested_options(&class.option_data),
        )?;
        Ok(object(entry))
    }

    pub(super) fn output_option(&self, output: &LoggerOutput) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "output",
            required_text("output-option", "output", &output.output),
        )?;
        composer.try_add_some(&mut entry, "maxsize", output.maxsize.map(scalar))?;
        composer.try_add_some(&mut entry, "maxver", output.maxver.map(scalar))?;
        composer.try_add_some(&mut entry, "flush", output.flush.map(scalar))?;
        Ok(object(entry))
    }

    pub(super) fn tsig_key(&self, key: &TsigKey) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "name",
            required_text("tsig-key", "name", &key.name),
        )?;
        composer.try_add(
            &mut entry,
            "algorithm",
            required_text("tsig-key", "algorithm", &key.algorithm),
        )?;
        composer.try_add(
            &mut entry,
            "secret",
            required_text("tsig-key", "secret", &key.secret),
        )?;
        Ok(object(entry))
    }

    pub(super) fn dns_server(&self, server: &DnsServer) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "ip-address",
            required_text("dns-server", "ip-address", &server.ip_address),
        )?;
        composer.try_add_some(&mut entry, "port", server.port.map(scalar))?;
        Ok(object(entry))
    }

    pub(super) fn hook_library(&self, hook: &HookLibrary) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "library",
            required_text("hook-library", "library", &hook.library),
        )?;
        composer.try_add_some(&mut entry, "parameters", hook.parameters.clone().map(Ok))?;
        Ok(object(entry))
    }

    /// Array of strings; always present.
    pub(super) fn strings(&self, values: &[String]) -> BuildResult {
        self.composer.array(values, |value| text(value))
    }

    /// Array of strings, left out when empty.
    pub(super) fn nested_strings(&self, values: &[String]) -> Option<BuildResult> {
        (!values.is_empty()).then(|| self.strings(values))
    }
}

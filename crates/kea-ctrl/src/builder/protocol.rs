//! Top-level documents: `Dhcp4`, `Dhcp6` and `DhcpDdns`.

use crate::document::{AttachPolicy, BuildResult, Object, object, required_text, scalar, text};
use crate::model::{ConfigModel, DdnsDomain, DdnsSettings};

use super::{ConfigBuilder, Daemon, present};

impl<P: AttachPolicy> ConfigBuilder<P> {
    pub(super) fn dhcp4_document(&self, model: &ConfigModel) -> BuildResult {
        let composer = &self.composer;
        let settings = &model.dhcp4;
        let mut root = Object::new();
        composer.try_add(
            &mut root,
            "interfaces-config",
            self.interfaces_config(&model.interfaces),
        )?;
        composer.try_add_some(&mut root, "authoritative", model.authoritative.map(scalar))?;
        self.lifetimes(&mut root, &settings.lifetimes, false)?;
        self.server_common(&mut root, model)?;
        composer.try_add(
            &mut root,
            "option-data",
            self.options(&settings.option_data),
        )?;
        composer.try_add(
            &mut root,
            "client-classes",
            self.client_classes(&settings.client_classes),
        )?;
        composer.try_add(
            &mut root,
            "subnet4",
            composer.array(&settings.subnets, |subnet| self.subnet4(subnet)),
        )?;
        composer.try_add_some(
            &mut root,
            "shared-networks",
            (!settings.shared_networks.is_empty()).then(|| {
                composer.array(&settings.shared_networks, |network| self.shared_network4(network))
            }),
        )?;
        composer.try_add(
            &mut root,
            "loggers",
            self.loggers(Daemon::Dhcp4, &model.loggers),
        )?;
        Ok(object(root))
    }

    pub(super) fn dhcp6_document(&self, model: &ConfigModel) -> BuildResult {
        let composer = &self.composer;
        let settings = &model.dhcp6;
        let mut root = Object::new();
        composer.try_add(
            &mut root,
            "interfaces-config",
            self.interfaces_config(&model.interfaces),
        )?;
        self.lifetimes(&mut root, &settings.lifetimes, true)?;
        composer.try_add_some(
            &mut root,
            "server-id",
            settings.server_id.as_ref().map(|server_id| self.server_id(server_id)),
        )?;
        self.server_common(&mut root, model)?;
        composer.try_add(
            &mut root,
            "option-data",
            self.options(&settings.option_data),
        )?;
        composer.try_add(
            &mut root,
            "client-classes",
            self.client_classes(&settings.client_classes),
        )?;
        composer.try_add(
            &mut root,
            "subnet6",
            composer.array(&settings.subnets, |subnet| self.subnet6(subnet)),
        )?;
        composer.try_add_some(
            &mut root,
            "shared-networks",
            (!settings.shared_networks.is_empty()).then(|| {
                composer.array(&settings.shared_networks, |network| self.shared_network6(network))
            }),
        )?;
        composer.try_add(
            &mut root,
            "loggers",
            self.loggers(Daemon::Dhcp6, &model.loggers),
        )?;
        Ok(object(root))
    }

    /// The D2 document is built from the DDNS settings; a model without them
    /// yields a document with empty key and domain lists.
    pub(super) fn d2_document(&self, model: &ConfigModel) -> BuildResult {
        let composer = &self.composer;
        let fallback = DdnsSettings::default();
        let ddns = model.ddns.as_ref().unwrap_or(&fallback);
        let mut root = Object::new();
        composer.try_add_some(
            &mut root,
            "ip-address",
            present(ddns.listen_ip.as_ref()).map(text),
        )?;
        composer.try_add_some(&mut root, "port", ddns.listen_port.map(scalar))?;
        composer.try_add_some(
            &mut root,
            "control-socket",
            model.control_socket.as_ref().map(|socket| self.control_socket(socket)),
        )?;
        composer.try_add(
            &mut root,
            "tsig-keys",
            composer.array(&ddns.tsig_keys, |key| self.tsig_key(key)),
        )?;
        composer.try_add(
            &mut root,
            "forward-ddns",
            self.ddns_zone_list(&ddns.forward_domains),
        )?;
        composer.try_add(
            &mut root,
            "reverse-ddns",
            self.ddns_zone_list(&ddns.reverse_domains),
        )?;
        composer.try_add(
            &mut root,
            "loggers",
            self.loggers(Daemon::D2, &model.loggers),
        )?;
        Ok(object(root))
    }

    fn ddns_zone_list(&self, domains: &[DdnsDomain]) -> BuildResult {
        let composer = &self.composer;
        let mut section = Object::new();
        composer.try_add(
            &mut section,
            "ddns-domains",
            composer.array(domains, |domain| self.ddns_domain(domain)),
        )?;
        Ok(object(section))
    }

    fn ddns_domain(&self, domain: &DdnsDomain) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "name",
            required_text("ddns-domain", "name", &domain.name),
        )?;
        composer.try_add_some(
            &mut entry,
            "key-name",
            present(domain.key_name.as_ref()).map(text),
        )?;
        composer.try_add(
            &mut entry,
            "dns-servers",
            composer.array(&domain.dns_servers, |server| self.dns_server(server)),
        )?;
        Ok(object(entry))
    }
}

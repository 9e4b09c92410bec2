//! Sections shared by the server documents.

use crate::document::{AttachPolicy, BuildResult, Object, object, required_text, scalar, text};
use crate::error::BuildError;
use crate::model::{
    ClientClass, ConfigModel, ControlSocket, DdnsSettings, HookLibrary, LeaseDatabase, Lifetimes,
    Logger, ServerId,
};

use super::{ConfigBuilder, Daemon, present};

impl<P: AttachPolicy> ConfigBuilder<P> {
    pub(super) fn interfaces_config(&self, interfaces: &[String]) -> BuildResult {
        let mut section = Object::new();
        self.composer
            .try_add(&mut section, "interfaces", self.strings(interfaces))?;
        Ok(object(section))
    }

    pub(super) fn lease_database(&self, database: &LeaseDatabase) -> BuildResult {
        let composer = &self.composer;
        let mut section = Object::new();
        composer.try_add(
            &mut section,
            "type",
            required_text("lease-database", "type", &database.db_type),
        )?;
        composer.try_add_some(
            &mut section,
            "name",
            present(database.name.as_ref()).map(text),
        )?;
        composer.try_add(&mut section, "persist", scalar(database.persist))?;
        composer.try_add_some(
            &mut section,
            "lfc-interval",
            database.lfc_interval.map(scalar),
        )?;
        Ok(object(section))
    }

    pub(super) fn control_socket(&self, socket: &ControlSocket) -> BuildResult {
        let composer = &self.composer;
        let mut section = Object::new();
        composer.try_add(
            &mut section,
            "socket-type",
            required_text("control-socket", "socket-type", &socket.socket_type),
        )?;
        composer.try_add(
            &mut section,
            "socket-name",
            required_text("control-socket", "socket-name", &socket.socket_name),
        )?;
        Ok(object(section))
    }

    pub(super) fn hooks_libraries(&self, hooks: &[HookLibrary]) -> BuildResult {
        self.composer.array(hooks, |hook| self.hook_library(hook))
    }

    pub(super) fn client_classes(&self, classes: &[ClientClass]) -> BuildResult {
        self.composer.array(classes, |class| self.client_class(class))
    }

    /// Loggers that belong to `daemon`; always present, possibly empty.
    pub(super) fn loggers(&self, daemon: Daemon, loggers: &[Logger]) -> BuildResult {
        self.composer.array(
            loggers
                .iter()
                .filter(|logger| daemon.accepts_logger(&logger.name)),
            |logger| self.logger(logger),
        )
    }

    fn logger(&self, logger: &Logger) -> BuildResult {
        let composer = &self.composer;
        let mut entry = Object::new();
        composer.try_add(
            &mut entry,
            "name",
            required_text("logger", "name", &logger.name),
        )?;
        composer.try_add(
            &mut entry,
            "output_options",
            composer.array(&logger.output_options, |output| self.output_option(output)),
        )?;
        composer.try_add_some(
            &mut entry,
            "severity",
            present(logger.severity.as_ref()).map(text),
        )?;
        composer.try_add_some(&mut entry, "debuglevel", logger.debuglevel.map(scalar))?;
        Ok(object(entry))
    }

    /// Client side of dynamic DNS, as used by the DHCP servers.
    pub(super) fn dhcp_ddns(&self, ddns: &DdnsSettings) -> BuildResult {
        let composer = &self.composer;
        let mut section = Object::new();
        composer.try_add(&mut section, "enable-updates", scalar(ddns.enable_updates))?;
        composer.try_add_some(
            &mut section,
            "server-ip",
            present(ddns.server_ip.as_ref()).map(text),
        )?;
        composer.try_add_some(&mut section, "server-port", ddns.server_port.map(scalar))?;
        Ok(object(section))
    }

    pub(super) fn server_id(&self, server_id: &ServerId) -> BuildResult {
        let composer = &self.composer;
        let mut section = Object::new();
        composer.try_add(
            &mut section,
            "type",
            required_text("server-id", "type", &server_id.id_type),
        )?;
        composer.try_add_some(
            &mut section,
            "identifier",
            present(server_id.identifier.as_ref()).map(text),
        )?;
        Ok(object(section))
    }

    /// Attaches the lifetime and timer keys that are set.
    ///
    /// `preferred-lifetime` only exists in DHCPv6 and leads the group there.
    pub(super) fn lifetimes(
        &self,
        parent: &mut Object,
        lifetimes: &Lifetimes,
        with_preferred: bool,
    ) -> Result<(), BuildError> {
        let composer = &self.composer;
        if with_preferred {
            composer.try_add_some(
                parent,
                "preferred-lifetime",
                lifetimes.preferred_lifetime.map(scalar),
            )?;
        }
        composer.try_add_some(
            parent,
            "valid-lifetime",
            lifetimes.valid_lifetime.map(scalar),
        )?;
        composer.try_add_some(
            parent,
            "min-valid-lifetime",
            lifetimes.min_valid_lifetime.map(scalar),
        )?;
        composer.try_add_some(
            parent,
            "max-valid-lifetime",
            lifetimes.max_valid_lifetime.map(scalar),
        )?;
        composer.try_add_some(parent, "renew-timer", lifetimes.renew_timer.map(scalar))?;
        composer.try_add_some(parent, "rebind-timer", lifetimes.rebind_timer.map(scalar))?;
        Ok(())
    }

    /// Sections every server document carries between the lifetimes and the
    /// option data.
    pub(super) fn server_common(
        &self,
        parent: &mut Object,
        model: &ConfigModel,
    ) -> Result<(), BuildError> {
        let composer = &self.composer;
        composer.try_add(
            parent,
            "lease-database",
            self.lease_database(&model.lease_database),
        )?;
        composer.try_add_some(
            parent,
            "control-socket",
            model.control_socket.as_ref().map(|socket| self.control_socket(socket)),
        )?;
        composer.try_add(
            parent,
            "hooks-libraries",
            self.hooks_libraries(&model.hooks_libraries),
        )?;
        if let Some(ddns) = &model.ddns {
            composer.try_add(parent, "dhcp-ddns", self.dhcp_ddns(ddns))?;
            composer.try_add_some(
                parent,
                "ddns-qualifying-suffix",
                present(ddns.qualifying_suffix.as_ref()).map(text),
            )?;
        }
        Ok(())
    }
}

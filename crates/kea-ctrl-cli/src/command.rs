//! Maps parsed commands onto context calls.

use std::fs;
use std::path::Path;

use kea_ctrl::model::ConfigModel;
use kea_ctrl::{
    Context, Family, Response, Service, Transport, build_d2_config, build_dhcp4_config,
    build_dhcp6_config,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cli::{
    CacheAction, ClassAction, CliCommand, ConfigAction, DocumentTarget, LeaseAction,
    ReservationAction, StatisticAction, SubnetAction,
};
use crate::errors::AppError;

/// Result of a command: the agent's response or a locally built document.
#[derive(Debug)]
pub(crate) enum Outcome {
    Response(Response),
    Document(Value),
}

/// Runs `command` against the agent behind `context`.
///
/// `build` only reads the model file and never sends a request.
pub(crate) fn execute<T: Transport>(
    context: &mut Context<T>,
    command: &CliCommand,
) -> Result<Outcome, AppError> {
    let response = match command {
        CliCommand::ListCommands { service } => context.list_commands(service)?,
        CliCommand::VersionGet { services } => context.version_get(service_selector(services))?,
        CliCommand::StatusGet { service } => context.status_get(service)?,
        CliCommand::Shutdown { service } => context.shutdown(service)?,
        CliCommand::BuildReport { service } => context.build_report(service)?,
        CliCommand::ServerTagGet { service } => context.server_tag_get(service)?,
        CliCommand::RemoteServerGet { family } => match Family::from(*family) {
            Family::V4 => context.remote_server4_get()?,
            Family::V6 => context.remote_server6_get()?,
        },
        CliCommand::Build { target, model } => {
            return build_from_file(*target, model).map(Outcome::Document);
        }
        CliCommand::Config { action } => config(context, action)?,
        CliCommand::Subnet { family, action } => subnet(context, (*family).into(), action)?,
        CliCommand::Lease { family, action } => lease(context, (*family).into(), action)?,
        CliCommand::Reservation { service, action } => reservation(context, service, action)?,
        CliCommand::Statistic { service, action } => statistic(context, service, action)?,
        CliCommand::Class { service, action } => class(context, service, action)?,
        CliCommand::Cache { service, action } => match action {
            CacheAction::Clear => context.cache_clear(service)?,
            CacheAction::Size => context.cache_size(service)?,
            CacheAction::Get => context.cache_get(service)?,
        },
    };
    Ok(Outcome::Response(response))
}

fn service_selector(services: &[String]) -> Service {
    match services {
        [] => Service::Unscoped,
        [single] => Service::Single(single.clone()),
        many => Service::Multiple(many.to_vec()),
    }
}

fn config<T: Transport>(
    context: &mut Context<T>,
    action: &ConfigAction,
) -> Result<Response, AppError> {
    let response = match action {
        ConfigAction::Get { service } => context.config_get(service)?,
        ConfigAction::Set { service, file } => context.config_set(service, read_json(file)?)?,
        ConfigAction::Test { service, file } => context.config_test(service, read_json(file)?)?,
        ConfigAction::Reload { service } => context.config_reload(service)?,
        ConfigAction::Write { service, filename } => context.config_write(service, filename)?,
        ConfigAction::BackendPull { service } => context.config_backend_pull(service)?,
        ConfigAction::HashGet { service } => context.config_hash_get(service)?,
        ConfigAction::Apply {
            target,
            model,
            check_only,
        } => {
            let document = build_from_file(*target, model)?;
            if *check_only {
                context.config_test(target.service(), document)?
            } else {
                context.config_set(target.service(), document)?
            }
        }
    };
    Ok(response)
}

fn subnet<T: Transport>(
    context: &mut Context<T>,
    family: Family,
    action: &SubnetAction,
) -> Result<Response, AppError> {
    let response = match (family, action) {
        (Family::V4, SubnetAction::List) => context.subnet4_list()?,
        (Family::V6, SubnetAction::List) => context.subnet6_list()?,
        (Family::V4, SubnetAction::Get { id }) => context.subnet4_get(*id)?,
        (Family::V6, SubnetAction::Get { id }) => context.subnet6_get(*id)?,
        (Family::V4, SubnetAction::Add { file }) => context.subnet4_add(read_json(file)?)?,
        (Family::V6, SubnetAction::Add { file }) => context.subnet6_add(read_json(file)?)?,
        (Family::V4, SubnetAction::Del { id }) => context.subnet4_del(*id)?,
        (Family::V6, SubnetAction::Del { id }) => context.subnet6_del(*id)?,
        (Family::V4, SubnetAction::Update { file }) => context.subnet4_update(read_json(file)?)?,
        (Family::V6, SubnetAction::Update { file }) => context.subnet6_update(read_json(file)?)?,
    };
    Ok(response)
}

fn lease<T: Transport>(
    context: &mut Context<T>,
    family: Family,
    action: &LeaseAction,
) -> Result<Response, AppError> {
    let response = match (family, action) {
        (Family::V4, LeaseAction::Add { file }) => context.lease4_add(read_json(file)?)?,
        (Family::V6, LeaseAction::Add { file }) => context.lease6_add(read_json(file)?)?,
        (Family::V4, LeaseAction::Del { ip }) => context.lease4_del(ip)?,
        (Family::V6, LeaseAction::Del { ip }) => context.lease6_del(ip)?,
        (Family::V4, LeaseAction::Get { ip }) => context.lease4_get_by_ip(ip)?,
        (Family::V6, LeaseAction::Get { ip }) => context.lease6_get_by_ip(ip)?,
        (Family::V4, LeaseAction::GetByHwAddress { hw_address }) => {
            context.lease4_get_by_hw_address(hw_address)?
        }
        (Family::V4, LeaseAction::GetByClientId { client_id }) => {
            context.lease4_get_by_client_id(client_id)?
        }
        (Family::V6, LeaseAction::GetByDuid { duid, iaid }) => {
            context.lease6_get_by_duid(duid, *iaid)?
        }
        (Family::V4, LeaseAction::GetAll { subnet_id }) => context.lease4_get_all(*subnet_id)?,
        (Family::V6, LeaseAction::GetAll { subnet_id }) => context.lease6_get_all(*subnet_id)?,
        (Family::V4, LeaseAction::Wipe { subnet_id }) => context.lease4_wipe(*subnet_id)?,
        (Family::V6, LeaseAction::Wipe { subnet_id }) => context.lease6_wipe(*subnet_id)?,
        (Family::V6, LeaseAction::GetByHwAddress { .. }) => {
            return Err(AppError::FamilyMismatch {
                command: "lease get-by-hw-address",
                family: 4,
            });
        }
        (Family::V6, LeaseAction::GetByClientId { .. }) => {
            return Err(AppError::FamilyMismatch {
                command: "lease get-by-client-id",
                family: 4,
            });
        }
        (Family::V4, LeaseAction::GetByDuid { .. }) => {
            return Err(AppError::FamilyMismatch {
                command: "lease get-by-duid",
                family: 6,
            });
        }
    };
    Ok(response)
}

fn reservation<T: Transport>(
    context: &mut Context<T>,
    service: &str,
    action: &ReservationAction,
) -> Result<Response, AppError> {
    let response = match action {
        ReservationAction::Add { file } => context.reservation_add(service, read_json(file)?)?,
        ReservationAction::Del { subnet_id, ip } => {
            context.reservation_del_by_ip(service, *subnet_id, ip)?
        }
        ReservationAction::Get { ip } => context.reservation_get_by_ip(service, ip)?,
        ReservationAction::GetAll { subnet_id } => {
            context.reservation_get_all(service, *subnet_id)?
        }
    };
    Ok(response)
}

fn statistic<T: Transport>(
    context: &mut Context<T>,
    service: &str,
    action: &StatisticAction,
) -> Result<Response, kea_ctrl::TransactionError> {
    match action {
        StatisticAction::Get { name } => context.statistic_get(service, name),
        StatisticAction::GetAll => context.statistic_get_all(service),
        StatisticAction::Reset { name } => context.statistic_reset(service, name),
        StatisticAction::ResetAll => context.statistic_reset_all(service),
        StatisticAction::Remove { name } => context.statistic_remove(service, name),
        StatisticAction::RemoveAll => context.statistic_remove_all(service),
    }
}

fn class<T: Transport>(
    context: &mut Context<T>,
    service: &str,
    action: &ClassAction,
) -> Result<Response, AppError> {
    let response = match action {
        ClassAction::Add { file } => context.class_add(service, read_json(file)?)?,
        ClassAction::Del { name } => context.class_del(service, name)?,
        ClassAction::List => context.class_list(service)?,
    };
    Ok(response)
}

fn build_from_file(target: DocumentTarget, path: &Path) -> Result<Value, AppError> {
    let model: ConfigModel = read_json(path)?;
    let document = match target {
        DocumentTarget::Dhcp4 => build_dhcp4_config(&model)?,
        DocumentTarget::Dhcp6 => build_dhcp6_config(&model)?,
        DocumentTarget::D2 => build_d2_config(&model)?,
    };
    Ok(document)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

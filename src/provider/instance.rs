//! ECS instance launch parameters
//!
//! Shapes the `RunInstances` request for a Machine from its decoded provider
//! spec and credentials secret, and describes the Machine once ECS has
//! returned an instance ID.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use tracing::debug;

use alicloud_common::credentials::AlicloudCredentials;
use alicloud_common::crd::ProviderSpec;
use alicloud_common::Error;

use super::hostname::instance_id_to_name;
use super::provider_id::encode_provider_id;
use super::tags::{to_instance_tags, InstanceTag};

/// The system disk as sent to ECS
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesSystemDisk {
    /// Disk category
    pub category: String,
    /// Size in GiB
    pub size: i32,
}

/// A data disk as sent to ECS
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesDataDisk {
    /// ECS disk name: `<machine>-<disk>-data-disk`
    pub disk_name: String,
    /// Disk category
    pub category: String,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Whether the disk is encrypted
    pub encrypted: bool,
    /// Whether the disk is released with the instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_with_instance: Option<bool>,
    /// Size in GiB
    pub size: i32,
}

/// Parameters for ECS `RunInstances`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesRequest {
    /// Region to launch in
    pub region_id: String,
    /// Zone to launch in
    pub zone_id: String,
    /// Image to boot
    pub image_id: String,
    /// ECS instance type
    pub instance_type: String,
    /// Instance name, set to the Machine name
    pub instance_name: String,
    /// Security group
    #[serde(skip_serializing_if = "String::is_empty")]
    pub security_group_id: String,
    /// VSwitch
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: String,
    /// Fixed private IP
    #[serde(skip_serializing_if = "String::is_empty")]
    pub private_ip_address: String,
    /// Key pair for node access
    pub key_pair_name: String,
    /// Base64-encoded user data
    pub user_data: String,
    /// System disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_disk: Option<RunInstancesSystemDisk>,
    /// Data disks
    #[serde(rename = "DataDisk", skip_serializing_if = "Vec::is_empty")]
    pub data_disks: Vec<RunInstancesDataDisk>,
    /// Instance billing
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance_charge_type: String,
    /// Public network billing
    #[serde(skip_serializing_if = "String::is_empty")]
    pub internet_charge_type: String,
    /// Inbound bandwidth limit in Mbit/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_max_bandwidth_in: Option<i32>,
    /// Outbound bandwidth limit in Mbit/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_max_bandwidth_out: Option<i32>,
    /// Spot strategy
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spot_strategy: String,
    /// IO optimization
    #[serde(skip_serializing_if = "String::is_empty")]
    pub io_optimized: String,
    /// Tags with the cluster tag first and the role tag second
    #[serde(rename = "Tag")]
    pub tags: Vec<InstanceTag>,
}

impl RunInstancesRequest {
    /// Build the launch request for a Machine
    pub fn build(
        machine_name: &str,
        spec: &ProviderSpec,
        credentials: &AlicloudCredentials,
    ) -> Result<Self, Error> {
        if machine_name.is_empty() {
            return Err(Error::validation_for_field(
                "metadata.name",
                "machine name is required",
            ));
        }

        let tags = to_instance_tags(&spec.tags)?;

        let data_disks = spec
            .data_disks
            .iter()
            .map(|disk| RunInstancesDataDisk {
                disk_name: format!("{}-{}-data-disk", machine_name, disk.name),
                category: disk.category.clone(),
                description: disk.description.clone(),
                encrypted: disk.encrypted,
                delete_with_instance: disk.delete_with_instance,
                size: disk.size,
            })
            .collect();

        debug!(
            machine = %machine_name,
            region = %spec.region,
            zone = %spec.zone_id,
            tags = tags.len(),
            "Built RunInstances request"
        );

        Ok(Self {
            region_id: spec.region.clone(),
            zone_id: spec.zone_id.clone(),
            image_id: spec.image_id.clone(),
            instance_type: spec.instance_type.clone(),
            instance_name: machine_name.to_string(),
            security_group_id: spec.security_group_id.clone(),
            v_switch_id: spec.v_switch_id.clone(),
            private_ip_address: spec.private_ip_address.clone(),
            key_pair_name: spec.key_pair_name.clone(),
            user_data: STANDARD.encode(&credentials.user_data),
            system_disk: spec
                .system_disk
                .as_ref()
                .map(|disk| RunInstancesSystemDisk {
                    category: disk.category.clone(),
                    size: disk.size,
                }),
            data_disks,
            instance_charge_type: spec.instance_charge_type.clone(),
            internet_charge_type: spec.internet_charge_type.clone(),
            internet_max_bandwidth_in: spec.internet_max_bandwidth_in,
            internet_max_bandwidth_out: spec.internet_max_bandwidth_out,
            spot_strategy: spec.spot_strategy.clone(),
            io_optimized: spec.io_optimized.clone(),
            tags,
        })
    }
}

/// Identity of a Machine after its instance was created
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedMachine {
    /// `<region>.<instanceID>`
    pub provider_id: String,
    /// Hostname the node registers with
    pub node_name: String,
}

impl CreatedMachine {
    /// Describe the Machine backed by `instance_id` in `region`
    pub fn new(region: &str, instance_id: &str) -> Self {
        Self {
            provider_id: encode_provider_id(region, instance_id),
            node_name: instance_id_to_name(instance_id),
        }
    }
}

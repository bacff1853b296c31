//! Alicloud provider spec (ECS)
//!
//! The provider-specific half of a MachineClass: everything needed to launch
//! one ECS instance. Field names follow the wire format used by existing
//! MachineClass objects, which is not consistently camelCase (`imageID`,
//! `vSwitchID`, `IoOptimized`), so every field is renamed explicitly.
//!
//! Reference: <https://www.alibabacloud.com/help/en/ecs/developer-reference/api-ecs-2014-05-26-runinstances>

use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, CLUSTER_TAG_MARKER, ROLE_TAG_MARKER};

/// Alicloud ECS machine configuration
///
/// Missing fields decode to their defaults; required fields are checked by
/// [`ProviderSpec::validate`] rather than by the decoder.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ProviderSpec {
    /// API version of the provider spec
    #[serde(rename = "apiVersion", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    // ==========================================================================
    // Required Fields (always serialized, even when empty)
    // ==========================================================================
    /// Image ID to boot from (e.g., "coreos_2023_4_0_64_30G_alibase_20230327.vhd")
    #[serde(rename = "imageID")]
    pub image_id: String,

    /// ECS instance type (e.g., "ecs.g6.large")
    #[serde(rename = "instanceType")]
    pub instance_type: String,

    /// Region ID (e.g., "cn-hangzhou")
    pub region: String,

    /// Zone ID within the region (e.g., "cn-hangzhou-h")
    #[serde(rename = "zoneID")]
    pub zone_id: String,

    /// VSwitch the primary network interface attaches to
    #[serde(rename = "vSwitchID")]
    pub v_switch_id: String,

    /// Key pair registered in the region for node access
    #[serde(rename = "keyPairName")]
    pub key_pair_name: String,

    // ==========================================================================
    // Network (Optional)
    // ==========================================================================
    /// Security group for the instance
    #[serde(rename = "securityGroupID", skip_serializing_if = "String::is_empty")]
    pub security_group_id: String,

    /// Fixed private IP inside the vswitch CIDR
    #[serde(rename = "privateIPAddress", skip_serializing_if = "String::is_empty")]
    pub private_ip_address: String,

    /// Inbound public bandwidth limit in Mbit/s
    #[serde(
        rename = "internetMaxBandwidthIn",
        skip_serializing_if = "Option::is_none"
    )]
    pub internet_max_bandwidth_in: Option<i32>,

    /// Outbound public bandwidth limit in Mbit/s
    #[serde(
        rename = "internetMaxBandwidthOut",
        skip_serializing_if = "Option::is_none"
    )]
    pub internet_max_bandwidth_out: Option<i32>,

    /// "PayByTraffic" or "PayByBandwidth"
    #[serde(rename = "internetChargeType", skip_serializing_if = "String::is_empty")]
    pub internet_charge_type: String,

    // ==========================================================================
    // Disks (Optional)
    // ==========================================================================
    /// System (root) disk
    #[serde(rename = "systemDisk", skip_serializing_if = "Option::is_none")]
    pub system_disk: Option<SystemDisk>,

    /// Additional data disks
    #[serde(rename = "dataDisks", skip_serializing_if = "Vec::is_empty")]
    pub data_disks: Vec<DataDisk>,

    // ==========================================================================
    // Billing (Optional)
    // ==========================================================================
    /// "PrePaid" or "PostPaid"
    #[serde(rename = "instanceChargeType", skip_serializing_if = "String::is_empty")]
    pub instance_charge_type: String,

    /// "NoSpot", "SpotWithPriceLimit" or "SpotAsPriceGo"
    #[serde(rename = "spotStrategy", skip_serializing_if = "String::is_empty")]
    pub spot_strategy: String,

    /// "none" or "optimized"
    #[serde(rename = "IoOptimized", skip_serializing_if = "String::is_empty")]
    pub io_optimized: String,

    // ==========================================================================
    // Tags
    // ==========================================================================
    /// Instance tags. Must include a `kubernetes.io/cluster/` key and a
    /// `kubernetes.io/role/` key.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

/// System disk configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct SystemDisk {
    /// Disk category (e.g., "cloud_efficiency", "cloud_essd")
    pub category: String,
    /// Size in GiB
    pub size: i32,
}

/// Data disk configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DataDisk {
    /// Short name, unique within the spec; used to build the ECS disk name
    pub name: String,
    /// Disk category (e.g., "cloud_efficiency", "cloud_essd")
    pub category: String,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Whether the disk is encrypted
    pub encrypted: bool,
    /// Whether the disk is released together with the instance
    #[serde(rename = "deleteWithInstance", skip_serializing_if = "Option::is_none")]
    pub delete_with_instance: Option<bool>,
    /// Size in GiB
    pub size: i32,
}

impl ProviderSpec {
    /// Collect every validation problem in the spec
    pub fn validation_errors(&self) -> Vec<Error> {
        let mut errors = Vec::new();

        let required = [
            ("imageID", &self.image_id),
            ("region", &self.region),
            ("zoneID", &self.zone_id),
            ("instanceType", &self.instance_type),
            ("vSwitchID", &self.v_switch_id),
            ("keyPairName", &self.key_pair_name),
        ];
        for (field, value) in required {
            if value.is_empty() {
                errors.push(Error::validation_for_field(
                    format!("providerSpec.{}", field),
                    format!("{} is required", field),
                ));
            }
        }

        if let Some(ref disk) = self.system_disk {
            if disk.size <= 0 {
                errors.push(Error::validation_for_field(
                    "providerSpec.systemDisk.size",
                    "system disk size must be positive",
                ));
            }
        }

        let mut seen = BTreeSet::new();
        for (i, disk) in self.data_disks.iter().enumerate() {
            if disk.name.is_empty() {
                errors.push(Error::validation_for_field(
                    format!("providerSpec.dataDisks[{}].name", i),
                    "data disk name is required",
                ));
            } else if !seen.insert(disk.name.as_str()) {
                errors.push(Error::validation_for_field(
                    format!("providerSpec.dataDisks[{}].name", i),
                    format!("data disk name '{}' is used more than once", disk.name),
                ));
            }
            if disk.size <= 0 {
                errors.push(Error::validation_for_field(
                    format!("providerSpec.dataDisks[{}].size", i),
                    "data disk size must be positive",
                ));
            }
        }

        if !self.tags.keys().any(|k| k.contains(CLUSTER_TAG_MARKER)) {
            errors.push(Error::validation_for_field(
                "providerSpec.tags",
                format!("a tag key containing {} is required", CLUSTER_TAG_MARKER),
            ));
        }
        if !self.tags.keys().any(|k| k.contains(ROLE_TAG_MARKER)) {
            errors.push(Error::validation_for_field(
                "providerSpec.tags",
                format!("a tag key containing {} is required", ROLE_TAG_MARKER),
            ));
        }

        errors
    }

    /// Validate the spec, reporting all problems in a single error
    ///
    /// The returned error carries the field path of the first problem.
    pub fn validate(&self) -> Result<(), Error> {
        let errors = self.validation_errors();
        let Some(first) = errors.first() else {
            return Ok(());
        };

        let field = first.field().map(str::to_string);
        let message = errors
            .iter()
            .map(|e| match e {
                Error::Validation { message, .. } => message.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; ");

        Err(Error::Validation { message, field })
    }
}

//! MachineClass resource consumed from the machine controller
//!
//! The controller owns this type; the provider only reads it. The provider
//! spec travels as an opaque JSON blob and is decoded by the driver.

use k8s_openapi::api::core::v1::SecretReference;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use serde::{Deserialize, Serialize};

/// Provider name a MachineClass must carry to be served by this driver
pub const ALICLOUD_PROVIDER_NAME: &str = "Alicloud";

/// MachineClass (`machine.sapcloud.io/v1alpha1`)
///
/// Example:
/// ```yaml
/// apiVersion: machine.sapcloud.io/v1alpha1
/// kind: MachineClass
/// metadata:
///   name: shoot-worker-a
/// provider: Alicloud
/// providerSpec:
///   imageID: m-abc
///   instanceType: ecs.g6.large
///   region: cn-hangzhou
///   ...
/// secretRef:
///   name: cloudprovider
///   namespace: shoot--dev--a
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineClass {
    /// API version of the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Resource kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Standard object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Provider-specific configuration, decoded into a `ProviderSpec`
    #[serde(default)]
    pub provider_spec: RawExtension,

    /// Secret holding user data (and, for older classes, credentials)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretReference>,

    /// Secret holding cloud credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_secret_ref: Option<SecretReference>,

    /// Name of the provider serving this class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl MachineClass {
    /// Name of the class, or an empty string if unset
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Whether this class is meant for the Alicloud driver
    ///
    /// Classes without a provider are accepted.
    pub fn is_alicloud(&self) -> bool {
        self.provider
            .as_deref()
            .is_none_or(|p| p == ALICLOUD_PROVIDER_NAME)
    }
}

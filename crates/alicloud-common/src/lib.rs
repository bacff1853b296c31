//! Common types for the Alicloud machine provider: resources, credentials, errors

#![deny(missing_docs)]

pub mod credentials;
pub mod crd;
pub mod error;
pub mod telemetry;

pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Substring marking the cluster ownership tag (`kubernetes.io/cluster/<name>`)
pub const CLUSTER_TAG_MARKER: &str = "kubernetes.io/cluster/";

/// Substring marking the node role tag (`kubernetes.io/role/<role>`)
pub const ROLE_TAG_MARKER: &str = "kubernetes.io/role/";

/// Name of the CSI driver for Alibaba Cloud disks
pub const ALICLOUD_CSI_DRIVER_NAME: &str = "diskplugin.csi.alibabacloud.com";

//! Resource types read by the Alicloud machine provider
//!
//! - [`MachineClass`] - the controller's resource carrying the raw provider spec
//! - [`ProviderSpec`] - the decoded ECS machine configuration

mod machine_class;
mod provider_spec;

pub use machine_class::{MachineClass, ALICLOUD_PROVIDER_NAME};
pub use provider_spec::{DataDisk, ProviderSpec, SystemDisk};

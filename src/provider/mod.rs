//! Alicloud machine driver helpers
//!
//! Everything here is pure: no ECS calls are made. The driver's create,
//! delete and status paths compose these pieces around the SDK client.
//!
//! # Example
//!
//! ```text
//! let spec = decode_provider_spec(&machine_class)?;
//! let creds = AlicloudCredentials::from_secret(&secret, &SecretKeys::default())?;
//! let request = RunInstancesRequest::build(&machine.name, &spec, &creds)?;
//! // ... call ECS, receive instance_id ...
//! let created = CreatedMachine::new(&spec.region, &instance_id);
//! ```

mod hostname;
mod instance;
mod provider_id;
mod spec;
mod tags;
mod volumes;

pub use hostname::instance_id_to_name;
pub use instance::{
    CreatedMachine, RunInstancesDataDisk, RunInstancesRequest, RunInstancesSystemDisk,
};
pub use provider_id::{decode_provider_id, encode_provider_id, ProviderId};
pub use spec::{decode_provider_spec, decode_provider_spec_raw};
pub use tags::{to_instance_tags, InstanceTag, MISSING_RESERVED_TAGS};
pub use volumes::{volume_ids, ALICLOUD_FLEX_DRIVER_NAME};

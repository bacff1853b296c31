//! Provider spec decoding
//!
//! Decode failures are reported with the machine controller's status codes:
//! a malformed spec is an `Internal` error carrying the parser's message.

use serde::Deserialize;
use tonic::Status;
use tracing::debug;

use alicloud_common::crd::{MachineClass, ProviderSpec};

/// Decode the provider spec carried by a MachineClass
pub fn decode_provider_spec(machine_class: &MachineClass) -> Result<ProviderSpec, Status> {
    let spec = ProviderSpec::deserialize(&machine_class.provider_spec.0);
    decoded(spec, machine_class.name())
}

/// Decode a provider spec from its raw JSON bytes
pub fn decode_provider_spec_raw(raw: &[u8]) -> Result<ProviderSpec, Status> {
    decoded(serde_json::from_slice(raw), "")
}

fn decoded(
    result: Result<ProviderSpec, serde_json::Error>,
    machine_class: &str,
) -> Result<ProviderSpec, Status> {
    let spec = result.map_err(|e| Status::internal(e.to_string()))?;

    debug!(
        machine_class = %machine_class,
        region = %spec.region,
        instance_type = %spec.instance_type,
        "Decoded provider spec"
    );
    Ok(spec)
}

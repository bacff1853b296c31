//! Alicloud machine provider - driver helpers for ECS-backed Machines
//!
//! The machine controller hands the driver a MachineClass with an opaque
//! provider spec. This crate turns that spec into ECS launch parameters and
//! maps instances back to the identifiers the controller tracks.
//!
//! # Modules
//!
//! - [`provider`] - Spec decoding, instance tags, provider IDs, hostnames, volumes
//! - [`status`] - Error classification with the controller's status codes
//!
//! Shared resource types, credentials and errors live in [`alicloud_common`].

#![deny(missing_docs)]

pub mod provider;
pub mod status;

pub use alicloud_common::{Error, Result};

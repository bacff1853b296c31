//! Cloud provider credentials
//!
//! Reads the Alicloud access key pair and instance user data from the
//! Kubernetes secret referenced by a MachineClass.

use std::fmt;

use k8s_openapi::api::core::v1::Secret;

use crate::Error;

/// Names of the secret data keys the driver reads
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKeys {
    /// Key holding the access key ID
    pub access_key_id: String,
    /// Key holding the access key secret
    pub access_key_secret: String,
    /// Key holding the cloud-init user data
    pub user_data: String,
}

impl Default for SecretKeys {
    fn default() -> Self {
        Self {
            access_key_id: "alicloudAccessKeyID".to_string(),
            access_key_secret: "alicloudAccessKeySecret".to_string(),
            user_data: "userData".to_string(),
        }
    }
}

/// Alicloud credentials plus the user data to boot instances with
#[derive(Clone)]
pub struct AlicloudCredentials {
    /// RAM access key ID
    pub access_key_id: String,
    /// RAM access key secret
    pub access_key_secret: String,
    /// Raw user data passed to new instances
    pub user_data: Vec<u8>,
}

impl fmt::Debug for AlicloudCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlicloudCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"<redacted>")
            .field("user_data", &format_args!("<{} bytes>", self.user_data.len()))
            .finish()
    }
}

impl AlicloudCredentials {
    /// Load credentials from a K8s secret's data
    pub fn from_secret(secret: &Secret, keys: &SecretKeys) -> Result<Self, Error> {
        Ok(Self {
            access_key_id: string_value(secret, &keys.access_key_id)?,
            access_key_secret: string_value(secret, &keys.access_key_secret)?,
            user_data: raw_value(secret, &keys.user_data)?.to_vec(),
        })
    }
}

fn raw_value<'a>(secret: &'a Secret, key: &str) -> Result<&'a [u8], Error> {
    let value = secret
        .data
        .as_ref()
        .and_then(|d| d.get(key))
        .map(|v| v.0.as_slice())
        .ok_or_else(|| {
            Error::credentials_for_key(
                key,
                format!("secret {} is missing key {}", name(secret), key),
            )
        })?;

    if value.is_empty() {
        return Err(Error::credentials_for_key(
            key,
            format!("secret {} has an empty value for key {}", name(secret), key),
        ));
    }
    Ok(value)
}

fn string_value(secret: &Secret, key: &str) -> Result<String, Error> {
    let raw = raw_value(secret, key)?;
    String::from_utf8(raw.to_vec()).map_err(|_| {
        Error::credentials_for_key(
            key,
            format!("secret {} key {} is not valid UTF-8", name(secret), key),
        )
    })
}

fn name(secret: &Secret) -> &str {
    secret.metadata.name.as_deref().unwrap_or("<unnamed>")
}

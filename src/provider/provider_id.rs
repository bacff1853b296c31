//! Provider IDs
//!
//! A machine's provider ID is `<region>.<instanceID>`, e.g.
//! `cn-hangzhou.i-bp1abc`. Neither part is escaped, so an instance ID
//! containing `.` cannot be recovered. [`ProviderId`] refuses to build such
//! an ID; the free functions keep the lenient behavior existing callers rely on.

use std::fmt;
use std::str::FromStr;

use alicloud_common::Error;

const SEPARATOR: char = '.';

/// Encode a region and instance ID into a provider ID
pub fn encode_provider_id(region: &str, instance_id: &str) -> String {
    format!("{}{}{}", region, SEPARATOR, instance_id)
}

/// Extract the instance ID from a provider ID
///
/// Returns everything after the last `.`, or the whole input if there is none.
pub fn decode_provider_id(provider_id: &str) -> &str {
    provider_id
        .rsplit_once(SEPARATOR)
        .map_or(provider_id, |(_, instance_id)| instance_id)
}

/// A parsed provider ID
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProviderId {
    region: String,
    instance_id: String,
}

impl ProviderId {
    /// Build a provider ID, rejecting parts that would not survive a round trip
    pub fn new(region: impl Into<String>, instance_id: impl Into<String>) -> Result<Self, Error> {
        let region = region.into();
        let instance_id = instance_id.into();

        if region.is_empty() {
            return Err(Error::validation_for_field(
                "providerID",
                "region must not be empty",
            ));
        }
        if instance_id.is_empty() {
            return Err(Error::validation_for_field(
                "providerID",
                "instance ID must not be empty",
            ));
        }
        if instance_id.contains(SEPARATOR) {
            return Err(Error::validation_for_field(
                "providerID",
                format!("instance ID '{}' must not contain '{}'", instance_id, SEPARATOR),
            ));
        }

        Ok(Self {
            region,
            instance_id,
        })
    }

    /// Region the instance lives in
    pub fn region(&self) -> &str {
        &self.region
    }

    /// ECS instance ID
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_provider_id(&self.region, &self.instance_id))
    }
}

impl FromStr for ProviderId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (region, instance_id) = s.rsplit_once(SEPARATOR).ok_or_else(|| {
            Error::validation_for_field(
                "providerID",
                format!("provider ID '{}' is not of the form <region>.<instanceID>", s),
            )
        })?;
        Self::new(region, instance_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn encode_joins_with_dot() {
        assert_eq!(
            encode_provider_id("cn-hangzhou", "i-abc123"),
            "cn-hangzhou.i-abc123"
        );
    }

    #[test]
    fn encode_does_not_validate() {
        assert_eq!(encode_provider_id("", "i.x"), ".i.x");
    }

    #[rstest]
    #[case::simple("cn-hangzhou.i-abc123", "i-abc123")]
    #[case::no_separator("i-abc123", "i-abc123")]
    #[case::empty("", "")]
    #[case::trailing_dot("cn-hangzhou.", "")]
    #[case::last_dot_wins("a.b.c", "c")]
    fn decode_takes_text_after_last_dot(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decode_provider_id(input), expected);
    }

    #[rstest]
    #[case("cn-hangzhou", "i-abc123")]
    #[case("eu-central-1", "i-gw8cn1ak7s5yt2nbkmfh")]
    #[case("r", "i")]
    fn decode_inverts_encode(#[case] region: &str, #[case] instance_id: &str) {
        assert_eq!(
            decode_provider_id(&encode_provider_id(region, instance_id)),
            instance_id
        );
    }

    #[test]
    fn structured_id_round_trips_through_string() {
        let id = ProviderId::new("cn-beijing", "i-2ze0").expect("valid parts");
        let rendered = id.to_string();
        assert_eq!(rendered, "cn-beijing.i-2ze0");

        let parsed: ProviderId = rendered.parse().expect("rendered ID should parse");
        assert_eq!(parsed, id);
        assert_eq!(parsed.region(), "cn-beijing");
        assert_eq!(parsed.instance_id(), "i-2ze0");
    }

    #[rstest]
    #[case::no_separator("i-abc123")]
    #[case::empty_region(".i-abc123")]
    #[case::empty_instance("cn-hangzhou.")]
    fn malformed_ids_do_not_parse(#[case] input: &str) {
        let err = input.parse::<ProviderId>().expect_err("malformed provider ID");
        assert_eq!(err.field(), Some("providerID"));
    }

    #[test]
    fn instance_id_with_separator_is_rejected() {
        assert!(ProviderId::new("cn-hangzhou", "i.abc").is_err());
    }
}

//! Machine controller status codes
//!
//! The controller classifies driver failures with gRPC status codes and
//! decides whether to retry based on them.

use tonic::{Code, Status};

use alicloud_common::Error;

/// Status code reported to the controller for an error
pub fn error_code(err: &Error) -> Code {
    match err {
        Error::Validation { .. } | Error::Credentials { .. } => Code::InvalidArgument,
        Error::Serialization { .. } | Error::Internal { .. } => Code::Internal,
    }
}

/// Convert an error into the status returned to the controller
pub fn error_status(err: &Error) -> Status {
    Status::new(error_code(err), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::validation(Error::validation("imageID is required"), Code::InvalidArgument)]
    #[case::credentials(Error::credentials("missing key"), Code::InvalidArgument)]
    #[case::serialization(Error::serialization("invalid type"), Code::Internal)]
    #[case::internal(Error::internal("boom"), Code::Internal)]
    fn maps_errors_to_codes(#[case] err: Error, #[case] expected: Code) {
        let status = error_status(&err);
        assert_eq!(status.code(), expected);
        assert_eq!(status.message(), err.to_string());
    }
}

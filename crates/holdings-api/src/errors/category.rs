use std::fmt;

/// Classification of fetch failures.
///
/// | Category | Typical cause |
/// |----------|---------------|
/// | `Connectivity` | No network, DNS failure, timeout, broken transport |
/// | `ServerStatus` | Non-2xx response |
/// | `PayloadDecoding` | Body is not the expected JSON shape |
///
/// None of the categories is retried.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// The request never produced an HTTP response.
    Connectivity,

    /// The server answered with a non-success status.
    ServerStatus,

    /// The server answered but the payload could not be decoded.
    PayloadDecoding,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connectivity => "connectivity",
            Self::ServerStatus => "server_status",
            Self::PayloadDecoding => "payload_decoding",
        }
    }

    /// Short hint appended to the generic failure notice.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Connectivity => "Please check your internet connection.",
            Self::ServerStatus => "The server could not process the request.",
            Self::PayloadDecoding => "The server sent an unexpected response.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

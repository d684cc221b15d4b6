//! Verification method enum.
//!
//! Each kill declares the evidence type it will be verified with; the
//! declared method selects which strategy adjudicates it. Methods are a
//! closed set — an unrecognized string fails at report time rather than
//! producing a kill nothing can verify.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The evidence type claimed for a kill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationMethod {
    /// Killer and verifier GPS positions must be close to the kill location.
    Proximity,
    /// The victim's tap token must be presented.
    TapToken,
    /// Photo evidence, adjudicated by a moderator.
    Photo,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proximity => "PROXIMITY",
            Self::TapToken => "TAP_TOKEN",
            Self::Photo => "PHOTO",
        }
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown verification method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for VerificationMethod {
    type Err = UnknownMethod;

    /// Case-insensitive. `GPS` and `NFC` are accepted as legacy aliases for
    /// `PROXIMITY` and `TAP_TOKEN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROXIMITY" | "GPS" => Ok(Self::Proximity),
            "TAP_TOKEN" | "NFC" => Ok(Self::TapToken),
            "PHOTO" => Ok(Self::Photo),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

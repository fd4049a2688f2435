//! Execution status and revert result types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A transaction's recorded execution outcome (`ret[0].contractRet`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExecutionStatus {
    Default,
    Success,
    Revert,
    BadJumpDestination,
    OutOfMemory,
    PrecompiledContract,
    StackTooSmall,
    StackTooLarge,
    IllegalOperation,
    StackOverflow,
    OutOfEnergy,
    OutOfTime,
    JvmStackOverflow,
    Unknown,
    TransferFailed,
    InvalidCode,
    /// A status string this crate does not know, kept verbatim.
    Other(String),
}

impl ExecutionStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "DEFAULT" => Self::Default,
            "SUCCESS" => Self::Success,
            "REVERT" => Self::Revert,
            "BAD_JUMP_DESTINATION" => Self::BadJumpDestination,
            "OUT_OF_MEMORY" => Self::OutOfMemory,
            "PRECOMPILED_CONTRACT" => Self::PrecompiledContract,
            "STACK_TOO_SMALL" => Self::StackTooSmall,
            "STACK_TOO_LARGE" => Self::StackTooLarge,
            "ILLEGAL_OPERATION" => Self::IllegalOperation,
            "STACK_OVERFLOW" => Self::StackOverflow,
            "OUT_OF_ENERGY" => Self::OutOfEnergy,
            "OUT_OF_TIME" => Self::OutOfTime,
            "JVM_STACK_OVER_FLOW" => Self::JvmStackOverflow,
            "UNKNOWN" => Self::Unknown,
            "TRANSFER_FAILED" => Self::TransferFailed,
            "INVALID_CODE" => Self::InvalidCode,
            other => Self::Other(other.to_string()),
        }
    }

    /// The literal status string as the node reports it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "DEFAULT",
            Self::Success => "SUCCESS",
            Self::Revert => "REVERT",
            Self::BadJumpDestination => "BAD_JUMP_DESTINATION",
            Self::OutOfMemory => "OUT_OF_MEMORY",
            Self::PrecompiledContract => "PRECOMPILED_CONTRACT",
            Self::StackTooSmall => "STACK_TOO_SMALL",
            Self::StackTooLarge => "STACK_TOO_LARGE",
            Self::IllegalOperation => "ILLEGAL_OPERATION",
            Self::StackOverflow => "STACK_OVERFLOW",
            Self::OutOfEnergy => "OUT_OF_ENERGY",
            Self::OutOfTime => "OUT_OF_TIME",
            Self::JvmStackOverflow => "JVM_STACK_OVER_FLOW",
            Self::Unknown => "UNKNOWN",
            Self::TransferFailed => "TRANSFER_FAILED",
            Self::InvalidCode => "INVALID_CODE",
            Self::Other(s) => s,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Only an explicit revert carries a decodable reason.
    pub fn is_revert(&self) -> bool {
        matches!(self, Self::Revert)
    }

    /// Energy, time or memory exhaustion.
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::OutOfEnergy | Self::OutOfTime | Self::OutOfMemory)
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ExecutionStatus {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for ExecutionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExecutionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Outcome of revert-reason extraction.
///
/// `message` is empty unless `status` is `REVERT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevertResult {
    #[serde(rename = "txStatus")]
    pub status: ExecutionStatus,
    #[serde(rename = "revertMessage")]
    pub message: String,
}

impl RevertResult {
    /// A result with no reason, for any non-revert status.
    pub fn without_message(status: ExecutionStatus) -> Self {
        Self {
            status,
            message: String::new(),
        }
    }
}

impl fmt::Display for RevertResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{}: {}", self.status, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_literal() {
        for s in ["SUCCESS", "REVERT", "OUT_OF_ENERGY", "JVM_STACK_OVER_FLOW", "SOMETHING_NEW"] {
            assert_eq!(ExecutionStatus::parse(s).as_str(), s);
        }
    }

    #[test]
    fn status_predicates() {
        assert!(ExecutionStatus::Revert.is_revert());
        assert!(!ExecutionStatus::OutOfEnergy.is_revert());
        assert!(ExecutionStatus::OutOfEnergy.is_resource_exhausted());
        assert!(ExecutionStatus::Success.is_success());
    }

    #[test]
    fn revert_result_json_shape() {
        let r = RevertResult {
            status: ExecutionStatus::Revert,
            message: "Plot is not currently owned".into(),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["txStatus"], "REVERT");
        assert_eq!(json["revertMessage"], "Plot is not currently owned");
        assert_eq!(r.to_string(), "REVERT: Plot is not currently owned");
    }
}

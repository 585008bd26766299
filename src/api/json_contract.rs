use serde::{Deserialize, Serialize};

use crate::dom::ElementSnapshot;
use crate::error::{AlignError, AlignResult};

use super::AlignmentReport;

pub const ALIGNMENT_REPORT_JSON_SCHEMA_V1: u32 = 1;
pub const DOM_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReportJsonContractV1 {
    pub schema_version: u32,
    pub report: AlignmentReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub root: ElementSnapshot,
}

impl AlignmentReport {
    pub fn to_json_contract_v1_pretty(&self) -> AlignResult<String> {
        let payload = AlignmentReportJsonContractV1 {
            schema_version: ALIGNMENT_REPORT_JSON_SCHEMA_V1,
            report: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AlignError::InvalidData(format!("failed to serialize report contract v1: {e}"))
        })
    }

    /// Accepts either a bare report or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AlignResult<Self> {
        if let Ok(report) = serde_json::from_str::<AlignmentReport>(input) {
            return Ok(report);
        }
        let payload: AlignmentReportJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AlignError::InvalidData(format!("failed to parse report json payload: {e}"))
        })?;
        if payload.schema_version != ALIGNMENT_REPORT_JSON_SCHEMA_V1 {
            return Err(AlignError::InvalidData(format!(
                "unsupported report schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.report)
    }
}

impl ElementSnapshot {
    /// Parses a captured page, either a bare element or a versioned envelope.
    pub fn from_json_str(input: &str) -> AlignResult<Self> {
        if let Ok(payload) = serde_json::from_str::<DomSnapshotJsonContractV1>(input) {
            if payload.schema_version != DOM_SNAPSHOT_JSON_SCHEMA_V1 {
                return Err(AlignError::InvalidData(format!(
                    "unsupported dom snapshot schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.root);
        }
        serde_json::from_str::<ElementSnapshot>(input).map_err(|e| {
            AlignError::InvalidData(format!("failed to parse dom snapshot json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> AlignResult<String> {
        let payload = DomSnapshotJsonContractV1 {
            schema_version: DOM_SNAPSHOT_JSON_SCHEMA_V1,
            root: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AlignError::InvalidData(format!("failed to serialize dom snapshot contract v1: {e}"))
        })
    }
}

//! Faculty participant records and their submission.
//!
//! [`ParticipantRecord`] is the JSON body the ledger expects when creating a
//! `Faculty` participant. Type tags must match the network model exactly or the
//! ledger rejects the submission.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cli::FacultyArgs;
use crate::client::LedgerClient;
use crate::config::NAMESPACE;
use crate::decimal::Decimal;
use crate::error::Result;

pub const FACULTY_RESOURCE: &str = "Faculty";
pub const CONTACT_INFO_CONCEPT: &str = "ContactInfo";

pub const LOW_BAL_THRESHOLD: u32 = 5;
pub const TXN_THRESHOLD: u32 = 75;
pub const FACULTY_ACCESS_LEVEL: &str = "FACULTY";

/// Contact details nested in every participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(rename = "$class")]
    pub class: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ContactInfo {
    /// Contact info with only a name; every other field is empty.
    pub fn with_name(first_name: &str, last_name: &str) -> Self {
        Self {
            class: format!("{}.{}", NAMESPACE, CONTACT_INFO_CONCEPT),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
        }
    }
}

/// Participant record as submitted to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    #[serde(rename = "$class")]
    pub class: String,
    pub id: String,
    pub balance: Decimal,
    pub is_active: bool,
    pub low_bal_threshold: u32,
    pub txn_threshold: u32,
    pub access_level: String,
    pub dept: String,
    pub contact_info: ContactInfo,
}

impl ParticipantRecord {
    /// A new, active faculty member with the standard thresholds.
    pub fn faculty(args: &FacultyArgs) -> Self {
        Self {
            class: format!("{}.{}", NAMESPACE, FACULTY_RESOURCE),
            id: args.id.clone(),
            balance: args.balance,
            is_active: true,
            low_bal_threshold: LOW_BAL_THRESHOLD,
            txn_threshold: TXN_THRESHOLD,
            access_level: FACULTY_ACCESS_LEVEL.to_string(),
            dept: args.dept.clone(),
            contact_info: ContactInfo::with_name(&args.first_name, &args.last_name),
        }
    }
}

/// Error envelope the ledger returns on a rejected request.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// How the ledger answered a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// HTTP 200; carries the submitted id.
    Created(String),
    /// Any other status; carries the ledger's `error.message`.
    Rejected(String),
}

/// Submit `record` and interpret the ledger's answer.
pub async fn submit(client: &LedgerClient, record: &ParticipantRecord) -> Result<SubmitOutcome> {
    let reply = client.post_json(FACULTY_RESOURCE, record).await?;

    if reply.status == reqwest::StatusCode::OK {
        info!("created faculty {}", record.id);
        return Ok(SubmitOutcome::Created(record.id.clone()));
    }

    let envelope: ErrorEnvelope = serde_json::from_str(&reply.body)?;
    warn!(
        "ledger rejected faculty {} with status {}: {}",
        record.id, reply.status, envelope.error.message
    );
    Ok(SubmitOutcome::Rejected(envelope.error.message))
}

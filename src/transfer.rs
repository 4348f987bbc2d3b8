//! Transfer records fetched from the ledger and their history projection.
//!
//! Defines [`TransferRecord`], a single fund movement as the ledger reports it,
//! and [`HistoryRow`], the reduced form written to the history report.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::{debug, warn};

use crate::client::LedgerClient;
use crate::error::{Error, Result};

pub const TRANSFER_RESOURCE: &str = "TransferFunds";

/// Transfer record as returned by the ledger. Unknown fields are ignored.
///
/// Only the sender is needed to decide whether a record is selected; the
/// rest is checked when a selected record is projected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub from_user: String,
    #[serde(default)]
    pub to_user: Option<String>,
    /// Kept as the ledger's own numeric token.
    #[serde(default)]
    pub amount: Option<Number>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One line of the history report.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub amount: String,
    #[serde(rename = "fromuser")]
    pub from_user: String,
    #[serde(rename = "toUser")]
    pub to_user: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub timestamp: String,
}

/// Participant id part of a compound identifier: everything after the first `#`.
///
/// `org.hawkoin.network.Faculty#42` => `Some("42")`
pub fn participant_id(compound: &str) -> Option<&str> {
    compound.split_once('#').map(|(_, id)| id)
}

impl TransferRecord {
    /// Returns true if `id` sent this transfer.
    pub fn is_sent_by(&self, id: &str) -> bool {
        participant_id(&self.from_user) == Some(id)
    }

    /// Project into a report row, stripping namespaces from both parties.
    pub fn to_history_row(&self) -> Result<HistoryRow> {
        let strip = |compound: &str| {
            participant_id(compound)
                .map(str::to_string)
                .ok_or_else(|| Error::MalformedIdentifier(compound.to_string()))
        };
        let to_user = self.required("toUser", self.to_user.as_deref())?;
        let amount = self.required("amount", self.amount.as_ref())?;

        Ok(HistoryRow {
            amount: amount.to_string(),
            from_user: strip(&self.from_user)?,
            to_user: strip(to_user)?,
            transaction_id: self
                .required("transactionId", self.transaction_id.as_deref())?
                .to_string(),
            timestamp: self.required("timestamp", self.timestamp.as_deref())?.to_string(),
        })
    }

    fn required<T>(&self, field: &'static str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| Error::MissingField {
            sender: self.from_user.clone(),
            field,
        })
    }
}

/// Transfers sent by `id`, in ledger order.
pub fn sent_by(records: &[TransferRecord], id: &str) -> Result<Vec<HistoryRow>> {
    let mut rows = Vec::new();
    for record in records {
        if participant_id(&record.from_user).is_none() {
            warn!("Skipping transfer with malformed sender {:?}", record.from_user);
            continue;
        }
        if record.is_sent_by(id) {
            rows.push(record.to_history_row()?);
        }
    }
    debug!("{} of {} transfers sent by {}", rows.len(), records.len(), id);
    Ok(rows)
}

/// Fetch every transfer the ledger knows about.
pub async fn fetch_all(client: &LedgerClient) -> Result<Vec<TransferRecord>> {
    client.get_json(TRANSFER_RESOURCE).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(from: &str, to: &str, amount: &str, tx: &str) -> TransferRecord {
        TransferRecord {
            from_user: from.to_string(),
            to_user: Some(to.to_string()),
            amount: Some(amount.parse().unwrap()),
            transaction_id: Some(tx.to_string()),
            timestamp: Some("2020-01-01".to_string()),
        }
    }

    fn decode(json: &str) -> Vec<TransferRecord> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_participant_id_splits_on_first_hash() {
        assert_eq!(participant_id("org.hawkoin.network.Faculty#42"), Some("42"));
        assert_eq!(participant_id("ns#a#b"), Some("a#b"));
        assert_eq!(participant_id("ns#"), Some(""));
        assert_eq!(participant_id("no-namespace"), None);
    }

    #[test]
    fn test_deserialize_ledger_json() {
        let records = decode(
            r#"[{"$class":"org.hawkoin.network.TransferFunds",
                 "fromUser":"org.hawkoin.network.Faculty#42",
                 "toUser":"org.hawkoin.network.Faculty#7",
                 "amount":10,"transactionId":"t1","timestamp":"2020-01-01"}]"#,
        );

        assert_eq!(
            records,
            vec![transfer(
                "org.hawkoin.network.Faculty#42",
                "org.hawkoin.network.Faculty#7",
                "10",
                "t1"
            )]
        );
    }

    #[test]
    fn test_amount_kept_verbatim() {
        let records = decode(
            r#"[{"fromUser":"ns#42","toUser":"ns#7","amount":0.00001,"transactionId":"t1","timestamp":"x"},
                {"fromUser":"ns#42","toUser":"ns#7","amount":12345678901234567,"transactionId":"t2","timestamp":"x"},
                {"fromUser":"ns#42","toUser":"ns#7","amount":10.50,"transactionId":"t3","timestamp":"x"}]"#,
        );

        let rows = sent_by(&records, "42").unwrap();
        let amounts: Vec<&str> = rows.iter().map(|r| r.amount.as_str()).collect();
        assert_eq!(amounts, vec!["0.00001", "12345678901234567", "10.50"]);
    }

    #[test]
    fn test_sent_by_filters_on_sender_only() {
        let records = vec![
            transfer("ns.Faculty#42", "ns.Vendor#7", "10", "t1"),
            transfer("ns.Student#7", "ns.Faculty#42", "3", "t2"),
            transfer("ns.Faculty#42", "ns.Student#9", "2.5", "t3"),
            transfer("ns.Faculty#420", "ns.Student#9", "1", "t4"),
        ];

        let rows = sent_by(&records, "42").unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.transaction_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
        assert_eq!(rows[0].from_user, "42");
        assert_eq!(rows[0].to_user, "7");
        assert_eq!(rows[1].amount, "2.5");
    }

    #[test]
    fn test_unselected_records_may_be_incomplete() {
        let records = decode(
            r#"[{"fromUser":"ns#42","toUser":"ns#7","amount":10,"transactionId":"t1","timestamp":"2020-01-01"},
                {"fromUser":"ns#99","toUser":"ns#7","amount":5,"transactionId":"t2"},
                {"fromUser":"ns#98","toUser":null,"amount":null,"transactionId":null,"timestamp":null}]"#,
        );

        let rows = sent_by(&records, "42").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].transaction_id, "t1");
    }

    #[test]
    fn test_selected_record_missing_field() {
        let records = decode(r#"[{"fromUser":"ns#42","toUser":"ns#7","amount":10,"transactionId":"t1"}]"#);

        let err = sent_by(&records, "42").unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "timestamp", .. }));
        assert_eq!(err.kind(), crate::ErrorKind::ParseError);
    }

    #[test]
    fn test_sent_by_skips_malformed_sender() {
        let records = vec![
            transfer("garbage", "ns.Vendor#7", "10", "t1"),
            transfer("ns.Faculty#42", "ns.Vendor#7", "4", "t2"),
        ];

        let rows = sent_by(&records, "42").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].transaction_id, "t2");
    }

    #[test]
    fn test_sent_by_rejects_malformed_recipient() {
        let records = vec![transfer("ns.Faculty#42", "garbage", "10", "t1")];

        let err = sent_by(&records, "42").unwrap_err();
        assert!(matches!(err, Error::MalformedIdentifier(ref s) if s == "garbage"));
    }

    #[test]
    fn test_sent_by_no_match() {
        let records = vec![transfer("ns.Faculty#42", "ns.Vendor#7", "10", "t1")];
        assert!(sent_by(&records, "99").unwrap().is_empty());
    }
}

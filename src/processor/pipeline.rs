//! Per-transaction extraction: fetch, scan, decode
//!
//! Nothing that goes wrong for one txid escapes [`ExtractionPipeline::extract`];
//! every failure becomes [`DecodingOutcome::Absent`] plus a log line so the
//! batch can move on to the next txid.

use crate::decoder::{decode_payload, find_data_carrier_payload};
use crate::rpc::TransactionFetcher;
use crate::types::DecodingOutcome;
use tracing::{info, warn};

pub struct ExtractionPipeline<'a, F> {
    fetcher: &'a F,
}

impl<'a, F: TransactionFetcher> ExtractionPipeline<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Extract and classify the OP_RETURN payload of one transaction
    pub async fn extract(&self, txid: &str) -> DecodingOutcome {
        info!("Retrieving transaction: {}", txid);

        let record = match self.fetcher.fetch_transaction(txid).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Error retrieving data for {}: {}", txid, e);
                return DecodingOutcome::Absent;
            }
        };

        let Some(payload) = find_data_carrier_payload(&record.outputs) else {
            warn!("OP_RETURN data not found for transaction: {}", txid);
            return DecodingOutcome::Absent;
        };

        let outcome = decode_payload(&payload);
        if let DecodingOutcome::RawUndecodable(raw) = &outcome {
            warn!("Hex data for {} could not be decoded as UTF-8: {}", txid, raw);
        }
        outcome
    }
}

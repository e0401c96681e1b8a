//! ExtractionPipeline failure isolation

use opreturn_extract::processor::ExtractionPipeline;
use opreturn_extract::types::{DecodingOutcome, TxOutput};

use crate::common::fixtures::{payment_only_outputs, text_payload_outputs, txid};
use crate::common::{MockFetcher, MockResponse};

#[tokio::test]
async fn test_every_fetch_error_kind_is_absent() {
    let fetcher = MockFetcher::new()
        .with_response(&txid(1), MockResponse::NotFound)
        .with_response(&txid(2), MockResponse::CallFailed("connection reset".to_string()));
    let pipeline = ExtractionPipeline::new(&fetcher);

    assert_eq!(pipeline.extract(&txid(1)).await, DecodingOutcome::Absent);
    assert_eq!(pipeline.extract(&txid(2)).await, DecodingOutcome::Absent);
    assert_eq!(pipeline.extract("not-even-hex").await, DecodingOutcome::Absent);
    assert_eq!(fetcher.call_count(), 3);
}

#[tokio::test]
async fn test_outputs_without_scripts_are_absent() {
    let fetcher = MockFetcher::new().with_outputs(
        &txid(3),
        vec![
            TxOutput {
                n: Some(0),
                script_asm: None,
            },
            TxOutput { n: None, script_asm: None },
        ],
    );

    let outcome = ExtractionPipeline::new(&fetcher).extract(&txid(3)).await;
    assert_eq!(outcome, DecodingOutcome::Absent);
}

#[tokio::test]
async fn test_no_data_carrier_is_absent() {
    let fetcher = MockFetcher::new().with_outputs(&txid(4), payment_only_outputs());
    let outcome = ExtractionPipeline::new(&fetcher).extract(&txid(4)).await;
    assert_eq!(outcome, DecodingOutcome::Absent);
}

#[tokio::test]
async fn test_decoded_outcome_unwrapped() {
    let fetcher = MockFetcher::new().with_outputs(&txid(5), text_payload_outputs("hello"));
    let outcome = ExtractionPipeline::new(&fetcher).extract(&txid(5)).await;
    assert_eq!(outcome, DecodingOutcome::Decoded("hello".to_string()));
}

#[tokio::test]
async fn test_empty_payload_is_decoded_not_absent() {
    let fetcher = MockFetcher::new().with_outputs(&txid(6), vec![TxOutput::with_asm(0, "OP_RETURN")]);
    let outcome = ExtractionPipeline::new(&fetcher).extract(&txid(6)).await;
    assert_eq!(outcome, DecodingOutcome::Decoded(String::new()));
}

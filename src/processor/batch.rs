//! Sequential batch driver
//!
//! Txids are processed one at a time in input order. Each is attempted once;
//! the collected lines go to the sink in a single write at the end.

use crate::errors::AppResult;
use crate::processor::base::{ProgressReporter, StandardProgressTracker};
use crate::processor::input::load_transaction_ids;
use crate::processor::output::OutputSink;
use crate::processor::pipeline::ExtractionPipeline;
use crate::rpc::TransactionFetcher;
use crate::types::BatchResult;
use std::future::Future;
use std::path::Path;
use tracing::{debug, info};

pub struct BatchRunner<'a, F> {
    pipeline: ExtractionPipeline<'a, F>,
}

impl<'a, F: TransactionFetcher> BatchRunner<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            pipeline: ExtractionPipeline::new(fetcher),
        }
    }

    /// Run every txid through the pipeline, then write the result once
    ///
    /// Only a sink failure is returned as an error; per-txid problems end up
    /// in the `absent` counter.
    pub async fn run<S: OutputSink>(&self, txids: &[String], sink: &mut S) -> AppResult<BatchResult> {
        let mut tracker = StandardProgressTracker::new();
        tracker.start();

        let mut result = BatchResult::new();
        for (index, txid) in txids.iter().enumerate() {
            let outcome = self.pipeline.extract(txid).await;
            debug!("[{}/{}] {}: {:?}", index + 1, txids.len(), txid, outcome);
            result.push(&outcome);
        }

        sink.write_lines(&result.lines)?;

        ProgressReporter::report_completion(&result.stats, tracker.elapsed_seconds());
        Ok(result)
    }
}

/// Load the txid list from `input`, open the fetcher, and run the batch
///
/// `connect` is only called once the input parsed, so a bad input file fails
/// without touching the node. The fetcher is handed back for its counters.
pub async fn run_batch_file<F, S, C, Fut>(
    input: &Path,
    connect: C,
    sink: &mut S,
) -> AppResult<(BatchResult, F)>
where
    F: TransactionFetcher,
    S: OutputSink,
    C: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<F>>,
{
    let txids = load_transaction_ids(input)?;
    info!("Loaded {} transaction IDs from {}", txids.len(), input.display());

    let fetcher = connect().await?;
    let result = BatchRunner::new(&fetcher).run(&txids, sink).await?;
    Ok((result, fetcher))
}

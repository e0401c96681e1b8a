//! Batch extraction over a list of transaction IDs
//!
//! - `pipeline`: fetch → scan → decode for a single txid, with failure isolation
//! - `batch`: sequential driver over the whole list
//! - `input` / `output`: the txid list file and the text output artifact

pub mod base;
pub mod batch;
pub mod input;
pub mod output;
pub mod pipeline;

pub use base::{ProgressReporter, StandardProgressTracker};
pub use batch::{run_batch_file, BatchRunner};
pub use input::load_transaction_ids;
pub use output::{OutputSink, TextFileSink};
pub use pipeline::ExtractionPipeline;

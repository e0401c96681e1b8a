//! OP_RETURN payload decoding
//!
//! - `scanner`: finds the data-carrier output and splits out its payload text
//! - `payload`: turns that payload text into a [`DecodingOutcome`](crate::types::DecodingOutcome)

pub mod payload;
pub mod scanner;

pub use payload::decode_payload;
pub use scanner::{find_data_carrier_payload, DATA_CARRIER_MARKER};

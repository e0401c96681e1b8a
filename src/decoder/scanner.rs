//! Locate the data-carrier output of a transaction
//!
//! Works on the disassembled script text (`scriptPubKey.asm`). The first output
//! carrying the `OP_RETURN` token wins; any later data-carrier outputs on the
//! same transaction are ignored.

use crate::types::TxOutput;

/// Opcode token that marks a data-carrier script
pub const DATA_CARRIER_MARKER: &str = "OP_RETURN";

/// Return the encoded payload of the first data-carrier output, if any
///
/// Outputs without script text never match.
pub fn find_data_carrier_payload(outputs: &[TxOutput]) -> Option<String> {
    outputs
        .iter()
        .find_map(|output| output.script_asm.as_deref().and_then(payload_after_marker))
}

/// Everything after the marker token, tokens re-joined by a single space
///
/// `OP_RETURN` on its own yields an empty payload.
pub fn payload_after_marker(asm: &str) -> Option<String> {
    let mut tokens = asm.split_whitespace();
    tokens.position(|token| token == DATA_CARRIER_MARKER)?;
    Some(tokens.collect::<Vec<_>>().join(" "))
}

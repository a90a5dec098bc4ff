use serde::Deserialize;
use serde_json::Value;

use super::datatype::{DataType, PacketType};
use super::header::encode_header;
use super::layout;
use super::scalar::write_scalar;

/// One raw signal write queued for batch encoding.
///
/// The value is whatever the live-value source handed over (string, number,
/// bool); coercion to the wire type happens at encode time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalWrite {
    pub signal_id: u16,
    pub datatype: DataType,
    pub value: Value,
}

/// Encode a single write packet.
///
/// The header is `(WriteData, subsystem 0, count 1)`; single writes carry
/// no subsystem id on the wire.
pub fn encode_single(signal_id: u16, value: &Value, datatype: DataType) -> Vec<u8> {
    let mut buf =
        Vec::with_capacity(layout::HEADER_LEN + layout::ENTRY_PREFIX_LEN + datatype.width());
    buf.extend_from_slice(&encode_header(
        PacketType::WriteData,
        layout::SINGLE_WRITE_SUBSYSTEM_ID,
        1,
    ));
    push_entry(&mut buf, signal_id, datatype, value);
    buf
}

/// Encode a batch write packet, entries in caller-supplied order.
///
/// Downstream interpretation depends only on each entry's own signal id,
/// never on position. An empty batch encodes to exactly the 4-byte header.
pub fn encode_batch(subsystem_id: u8, writes: &[SignalWrite]) -> Vec<u8> {
    let entries_len: usize = writes
        .iter()
        .map(|write| layout::ENTRY_PREFIX_LEN + write.datatype.width())
        .sum();

    let mut buf = Vec::with_capacity(layout::HEADER_LEN + entries_len);
    buf.extend_from_slice(&encode_header(
        PacketType::WriteBatch,
        subsystem_id,
        writes.len() as u16,
    ));
    for write in writes {
        push_entry(&mut buf, write.signal_id, write.datatype, &write.value);
    }
    buf
}

fn push_entry(buf: &mut Vec<u8>, signal_id: u16, datatype: DataType, value: &Value) {
    buf.extend_from_slice(&signal_id.to_le_bytes());
    buf.push(datatype.code());
    write_scalar(buf, datatype, value);
}

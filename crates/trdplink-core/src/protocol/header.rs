use super::datatype::PacketType;
use super::error::ProtocolError;
use super::layout;
use super::reader::PacketReader;

/// Decoded 4-byte packet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// `None` when the wire code is not a known packet type. The bridge
    /// never rejects a packet for its type byte.
    pub packet_type: Option<PacketType>,
    pub subsystem_id: u8,
    pub signal_count: u16,
}

pub fn encode_header(
    packet_type: PacketType,
    subsystem_id: u8,
    signal_count: u16,
) -> [u8; layout::HEADER_LEN] {
    let count = signal_count.to_le_bytes();
    [packet_type.code(), subsystem_id, count[0], count[1]]
}

pub fn decode_header(payload: &[u8]) -> Result<Header, ProtocolError> {
    let reader = PacketReader::new(payload);
    reader.require_len(layout::HEADER_LEN)?;

    let packet_type = PacketType::from_code(reader.read_u8(layout::PACKET_TYPE_OFFSET)?);
    let subsystem_id = reader.read_u8(layout::SUBSYSTEM_ID_OFFSET)?;
    let signal_count = reader.read_u16_le(layout::SIGNAL_COUNT_OFFSET)?;

    Ok(Header {
        packet_type,
        subsystem_id,
        signal_count,
    })
}

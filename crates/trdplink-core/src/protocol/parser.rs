use std::collections::HashMap;

use super::datatype::DataType;
use super::error::ProtocolError;
use super::header::decode_header;
use super::layout;
use super::reader::PacketReader;
use super::scalar::{SignalValue, read_scalar};
use crate::directory::SignalDirectory;

/// Decode a live-data packet into a name -> value mapping.
///
/// Signal ids resolve through `directory`; an id with no directory entry
/// gets the placeholder name `Signal_<id>`. Decoding is all-or-nothing: a
/// buffer shorter than the declared entry count fails the whole call, never
/// a partial mapping. Bytes past the declared entries are ignored. If two
/// ids resolve to the same name, the last entry wins.
pub fn decode_live_data<D>(
    payload: &[u8],
    directory: &D,
) -> Result<HashMap<String, SignalValue>, ProtocolError>
where
    D: SignalDirectory + ?Sized,
{
    let header = decode_header(payload)?;
    let reader = PacketReader::new(payload);

    let mut decoded = HashMap::with_capacity(usize::from(header.signal_count));
    let mut offset = layout::HEADER_LEN;
    for _ in 0..header.signal_count {
        let signal_id = reader.read_u16_le(offset)?;
        offset += layout::SIGNAL_ID_LEN;

        let datatype = DataType::from_code(reader.read_u8(offset)?);
        offset += layout::DATA_TYPE_CODE_LEN;

        let value = read_scalar(&reader, offset, datatype)?;
        offset += datatype.width();

        let name = directory
            .lookup(signal_id)
            .map_or_else(|| format!("Signal_{signal_id}"), |info| info.name.clone());
        decoded.insert(name, value);
    }

    Ok(decoded)
}

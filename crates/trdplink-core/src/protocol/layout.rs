pub const PACKET_TYPE_OFFSET: usize = 0;
pub const SUBSYSTEM_ID_OFFSET: usize = 1;
pub const SIGNAL_COUNT_OFFSET: usize = 2;

pub const HEADER_LEN: usize = 4;
pub const SIGNAL_ID_LEN: usize = 2;
pub const DATA_TYPE_CODE_LEN: usize = 1;
pub const ENTRY_PREFIX_LEN: usize = SIGNAL_ID_LEN + DATA_TYPE_CODE_LEN;

/// Single writes carry no subsystem; batches carry the real id.
pub const SINGLE_WRITE_SUBSYSTEM_ID: u8 = 0;

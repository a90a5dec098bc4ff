//! Wire tag tables for packet and data types.
//!
//! These two enums are the single source of truth for wire codes and value
//! widths; no other module hard-codes either.

use serde::{Deserialize, Serialize};

/// Packet type tag carried in header byte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    LiveData,
    WriteData,
    WriteBatch,
    Response,
}

impl PacketType {
    pub const fn code(self) -> u8 {
        match self {
            Self::LiveData => 0x01,
            Self::WriteData => 0x02,
            Self::WriteBatch => 0x03,
            Self::Response => 0x04,
        }
    }

    /// Returns `None` for unrecognized codes; the decoder carries the
    /// absence through rather than rejecting the packet.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Self::LiveData),
            0x02 => Some(Self::WriteData),
            0x03 => Some(Self::WriteBatch),
            0x04 => Some(Self::Response),
            _ => None,
        }
    }
}

/// Signal data type tag carried in each entry.
///
/// Names serialize in the UPPERCASE form used by the signal directory
/// records (`"FLOAT32"`, `"BOOLEAN"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Int32,
    Uint32,
    Float32,
    Boolean,
}

impl DataType {
    pub const fn code(self) -> u8 {
        match self {
            Self::Int32 => 0x01,
            Self::Uint32 => 0x02,
            Self::Float32 => 0x03,
            Self::Boolean => 0x04,
        }
    }

    /// Value width in bytes on the wire.
    pub const fn width(self) -> usize {
        match self {
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Boolean => 1,
        }
    }

    /// Unrecognized codes decode as `Float32`. This is the single
    /// normalization point for the lenient-decode policy.
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x01 => Self::Int32,
            0x02 => Self::Uint32,
            0x04 => Self::Boolean,
            _ => Self::Float32,
        }
    }
}

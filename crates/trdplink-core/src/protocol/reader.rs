use super::error::ProtocolError;

pub struct PacketReader<'a> {
    payload: &'a [u8],
}

impl<'a> PacketReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), ProtocolError> {
        if self.payload.len() < needed {
            return Err(ProtocolError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, ProtocolError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(ProtocolError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16, ProtocolError> {
        let bytes = self.read_slice(offset..offset + 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i32_le(&self, offset: usize) -> Result<i32, ProtocolError> {
        let bytes = self.read_slice(offset..offset + 4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u32_le(&self, offset: usize) -> Result<u32, ProtocolError> {
        let bytes = self.read_slice(offset..offset + 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f32_le(&self, offset: usize) -> Result<f32, ProtocolError> {
        let bytes = self.read_slice(offset..offset + 4)?;
        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], ProtocolError> {
        self.payload
            .get(range.clone())
            .ok_or(ProtocolError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}

//! Signal directory consumed by the packet decoder.
//!
//! The directory is supplied externally (the bridge configuration owns it);
//! this module defines the lookup seam plus an in-memory table for callers
//! that load signal rows from JSON. The codec treats any directory as
//! read-only; lifecycle and update coordination stay with the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::protocol::datatype::DataType;

/// Read-only lookup from wire signal id to signal metadata.
pub trait SignalDirectory {
    /// Resolve a wire signal id.
    ///
    /// Absence is not an error; the decoder synthesizes a placeholder name
    /// for ids the directory does not know.
    fn lookup(&self, signal_id: u16) -> Option<&SignalInfo>;
}

/// Directory metadata for one signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalInfo {
    pub name: String,
    pub datatype: DataType,
    pub subsystem_id: u8,
}

/// One signal row as exchanged with the configuration front end.
///
/// # Examples
/// ```
/// use trdplink_core::{DataType, SignalDef};
///
/// let row: SignalDef = serde_json::from_str(
///     r#"{"id": 1, "name": "Speed", "datatype": "FLOAT32", "subsystemId": 2}"#,
/// )?;
/// assert_eq!(row.datatype, DataType::Float32);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDef {
    pub id: u16,
    pub name: String,
    pub datatype: DataType,
    pub subsystem_id: u8,
}

/// In-memory signal directory backed by a hash map.
///
/// # Examples
/// ```
/// use trdplink_core::{DataType, SignalDef, SignalDirectory, SignalTable};
///
/// let table = SignalTable::from_defs([SignalDef {
///     id: 1,
///     name: "Speed".to_string(),
///     datatype: DataType::Float32,
///     subsystem_id: 2,
/// }]);
/// assert_eq!(table.lookup(1).map(|info| info.name.as_str()), Some("Speed"));
/// assert!(table.lookup(99).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SignalTable {
    signals: HashMap<u16, SignalInfo>,
}

impl SignalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from directory rows. A later row with a duplicate id
    /// replaces the earlier one.
    pub fn from_defs(defs: impl IntoIterator<Item = SignalDef>) -> Self {
        let signals = defs
            .into_iter()
            .map(|def| {
                (
                    def.id,
                    SignalInfo {
                        name: def.name,
                        datatype: def.datatype,
                        subsystem_id: def.subsystem_id,
                    },
                )
            })
            .collect();
        Self { signals }
    }

    pub fn insert(&mut self, signal_id: u16, info: SignalInfo) {
        self.signals.insert(signal_id, info);
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl SignalDirectory for SignalTable {
    fn lookup(&self, signal_id: u16) -> Option<&SignalInfo> {
        self.signals.get(&signal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{SignalDef, SignalDirectory, SignalTable};
    use crate::protocol::datatype::DataType;

    fn def(id: u16, name: &str) -> SignalDef {
        SignalDef {
            id,
            name: name.to_string(),
            datatype: DataType::Float32,
            subsystem_id: 2,
        }
    }

    #[test]
    fn from_defs_builds_lookup() {
        let table = SignalTable::from_defs([def(1, "Speed"), def(2, "Pressure")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(2).unwrap().name, "Pressure");
        assert!(table.lookup(3).is_none());
    }

    #[test]
    fn duplicate_ids_last_row_wins() {
        let table = SignalTable::from_defs([def(1, "Old"), def(1, "New")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(1).unwrap().name, "New");
    }

    #[test]
    fn signal_def_round_trips_camel_case() {
        let row = def(5, "Battery_Voltage");
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"subsystemId\":2"));
        let parsed: SignalDef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }
}

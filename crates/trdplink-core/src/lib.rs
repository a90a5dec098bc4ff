//! trdplink core library: the binary wire codec of the railway TRDP
//! telemetry bridge.
//!
//! Subsystems on the train bus expose typed signals; this crate implements
//! the compact, fixed-layout, little-endian packet format that carries
//! single and batched signal values between the transport layer and the
//! monitoring application. Encoding and decoding are byte-oriented and
//! side-effect free; all I/O, connection lifecycle, and authentication stay
//! with the transport that invokes the codec. Wire conventions are captured
//! in the `protocol` reader so packet codecs stay minimal and consistent
//! with the wire format.
//!
//! Invariants:
//! - Decoding is all-or-nothing: a truncated packet yields an error, never
//!   a partial mapping.
//! - Unknown data-type codes decode as FLOAT32; unknown signal ids resolve
//!   to `Signal_<id>` placeholder names. Both are deliberate leniency, not
//!   failures.
//! - Encoding never fails: raw values are coerced to the wire type.
//!
//! Version française (résumé):
//! Cette crate fournit le codec binaire du pont de télémétrie TRDP :
//! en-tête de 4 octets puis entrées de signaux typées, le tout en
//! petit-boutiste. Le codec est pur et sans état ; le transport garde la
//! gestion des connexions. Garanties : décodage tout ou rien, types et ids
//! inconnus normalisés, encodage infaillible par coercition des valeurs.
//!
//! # Examples
//! ```
//! use serde_json::json;
//! use trdplink_core::{
//!     DataType, SignalDef, SignalTable, SignalValue, SignalWrite, decode_live_data,
//!     encode_batch,
//! };
//!
//! let directory = SignalTable::from_defs([SignalDef {
//!     id: 1,
//!     name: "Speed".to_string(),
//!     datatype: DataType::Float32,
//!     subsystem_id: 2,
//! }]);
//!
//! let packet = encode_batch(
//!     2,
//!     &[SignalWrite {
//!         signal_id: 1,
//!         datatype: DataType::Float32,
//!         value: json!(88.5),
//!     }],
//! );
//!
//! let decoded = decode_live_data(&packet, &directory)?;
//! assert_eq!(decoded["Speed"], SignalValue::Float32(88.5));
//! # Ok::<(), trdplink_core::ProtocolError>(())
//! ```

mod directory;
mod protocol;

pub use directory::{SignalDef, SignalDirectory, SignalInfo, SignalTable};
pub use protocol::datatype::{DataType, PacketType};
pub use protocol::error::ProtocolError;
pub use protocol::header::{Header, decode_header, encode_header};
pub use protocol::scalar::SignalValue;
pub use protocol::{SignalWrite, decode_live_data, encode_batch, encode_single};

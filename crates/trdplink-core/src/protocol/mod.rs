//! TRDP bridge packet encoding and decoding.
//!
//! The codec follows a layered structure:
//! - `layout`: byte offsets and field lengths (source of truth)
//! - `reader`: safe little-endian byte access
//! - `datatype`: wire tag tables for packet and data types
//! - `scalar`: single-value reads and writes, with raw-value coercion
//! - `header`, `encoder`, `parser`: packet-level codecs
//! - `error`: explicit, actionable errors
//!
//! Codecs are pure and contain no I/O; every call reads only its arguments
//! and writes only its own output buffer, so concurrent use needs no
//! coordination. Decoding is all-or-nothing: truncated packets fail as a
//! whole, while unknown data-type codes and unknown signal ids are
//! normalized rather than rejected.
//!
//! Version française (résumé):
//! Le module encode et décode les paquets du pont TRDP en couches
//! (`layout`/`reader`/`datatype`/`scalar` puis `header`/`encoder`/`parser`).
//! Les codecs sont purs, sans E/S ni état partagé. Le décodage est tout ou
//! rien ; les codes de type inconnus et les ids de signaux inconnus sont
//! normalisés, jamais rejetés.

pub mod datatype;
pub mod encoder;
pub mod error;
pub mod header;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod scalar;

pub use encoder::{SignalWrite, encode_batch, encode_single};
pub use parser::decode_live_data;

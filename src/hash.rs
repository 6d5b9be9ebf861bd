//! Wire-safe identities for rows and candidate values.
//!
//! Both encodings are URL-safe base64 of the UTF-8 bytes, so they are
//! deterministic across processes and decode back to the original string.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::constants::{FIELD_HASH_PREFIX, NULL_VALUE_HASH};
use crate::errors::VettingError;
use crate::types::{FieldHash, ValueHash, Xpath};
use crate::value::CandidateValue;

/// Encode an xpath as a row field hash.
pub fn field_hash(xpath: &str) -> FieldHash {
    format!("{FIELD_HASH_PREFIX}{}", URL_SAFE_NO_PAD.encode(xpath.as_bytes()))
}

/// Decode a field hash back into its xpath.
pub fn xpath_from_field_hash(hash: &str) -> Result<Xpath, VettingError> {
    let unknown = || VettingError::UnknownFieldHash(hash.to_string());
    let encoded = hash.strip_prefix(FIELD_HASH_PREFIX).ok_or_else(unknown)?;
    let bytes = URL_SAFE_NO_PAD.decode(encoded).map_err(|_| unknown())?;
    String::from_utf8(bytes).map_err(|_| unknown())
}

/// Hash of a candidate value; `None` hashes to `"null"`.
pub fn value_hash(value: Option<&CandidateValue>) -> ValueHash {
    match value {
        Some(value) => URL_SAFE_NO_PAD.encode(value.as_raw().as_bytes()),
        None => NULL_VALUE_HASH.to_string(),
    }
}

//! UE record validation
//!
//! Checks run in a fixed order (IMSI, key, opc) and stop at the first
//! failure, so the reported error always names the first bad field.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;
use uesim_common::{Error, UeConfig, AUTH_KEY_LEN, AUTH_OPC_LEN, IMSI_MAX_LEN, IMSI_MIN_LEN};

const IMSI_DIGITS_PATTERN: &str = r"^[0-9]*$";

/// Compiled IMSI pattern, or `None` if it failed to compile.
fn imsi_digits() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(IMSI_DIGITS_PATTERN).ok())
        .as_ref()
}

fn reject(field: &'static str, msg: &str) -> Error {
    debug!(field, reason = msg, "Rejecting UE data");
    Error::invalid_argument(msg)
}

/// Ensures a UE record is present and carries a valid IMSI, key and opc.
///
/// # Arguments
/// * `ue` - The record to check, `None` if the caller received no record
///
/// # Returns
/// * `Ok(())` - The record can be stored
/// * `Err(Error::InvalidArgument)` - The first constraint the record violates
///
/// # Example
/// ```
/// use uesim_common::UeConfig;
/// use uesim_validate::validate_ue_data;
///
/// let ue = UeConfig::new("12345", vec![0; 32], vec![0; 32]);
/// assert!(validate_ue_data(Some(&ue)).is_ok());
///
/// let err = validate_ue_data(None).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid Argument: UE data cannot be nil");
/// ```
pub fn validate_ue_data(ue: Option<&UeConfig>) -> Result<(), Error> {
    let ue = ue.ok_or_else(|| reject("ue", "UE data cannot be nil"))?;
    validate_ue_imsi(&ue.imsi)?;
    validate_ue_key(ue.auth_key.as_deref())?;
    validate_ue_opc(ue.auth_opc.as_deref())?;
    Ok(())
}

/// Ensures an IMSI can be stored: 5 to 15 bytes long, all ASCII digits.
///
/// Length is checked first, so a short or long IMSI is reported as a length
/// error even if it also contains non-digits.
pub fn validate_ue_imsi(imsi: &str) -> Result<(), Error> {
    if !(IMSI_MIN_LEN..=IMSI_MAX_LEN).contains(&imsi.len()) {
        return Err(reject("imsi", "IMSI must be between 5 and 15 digits long"));
    }
    match imsi_digits() {
        Some(pattern) if pattern.is_match(imsi) => Ok(()),
        _ => Err(reject("imsi", "IMSI must only be digits")),
    }
}

/// Ensures a subscriber key is present and 32 bytes long.
pub fn validate_ue_key(key: Option<&[u8]>) -> Result<(), Error> {
    match key {
        None => Err(reject("auth_key", "key cannot be nil")),
        Some(k) if k.len() != AUTH_KEY_LEN => Err(reject("auth_key", "key must be 32 bytes")),
        Some(_) => Ok(()),
    }
}

/// Ensures an operator code is present and 32 bytes long.
pub fn validate_ue_opc(opc: Option<&[u8]>) -> Result<(), Error> {
    match opc {
        None => Err(reject("auth_opc", "opc cannot be nil")),
        Some(o) if o.len() != AUTH_OPC_LEN => Err(reject("auth_opc", "opc must be 32 bytes")),
        Some(_) => Ok(()),
    }
}

/// Method-style access to [`validate_ue_data`] on a present record.
pub trait ValidateUeData {
    /// Validates this record. See [`validate_ue_data`].
    fn validate(&self) -> Result<(), Error>;
}

impl ValidateUeData for UeConfig {
    fn validate(&self) -> Result<(), Error> {
        validate_ue_data(Some(self))
    }
}

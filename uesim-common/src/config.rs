//! UE record stored by the simulated-UE data store
//!
//! A [`UeConfig`] carries the subscriber identity and the authentication
//! material (K and OPc) used by Milenage. Records are plain data: loading one
//! from YAML does not validate it, the store's write path does that.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Minimum IMSI length in digits.
pub const IMSI_MIN_LEN: usize = 5;

/// Maximum IMSI length in digits (3GPP TS 23.003).
pub const IMSI_MAX_LEN: usize = 15;

/// Subscriber key K size in bytes.
pub const AUTH_KEY_LEN: usize = 32;

/// Operator code OPc size in bytes.
pub const AUTH_OPC_LEN: usize = 32;

/// Simulated UE record.
///
/// `auth_key` and `auth_opc` are optional so that a record received with a
/// missing secret can be represented and rejected, rather than silently
/// defaulted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UeConfig {
    /// International Mobile Subscriber Identity (digits only, no `imsi-` prefix)
    pub imsi: String,
    /// Subscriber key K
    pub auth_key: Option<Vec<u8>>,
    /// Operator code OPc
    pub auth_opc: Option<Vec<u8>>,
}

impl UeConfig {
    /// Creates a UE record with both secrets present.
    ///
    /// # Arguments
    /// * `imsi` - The IMSI digit string (e.g., "001010000000001")
    /// * `auth_key` - Subscriber key K
    /// * `auth_opc` - Operator code OPc
    pub fn new(imsi: impl Into<String>, auth_key: Vec<u8>, auth_opc: Vec<u8>) -> Self {
        Self {
            imsi: imsi.into(),
            auth_key: Some(auth_key),
            auth_opc: Some(auth_opc),
        }
    }

    /// Replaces the subscriber key.
    pub fn with_auth_key(mut self, auth_key: Option<Vec<u8>>) -> Self {
        self.auth_key = auth_key;
        self
    }

    /// Replaces the operator code.
    pub fn with_auth_opc(mut self, auth_opc: Option<Vec<u8>>) -> Self {
        self.auth_opc = auth_opc;
        self
    }

    /// Parses a UE record from a YAML string.
    ///
    /// Missing or `null` secrets deserialize to `None`; a missing IMSI
    /// deserializes to an empty string.
    ///
    /// # Example
    /// ```
    /// use uesim_common::UeConfig;
    ///
    /// let yaml = r#"
    /// imsi: "001010000000001"
    /// auth_key: [1, 2, 3]
    /// "#;
    ///
    /// let ue = UeConfig::from_yaml(yaml).unwrap();
    /// assert_eq!(ue.imsi, "001010000000001");
    /// assert_eq!(ue.auth_key, Some(vec![1, 2, 3]));
    /// assert_eq!(ue.auth_opc, None);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a UE record from a YAML file.
    ///
    /// # Example
    /// ```no_run
    /// use uesim_common::UeConfig;
    ///
    /// let ue = UeConfig::from_yaml_file("config/ue.yaml").unwrap();
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parses a YAML sequence of UE records, as used to seed a store.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes the UE record to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Prints secret lengths only.
struct SecretLen<'a>(&'a Option<Vec<u8>>);

impl fmt::Debug for SecretLen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(bytes) => write!(f, "<{} bytes>", bytes.len()),
            None => write!(f, "None"),
        }
    }
}

impl fmt::Debug for UeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UeConfig")
            .field("imsi", &self.imsi)
            .field("auth_key", &SecretLen(&self.auth_key))
            .field("auth_opc", &SecretLen(&self.auth_opc))
            .finish()
    }
}

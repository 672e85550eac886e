//! Validation gate for UE records written to the simulated-UE store
//!
//! The store's write path calls [`validate_ue_data`] before persisting a
//! record and aborts the write on error, returning the message to its caller.

pub mod validate;

pub use validate::{
    validate_ue_data, validate_ue_imsi, validate_ue_key, validate_ue_opc, ValidateUeData,
};

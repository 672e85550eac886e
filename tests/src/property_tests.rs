//! Property tests for UE validation

use integration_tests::TestUeConfig;
use proptest::prelude::*;
use uesim_common::{Error, AUTH_KEY_LEN};
use uesim_validate::{validate_ue_data, validate_ue_imsi, validate_ue_key, validate_ue_opc};

const LENGTH_MSG: &str = "IMSI must be between 5 and 15 digits long";
const DIGITS_MSG: &str = "IMSI must only be digits";

fn invalid_message(result: Result<(), Error>) -> Option<String> {
    match result {
        Err(Error::InvalidArgument(msg)) => Some(msg),
        _ => None,
    }
}

prop_compose! {
    // ASCII IMSI of valid length with at least one non-digit.
    fn arb_imsi_with_non_digit()(
        digits in "[0-9]{4,14}",
        bad in "[a-zA-Z +#*.-]",
        pos in any::<prop::sample::Index>(),
    ) -> String {
        let mut imsi = digits;
        let at = pos.index(imsi.len() + 1);
        imsi.insert_str(at, &bad);
        imsi
    }
}

fn arb_bad_len() -> impl Strategy<Value = usize> {
    prop_oneof![0..AUTH_KEY_LEN, (AUTH_KEY_LEN + 1)..128]
}

proptest! {
    #[test]
    fn test_digit_imsi_of_valid_length_passes(imsi in "[0-9]{5,15}") {
        prop_assert!(validate_ue_imsi(&imsi).is_ok());
    }

    #[test]
    fn test_short_imsi_fails_on_length(imsi in "[ -~]{0,4}") {
        prop_assert_eq!(invalid_message(validate_ue_imsi(&imsi)), Some(LENGTH_MSG.to_string()));
    }

    #[test]
    fn test_long_imsi_fails_on_length(imsi in "[ -~]{16,40}") {
        prop_assert_eq!(invalid_message(validate_ue_imsi(&imsi)), Some(LENGTH_MSG.to_string()));
    }

    #[test]
    fn test_non_digit_imsi_fails_on_digits(imsi in arb_imsi_with_non_digit()) {
        prop_assert_eq!(invalid_message(validate_ue_imsi(&imsi)), Some(DIGITS_MSG.to_string()));
    }

    #[test]
    fn test_bad_key_length_fails(len in arb_bad_len()) {
        let key = vec![0u8; len];
        prop_assert_eq!(
            invalid_message(validate_ue_key(Some(key.as_slice()))),
            Some("key must be 32 bytes".to_string())
        );
    }

    #[test]
    fn test_bad_opc_length_fails(len in arb_bad_len()) {
        let opc = vec![0u8; len];
        prop_assert_eq!(
            invalid_message(validate_ue_opc(Some(opc.as_slice()))),
            Some("opc must be 32 bytes".to_string())
        );
    }

    #[test]
    fn test_any_32_byte_secrets_pass(
        imsi in "[0-9]{5,15}",
        key in prop::collection::vec(any::<u8>(), 32),
        opc in prop::collection::vec(any::<u8>(), 32),
    ) {
        let ue = TestUeConfig { imsi, auth_key: Some(key), auth_opc: Some(opc) }.build();
        prop_assert!(validate_ue_data(Some(&ue)).is_ok());
    }
}

mod common;

use std::path::PathBuf;

use fn_request_signer::{ConfigError, SignerConfig, SigningError, SigningOutcome};

fn config(private_key_location: PathBuf) -> SignerConfig {
    SignerConfig {
        tenant_ocid: "ocid1.tenancy.oc1..t".into(),
        user_ocid: "ocid1.user.oc1..u".into(),
        public_fingerprint: "aa:bb:cc".into(),
        private_key_location,
        function_url: "https://abc.us-ashburn-1.functions.oci.oraclecloud.com/20181201/functions/ocid1.fnfunc.oc1..f/actions/invoke".into(),
    }
}

#[test]
fn configured_signer_signs_function_invocation() {
    let key_file = common::private_key_file();
    let config = config(key_file.path().to_path_buf());

    let signer = config.request_signer().unwrap();
    assert_eq!(
        signer.key_id().as_str(),
        "ocid1.tenancy.oc1..t/ocid1.user.oc1..u/aa:bb:cc"
    );

    let request = config
        .function_request("POST", r#"{"record":"value"}"#)
        .unwrap();
    let signed = match signer.sign_at(request, common::fixed_now()).unwrap() {
        SigningOutcome::Signed(signed) => signed,
        other => panic!("expected Signed, got {other:?}"),
    };

    assert_eq!(
        signed.headers().get("host"),
        Some("abc.us-ashburn-1.functions.oci.oraclecloud.com")
    );
    assert_eq!(signed.headers().get("content-length"), Some("18"));
    assert!(
        signed
            .authorization()
            .unwrap()
            .contains(r#"keyId="ocid1.tenancy.oc1..t/ocid1.user.oc1..u/aa:bb:cc""#)
    );
}

#[test]
fn missing_key_file_surfaces_key_load() {
    let config = config(PathBuf::from("/nonexistent/oci_api_key.pem"));
    match config.request_signer() {
        Err(ConfigError::Signing(SigningError::KeyLoad(_))) => {}
        other => panic!("expected KeyLoad, got {other:?}"),
    }
}

#[test]
fn non_pem_extension_is_rejected_before_loading() {
    let config = config(PathBuf::from("/keys/oci_api_key.key"));
    assert!(matches!(
        config.request_signer(),
        Err(ConfigError::PrivateKeyNotPem(_))
    ));
}

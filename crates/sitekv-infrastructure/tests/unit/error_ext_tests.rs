//! Error context helper tests

use std::error::Error as _;

use sitekv_domain::error::Error;
use sitekv_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let error = io_failure().context("Failed to open store").unwrap_err();

    assert!(matches!(error, Error::Infrastructure { .. }));
    assert!(error.to_string().contains("Failed to open store: gone"));
    assert!(error.source().is_some());
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 1);

    let error = io_failure()
        .with_context(|| format!("read {}", "local.json"))
        .unwrap_err();
    assert!(error.to_string().contains("read local.json"));
}

#[test]
fn test_config_and_network_context_pick_variants() {
    let config = io_failure().config_context("bad file").unwrap_err();
    assert!(matches!(config, Error::Configuration { .. }));

    let network = io_failure().network_context("proxy down").unwrap_err();
    assert!(matches!(network, Error::Network { .. }));
}

//! Tests for the OPC tracing setup.

use std::sync::Mutex;

use opc_core::config::ObservabilityConfig;
use opc_core::tracing::{init_tracing, init_tracing_with};

/// Serializes tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn opc_log_debug_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OPC_LOG", "debug");
    init_tracing();
    std::env::remove_var("OPC_LOG");
}

#[test]
fn per_target_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OPC_LOG", "opc_view=debug,opc_core=warn");
    init_tracing();
    std::env::remove_var("OPC_LOG");
}

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_with(&ObservabilityConfig {
        log_level: "trace".to_string(),
    });
    init_tracing();
}

#[test]
fn invalid_opc_log_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OPC_LOG", "this_is=not=a=filter");
    init_tracing();
    std::env::remove_var("OPC_LOG");
}

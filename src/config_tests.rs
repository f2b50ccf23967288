use crate::config::Config;
use crate::domain::trading::instrument::InstrumentClass;
use std::env;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    unsafe {
        env::remove_var("PNL_CONTRACT_SPECS");
        env::remove_var("PNL_LOG_JSON");
        env::remove_var("PNL_LOG_LEVEL");
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert!(config.contract_specs_path.is_none());
    assert!(!config.log_json);
    assert_eq!(config.log_level, "info");

    let engine = config.build_engine().unwrap();
    assert_eq!(
        engine.specs().classify("XAUUSD").class,
        InstrumentClass::Metals
    );
}

#[test]
fn test_config_loads_specs_file() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let path = env::temp_dir().join(format!("tradepnl-specs-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[metal_contract_sizes]").unwrap();
    writeln!(file, "XPTUSD = \"50\"").unwrap();
    drop(file);

    unsafe {
        env::set_var("PNL_CONTRACT_SPECS", &path);
        env::set_var("PNL_LOG_JSON", "true");
    }

    let config = Config::from_env().unwrap();
    assert!(config.log_json);

    let engine = config.build_engine().unwrap();
    // The file replaces the metals table entirely
    assert_eq!(
        engine.specs().classify("XPTUSD").class,
        InstrumentClass::Metals
    );
    assert_eq!(
        engine.specs().classify("XAUUSD").class,
        InstrumentClass::Generic
    );

    std::fs::remove_file(&path).ok();
    clear_env();
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    unsafe {
        env::set_var("PNL_LOG_LEVEL", "chatty");
    }

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_cli_path_overrides_env() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    unsafe {
        env::set_var("PNL_CONTRACT_SPECS", "/from/env.toml");
    }

    let config = Config::from_env()
        .unwrap()
        .with_contract_specs_path(Some("/from/cli.toml".into()));
    assert_eq!(
        config.contract_specs_path.as_deref(),
        Some(std::path::Path::new("/from/cli.toml"))
    );

    let config = config.with_contract_specs_path(None);
    assert!(config.contract_specs_path.is_some());

    clear_env();
}

//! Bootstrap from a configuration file.

use sardana_common::config::{ConfigError, LogLevel, SardanaConfig};
use sardana_common::context::{InitError, SardanaContext};
use sardana_common::element::State;
use sardana_common::numeric::AttrValue;
use std::fs;
use tempfile::TempDir;

#[test]
fn context_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sardana.toml");
    fs::write(
        &path,
        r#"
[shared]
log_level = "warn"
service_name = "expconf"

[filter]
epsilon = 0.001
"#,
    )
    .unwrap();

    let config = SardanaConfig::load_validated(&path).unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Warn);

    let mut ctx = SardanaContext::init(&config).unwrap();
    assert_eq!(ctx.server_state(), State::Invalid);
    assert!(!ctx.filter().changed(&AttrValue::Float(1.0), &AttrValue::Float(1.0005)));
    assert!(ctx.filter().changed(&AttrValue::Float(1.0), &AttrValue::Float(1.01)));

    ctx.set_server_state(State::On);
    assert_eq!(ctx.server_state(), State::On);
}

#[test]
fn unknown_filter_field_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sardana.toml");
    fs::write(&path, "[filter]\nepsilom = 1.0\n").unwrap();

    assert!(matches!(
        SardanaConfig::load_validated(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn invalid_config_stops_bootstrap() {
    let mut config = SardanaConfig::default();
    config.filter.epsilon = f64::NAN;
    assert!(matches!(
        SardanaContext::init(&config),
        Err(InitError::Config(ConfigError::ValidationError(_)))
    ));
}

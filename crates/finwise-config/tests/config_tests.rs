use finwise_config::{Config, ConfigError, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_targets_rupees() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "INR");
    assert_eq!(cfg.locale, "en-IN");
    assert_eq!(cfg.savings_target, 1_000.0);
    assert_eq!(cfg.calculator.fd_amount, 10_000.0);
    assert_eq!(cfg.calculator.sip_years, 10);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("home")).expect("manager");

    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.set("locale", "en-US").expect("locale");
    cfg.set("savings_target", "2500").expect("target");
    cfg.set("theme", "plain").expect("theme");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.locale, "en-US");
    assert_eq!(loaded.savings_target, 2_500.0);
    assert_eq!(loaded.theme, Theme::Plain);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale":"en-US","currency":"INR","theme":null}"#).unwrap();

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.theme, Theme::Iconic);
    assert!(loaded.ui_color_enabled);
    assert_eq!(loaded.calculator.rd_months, 12);
}

#[test]
fn set_rejects_bad_values() {
    let mut cfg = Config::default();
    assert!(matches!(
        cfg.set("savings_target", "-5"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("budget_kind", "wedding"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("volume", "11"),
        Err(ConfigError::UnknownKey(_))
    ));
}

#[test]
fn every_calculator_default_is_settable() {
    let mut cfg = Config::default();
    cfg.set("fd_amount", "25000").expect("fd amount");
    cfg.set("fd_months", "18").expect("fd months");
    cfg.set("rd_amount", "1500").expect("rd amount");
    cfg.set("rd_rate", "7.1").expect("rd rate");
    cfg.set("rd_months", "24").expect("rd months");
    cfg.set("sip_amount", "5000").expect("sip amount");
    cfg.set("sip_return", "11").expect("sip return");
    cfg.set("sip_years", "15").expect("sip years");

    let calc = &cfg.calculator;
    assert_eq!(calc.fd_amount, 25_000.0);
    assert_eq!(calc.fd_rate, 6.5);
    assert_eq!(calc.fd_months, 18);
    assert_eq!(calc.rd_amount, 1_500.0);
    assert_eq!(calc.rd_rate, 7.1);
    assert_eq!(calc.rd_months, 24);
    assert_eq!(calc.sip_amount, 5_000.0);
    assert_eq!(calc.sip_return, 11.0);
    assert_eq!(calc.sip_years, 15);

    assert!(matches!(
        cfg.set("sip_years", "-2"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("rd_rate", "inf"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(cfg.calculator.sip_years, 15);
}

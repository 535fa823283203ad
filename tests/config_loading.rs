// tests/config_loading.rs
use listing_risk::config::{
    load_config_default, load_config_from, RiskConfig, ENV_BLEND_WEIGHT, ENV_GAP_CAP,
    ENV_RISK_CONFIG_PATH,
};
use std::{env, fs};

fn clear_env() {
    env::remove_var(ENV_RISK_CONFIG_PATH);
    env::remove_var(ENV_GAP_CAP);
    env::remove_var(ENV_BLEND_WEIGHT);
}

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("risk.toml");
    fs::write(
        &p_toml,
        r#"
gap_cap = 8.0
blend_weight = 0.6

[components]
legal = 0.4
fake = 0.3
"#,
    )
    .unwrap();
    let t = load_config_from(&p_toml).unwrap();
    assert_eq!(t.gap_cap, 8.0);
    assert_eq!(t.blend_weight, 0.6);
    assert_eq!(t.components.legal, 0.4);
    assert_eq!(t.components.fake, 0.3);
    assert_eq!(t.components.price, 0.25);

    let p_json = dir.path().join("risk.json");
    fs::write(&p_json, r#"{"gap_cap": 12.5, "components": {"planning": 0.0}}"#).unwrap();
    let j = load_config_from(&p_json).unwrap();
    assert_eq!(j.gap_cap, 12.5);
    assert_eq!(j.blend_weight, 0.5);
    assert_eq!(j.components.planning, 0.0);
}

#[test]
fn invalid_cap_in_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("risk.toml");
    fs::write(&p, "gap_cap = 0.9").unwrap();
    let err = load_config_from(&p).unwrap_err();
    assert!(format!("{err:#}").contains("gap_cap"), "{err:#}");
}

#[test]
fn missing_file_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("nope.toml");
    let err = load_config_from(&p).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"), "{err:#}");
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ is not read
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    // 1) Nothing → defaults
    assert_eq!(load_config_default().unwrap(), RiskConfig::default());

    // 2) JSON fallback in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("risk.json"), r#"{"gap_cap": 6.0}"#).unwrap();
    assert_eq!(load_config_default().unwrap().gap_cap, 6.0);

    // 3) TOML takes precedence over JSON
    fs::write(cfg_dir.join("risk.toml"), "gap_cap = 7.0").unwrap();
    assert_eq!(load_config_default().unwrap().gap_cap, 7.0);

    // 4) Env path wins over both
    let p_env = tmp.path().join("elsewhere.json");
    fs::write(&p_env, r#"{"gap_cap": 30.0}"#).unwrap();
    env::set_var(ENV_RISK_CONFIG_PATH, p_env.display().to_string());
    assert_eq!(load_config_default().unwrap().gap_cap, 30.0);

    // 5) Env path to nowhere is an error
    env::set_var(ENV_RISK_CONFIG_PATH, tmp.path().join("missing.toml").display().to_string());
    assert!(load_config_default().is_err());

    clear_env();
    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn scalar_env_overrides() {
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    env::set_var(ENV_GAP_CAP, "20");
    env::set_var(ENV_BLEND_WEIGHT, "2.5");
    let cfg = load_config_default().unwrap();
    assert_eq!(cfg.gap_cap, 20.0);
    // clamped, not rejected
    assert_eq!(cfg.blend_weight, 1.0);

    // non-numeric override is ignored
    env::set_var(ENV_GAP_CAP, "ten");
    assert_eq!(load_config_default().unwrap().gap_cap, 10.0);

    // numeric but degenerate cap is rejected
    env::set_var(ENV_GAP_CAP, "1.0");
    assert!(load_config_default().is_err());

    clear_env();
    env::set_current_dir(&old).unwrap();
}

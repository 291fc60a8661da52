use super::*;

#[test]
fn config_has_expected_defaults() {
    let config = Config::default();
    assert_eq!(config.version, None);
    assert_eq!(config.session.prompt, "(lab-verdict) ");
    assert_eq!(config.check.default_step, 2);
    assert!(config.preload.reports.is_empty());
    assert!(config.preload.instructions.is_empty());
}

#[test]
fn empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn full_toml_parses() {
    let toml_str = r#"
version = "1"

[session]
prompt = "> "

[check]
default_step = 1

[preload]
reports = ["input_example/"]
instructions = ["input_example/instruction.json", "extra.json"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.version.as_deref(), Some(CONFIG_VERSION));
    assert_eq!(config.session.prompt, "> ");
    assert_eq!(config.check.default_step, 1);
    assert_eq!(config.preload.reports, ["input_example/"]);
    assert_eq!(
        config.preload.instructions,
        ["input_example/instruction.json", "extra.json"]
    );
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[preload]\nreports = [\"a\"]\n").unwrap();
    assert_eq!(config.check.default_step, 2);
    assert_eq!(config.preload.reports, ["a"]);
}

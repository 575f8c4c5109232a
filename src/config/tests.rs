// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::core::env::container::Env;
use crate::logging::LogLevel;
use std::io::Write as _;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert!(config.environment.inherit);
    assert!(config.environment.vars.is_empty());
}

#[test]
fn test_parse_environment_section() {
    let config = Config::parse(
        r#"
[environment]
inherit = false
exclude = ["TM_*"]
vars = ["LANG=en_US.UTF-8", "EDITOR=vi"]
path_prepend = ["/opt/tools/bin"]
"#,
    )
    .unwrap();

    assert!(!config.environment.inherit);
    assert_eq!(config.environment.exclude, ["TM_*"]);
    assert_eq!(
        config.environment.path_prepend,
        [PathBuf::from("/opt/tools/bin")]
    );

    let env = config
        .environment
        .recipe()
        .unwrap()
        .compose(&Env::new())
        .unwrap();
    assert_eq!(env.get("LANG"), Some("en_US.UTF-8"));
    assert_eq!(env.get("EDITOR"), Some("vi"));
    assert_eq!(env.get("PATH"), Some("/opt/tools/bin"));
}

#[test]
fn test_parse_global_section() {
    let config = Config::parse(
        r#"
[global]
log_level = 5
log_file = "logs/benv.log"
"#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/benv.log")));
}

#[test]
fn test_unknown_field_rejected() {
    let result = Config::parse(
        r"
[environment]
inherits = true
",
    );
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::parse(
        r"
[global]
log_level = 9
",
    );
    assert!(result.is_err());
}

#[test]
fn test_malformed_var_rejected() {
    let err = Config::parse(
        r#"
[environment]
vars = ["NOEQUALS"]
"#,
    )
    .unwrap_err();

    insta::assert_snapshot!(
        format!("{err:#}"),
        @"invalid value for 'vars' in section '[environment]': missing '=' in 'NOEQUALS'"
    );
}

#[test]
fn test_bad_glob_rejected() {
    let err = Config::parse(
        r#"
[environment]
keep = ["["]
"#,
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("bad pattern '['"), "{err:#}");
}

#[test]
fn test_loader_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[environment]\ninherit = true\n")
        .set("environment.inherit", false)
        .unwrap()
        .build()
        .unwrap();

    assert!(!config.environment.inherit);
}

#[test]
fn test_later_files_win() {
    let mut first = tempfile::NamedTempFile::new().unwrap();
    writeln!(first, "[global]\nlog_level = 1\n[environment]\nvars = [\"A=1\"]").unwrap();
    let mut second = tempfile::NamedTempFile::new().unwrap();
    writeln!(second, "[global]\nlog_level = 4").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(first.path())
        .add_toml_file(second.path());
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.environment.vars, ["A=1"]);
}

#[test]
fn test_missing_required_file() {
    let result = ConfigLoader::new()
        .add_toml_file("/definitely/missing/benv.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_missing_optional_file_not_listed() {
    let loader = ConfigLoader::new().add_toml_file_optional("/definitely/missing/benv.toml");
    assert!(loader.format_loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[environment]
exclude = ["TM_*", "SECRET"]
vars = ["LANG=C"]
"#,
    )
    .unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    environment.exclude      = TM_*, SECRET
    environment.inherit      = true
    environment.keep         =
    environment.path_append  =
    environment.path_prepend =
    environment.vars.LANG    = LANG=C
    global.file_log_level    = 5
    global.log_file          =
    global.log_level         = 3
    ");
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file("/etc/benv/site.toml");
    assert_eq!(
        loader.format_loaded_files(),
        ["1. [string] <string>", "2. [file] /etc/benv/site.toml"]
    );
}

fn from_env_vars(vars: &[(&str, &str)]) -> Config {
    let vars: config::Map<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    config::Config::builder()
        .add_source(super::loader::env_layer("BENV").source(Some(vars)))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_env_vars_fill_lists() {
    let config = from_env_vars(&[
        ("BENV_ENVIRONMENT__EXCLUDE", "TM_*,SECRET"),
        ("BENV_ENVIRONMENT__KEEP", "HOME"),
        ("BENV_ENVIRONMENT__VARS", "LANG=C,EDITOR=vi"),
        ("BENV_ENVIRONMENT__PATH_PREPEND", "/opt/bin"),
    ]);

    assert_eq!(config.environment.exclude, ["TM_*", "SECRET"]);
    assert_eq!(config.environment.keep, ["HOME"]);
    assert_eq!(config.environment.vars, ["LANG=C", "EDITOR=vi"]);
    assert_eq!(config.environment.path_prepend, [PathBuf::from("/opt/bin")]);
}

#[test]
fn test_env_vars_scalars() {
    let config = from_env_vars(&[
        ("BENV_GLOBAL__LOG_LEVEL", "4"),
        ("BENV_ENVIRONMENT__INHERIT", "false"),
        ("UNRELATED", "x"),
    ]);

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert!(!config.environment.inherit);
}

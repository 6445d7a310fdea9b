#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use envprobe_core::env::FixedEnv;
use envprobe_core::expose::ExposeMode;
use envprobe_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
probe:
  mdoe: public # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.probe.mode, ExposeMode::Pod);
}

#[test]
fn public_mode_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:5000"
probe:
  mode: public
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.probe.mode, ExposeMode::Public);
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 5000);
}

#[test]
fn unknown_mode_rejected() {
    let err = config::load_from_str("version: 1\nprobe:\n  mode: both\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_rejected() {
    let err = config::load_from_str("version: 1\nserver:\n  listen: \"nope\"\n")
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn env_overrides_apply() {
    let env = FixedEnv::new([
        (config::MODE_VAR, "PUBLIC"),
        (config::LISTEN_VAR, "127.0.0.1:9000"),
    ]);
    let cfg = config::load(&env).expect("must load");
    assert_eq!(cfg.probe.mode, ExposeMode::Public);
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
}

#[test]
fn env_override_bad_mode_fails() {
    let env = FixedEnv::new([(config::MODE_VAR, "nodes")]);
    let err = config::load(&env).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_config_file_is_internal() {
    let env = FixedEnv::new([(config::CONFIG_PATH_VAR, "/definitely/not/here/envprobe.yaml")]);
    let err = config::load(&env).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn mode_is_case_insensitive_in_yaml() {
    let cfg = config::load_from_str("version: 1\nprobe:\n  mode: Public\n").expect("must parse");
    assert_eq!(cfg.probe.mode, ExposeMode::Public);

    let cfg = config::load_from_str("version: 1\nprobe:\n  mode: POD\n").expect("must parse");
    assert_eq!(cfg.probe.mode, ExposeMode::Pod);
}

#[test]
fn config_file_applied_then_env_overrides() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "version: 1\nserver:\n  listen: \"127.0.0.1:5000\"\nprobe:\n  mode: public"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let env = FixedEnv::new([(config::CONFIG_PATH_VAR, path.as_str())]);
    let cfg = config::load(&env).expect("must load file");
    assert_eq!(cfg.probe.mode, ExposeMode::Public);
    assert_eq!(cfg.server.listen, "127.0.0.1:5000");

    let env = FixedEnv::new([
        (config::CONFIG_PATH_VAR, path.as_str()),
        (config::MODE_VAR, "pod"),
        (config::LISTEN_VAR, "127.0.0.1:9001"),
    ]);
    let cfg = config::load(&env).expect("must load file");
    assert_eq!(cfg.probe.mode, ExposeMode::Pod);
    assert_eq!(cfg.server.listen, "127.0.0.1:9001");
}

#[test]
fn invalid_config_file_is_bad_request() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "version: 1\nprobe:\n  mode: nodes").unwrap();
    let err = config::load_from_file(file.path().to_str().unwrap()).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

// CLASSIFICATION: COMMUNITY
// Filename: test_system_runner.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18
#![cfg(unix)]

//! Drives real child processes through stand-in tool scripts.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use irbuild::config::{Cli, EnvOverrides};
use irbuild::orchestrator::orchestrate;
use irbuild::record::{hash_artifact, BuildRecord};
use irbuild::runner::SystemRunner;
use irbuild::toolchain::{Tool, Toolchain};
use irbuild::{BuildError, Config, Mode, Outcome};
use clap::Parser;
use serial_test::serial;
use tempfile::{tempdir, TempDir};

const FAKE_LLC: &str = r#"#!/bin/sh
if [ "$1" = "-filetype=obj" ]; then
    cp "$2" "${2%.*}.o"
else
    cp "$1" "${1%.*}.s"
fi
"#;
const FAKE_DIS: &str = "#!/bin/sh\ncat\n";
const FAKE_CC: &str = "#!/bin/sh\ncp \"$1\" \"$3\"\n";

fn script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_str().unwrap().to_string()
}

struct Fixture {
    dir: TempDir,
    toolchain: Toolchain,
    input: String,
}

fn fixture() -> Fixture {
    let dir = tempdir().unwrap();
    let toolchain = Toolchain::default()
        .with_override(Tool::Llc, Some(script(dir.path(), "fake-llc", FAKE_LLC)))
        .with_override(Tool::LlvmDis, Some(script(dir.path(), "fake-dis", FAKE_DIS)))
        .with_override(Tool::Cc, Some(script(dir.path(), "fake-cc", FAKE_CC)));
    let input = dir.path().join("hello.bc");
    fs::write(&input, b"BC\xc0\xde fake bitcode").unwrap();
    Fixture {
        input: input.to_str().unwrap().to_string(),
        dir,
        toolchain,
    }
}

fn build(input: &str, cfg: &Config) -> (Result<Outcome, BuildError>, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let res = orchestrate(Some(input), cfg, &mut SystemRunner, &mut out, &mut err);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn produces_all_artifacts() {
    let fx = fixture();
    let cfg = Config {
        toolchain: fx.toolchain.clone(),
        ..Config::default()
    };
    let (res, out) = build(&fx.input, &cfg);
    assert_eq!(res.unwrap().exit_code(), 0);
    assert_eq!(out.lines().count(), 4);
    for name in ["hello.s", "hello.ll", "hello.o", "hello"] {
        let data = fs::read(fx.dir.path().join(name)).unwrap();
        assert_eq!(data, b"BC\xc0\xde fake bitcode", "{name}");
    }
}

#[test]
fn rebuilding_is_idempotent() {
    let fx = fixture();
    let log = fx.dir.path().join("builds.log");
    let cfg = Config {
        toolchain: fx.toolchain.clone(),
        record: Some(log.clone()),
        ..Config::default()
    };
    let (first, out1) = build(&fx.input, &cfg);
    let (second, out2) = build(&fx.input, &cfg);
    let (Ok(Outcome::Built { artifacts, .. }), Ok(_)) = (first, second) else {
        panic!("both builds should complete");
    };
    assert_eq!(out1, out2);

    let lines: Vec<String> = fs::read_to_string(&log)
        .unwrap()
        .lines()
        .map(|l| l.split_once(' ').unwrap().1.to_string())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
    assert!(!lines[0].contains("missing"));
    assert_eq!(lines[0], BuildRecord::collect(&artifacts, Mode::Legacy).unwrap().render());
}

#[test]
fn legacy_mode_exits_zero_when_tools_are_absent() {
    let fx = fixture();
    let toolchain = Toolchain::default()
        .with_override(Tool::Llc, Some("irbuild-absent-llc".into()))
        .with_override(Tool::LlvmDis, Some("false".into()))
        .with_override(Tool::Cc, Some("irbuild-absent-cc".into()));
    let cfg = Config {
        toolchain,
        ..Config::default()
    };
    let (res, out) = build(&fx.input, &cfg);
    assert_eq!(res.unwrap().exit_code(), 0);
    assert_eq!(out.lines().count(), 4);
    // The redirect target exists even though the disassembler failed.
    assert!(hash_artifact(&fx.dir.path().join("hello.ll")).unwrap().is_some());
    assert!(!fx.dir.path().join("hello").exists());
}

#[test]
fn legacy_mode_continues_past_missing_input_file() {
    let fx = fixture();
    let cfg = Config {
        toolchain: fx.toolchain.clone(),
        ..Config::default()
    };
    let missing = fx.dir.path().join("absent.bc");
    let (res, out) = build(missing.to_str().unwrap(), &cfg);
    assert_eq!(res.unwrap().exit_code(), 0);
    assert_eq!(out.lines().count(), 4);
    assert!(!fx.dir.path().join("absent.ll").exists());
}

#[test]
fn strict_mode_reports_failing_step() {
    let fx = fixture();
    let toolchain = fx
        .toolchain
        .clone()
        .with_override(Tool::Cc, Some(script(fx.dir.path(), "bad-cc", "#!/bin/sh\nexit 3\n")));
    let cfg = Config {
        mode: Mode::Strict,
        toolchain,
        record: None,
    };
    let (res, out) = build(&fx.input, &cfg);
    match res {
        Err(BuildError::BuildStepFailed { step, status, .. }) => {
            assert_eq!(step.to_string(), "link");
            assert_eq!(status.code, Some(3));
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(out.lines().count(), 4);
    assert!(fx.dir.path().join("hello.o").exists());
}

#[test]
fn strict_mode_reports_unreadable_input() {
    let fx = fixture();
    let cfg = Config {
        mode: Mode::Strict,
        toolchain: fx.toolchain.clone(),
        record: None,
    };
    let missing: PathBuf = fx.dir.path().join("absent.bc");
    // The fake llc's `cp` fails first.
    let (res, out) = build(missing.to_str().unwrap(), &cfg);
    assert!(matches!(
        res,
        Err(BuildError::BuildStepFailed { .. })
    ));
    assert_eq!(out.lines().count(), 1);
}

#[test]
#[serial]
fn environment_selects_tools_and_mode() {
    let fx = fixture();
    std::env::set_var("IRBUILD_STRICT", "1");
    std::env::set_var("IRBUILD_LLC", fx.toolchain.program(Tool::Llc));
    let cli = Cli::try_parse_from(["irbuild", "--cc", "cc-from-cli"]).unwrap();
    let env = EnvOverrides::from_env();
    std::env::remove_var("IRBUILD_STRICT");
    std::env::remove_var("IRBUILD_LLC");

    let cfg = Config::resolve(&cli, &env.unwrap()).unwrap();
    assert_eq!(cfg.mode, Mode::Strict);
    assert_eq!(cfg.toolchain.program(Tool::Llc), fx.toolchain.program(Tool::Llc));
    assert_eq!(cfg.toolchain.program(Tool::Cc), "cc-from-cli");
}

#[test]
#[serial]
fn config_file_from_environment() {
    let fx = fixture();
    let path = fx.dir.path().join("irbuild.toml");
    fs::write(&path, "[tools]\ncc = \"clang\"\n").unwrap();
    std::env::set_var("IRBUILD_CONFIG", &path);
    let cfg = Config::from_cli(&Cli::default());
    std::env::remove_var("IRBUILD_CONFIG");

    let cfg = cfg.unwrap();
    assert_eq!(cfg.mode, Mode::Legacy);
    assert_eq!(cfg.toolchain.program(Tool::Cc), "clang");
}

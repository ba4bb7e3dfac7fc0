//! Exit status contract of the `gcm-kat` binary.

use std::path::Path;
use std::process::{Command, Output};

fn gcm_kat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gcm-kat"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs")
}

fn data(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
        .display()
        .to_string()
}

#[test]
fn builtin_suites_exit_zero() {
    let out = gcm_kat(&[]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn first_mismatch_exits_one_with_dump_on_stdout() {
    let out = gcm_kat(&["--no-builtin", "--rsp", &data("gcmEncrypt-corrupt.rsp")]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).expect("utf-8 dump");
    assert_eq!(
        stdout,
        "Test 'gcmEncrypt-corrupt' (#0) failed against composed\n\
         Tag mismatch\n\
         output:   0xab6e47d42cec13bdf53a67b21257bddf\n\
         expected: 0xab6e47d42cec13bdf53a67b21257bdde\n"
    );
}

#[test]
fn fused_only_reports_fused() {
    let out = gcm_kat(&[
        "--strategy",
        "fused",
        "--no-builtin",
        "--rsp",
        &data("gcmEncrypt-corrupt.rsp"),
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).expect("utf-8 dump");
    assert!(stdout.starts_with("Test 'gcmEncrypt-corrupt' (#0) failed against fused\n"));
}

#[test]
fn unreadable_fixture_exits_two() {
    let out = gcm_kat(&["--rsp", &data("does-not-exist.rsp")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn suite_filter_selects_by_name() {
    let out = gcm_kat(&[
        "--suite",
        "aes256",
        "--rsp",
        &data("gcmEncrypt-corrupt.rsp"),
    ]);
    assert_eq!(out.status.code(), Some(0));
}

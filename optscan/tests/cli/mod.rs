//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::process::Command;

use plib::testing::{run_test, run_test_with_checker, test_bin_path, TestPlan};

fn optscan_test(args: &[&str], expected_out: &str, expected_err: &str, expected_code: i32) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("optscan"),
        args: str_args,
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code: expected_code,
    });
}

#[test]
fn test_optscan_plain_options() {
    optscan_test(&["-o", "ab", "--", "-a", "foo", "bar"], " -a -- 'foo' 'bar'\n", "", 0);
    optscan_test(&["-o", "ab", "--", "-b", "-a"], " -b -a --\n", "", 0);
}

#[test]
fn test_optscan_bundled() {
    optscan_test(&["-o", "abc", "--", "-cab", "file"], " -c -a -b -- 'file'\n", "", 0);
}

#[test]
fn test_optscan_arguments() {
    optscan_test(&["-o", "p:q:", "--", "-pfoo", "bar"], " -p 'foo' -- 'bar'\n", "", 0);
    optscan_test(&["-o", "p:q:", "--", "-p", "foo", "bar"], " -p 'foo' -- 'bar'\n", "", 0);
    optscan_test(
        &["-o", "p:", "--", "-p", "it's"],
        " -p 'it'\\''s' --\n",
        "",
        0,
    );
}

#[test]
fn test_optscan_permutes_operands() {
    optscan_test(
        &["-o", "abp:q:", "--", "donald", "-p", "billy", "duck", "-a", "bar"],
        " -p 'billy' -a -- 'donald' 'duck' 'bar'\n",
        "",
        0,
    );
}

#[test]
fn test_optscan_terminator() {
    optscan_test(
        &["-o", "ab", "--", "x", "-a", "--", "-b", "y"],
        " -a -- 'x' '-b' 'y'\n",
        "",
        0,
    );
}

#[test]
fn test_optscan_dash_and_long() {
    optscan_test(&["-o", "a", "--", "-", "-a"], " -a -- '-'\n", "", 0);
    optscan_test(
        &["-o", "a", "--", "x", "-", "y", "-a"],
        " -a -- 'x' '-' 'y'\n",
        "",
        0,
    );
    optscan_test(
        &["-o", "a", "--", "--color=auto", "-a", "x", "--verbose"],
        " --color 'auto' -a --verbose -- 'x'\n",
        "",
        0,
    );
}

#[test]
fn test_optscan_unknown_option() {
    optscan_test(
        &["-o", "ab", "--", "-x", "foo"],
        " -- 'foo'\n",
        "Unknown option: -x\n",
        1,
    );
    optscan_test(
        &["-o", ":ab", "--", "-x", "foo"],
        " -- 'foo'\n",
        "Unknown option: -x\n",
        1,
    );
}

#[test]
fn test_optscan_argument_not_allowed() {
    optscan_test(
        &["-o", "a", "--", "-a=1"],
        " --\n",
        "Option -a doesn't allow an argument.\n",
        1,
    );
}

#[test]
fn test_optscan_missing_argument() {
    optscan_test(
        &["-o", "ap:", "--", "-ap"],
        " -a --\n",
        "Option -p requires an argument.\n",
        1,
    );
    optscan_test(&["-o", ":ap:", "--", "-ap"], " -a --\n", "", 1);
}

#[test]
fn test_optscan_quiet() {
    optscan_test(&["-q", "-o", "ab", "--", "-x", "-a"], " -a --\n", "", 1);
}

#[test]
fn test_optscan_requires_optstring() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from("optscan"),
            args: vec![String::from("foo")],
            expected_out: String::from(""),
            expected_err: String::from(""),
            expected_exit_code: 2,
        },
        |plan, output| {
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            assert!(output.stdout.is_empty());
            assert!(!output.stderr.is_empty());
        },
    );
}

#[test]
fn test_optscan_rejects_non_utf8_parameters() {
    let output = Command::new(test_bin_path("optscan"))
        .args(["-o", "a", "--"])
        .arg(OsStr::from_bytes(b"caf\xe9"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn command optscan");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

//! Tests for the fetch and resolve subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_fetch_defaults() {
    match parse(&["fapack", "fetch"]) {
        CliCommand::Fetch {
            file,
            out,
            prepend,
            with_style_prefix,
        } => {
            assert!(file.is_none());
            assert!(out.is_none());
            assert!(prepend.is_none());
            assert!(!with_style_prefix);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_file_and_flags() {
    match parse(&[
        "fapack",
        "fetch",
        "icons.txt",
        "--out",
        "/tmp/svgs",
        "--prepend",
        "icon-",
        "--with-style-prefix",
    ]) {
        CliCommand::Fetch {
            file,
            out,
            prepend,
            with_style_prefix,
        } => {
            assert_eq!(file.as_deref(), Some(Path::new("icons.txt")));
            assert_eq!(out.as_deref(), Some(Path::new("/tmp/svgs")));
            assert_eq!(prepend.as_deref(), Some("icon-"));
            assert!(with_style_prefix);
        }
        _ => panic!("expected Fetch with flags"),
    }
}

#[test]
fn cli_parse_fetch_stdin_dash() {
    match parse(&["fapack", "fetch", "-"]) {
        CliCommand::Fetch { file, .. } => {
            assert_eq!(file.as_deref(), Some(Path::new("-")));
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["fapack", "resolve", "fab fa-facebook-square", "far fa-star"]) {
        CliCommand::Resolve { icons } => {
            assert_eq!(icons, vec!["fab fa-facebook-square", "far fa-star"]);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_requires_an_icon() {
    assert!(Cli::try_parse_from(["fapack", "resolve"]).is_err());
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["fapack", "frobnicate"]).is_err());
}

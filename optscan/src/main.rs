//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, Write};

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use optscan::error::{Error, GetExitCode, Result};
use optscan::{scan_with, Code, Cursor, OptSpec};
use plib::quote::shell_quote;
use plib::PROJECT_NAME;

/// optscan - parse and normalize command options
#[derive(Parser)]
#[command(version, about = gettext("optscan - parse and normalize command options"))]
struct Args {
    #[arg(short, long, help = gettext("Do not report invalid options"))]
    quiet: bool,

    #[arg(
        short,
        long,
        default_value = "optscan",
        help = gettext("Program name placed in front of the parameters")
    )]
    name: String,

    #[arg(short, long, help = gettext("Short option specification, as for getopt(3)"))]
    options: String,

    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = gettext("Parameters to scan")
    )]
    parameters: Vec<String>,
}

/// Scan the parameters and write them back as one line of shell words:
/// options first, then `--`, then the operands. A bare `-` is an operand
/// and keeps its place among the others.
fn normalize(args: &Args, diagnostics: &mut dyn Write, out: &mut dyn Write) -> Result<()> {
    let mut argv: Vec<&str> = Vec::with_capacity(args.parameters.len() + 1);
    argv.push(&args.name);
    argv.extend(args.parameters.iter().map(String::as_str));

    let spec = OptSpec::new(&args.options);
    let len = argv.len();
    let mut cursor = Cursor::new(len);
    let mut line = String::new();
    let mut invalid = false;
    // operands deferred ahead of each bare dash
    let mut dashes: Vec<usize> = Vec::new();

    loop {
        let (found, next) = scan_with(&mut argv, cursor, &spec, diagnostics);
        cursor = next;

        match found.code {
            Code::End => break,
            Code::Option(c) => {
                line.push_str(&format!(" -{c}"));
                if let Some(arg) = found.arg {
                    line.push(' ');
                    line.push_str(&shell_quote(arg));
                }
            }
            Code::Long => {
                line.push_str(&format!(" --{}", found.name.unwrap_or_default()));
                if let Some(value) = found.arg {
                    line.push(' ');
                    line.push_str(&shell_quote(value));
                }
            }
            Code::Dash => dashes.push(cursor.deferred(len)),
            Code::Invalid | Code::MissingArgument => invalid = true,
        }
    }

    let mut operands: Vec<&str> = argv[cursor.window()].to_vec();
    for (i, pos) in dashes.into_iter().enumerate() {
        operands.insert(pos + i, "-");
    }

    line.push_str(" --");
    for operand in &operands {
        line.push(' ');
        line.push_str(&shell_quote(operand));
    }
    writeln!(out, "{line}")?;
    out.flush()?;

    if invalid {
        Err(Error::InvalidOptions)
    } else {
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if args.quiet {
        normalize(&args, &mut io::sink(), &mut out)
    } else {
        normalize(&args, &mut io::stderr().lock(), &mut out)
    };

    if let Err(Error::Io(e)) = &result {
        eprintln!("optscan: {}", e);
    }

    std::process::exit(result.get_exit_code())
}

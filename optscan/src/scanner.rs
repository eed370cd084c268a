//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! The option scanner.
//!
//! A scan sequence walks an argument vector one option at a time. Operands
//! met along the way are rotated to the back of the vector, behind the
//! still unscanned tokens, so that once the sequence ends the vector reads
//! `[program, options and their arguments..., operands...]` with both groups
//! in their original relative order.
//!
//! All state lives in the [`Cursor`] handed back by every call, so any
//! number of independent scans may run side by side.

use std::io::{self, Write};
use std::ops::Range;

use crate::error::Diagnostic;
use crate::rotate::{rotate_front, rotate_front_n};
use crate::spec::{is_short_name, Arity, OptSpec};

/// Raw code reported for a long option.
pub const LONG_OPTION: i32 = 2;
/// Raw code reported for a bare `-`.
pub const BARE_DASH: i32 = -1;

/// What a single scan call found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// A recognized short option.
    Option(char),
    /// `--name[=value]`; the name is not checked against anything.
    Long,
    /// A bare `-`, left in place for the caller.
    Dash,
    /// Unknown option, disallowed argument, or a missing argument outside
    /// silent mode (`?`).
    Invalid,
    /// Missing argument in silent mode (`:`).
    MissingArgument,
    /// No more options.
    End,
}

impl Code {
    /// The classic integer return code.
    pub fn as_raw(self) -> i32 {
        match self {
            Code::Option(c) => c as i32,
            Code::Long => LONG_OPTION,
            Code::Dash => BARE_DASH,
            Code::Invalid => '?' as i32,
            Code::MissingArgument => ':' as i32,
            Code::End => 0,
        }
    }
}

/// Result of one scan call.
///
/// `arg` holds the option-argument, the value of a long option, or, for
/// unknown options and missing arguments, the offending option character.
/// `diagnostic` is set exactly when a diagnostic line was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan<'a> {
    pub code: Code,
    pub arg: Option<&'a str>,
    pub name: Option<&'a str>,
    pub diagnostic: Option<Diagnostic>,
}

impl<'a> Scan<'a> {
    fn new(code: Code) -> Self {
        Self {
            code,
            arg: None,
            name: None,
            diagnostic: None,
        }
    }

    fn with_arg(mut self, arg: &'a str) -> Self {
        self.arg = Some(arg);
        self
    }

    fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostic = Some(diagnostic);
        self
    }

    pub fn is_end(&self) -> bool {
        self.code == Code::End
    }
}

/// Where a scan sequence stands between calls.
///
/// `--` flushes the remaining tokens and finishes within the call that
/// meets it, so a terminated sequence is only ever seen as `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operand has been set aside yet.
    Scanning,
    /// Some operands are parked behind the visible window.
    Deferred,
    /// The sequence is over; the window covers the operands.
    Finished,
}

/// Position of a scan sequence within its argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Next token to classify.
    index: usize,
    /// Tokens from `index` on that have not been deferred.
    visible: usize,
    /// Byte offset of the next option character inside a bundled cluster,
    /// zero when the token at `index` is fresh.
    cluster: usize,
    finished: bool,
}

impl Cursor {
    /// Start a scan sequence over a vector of `len` tokens, the first of
    /// which is the program name.
    pub fn new(len: usize) -> Self {
        let index = len.min(1);
        Self {
            index,
            visible: len - index,
            cluster: 0,
            finished: false,
        }
    }

    /// Index of the next token to classify. Once finished, the index of the
    /// first operand, which is also the length of the option region.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The visible window; the operands once the sequence is finished.
    pub fn window(&self) -> Range<usize> {
        self.index..self.index + self.visible
    }

    /// Number of operands parked behind the window of a `len` token vector.
    pub fn deferred(&self, len: usize) -> usize {
        len.saturating_sub(self.index + self.visible)
    }

    pub fn phase(&self, len: usize) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.deferred(len) > 0 {
            Phase::Deferred
        } else {
            Phase::Scanning
        }
    }

    fn advance(&mut self) {
        self.index += 1;
        self.visible -= 1;
        self.cluster = 0;
    }

    /// Re-expose every deferred operand and end the sequence.
    fn finish(&mut self, len: usize) {
        self.index = self.index.min(len);
        self.visible = len - self.index;
        self.cluster = 0;
        self.finished = true;
        log::debug!(
            "scan finished: {} operand(s) from index {}",
            self.visible,
            self.index
        );
    }
}

enum Front {
    Exhausted,
    Dash,
    Terminator,
    Option,
}

/// Defer leading operands until the front of the window looks like an
/// option, then say what it is.
fn take_front<T: AsRef<str>>(args: &mut [T], cursor: &mut Cursor) -> Front {
    while cursor.visible > 0 {
        let token = args[cursor.index].as_ref();
        if !token.starts_with('-') {
            log::debug!("deferring operand {token:?}");
            rotate_front(&mut args[cursor.index..]);
            cursor.visible -= 1;
            continue;
        }

        return match token {
            "-" => Front::Dash,
            "--" => Front::Terminator,
            _ => Front::Option,
        };
    }

    Front::Exhausted
}

fn report<W: Write + ?Sized>(sink: &mut W, diagnostic: Diagnostic) -> Diagnostic {
    if let Err(e) = writeln!(sink, "{diagnostic}") {
        log::warn!("failed to write diagnostic: {e}");
    }
    diagnostic
}

/// Scan the next option of `args`, writing diagnostics to standard error.
///
/// Call repeatedly, feeding back the returned cursor, until the code is
/// [`Code::End`]. `args` must be the same vector on every call of a
/// sequence; its tokens are reordered but never modified.
pub fn scan<'a, T: AsRef<str>>(
    args: &'a mut [T],
    cursor: Cursor,
    spec: &OptSpec<'_>,
) -> (Scan<'a>, Cursor) {
    let stderr = io::stderr();
    let mut sink = stderr.lock();
    scan_with(args, cursor, spec, &mut sink)
}

/// Like [`scan`], with diagnostics written to `sink`.
pub fn scan_with<'a, T, W>(
    args: &'a mut [T],
    mut cursor: Cursor,
    spec: &OptSpec<'_>,
    sink: &mut W,
) -> (Scan<'a>, Cursor)
where
    T: AsRef<str>,
    W: Write + ?Sized,
{
    if cursor.finished {
        return (Scan::new(Code::End), cursor);
    }

    if cursor.index + cursor.visible > args.len() || (cursor.cluster > 0 && cursor.visible == 0) {
        log::warn!(
            "cursor {cursor:?} does not fit a vector of {} token(s)",
            args.len()
        );
        cursor.finish(args.len());
        return (Scan::new(Code::End), cursor);
    }

    if cursor.cluster == 0 {
        match take_front(args, &mut cursor) {
            Front::Exhausted => {
                cursor.finish(args.len());
                return (Scan::new(Code::End), cursor);
            }
            Front::Dash => {
                log::trace!("bare dash at {}", cursor.index);
                cursor.advance();
                return (Scan::new(Code::Dash), cursor);
            }
            Front::Terminator => {
                cursor.advance();
                let tail = cursor.visible;
                log::debug!("terminator: flushing {tail} token(s)");
                rotate_front_n(&mut args[cursor.index..], tail);
                cursor.finish(args.len());
                return (Scan::new(Code::End), cursor);
            }
            Front::Option => {}
        }
    }

    let args: &'a [T] = args;
    let token: &'a str = args[cursor.index].as_ref();

    if cursor.cluster == 0 {
        if let Some(body) = token.strip_prefix("--") {
            cursor.advance();
            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            log::trace!("long option {name:?} = {value:?}");
            let mut found = Scan::new(Code::Long);
            found.name = Some(name);
            found.arg = value;
            return (found, cursor);
        }
    }

    let offset = if cursor.cluster > 0 { cursor.cluster } else { 1 };
    let Some(c) = token.get(offset..).and_then(|rest| rest.chars().next()) else {
        log::warn!("cluster offset {offset} is outside {token:?}");
        cursor.finish(args.len());
        return (Scan::new(Code::End), cursor);
    };
    let after = offset + c.len_utf8();
    let opt = &token[offset..after];
    let rest = &token[after..];
    log::trace!("short option {c:?} in {token:?}");

    let found = match spec.lookup(c) {
        None => {
            cursor.advance();
            Scan::new(Code::Invalid)
                .with_arg(opt)
                .with_diagnostic(report(sink, Diagnostic::UnknownOption(c)))
        }
        Some(Arity::None) => match rest.chars().next() {
            None => {
                cursor.advance();
                Scan::new(Code::Option(c))
            }
            Some(next) if is_short_name(next) => {
                // rescan the same token from the next character
                cursor.cluster = after;
                Scan::new(Code::Option(c))
            }
            Some(_) => {
                cursor.advance();
                Scan::new(Code::Invalid)
                    .with_diagnostic(report(sink, Diagnostic::ArgumentNotAllowed(c)))
            }
        },
        Some(Arity::Required) if !rest.is_empty() => {
            cursor.advance();
            Scan::new(Code::Option(c)).with_arg(rest)
        }
        Some(Arity::Required) => {
            cursor.advance();
            if cursor.visible > 0 {
                let arg: &'a str = args[cursor.index].as_ref();
                cursor.advance();
                Scan::new(Code::Option(c)).with_arg(arg)
            } else if spec.is_silent() {
                Scan::new(Code::MissingArgument).with_arg(opt)
            } else {
                Scan::new(Code::Invalid)
                    .with_arg(opt)
                    .with_diagnostic(report(sink, Diagnostic::MissingArgument(c)))
            }
        }
    };

    (found, cursor)
}

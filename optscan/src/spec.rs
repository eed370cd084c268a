//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// Whether a short option takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Required,
}

/// A short-option specification string, such as `":abp:q:"`.
///
/// A leading `:` selects silent mode, in which a missing mandatory argument
/// is reported with the `:` code and no diagnostic. Every other character
/// names an option; a following `:` marks it as taking an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptSpec<'s> {
    entries: &'s str,
    silent: bool,
}

impl<'s> OptSpec<'s> {
    pub fn new(spec: &'s str) -> Self {
        match spec.strip_prefix(':') {
            Some(entries) => Self {
                entries,
                silent: true,
            },
            None => Self {
                entries: spec,
                silent: false,
            },
        }
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Find option `c`. `:` is never an option.
    pub fn lookup(&self, c: char) -> Option<Arity> {
        if c == ':' {
            return None;
        }

        let pos = self.entries.find(c)?;
        if self.entries[pos + c.len_utf8()..].starts_with(':') {
            Some(Arity::Required)
        } else {
            Some(Arity::None)
        }
    }
}

impl<'s> From<&'s str> for OptSpec<'s> {
    fn from(spec: &'s str) -> Self {
        Self::new(spec)
    }
}

/// Characters that may continue a bundled cluster such as `-ab`.
pub fn is_short_name(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

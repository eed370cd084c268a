//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// A diagnostic line emitted by the scanner.
///
/// The rendered text is relied upon by scripts; keep it byte for byte.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Option -{0} requires an argument.")]
    MissingArgument(char),
    #[error("Option -{0} doesn't allow an argument.")]
    ArgumentNotAllowed(char),
    #[error("Unknown option: -{0}")]
    UnknownOption(char),
}

impl Diagnostic {
    /// The offending option character.
    pub fn option(&self) -> char {
        match *self {
            Diagnostic::MissingArgument(c)
            | Diagnostic::ArgumentNotAllowed(c)
            | Diagnostic::UnknownOption(c) => c,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid options")]
    InvalidOptions,
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait GetExitCode {
    fn get_exit_code(&self) -> i32;
}

impl<T> GetExitCode for Result<T> {
    fn get_exit_code(&self) -> i32 {
        match self {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }
}

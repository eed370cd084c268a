//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Reentrant, permuting short-option scanner in the manner of `getopt(3)`.
//!
//! ```text
//! let mut args: Vec<String> = std::env::args().collect();
//! let spec = OptSpec::new("abp:");
//! let mut cursor = Cursor::new(args.len());
//! loop {
//!     let (found, next) = scan(&mut args, cursor, &spec);
//!     cursor = next;
//!     match found.code { Code::End => break, ... }
//! }
//! let operands = &args[cursor.window()];
//! ```

pub mod error;
pub mod rotate;
mod scanner;
pub mod spec;

pub use error::Diagnostic;
pub use scanner::{scan, scan_with, Code, Cursor, Phase, Scan, BARE_DASH, LONG_OPTION};
pub use spec::{Arity, OptSpec};

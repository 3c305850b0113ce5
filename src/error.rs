// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Defines the error type for the board support crate.

use alloc::boxed::Box;
use core::error::Error as CoreError;
use core::fmt;
use core::result::Result as CoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorKind {
    /// A wrapped error from another crate.
    Library,
    /// A malformed value, e.g. an unparsable boot parameter.
    InvalidParam,
    /// Unknown board id, machine or revision.
    NotFound,
    /// The resource (GPIO line, device name) is already claimed.
    AlreadyExists,
    /// The collaborator rejected the request (driver probe, pin config).
    Io,
}

type DynError = dyn CoreError + Send + Sync;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: Option<Box<DynError>>,
}

pub type Result<T> = CoreResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> CoreResult<(), fmt::Error> {
        match &self.inner {
            Some(inner) => write!(f, "{:?}: {}", self.kind, inner),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, inner: Box<DynError>) -> Self {
        Self {
            kind,
            inner: Some(inner),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn into_inner(self) -> Option<Box<DynError>> {
        self.inner
    }
}

impl ErrorKind {
    pub fn wrap(self, inner: Box<DynError>) -> Error {
        Error::new(self, inner)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, inner: None }
    }
}

impl<T> From<ErrorKind> for Result<T> {
    fn from(val: ErrorKind) -> Self {
        Err(val.into())
    }
}

impl<T: CoreError + Send + Sync + 'static> From<T> for Error {
    fn from(e: T) -> Self {
        ErrorKind::Library.wrap(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_survives_conversion() {
        let err: Error = ErrorKind::NotFound.into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.into_inner().is_none());
    }

    #[test]
    fn library_errors_are_wrapped() {
        let parse = "zz".parse::<u32>().unwrap_err();
        let err: Error = parse.into();
        assert_eq!(err.kind(), ErrorKind::Library);
        assert!(format!("{}", err).starts_with("Library: "));
    }
}

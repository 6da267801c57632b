// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Cow;

use thiserror::Error;

/// Error type for morph plan synthesis and mapping operations.
///
/// Do not construct variants directly; use the static constructor functions
/// (`Error::configuration`, `Error::conversion`, ...). They keep message
/// conversion in one place and carry `#[track_caller]` so a failure points at
/// the call site that produced it.
///
/// The taxonomy follows the engine's failure model:
///
/// - [`Error::Configuration`] — raised once per type pair, at plan-build
///   time, when no construction strategy or conversion rule exists. Never
///   deferred to a later `map` call.
/// - [`Error::NullSource`] — an absent value was passed where a source is
///   required (the `Option`-accepting entry points).
/// - [`Error::Conversion`] — a call-time conversion failed, e.g. an
///   enum-by-name parse with no matching variant.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No mapping plan can be built for the requested type pair.
    ///
    /// Do not construct this variant directly; use [`Error::configuration`].
    #[error("{0}")]
    Configuration(Cow<'static, str>),

    /// An absent value was passed where a source value is required.
    ///
    /// Do not construct this variant directly; use [`Error::null_source`].
    #[error("{0}")]
    NullSource(Cow<'static, str>),

    /// A value could not be converted at call time.
    ///
    /// Do not construct this variant directly; use [`Error::conversion`].
    #[error("{0}")]
    Conversion(Cow<'static, str>),

    /// A dynamic value did not have the type its plan expected.
    ///
    /// Do not construct this variant directly; use [`Error::type_error`].
    #[error("{0}")]
    TypeError(Cow<'static, str>),

    /// Maximum plan nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`].
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Unsupported shape or operation.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported`].
    #[error("{0}")]
    Unsupported(Cow<'static, str>),

    /// Generic unknown error.
    ///
    /// Do not construct this variant directly; use [`Error::unknown`].
    #[error("{0}")]
    Unknown(Cow<'static, str>),

    /// A wrapped internal error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates a new [`Error::Configuration`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn configuration<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::Configuration(s.into())
    }

    /// Creates a new [`Error::NullSource`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn null_source<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::NullSource(s.into())
    }

    /// Creates a new [`Error::Conversion`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn conversion<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::Conversion(s.into())
    }

    /// Creates a new [`Error::TypeError`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::TypeError(s.into())
    }

    /// Creates a new [`Error::DepthExceed`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::DepthExceed(s.into())
    }

    /// Creates a new [`Error::Unsupported`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::Unsupported(s.into())
    }

    /// Creates a new [`Error::Unknown`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::Unknown(s.into())
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// ```rust
/// use morph_core::ensure;
/// use morph_core::error::Error;
///
/// fn check_capacity(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, "capacity must be greater than zero");
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unknown($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`enum@Error`].
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::unknown($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)))
    };
}

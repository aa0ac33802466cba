// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::PathBuf;

use thiserror::Error;

/// A result type alias for icon rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons.
#[derive(Error, Debug)]
pub enum Error {
    /// The canvas edge length is zero or too large.
    #[error("invalid icon size: {0}")]
    InvalidSize(u32),

    /// A shape could not be turned into a path.
    #[error("cannot build a path for the {0}")]
    DegenerateGeometry(&'static str),

    /// A PNG file could not be written.
    #[error("failed to write {}", path.display())]
    Encode {
        /// The destination file.
        path: PathBuf,
        /// The underlying encoder or I/O error.
        #[source]
        source: png::EncodingError,
    },

    /// Console output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

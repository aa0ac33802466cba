// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Design-grid geometry of the shield-and-bookmark icon.
//!
//! The icon is defined once in a fixed 48x48 coordinate space and scaled
//! linearly to the requested pixel size. This crate only computes points,
//! rasterization lives in `shield-icon`.
//!
//! Note that all types use single precision floats (`f32`), just like `tiny-skia`.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::float_cmp)]

#[cfg(not(any(feature = "std", feature = "no-std-float")))]
compile_error!("You have to activate either the `std` or the `no-std-float` feature.");

#[cfg(feature = "std")]
extern crate std;

mod polygon;
mod scale;
mod scalar;
mod shield;

pub use polygon::{Polygon, MAX_POLYGON_POINTS};
pub use scale::GridScale;
pub use shield::{Shape, ShieldGeometry};

pub use tiny_skia_path::{NonZeroPositiveF32, Path, Point};

/// Edge length of the design grid.
///
/// All shapes are specified in `0..=DESIGN_GRID` units.
pub const DESIGN_GRID: f32 = 48.0;

// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia_path::{NonZeroPositiveF32, Point};

use crate::scalar::Round;
use crate::DESIGN_GRID;

/// A mapping from the design grid to a square pixel canvas.
///
/// # Guarantees
///
/// - The scale factor is finite and > 0.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GridScale {
    factor: NonZeroPositiveF32,
}

impl GridScale {
    /// Creates a mapping for a `size` x `size` canvas.
    ///
    /// Returns `None` for a zero size.
    pub fn from_size(size: u32) -> Option<Self> {
        let factor = NonZeroPositiveF32::new(size as f32 / DESIGN_GRID)?;
        Some(GridScale { factor })
    }

    /// Returns the `size / 48` factor.
    pub fn factor(&self) -> f32 {
        self.factor.get()
    }

    /// Maps a design-grid length to pixels.
    pub fn length(&self, v: f32) -> f32 {
        v * self.factor.get()
    }

    /// Maps a design-grid point to pixels.
    pub fn map(&self, x: f32, y: f32) -> Point {
        Point::from_xy(self.length(x), self.length(y))
    }

    /// Maps a design-grid stroke width to a whole number of pixels.
    ///
    /// Never thinner than a single pixel.
    pub fn stroke_width(&self, width: f32) -> f32 {
        self.length(width).round_half_away().max(1.0)
    }
}

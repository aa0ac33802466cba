// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{GridScale, Polygon};

// Shield outline, clockwise from the top tip.
const OUTLINE: &[(f32, f32)] = &[
    (24.0, 4.0),
    (8.0, 10.0),
    (8.0, 20.0),
    (12.0, 30.0),
    (24.0, 44.0),
    (36.0, 30.0),
    (40.0, 20.0),
    (40.0, 10.0),
];

const ACCENT: &[(f32, f32)] = &[
    (24.0, 8.0),
    (12.0, 12.5),
    (12.0, 21.0),
    (24.0, 38.5),
    (36.0, 21.0),
    (36.0, 12.5),
];

// A 16x16 square at (16, 16) with a notch cut into its bottom edge.
const BOOKMARK: &[(f32, f32)] = &[
    (16.0, 16.0),
    (32.0, 16.0),
    (32.0, 32.0),
    (24.0, 29.0),
    (16.0, 32.0),
];

const OUTLINE_STROKE: f32 = 2.0;
const BOOKMARK_STROKE: f32 = 1.5;

/// A shape of the icon, in painting order.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Shape {
    Outline,
    Accent,
    Bookmark,
}

impl Shape {
    /// All shapes, back to front.
    pub const ALL: [Shape; 3] = [Shape::Outline, Shape::Accent, Shape::Bookmark];

    /// Returns the shape's points in design-grid units.
    pub fn grid_points(self) -> &'static [(f32, f32)] {
        match self {
            Shape::Outline => OUTLINE,
            Shape::Accent => ACCENT,
            Shape::Bookmark => BOOKMARK,
        }
    }

    /// Returns the shape's stroke width in design-grid units.
    ///
    /// `None` when the shape is not stroked.
    pub fn grid_stroke(self) -> Option<f32> {
        match self {
            Shape::Outline => Some(OUTLINE_STROKE),
            Shape::Accent => None,
            Shape::Bookmark => Some(BOOKMARK_STROKE),
        }
    }

    /// Returns a human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Outline => "shield outline",
            Shape::Accent => "inner accent",
            Shape::Bookmark => "bookmark",
        }
    }
}

/// The icon's polygons, scaled to a canvas size.
#[derive(Clone, PartialEq, Debug)]
pub struct ShieldGeometry {
    scale: GridScale,
    outline: Polygon,
    accent: Polygon,
    bookmark: Polygon,
}

impl ShieldGeometry {
    /// Computes the geometry for a `size` x `size` canvas.
    ///
    /// Returns `None` for a zero size.
    pub fn from_size(size: u32) -> Option<Self> {
        GridScale::from_size(size).map(Self::new)
    }

    /// Computes the geometry for a grid mapping.
    pub fn new(scale: GridScale) -> Self {
        let poly = |shape: Shape| {
            // All tables fit into a polygon.
            Polygon::from_grid(shape.grid_points(), &scale).unwrap_or_default()
        };

        ShieldGeometry {
            scale,
            outline: poly(Shape::Outline),
            accent: poly(Shape::Accent),
            bookmark: poly(Shape::Bookmark),
        }
    }

    /// Returns a shape's polygon.
    pub fn polygon(&self, shape: Shape) -> &Polygon {
        match shape {
            Shape::Outline => &self.outline,
            Shape::Accent => &self.accent,
            Shape::Bookmark => &self.bookmark,
        }
    }

    /// Returns a shape's stroke width in pixels.
    ///
    /// `None` when the shape is not stroked.
    pub fn stroke_width(&self, shape: Shape) -> Option<f32> {
        shape.grid_stroke().map(|w| self.scale.stroke_width(w))
    }
}

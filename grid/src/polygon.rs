// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayvec::ArrayVec;
use tiny_skia_path::{Path, PathBuilder, Point};

use crate::GridScale;

/// The maximum number of points in a polygon.
pub const MAX_POLYGON_POINTS: usize = 8;

/// A closed polygon in pixel coordinates.
///
/// Points are stored inline, no allocation is involved.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Polygon {
    points: ArrayVec<Point, MAX_POLYGON_POINTS>,
}

impl Polygon {
    /// Scales design-grid points into a pixel polygon.
    ///
    /// Returns `None` when there are more than `MAX_POLYGON_POINTS` points.
    pub fn from_grid(points: &[(f32, f32)], scale: &GridScale) -> Option<Self> {
        let mut poly = Polygon::default();
        for &(x, y) in points {
            poly.points.try_push(scale.map(x, y)).ok()?;
        }

        Some(poly)
    }

    /// Returns the polygon points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks that the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Checks that a point lies inside the polygon, using the even-odd rule.
    ///
    /// Points exactly on an edge may be reported either way.
    #[cfg(test)]
    pub(crate) fn contains(&self, x: f32, y: f32) -> bool {
        let mut inside = false;
        let mut prev = match self.points.last() {
            Some(p) => *p,
            None => return false,
        };

        for &curr in &self.points {
            if (curr.y > y) != (prev.y > y) {
                let cross_x = curr.x + (y - curr.y) * (prev.x - curr.x) / (prev.y - curr.y);
                if x < cross_x {
                    inside = !inside;
                }
            }

            prev = curr;
        }

        inside
    }

    /// Converts the polygon into a closed path.
    ///
    /// Returns `None` when the polygon has less than 2 points
    /// or when its bounds cannot be computed.
    pub fn to_path(&self) -> Option<Path> {
        let (first, rest) = self.points.split_first()?;
        if rest.is_empty() {
            return None;
        }

        let mut pb = PathBuilder::with_capacity(self.points.len() + 1, self.points.len());
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        pb.finish()
    }
}

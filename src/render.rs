// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use log::debug;
use tiny_skia::{BlendMode, FillRule, LineJoin, Mask, Paint, Pixmap, Stroke, Transform};

use shield_icon_grid::{GridScale, Shape, ShieldGeometry};

use crate::palette::{to_color, Palette};
use crate::{Error, Result};

/// Draws the shield-and-bookmark icon.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct IconRenderer {
    /// Icon colors.
    pub palette: Palette,
    /// Anti-alias polygon edges.
    ///
    /// Default: true
    pub anti_alias: bool,
}

impl Default for IconRenderer {
    fn default() -> Self {
        IconRenderer {
            palette: Palette::default(),
            anti_alias: true,
        }
    }
}

impl IconRenderer {
    /// Renders the icon onto a new `size` x `size` canvas.
    ///
    /// Zero size is an error.
    pub fn render(&self, size: u32) -> Result<Pixmap> {
        let scale = GridScale::from_size(size).ok_or(Error::InvalidSize(size))?;
        let mut pixmap = Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;
        pixmap.fill(to_color(self.palette.background));

        let geom = ShieldGeometry::new(scale);
        debug!("Rendering {0}x{0} icon with scale {1}.", size, scale.factor());

        for shape in Shape::ALL {
            self.draw_shape(&mut pixmap, &geom, shape)?;
        }

        Ok(pixmap)
    }

    fn draw_shape(&self, pixmap: &mut Pixmap, geom: &ShieldGeometry, shape: Shape) -> Result<()> {
        let path = geom
            .polygon(shape)
            .to_path()
            .ok_or(Error::DegenerateGeometry(shape.name()))?;

        let mut paint = Paint::default();
        paint.anti_alias = self.anti_alias;
        paint.set_color(to_color(self.fill_color(shape)));
        // The accent replaces what is underneath, keeping its own alpha.
        if shape == Shape::Accent {
            paint.blend_mode = BlendMode::Source;
        }

        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        if let Some(width) = geom.stroke_width(shape) {
            // Strokes stay inside the shape: stroke twice as wide and clip to the fill.
            let mut mask = Mask::new(pixmap.width(), pixmap.height())
                .ok_or_else(|| Error::InvalidSize(pixmap.width()))?;
            mask.fill_path(&path, FillRule::Winding, self.anti_alias, Transform::identity());

            let stroke = Stroke {
                width: width * 2.0,
                line_join: LineJoin::Miter,
                ..Stroke::default()
            };

            paint.blend_mode = BlendMode::SourceOver;
            paint.set_color(to_color(self.palette.outline));
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), Some(&mask));
            debug!("Drew {} with a {}px stroke.", shape.name(), width);
        } else {
            debug!("Drew {}.", shape.name());
        }

        Ok(())
    }

    fn fill_color(&self, shape: Shape) -> tiny_skia::ColorU8 {
        match shape {
            Shape::Outline => self.palette.shield,
            Shape::Accent => self.palette.accent,
            Shape::Bookmark => self.palette.bookmark,
        }
    }
}

// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{Color, ColorU8};

/// The icon's colors.
///
/// Stored as non-premultiplied 8-bit RGBA.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Palette {
    /// Canvas background.
    pub background: ColorU8,
    /// Shield body.
    pub shield: ColorU8,
    /// Inner shield accent. Translucent.
    pub accent: ColorU8,
    /// Shield and bookmark strokes.
    pub outline: ColorU8,
    /// Bookmark body.
    pub bookmark: ColorU8,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: ColorU8::from_rgba(26, 26, 26, 255),
            shield: ColorU8::from_rgba(45, 45, 45, 255),
            accent: ColorU8::from_rgba(45, 45, 45, 200),
            outline: ColorU8::from_rgba(34, 197, 94, 255),
            bookmark: ColorU8::from_rgba(74, 222, 128, 255),
        }
    }
}

pub(crate) fn to_color(c: ColorU8) -> Color {
    Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha())
}

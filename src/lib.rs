// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
`shield-icon` renders the shield-and-bookmark extension icon.

The icon is defined on a 48x48 design grid (see `shield-icon-grid`),
scaled to each output size and rasterized with `tiny-skia`.

```no_run
use shield_icon::{IconRenderer, IconSet};

let written = IconSet::default()
    .generate(&IconRenderer::default(), &mut std::io::stdout())
    .unwrap();
assert_eq!(written.len(), 4);
```
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

mod error;
mod icon_set;
mod palette;
mod render;

pub use error::{Error, Result};
pub use icon_set::{IconSet, DEFAULT_SIZES};
pub use palette::Palette;
pub use render::IconRenderer;

pub use shield_icon_grid as grid;
pub use tiny_skia::{ColorU8, Pixmap, PremultipliedColorU8};

// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use shield_icon::{IconRenderer, IconSet};

fn main() -> Result<(), shield_icon::Error> {
    env_logger::init();

    let stdout = std::io::stdout();
    IconSet::default().generate(&IconRenderer::default(), &mut stdout.lock())?;
    Ok(())
}

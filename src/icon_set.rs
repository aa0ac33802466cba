// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io::Write;
use std::path::PathBuf;

use log::{debug, info};

use crate::{Error, IconRenderer, Result};

/// Icon edge lengths written by default.
pub const DEFAULT_SIZES: &[u32] = &[16, 32, 48, 96];

/// A set of icon files to generate.
#[derive(Clone, PartialEq, Debug)]
pub struct IconSet {
    /// Edge lengths, in output order.
    pub sizes: Vec<u32>,
    /// Directory the files are written to.
    ///
    /// Default: the current directory
    pub out_dir: PathBuf,
    /// File name prefix. Files are named `<prefix>-<size>.png`.
    ///
    /// Default: `bookmark`
    pub prefix: String,
}

impl Default for IconSet {
    fn default() -> Self {
        IconSet {
            sizes: DEFAULT_SIZES.to_vec(),
            out_dir: PathBuf::from("."),
            prefix: "bookmark".to_string(),
        }
    }
}

impl IconSet {
    /// Returns the file name used for an icon size.
    pub fn file_name(&self, size: u32) -> String {
        format!("{}-{}.png", self.prefix, size)
    }

    /// Returns all file names, in output order.
    pub fn file_names(&self) -> Vec<String> {
        self.sizes.iter().map(|&size| self.file_name(size)).collect()
    }

    /// Renders and writes every icon, overwriting existing files.
    ///
    /// Writes a `Generated <file>` line to `out` per icon and a summary line at the end.
    ///
    /// Stops at the first error. Files written before it are left in place.
    pub fn generate<W: Write>(&self, renderer: &IconRenderer, out: &mut W) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            let pixmap = renderer.render(size)?;

            let name = self.file_name(size);
            let path = self.out_dir.join(&name);
            pixmap.save_png(&path).map_err(|source| Error::Encode {
                path: path.clone(),
                source,
            })?;

            debug!("Saved {}.", path.display());
            writeln!(out, "Generated {}", name)?;
            written.push(path);
        }

        writeln!(out)?;
        writeln!(out, "Icons created: {}", self.file_names().join(", "))?;
        info!("All {} icons generated successfully.", written.len());

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names() {
        assert_eq!(
            IconSet::default().file_names(),
            ["bookmark-16.png", "bookmark-32.png", "bookmark-48.png", "bookmark-96.png"]
        );
    }

    #[test]
    fn custom_prefix() {
        let set = IconSet {
            prefix: "shield".to_string(),
            ..IconSet::default()
        };
        assert_eq!(set.file_name(128), "shield-128.png");
    }
}

// Copyright 2026 The shield-icon Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// Rounding that works with and without `std`.
///
/// Rounds half away from zero, like `f32::round`.
pub(crate) trait Round {
    fn round_half_away(self) -> Self;
}

impl Round for f32 {
    #[cfg(feature = "std")]
    fn round_half_away(self) -> Self {
        self.round()
    }

    #[cfg(all(not(feature = "std"), feature = "no-std-float"))]
    fn round_half_away(self) -> Self {
        libm::roundf(self)
    }
}

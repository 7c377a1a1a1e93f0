// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Entropy families over an empirical Distribution.
pub mod shannon;
pub mod renyi;
pub mod tsallis;

pub use renyi::RenyiEntropy;
pub use shannon::ShannonEntropy;
pub use tsallis::TsallisEntropy;

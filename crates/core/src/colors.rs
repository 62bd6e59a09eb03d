//! Stable per-backend chart colors

use std::collections::HashMap;
use tinyrand::{Rand, Seeded, StdRand};

/// Seed for [`SeededColors`]; a given order of first-seen labels always maps to the same colors
pub const COLOR_SEED: u64 = u64::from_le_bytes(*b"dimforge");

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Something that hands out fresh `#RRGGBB` colors
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

/// Pseudo-random colors from a fixed seed
pub struct SeededColors {
    rng: StdRand,
}

impl SeededColors {
    pub fn new() -> Self {
        Self::with_seed(COLOR_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRand::seed(seed),
        }
    }
}

impl Default for SeededColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for SeededColors {
    fn next_color(&mut self) -> String {
        let mut color = String::with_capacity(7);
        color.push('#');
        for _ in 0..6 {
            // 16 divides 2^64, so the draw stays uniform
            let digit = (self.rng.next_u64() % 16) as usize;
            color.push(HEX_DIGITS[digit] as char);
        }
        color
    }
}

/// Backend label -> color, growing as new labels show up
///
/// Owned by whoever drives rendering (the dashboard app, one CLI run) so
/// colors stay put across reloads without any global state.
#[derive(Debug, Default)]
pub struct ColorTable<S = SeededColors> {
    source: S,
    assigned: HashMap<String, String>,
}

impl ColorTable<SeededColors> {
    pub fn new() -> Self {
        Self::with_source(SeededColors::new())
    }
}

impl<S: ColorSource> ColorTable<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            assigned: HashMap::new(),
        }
    }

    /// Color for `label`, drawing and recording a new one on first sight
    pub fn color_for(&mut self, label: &str) -> String {
        if let Some(color) = self.assigned.get(label) {
            return color.clone();
        }

        let color = self.source.next_color();
        tracing::debug!("Assigned color {} to {}", color, label);
        self.assigned.insert(label.to_string(), color.clone());
        color
    }

    #[cfg(test)]
    pub(crate) fn get(&self, label: &str) -> Option<&str> {
        self.assigned.get(label).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.assigned.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

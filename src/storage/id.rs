use crate::config::{IdMode, StoreSettings};
use std::sync::atomic::{AtomicU64, Ordering};

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Produces record ids as `prefix + suffix`.
///
/// Random suffixes come from nanoid; sequential ones from an atomic counter
/// shared by every prefix, so two calls never yield the same suffix.
#[derive(Debug)]
pub struct IdGenerator {
    mode: IdMode,
    length: usize,
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new(mode: IdMode, length: usize) -> Self {
        Self {
            mode,
            length: length.max(1),
            counter: AtomicU64::new(0),
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self::new(settings.id_mode, settings.id_length)
    }

    pub fn next(&self, prefix: &str) -> String {
        let suffix = match self.mode {
            IdMode::Random => nanoid::format(nanoid::rngs::default, &ALPHABET, self.length),
            IdMode::Sequential => {
                let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
                format!("{:0>width$}", n, width = self.length)
            }
        };
        format!("{}{}", prefix, suffix)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_settings(&StoreSettings::default())
    }
}

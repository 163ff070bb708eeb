//! Identifier generation
//!
//! Generators are passed explicitly to whatever builds links; there is no
//! process-wide generator state.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{SHORT_CODE_ALPHABET, generate_random_code};
use crate::config::IdConfig;

/// nanoid's URL-safe standard alphabet
pub const ID_ALPHABET: &[u8] = b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub trait IdGenerator: Send + Sync {
    fn link_id(&self) -> String;
    fn destination_id(&self) -> String;
    fn short_code(&self) -> String;
}

/// Random ids and short codes
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    id_length: usize,
    short_code_length: usize,
}

impl RandomIdGenerator {
    pub fn new(id_length: usize, short_code_length: usize) -> Self {
        Self {
            id_length: id_length.max(1),
            short_code_length: short_code_length.max(1),
        }
    }

    pub fn from_config(config: &IdConfig) -> Self {
        Self::new(config.id_length, config.short_code_length)
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::from_config(&IdConfig::default())
    }
}

impl IdGenerator for RandomIdGenerator {
    fn link_id(&self) -> String {
        generate_random_code(ID_ALPHABET, self.id_length)
    }

    fn destination_id(&self) -> String {
        generate_random_code(ID_ALPHABET, self.id_length)
    }

    fn short_code(&self) -> String {
        generate_random_code(SHORT_CODE_ALPHABET, self.short_code_length)
    }
}

/// Deterministic counter-based ids (`link-1`, `dest-2`, `s3`, ...)
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn link_id(&self) -> String {
        format!("link-{}", self.bump())
    }

    fn destination_id(&self) -> String {
        format!("dest-{}", self.bump())
    }

    fn short_code(&self) -> String {
        format!("s{}", self.bump())
    }
}

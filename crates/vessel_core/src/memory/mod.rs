//! # Memory Subsystem
//!
//! Bump arenas with stack-discipline rollback. Two instances exist in a
//! running host: a persistent arena that lives for the whole process and a
//! frame arena whose cursor is cleared once per frame.

mod arena;

pub use arena::{Arena, Mark};

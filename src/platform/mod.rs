//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (`clock`)
//! - Keyboard mapping (`keys`)
//!
//! Storage lives in `persistence`.

pub mod clock;
pub mod keys;

pub use clock::FrameClock;
pub use keys::intent_for_key;

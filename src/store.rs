//! Observable state cells.
//!
//! Every piece of UI-facing playback state lives in one of these cells. A
//! `Writable` can be read, replaced and observed; a `Readable` is the
//! read-only view handed to observers, and `derived2` builds a `Readable`
//! whose value is recomputed from two other cells whenever either changes.
//!
//! Cells are single-threaded (`Rc`/`RefCell`): the whole player state runs on
//! one cooperative loop and notifications are delivered synchronously on it.

mod derived;
mod writable;

pub use derived::derived2;
pub use writable::{Readable, Subscription, Writable};

#[cfg(test)]
mod tests;

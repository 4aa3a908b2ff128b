//! Core library for multisig-regen.
//!
//! The NEAR multisig toolkit CLI ships its contract templates as raw-string
//! constants embedded in `cli/src/commands/init.rs`. The canonical template
//! sources live under `templates/` as ordinary crates that can be built and
//! tested on their own. This crate keeps the two in sync: it reads each
//! template's `lib.rs`, locates the matching embedded constant in the target
//! file, and rewrites the constant's payload with the fresh template text.
//!
//! The transformation itself is pure ([`embed`]); filesystem access is
//! isolated in [`sync`] so the rewrite logic is testable without touching
//! disk.

pub mod catalog;
pub mod embed;
pub mod error;
pub mod region;
pub mod sync;

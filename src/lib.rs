//! Rewind: undo the edits made during prior AI editing conversations.
//!
//! Each conversation leaves a snapshot directory (`conversation-<id>-backup`)
//! holding the pre-edit content of every file or external artifact it touched.
//! This crate discovers those snapshots, reverts one or a newest-first run of
//! them, and prunes old ones.

pub mod cli;
pub mod command;
pub mod internal;
pub mod utils;

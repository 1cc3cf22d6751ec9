//! Formatting for PII-advice replies.
//!
//! The advice backend answers with a lightly marked-up text blob: a bold
//! heading, plain paragraphs and `- ` bullet lists. [`format`] turns that
//! blob into ordered [`Block`]s; [`render`] maps blocks to HTML, styled
//! terminal text or JSON. [`detector`], [`findings`] and [`report`] build the
//! same kind of message locally from a piece of text.

pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod envelope;
pub mod error;
pub mod findings;
pub mod formatter;
pub mod render;
pub mod report;

pub use error::{Error, Result};
pub use formatter::{format, Block};

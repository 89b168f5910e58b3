//! Persistence layer for the message index.
//!
//! This module contains the storage-facing side of the application. The only
//! durable state is the channel-to-message index that lets re-runs edit the
//! existing status embed instead of posting a new one; it is backed by a small
//! JSON file rewritten wholesale on every update.

pub mod message_store;

#[cfg(test)]
mod test;

//! Discord gateway client integration.
//!
//! This module owns the gateway connection that feeds the presence cache. The
//! client is built with the intents needed for presence tracking and runs on
//! the main task until the process is killed; the ready handler boots the
//! status scheduler once the connection is established, so the first publish
//! cycle never runs against an empty cache handshake.
//!
//! # Gateway Intents
//!
//! The client requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events that populate the cache
//! - `GUILD_MEMBERS` - Track which members are bot accounts (privileged intent)
//! - `GUILD_PRESENCES` - Receive presence updates for cached members (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `GUILD_PRESENCES` are privileged intents and must
//! be explicitly enabled in the Discord Developer Portal for the bot
//! application.

pub mod handler;
pub mod start;

//! Base-path aware link resolution for statically deployed sites.
//!
//! A site served from a sub-path (`https://host/blog/`) needs its
//! root-relative links prefixed with that path. This crate holds the
//! deployment configuration and the resolver that applies it.

pub mod base;
pub mod config;
pub mod href;
pub mod link;

pub use base::BasePath;
pub use config::{ConfigError, SiteConfig};
pub use href::{href, resolve, LinkResolver};
pub use link::LinkKind;

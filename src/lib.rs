//! # Sezamo
//!
//! `sezamo` is a minimal credential service: it registers username/password
//! pairs and verifies them, nothing more. Credentials live in an in-process
//! map that starts empty and is discarded on shutdown; nothing is ever
//! persisted.
//!
//! ## Store Semantics
//!
//! - **Registration** inserts a credential record and rejects a username that
//!   is already present; the stored secret is never overwritten.
//! - **Authentication** is a single exact-equality check of the supplied
//!   secret against the stored one. An unknown username and a wrong password
//!   are deliberately indistinguishable to callers.
//!
//! Secrets are stored verbatim and compared byte for byte. There is no
//! hashing, salting, or session handling: the service is a development
//! backend and test fixture, not a hardened credential vault.

pub mod api;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

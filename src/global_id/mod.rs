//! Global identifier module
//!
//! Opaque ids that carry a type name and a type-local id in one token.
//!
//! # Overview
//!
//! A global id is the base64 (standard alphabet, padded) encoding of
//! `"{type}:{id}"`. Decoding never fails loudly: malformed tokens come back
//! as `None` and callers reject them.
//!
//! Neither part may contain `:`. Such ids still encode, but they no longer
//! decode, because the decoded text holds more than one delimiter.

mod codec;

pub use codec::{from_global_id, to_global_id, GlobalId, DELIMITER};

#[cfg(test)]
mod tests;

//! Session token encoding and verification.

mod codec;

pub use codec::{Claims, SessionToken, TokenCodec};

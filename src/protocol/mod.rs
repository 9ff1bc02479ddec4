//! Wire protocol: fixed endpoints and the text both sides exchange.

mod messages;

pub use messages::*;

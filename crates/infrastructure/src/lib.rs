//! doh-relay infrastructure: wire codec, HTTPS transport and harness adapters.

pub mod dns;
pub mod harness;

pub mod forwarder;
pub mod forwarding;
pub mod transport;

pub use forwarder::DohForwarder;

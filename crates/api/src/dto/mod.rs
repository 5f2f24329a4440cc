mod resolve;

pub use resolve::{ResolveQuery, ResolveResponse};

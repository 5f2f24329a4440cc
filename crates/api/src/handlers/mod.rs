mod health;
mod resolve;

pub use health::health_check;
pub use resolve::resolve;

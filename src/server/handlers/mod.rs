//! HTTP handlers.

mod debug;
mod features;
mod health;
mod lookup;

pub use debug::debug_handler;
pub use features::features_handler;
pub use health::health_handler;
pub use lookup::lookup_handler;

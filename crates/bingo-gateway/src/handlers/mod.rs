mod analytics;
mod cards;
mod health;
mod pool;

pub use analytics::track_event_handler;
pub use cards::{create_card_handler, get_card_handler};
pub use health::health_handler;
pub use pool::pool_signup_handler;

//! Topic-based eventing for session subscribers.

mod bus;
mod types;

pub use bus::{BusEvent, EventBus, Topic};
pub use types::{SessionEvent, UiEvent};

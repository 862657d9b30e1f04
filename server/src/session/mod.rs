mod controller;
mod events;
mod session_state;

pub use controller::ControllerId;
pub use events::SessionEvents;
pub use session_state::SessionState;

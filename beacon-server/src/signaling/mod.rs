mod ice_handler;
mod join_handler;
mod session;
mod signaling_service;
mod ws_handler;

pub use ice_handler::*;
pub use join_handler::*;
pub use session::*;
pub use signaling_service::*;
pub use ws_handler::*;

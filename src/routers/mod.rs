//! Feature routers
//!
//! Each feature team owns its handlers; this layer only controls where and
//! in which order the routers mount. The mount order is fixed (auth, users,
//! matches, messages, websockets) so the generated API documentation stays
//! stable between builds.

pub mod auth;
pub mod matches;
pub mod messages;
pub mod users;
pub mod websockets;

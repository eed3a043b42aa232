pub mod auth;
pub mod client;
pub mod core;
pub mod http;
pub mod session;
pub mod util;

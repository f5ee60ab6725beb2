//! Cookie-session helpers: CSRF tokens and flash messages.

pub mod csrf;
pub mod flash;

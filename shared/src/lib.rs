pub mod api;
pub mod client;
mod config;
mod err;
pub mod format;
pub mod models;
pub mod period;
pub mod session;

pub use api::{HttpShiftApi, ShiftApi};
pub use client::ShiftSyncClient;
pub use config::*;
pub use err::*;
pub use period::{Clock, SystemClock, parse_period_label, resolve_period};
pub use session::{SessionStorage, check_session};

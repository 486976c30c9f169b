mod period;
mod session;
mod shift;

pub use period::*;
pub use session::*;
pub use shift::*;

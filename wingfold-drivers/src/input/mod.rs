//! Input sensors
//!
//! Pin-level readers producing the logical values the core works with.

pub mod lock;
pub mod switch;

pub use lock::LockSensor;
pub use switch::TriStateSwitch;

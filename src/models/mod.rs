pub mod day_key;
pub mod event;
pub mod guard;
pub mod log;
pub mod sleep_state;
pub mod timestamp;

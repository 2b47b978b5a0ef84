//! Career Navigator core — everything between an input event and the
//! rendered reply, expressed against port traits so it runs natively in tests.

pub mod event_bus;
pub mod generator;
pub mod ports;
pub mod secrets;
pub mod session;

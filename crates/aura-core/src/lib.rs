pub mod ports;
pub mod event_bus;
pub mod timeline;
pub mod status;
pub mod plan;
pub mod state;
pub mod reveal;
pub mod controller;

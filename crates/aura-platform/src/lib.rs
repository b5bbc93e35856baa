//! Browser adapters for the `aura-core` ports.

pub mod clock;
pub mod gateway;

pub use clock::TimerClock;
pub use gateway::HttpGateway;

//! Browser timer clock for the staged reveal.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use aura_core::ports::ClockPort;

pub struct TimerClock;

#[async_trait(?Send)]
impl ClockPort for TimerClock {
    async fn sleep(&self, ms: u64) {
        if ms == 0 {
            return;
        }
        TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }
}

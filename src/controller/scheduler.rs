use std::future::Future;
use std::time::Duration;

/// Waits before a progress retry. Abstracted so tests can observe and skip
/// the delay.
///
pub trait Scheduler {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

use tokio::task::AbortHandle;

/// Every task a widget instance spawned: its event loop, the current tick
/// run and pending quiet-period timers.
///
/// `release_all` aborts each entry whether or not it already finished. The
/// list is also released on drop.
#[derive(Debug, Default)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
}

#[derive(Debug)]
struct Subscription {
    name: &'static str,
    handle: AbortHandle,
}

impl Subscriptions {
    pub fn register(&mut self, name: &'static str, handle: AbortHandle) {
        // Finished timers would otherwise pile up over a long session
        self.entries.retain(|entry| !entry.handle.is_finished());
        self.entries.push(Subscription { name, handle });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Abort every registered task. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.entries.len();
        for entry in self.entries.drain(..) {
            tracing::trace!(name = entry.name, "Releasing subscription");
            entry.handle.abort();
        }
        released
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_release_all_aborts_everything() {
        let mut subs = Subscriptions::default();
        let pending = tokio::spawn(tokio::time::sleep(Duration::from_secs(60)));
        let done = tokio::spawn(async {});
        subs.register("pending", pending.abort_handle());
        subs.register("done", done.abort_handle());

        while !done.is_finished() {
            tokio::task::yield_now().await;
        }

        // A task that already finished is still in the list and still released
        assert_eq!(subs.len(), 2);
        assert_eq!(subs.release_all(), 2);
        assert!(subs.is_empty());
        assert!(pending.await.unwrap_err().is_cancelled());
        assert!(done.await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases() {
        let task = tokio::spawn(tokio::time::sleep(Duration::from_secs(60)));
        {
            let mut subs = Subscriptions::default();
            subs.register("sleep", task.abort_handle());
        }
        assert!(task.await.unwrap_err().is_cancelled());
    }
}

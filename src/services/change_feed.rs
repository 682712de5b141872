use tokio::sync::watch;

/// Cross-component "re-fetch now" broadcast. The ingestion write path
/// publishes one tick per successful upsert; read-side consumers hold a
/// receiver and re-query when it changes, instead of polling or sharing a
/// mutable global.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    tx: watch::Sender<u64>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }

    pub fn publish(&self) {
        self.tx.send_modify(|n| *n += 1);
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

//! Shared state store.
//!
//! Each container holds an immutable snapshot behind an `Arc`. Writers swap in
//! a whole new snapshot; readers either clone the current `Arc` or subscribe
//! and get woken on every swap. A reader therefore never sees a record that is
//! half old and half new.

use std::sync::Arc;

use tokio::sync::watch;

use ffdash_model::{FfConfig, FfStatusValue, Server, ServerStatus};

/// An immutable view of one container at one point in time.
pub type Snapshot<T> = Arc<Vec<T>>;

/// An observable collection that is only ever replaced wholesale.
#[derive(Debug)]
pub struct Container<T> {
    tx: watch::Sender<Snapshot<T>>,
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self {
            tx: watch::Sender::new(Arc::new(Vec::new())),
        }
    }
}

impl<T> Container<T> {
    /// The current snapshot.
    pub fn snapshot(&self) -> Snapshot<T> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receive every future replacement.
    ///
    /// The receiver starts out having seen the current snapshot; call
    /// `changed().await` to wait for the next one.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }

    /// Number of records in the current snapshot.
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    /// Returns `true` if the current snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Atomically swap in a new snapshot and notify subscribers.
    pub(crate) fn replace(&self, items: Vec<T>) {
        self.tx.send_replace(Arc::new(items));
    }

    pub(crate) fn clear(&self) {
        self.replace(Vec::new());
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    servers: Container<Server>,
    server_status: Container<ServerStatus>,
    configs: Container<FfConfig>,
    config_status: Container<FfStatusValue>,
}

/// Process-wide dashboard state.
///
/// Create one per application instance and hand clones to the components that
/// need it; clones share the same containers. Only the synchronizer's refresh
/// routines write to it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Create a store with all containers empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn servers(&self) -> &Container<Server> {
        &self.inner.servers
    }

    pub fn server_status(&self) -> &Container<ServerStatus> {
        &self.inner.server_status
    }

    pub fn configs(&self) -> &Container<FfConfig> {
        &self.inner.configs
    }

    pub fn config_status(&self) -> &Container<FfStatusValue> {
        &self.inner.config_status
    }

    /// Empty every container.
    pub(crate) fn clear(&self) {
        self.inner.servers.clear();
        self.inner.server_status.clear();
        self.inner.configs.clear();
        self.inner.config_status.clear();
    }
}

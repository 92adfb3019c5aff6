//! Background expiry sweeper.
//!
//! One thread per concurrent cache, woken every `cleanup_interval` to run
//! [`remove_expired`](crate::traits::TtlLruCacheTrait::remove_expired) under
//! the cache's write guard. The sweep only bounds how long expired entries
//! can occupy memory between reads; lazy expiry on `get` is the correctness
//! backstop, so a stopped sweeper never makes the cache return stale data.
//!
//! Lifecycle is scoped to the cache:
//!
//! - the thread is started when the concurrent cache is constructed;
//! - it holds only a `Weak` reference to the shared core, so it can never
//!   keep a dropped cache alive (and a vanished cache ends the thread);
//! - [`SweepHandle::stop`] signals a `Condvar` and joins, so cancellation is
//!   honored without waiting out the full interval; dropping the handle does
//!   the same.
//!
//! A sweep pass either completes its scan or stops between passes; each
//! removal is atomic under the write guard.

use std::hash::Hash;
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Condvar, Mutex, RwLock};
use tracing::{debug, info, trace};

use crate::policy::ttl_lru::TtlLruCore;
use crate::traits::TtlLruCacheTrait;

/// Default sweep interval when none is configured.
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

/// Handle to a running sweeper thread.
///
/// [`stop`](Self::stop) is idempotent and also runs on drop, so the thread is
/// guaranteed joined by the time the owning cache is torn down.
pub struct SweepHandle {
    signal: Arc<StopSignal>,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl SweepHandle {
    /// Signals the sweeper to stop and joins its thread.
    pub fn stop(&self) {
        {
            let mut stopped = self.signal.stopped.lock();
            *stopped = true;
        }
        self.signal.wake.notify_all();

        if let Some(handle) = self.thread.lock().take() {
            let _ = handle.join();
        }
    }

    /// Whether the sweeper has been told to stop.
    pub fn is_stopped(&self) -> bool {
        *self.signal.stopped.lock()
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns the periodic sweeper for a shared core.
///
/// The thread waits on the stop condvar with `interval` as the timeout, so a
/// stop request interrupts the wait immediately rather than after the next
/// tick. The stop lock is released while a pass runs; a pass in flight
/// completes before a concurrent `stop` returns.
pub(crate) fn spawn_sweeper<K, V>(
    core: Weak<RwLock<TtlLruCore<K, V>>>,
    interval: Duration,
) -> SweepHandle
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    let signal = Arc::new(StopSignal {
        stopped: Mutex::new(false),
        wake: Condvar::new(),
    });
    let thread_signal = Arc::clone(&signal);

    let handle = thread::Builder::new()
        .name("ttlkit-sweeper".into())
        .spawn(move || {
            debug!(interval_ms = interval.as_millis() as u64, "expiry sweeper started");

            loop {
                {
                    let mut stopped = thread_signal.stopped.lock();
                    if *stopped {
                        break;
                    }
                    thread_signal.wake.wait_for(&mut stopped, interval);
                    if *stopped {
                        break;
                    }
                }

                let Some(core) = core.upgrade() else {
                    // Cache is gone; nothing left to sweep.
                    break;
                };

                let removed = core.write().remove_expired();
                if removed > 0 {
                    info!(removed, "expiry sweep removed entries");
                } else {
                    trace!("expiry sweep found nothing to remove");
                }
            }

            debug!("expiry sweeper stopped");
        })
        .expect("failed to spawn ttlkit-sweeper thread");

    SweepHandle {
        signal,
        thread: Mutex::new(Some(handle)),
    }
}

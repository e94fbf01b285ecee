//! Process-global environment mutation helpers.
//!
//! Environment variables are shared by every test thread, so all mutation goes
//! through [`ScopedEnv`], which holds a process-wide lock for its lifetime and
//! restores every touched variable on drop.

use std::sync::{Mutex, MutexGuard, OnceLock};

fn global_env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[allow(unused_unsafe)]
fn write_env_var(key: &str, value: Option<&str>) {
    // SAFETY: Only called while the global env lock is held.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Exclusive, self-restoring view of the process environment.
pub struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Acquire the global environment lock.
    ///
    /// A poisoned lock is recovered; a failed test must not cascade into
    /// every later test that touches the environment.
    pub fn lock() -> Self {
        let guard = global_env_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Self {
            saved: Vec::new(),
            _lock: guard,
        }
    }

    /// Set `key=value` until this guard is dropped.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.remember(key);
        write_env_var(key, Some(value));
        self
    }

    /// Remove `key` until this guard is dropped.
    pub fn remove(mut self, key: &str) -> Self {
        self.remember(key);
        write_env_var(key, None);
        self
    }

    fn remember(&mut self, key: &str) {
        if self.saved.iter().any(|(saved, _)| saved == key) {
            return;
        }
        self.saved.push((key.to_string(), std::env::var(key).ok()));
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            write_env_var(&key, previous.as_deref());
        }
    }
}

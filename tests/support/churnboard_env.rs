use std::{
    ffi::OsString,
    path::Path,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Sets process environment variables for one test and restores them on drop.
pub struct ChurnboardEnvGuard {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl ChurnboardEnvGuard {
    pub fn new() -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        Self {
            previous: Vec::new(),
            _lock: lock,
        }
    }

    pub fn config_home(self, path: &Path) -> Self {
        self.set("CHURNBOARD_CONFIG_HOME", Some(path.as_os_str()))
    }

    pub fn model(self, path: &Path) -> Self {
        self.set("CHURNBOARD_MODEL", Some(path.as_os_str()))
    }

    pub fn without_model(self) -> Self {
        self.set("CHURNBOARD_MODEL", None)
    }

    fn set(mut self, key: &'static str, value: Option<&std::ffi::OsStr>) -> Self {
        self.previous.push((key, std::env::var_os(key)));
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        self
    }
}

impl Drop for ChurnboardEnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

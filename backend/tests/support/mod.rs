#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use subway_rust::db::LocalRepository;
use subway_rust::models::{Station, StationId};
use subway_rust::services;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on drop (also on unwind) and serializes
/// access to process-global env vars, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Creates stations with the given names, returning them in order.
pub async fn seed_stations(repo: &LocalRepository, names: &[&str]) -> Vec<Station> {
    let mut stations = Vec::with_capacity(names.len());
    for name in names {
        stations.push(
            services::create_station(repo, name)
                .await
                .expect("station creation"),
        );
    }
    stations
}

pub fn ids(stations: &[&Station]) -> Vec<StationId> {
    stations.iter().map(|s| s.id).collect()
}

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

// Keys are namespaced so the site can share an origin with other tools.
fn storage_key(key: &str) -> String {
    format!("brightfold_{key}")
}

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    LocalStorage::get(key.clone()).map_err(|err| {
        console_error!(format!("failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("local storage failure, see console log")
    })
}

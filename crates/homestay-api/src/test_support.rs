//! Application state for router tests

use std::collections::HashMap;

use homestay_common::AppConfig;
use homestay_service::testing::context;

use crate::state::AppState;

/// State over the in-memory service fixtures, no database, today = 2024-01-01
pub fn app_state() -> AppState {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("API_PORT", "0"),
        ("DATABASE_URL", "postgres://unused/homestay"),
    ]);
    let config = AppConfig::from_lookup(|key| vars.get(key).map(ToString::to_string)).unwrap();

    AppState::new(context(), config)
}

use std::env;

use crate::use_cases::env_boot::DATASOURCE_URL_KEY;

// Runtime/server settings read from the already-propagated process env.

pub fn http_port() -> u16 {
    env::var("SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn datasource_url() -> Option<String> {
    env::var(DATASOURCE_URL_KEY).ok()
}

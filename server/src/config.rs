pub const DEFAULT_SERVER_PORT: u16 = 3000;

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

/// Optional path to a JSON catalog that replaces the built-in dataset.
pub fn monuments_file() -> Option<String> {
    std::env::var("MONUMENTS_FILE")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

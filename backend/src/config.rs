//! Fixed runtime configuration. The process takes no CLI flags and reads no
//! environment variables of its own, so everything lives here.

/// Listen on all interfaces; the dashboard is reached from the host browser.
pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8080;

/// Source table, resolved relative to the working directory at startup.
pub const DATA_FILE: &str = "data.csv";

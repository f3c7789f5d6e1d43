/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings and other literal values used
/// across the application, making them easier to maintain and modify.
/// HTTP request constants
pub mod http {
    /// Fixed desktop-browser User-Agent sent with every request
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
    /// Scheme assumed for targets that are given without one
    pub const DEFAULT_SCHEME: &str = "https";
    /// Schemes that classify a reference as a URL
    pub const URL_SCHEMES: [&str; 2] = ["http", "https"];
}

/// User-facing output constants
pub mod messages {
    /// Startup banner, suppressed in silent mode
    pub const BANNER: &str = "urlex - web page URL extractor\n";
    /// Section header preceding the URL list
    pub const URL_SECTION: &str = "Extracted URLs from page:";
    /// Section header preceding the path list
    pub const PATH_SECTION: &str = "Paths found on the page:";
    /// Error printed when no input file was given
    pub const NO_INPUT_FILE: &str = "Error: No input file specified.";
}

/// Configuration file constants
pub mod config_file {
    /// File name looked up in the current and parent directories
    pub const FILE_NAME: &str = ".urlex.toml";
    /// How many parent directories are searched for a config file
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}

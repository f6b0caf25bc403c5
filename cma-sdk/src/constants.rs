// ABOUTME: Centralized constants for the CMA SDK
// ABOUTME: Contains API URLs, HTTP settings, and ASCII preview defaults

/// CMA Open Access API URLs
pub mod urls {
    /// Base URL for the Cleveland Museum of Art Open Access API
    pub const CMA_API_BASE: &str = "https://openaccess-api.clevelandart.org/api";
}

/// HTTP and request settings
pub mod http {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("cma-sdk/", env!("CARGO_PKG_VERSION"));

    /// Maximum number of redirects followed per request
    pub const MAX_REDIRECTS: usize = 3;
}

/// ASCII preview rendering defaults
pub mod preview {
    /// Default output width in characters
    pub const DEFAULT_COLS: u32 = 80;

    /// Default vertical compression factor, compensating for the
    /// character cell aspect ratio of monospace fonts
    pub const DEFAULT_SCALE: f64 = 0.43;

    /// 10-level luminance palette, darkest to lightest
    pub const PALETTE_SHORT: &str = "@%#*+=-:. ";

    /// 70-level luminance palette, darkest to lightest
    pub const PALETTE_LONG: &str =
        "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";
}

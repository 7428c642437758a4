//! Compile-time configuration, overridable through `.env` (see build.rs).

/// Backend base URL:
/// - Development: http://localhost:5000 (default)
/// - Production: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Default admin credential pair shown in the login form and used by the
/// quick-login button. Kept out of the source tree via SKYTICKET_ADMIN_USER /
/// SKYTICKET_ADMIN_PASS when a deployment needs different values.
pub const DEFAULT_ADMIN_USERNAME: &str = match option_env!("SKYTICKET_ADMIN_USER") {
    Some(user) => user,
    None => "admin",
};

pub const DEFAULT_ADMIN_PASSWORD: &str = match option_env!("SKYTICKET_ADMIN_PASS") {
    Some(pass) => pass,
    None => "admin123",
};

/// localStorage key holding the serialized admin session.
pub const ADMIN_SESSION_KEY: &str = "adminInfo";

/// Delay before the post-login redirect to the dashboard fires.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

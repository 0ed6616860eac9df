#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // trunk serve runs the site on another port
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // the gateway serves the bundle itself
}

pub const CONTACT_EMAIL: &str = "mail@consentwerft.de";

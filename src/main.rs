use leptos::prelude::*;

use sgn_site::config::{SiteConfig, CONFIG_ENV};
use sgn_site::frontend::App;
use sgn_site::log_err;

fn main() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match SiteConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(config.log_level());

    if let Some(e) = load_error {
        log_err!(format!("parsing {}", CONFIG_ENV), e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

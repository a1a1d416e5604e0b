//! Composition root for the browser: binds the theme toggle to the page markup.
//!
//! A page missing the toggle or either icon aborts here with a thrown error.

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).expect("error initializing logger");

    match themeswitch_web::bind_page() {
        Ok(binding) => binding.forget(),
        Err(err) => {
            tracing::error!(error = %err, "theme toggle unavailable");
            wasm_bindgen::throw_str(&err.to_string());
        }
    }
}

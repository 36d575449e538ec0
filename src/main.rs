mod components;
mod context;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting UglyURL page enhancements");

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = components::mount() {
            log::error!("Failed to mount page enhancements: {:?}", e);
        }
    }
}

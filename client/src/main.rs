//! Browser (CSR) entry point; built for WASM via trunk with `--features csr`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(client::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // Native builds exist only to run the test suite; there is no UI here.
    eprintln!("this binary targets the browser; build with --features csr for wasm");
}

//! Entry point for the WASM application

pub fn main() {
    if let Err(error) = parse_app::run() {
        wasm_bindgen::throw_val(error);
    }
}

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Globals provided by the reCAPTCHA script loaded in index.html.
    #[wasm_bindgen(js_namespace = grecaptcha, js_name = getResponse)]
    fn get_response() -> String;

    #[wasm_bindgen(js_namespace = grecaptcha, js_name = reset)]
    fn reset();
}

/// Current proof-of-human token. Empty until the user solves the widget.
pub fn response_token() -> String {
    get_response()
}

/// Clears the widget so the next signup requires a fresh solve.
pub fn reset_widget() {
    reset();
}

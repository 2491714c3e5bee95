//! Document-ready scheduling.
//!
//! A wasm module can be instantiated either while the page is still parsing
//! or well after `DOMContentLoaded` already fired (the usual case when the
//! module is loaded through a bundler's async glue). A listener-only port of
//! the classic `DOMContentLoaded` pattern would silently never run in the
//! second case, so the ready state is checked first.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::Document;

/// Run `f` once the document has finished initial parsing.
///
/// If the document is already past the `loading` state, `f` runs immediately
/// on the current tick. Otherwise it is registered as a one-shot
/// `DOMContentLoaded` handler. Either way `f` runs exactly once.
pub fn on_document_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .unwrap_throw();
}

//! Browser-side enhancements for the AI Summarizer upload form.
//!
//! The module does one thing: once the page is interactively ready it wires
//! the `#pdf_file` input so the linked label shows the name of whichever file
//! the user picked. There is no upload handling, validation, or network
//! traffic here; the form submit path stays untouched.
//!
//! The [`attach`] / [`attach_with_options`] functions take the [`Document`]
//! explicitly and hand back a disposable [`UploadLabelBinding`], so hosts and
//! tests can drive a document of their choosing. The `#[wasm_bindgen(start)]`
//! hook below is the only place that reaches for the ambient globals.
//!
//! [`Document`]: web_sys::Document

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;

mod diag;
mod ready;
mod upload_label;

pub use ready::on_document_ready;
pub use upload_label::{
    DEFAULT_INPUT_ID, DEFAULT_PREFIX, UploadLabelBinding, UploadLabelOptions, attach,
    attach_with_options, selected_text,
};

thread_local! {
    // Page-lifetime binding created by `start`. Never dropped; the listener
    // stays active until the document itself is torn down.
    static PAGE_BINDING: RefCell<Option<UploadLabelBinding>> = RefCell::new(None);
}

/// Module entry point. Schedules the upload-label wiring on document-ready.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let ready_target = document.clone();
    on_document_ready(&ready_target, move || {
        diag::diag!("AI Summarizer JS loaded.");
        if let Some(binding) = attach(&document) {
            PAGE_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(binding);
            });
        }
    });
}

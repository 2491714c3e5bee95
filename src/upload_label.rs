//! Upload label updater.
//!
//! Binds a one-way reactive update from "user selects a file" to "label text
//! changes": once attached to a file input, every `change` event rewrites the
//! text of the `label[for=...]` element linked to that input so the user sees
//! which file they picked.
//!
//! Every failure mode here is a defined no-op. A page without the input gets
//! no listener, a selection with no files leaves the label alone, and a
//! missing label at event time logs a diagnostic and does nothing else. None
//! of these are faults worth surfacing past the browser's own file picker UI.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use crate::diag::diag_warn;

/// Identifier of the upload form's file input on the summarizer page.
pub const DEFAULT_INPUT_ID: &str = "pdf_file";

/// Prefix shown in front of the selected file name.
pub const DEFAULT_PREFIX: &str = "Selected: ";

/// How to locate the input and format the label text.
#[derive(Clone, Debug)]
pub struct UploadLabelOptions {
    /// Element id of the file input. The label is resolved through the
    /// matching `for` attribute, so it needs no id of its own.
    pub input_id: String,
    /// Literal prefix placed before the file name in the label text.
    pub prefix: String,
}

impl Default for UploadLabelOptions {
    fn default() -> Self {
        Self {
            input_id: DEFAULT_INPUT_ID.to_owned(),
            prefix: DEFAULT_PREFIX.to_owned(),
        }
    }
}

/// Live binding between a file input and its label.
///
/// Owns the `change` closure; dropping the binding detaches the listener from
/// the input. For the usual page-lifetime wiring the module start hook parks
/// one of these in a thread-local slot and never drops it.
pub struct UploadLabelBinding {
    input: HtmlInputElement,
    on_change: Closure<dyn FnMut(Event)>,
}

impl Drop for UploadLabelBinding {
    fn drop(&mut self) {
        let _ = self.input.remove_event_listener_with_callback(
            "change",
            self.on_change.as_ref().unchecked_ref(),
        );
    }
}

/// Attach the updater to the summarizer upload form in `document`.
///
/// Returns `None` when the document has no file input with the default id,
/// in which case nothing is registered and the feature stays inactive.
pub fn attach(document: &Document) -> Option<UploadLabelBinding> {
    attach_with_options(document, UploadLabelOptions::default())
}

/// Attach the updater with explicit options.
///
/// The label is re-resolved on every `change` event rather than captured
/// here, so labels added or replaced after attachment still work.
pub fn attach_with_options(
    document: &Document,
    options: UploadLabelOptions,
) -> Option<UploadLabelBinding> {
    let input = document
        .get_element_by_id(&options.input_id)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;

    let on_change: Closure<dyn FnMut(Event)> = Closure::new({
        let document = document.clone();
        let input = input.clone();
        move |_event: Event| update_label(&document, &input, &options)
    });
    input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .unwrap_throw();

    Some(UploadLabelBinding { input, on_change })
}

/// Label text for a selected file name.
pub fn selected_text(prefix: &str, file_name: &str) -> String {
    format!("{prefix}{file_name}")
}

fn update_label(document: &Document, input: &HtmlInputElement, options: &UploadLabelOptions) {
    let Some(files) = input.files() else { return };
    // Only the first entry matters; the form is a single-file upload. An
    // empty list means the picker was dismissed, so the label keeps its
    // previous text.
    let Some(file) = files.get(0) else { return };

    let selector = format!("label[for='{}']", options.input_id);
    let Ok(Some(label)) = document.query_selector(&selector) else {
        diag_warn!("no label linked to input '{}'", options.input_id);
        return;
    };
    let Ok(label) = label.dyn_into::<HtmlElement>() else {
        diag_warn!("element linked to input '{}' is not renderable", options.input_id);
        return;
    };
    label.set_inner_text(&selected_text(&options.prefix, &file.name()));
}

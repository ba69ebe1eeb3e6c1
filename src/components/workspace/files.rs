//! Browser file download and upload helpers.

use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, FileReader, HtmlAnchorElement, HtmlInputElement, Url};

fn document() -> Result<web_sys::Document, JsValue> {
	web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document"))
}

/// Offer `contents` to the user as a download called `file_name`.
pub fn download(file_name: &str, contents: &[u8], mime: &str) -> Result<(), JsValue> {
	let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(contents));
	let options = BlobPropertyBag::new();
	options.set_type(mime);
	let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

	let link: HtmlAnchorElement = document()?.create_element("a")?.dyn_into()?;
	link.set_href(&Url::create_object_url_with_blob(&blob)?);
	link.set_download(file_name);
	link.click();
	Ok(())
}

/// Ask the user for a file and hand its text to `on_load`.
///
/// Nothing is called when the picker is dismissed or the read fails.
pub fn pick_text_file(on_load: impl FnOnce(String) + 'static) -> Result<(), JsValue> {
	let input: HtmlInputElement = document()?.create_element("input")?.dyn_into()?;
	input.set_type("file");

	let picker = input.clone();
	let on_change = Closure::once(move || {
		let Some(file) = picker.files().and_then(|files| files.get(0)) else {
			return;
		};
		let reader = match FileReader::new() {
			Ok(reader) => reader,
			Err(e) => {
				log::error!("cannot read file: {e:?}");
				return;
			}
		};
		let done = reader.clone();
		let loaded = Closure::once(move || match done.result().ok().and_then(|v| v.as_string()) {
			Some(text) => on_load(text),
			None => log::error!("file is not text"),
		});
		reader.set_onload(Some(loaded.as_ref().unchecked_ref()));
		loaded.forget();
		if let Err(e) = reader.read_as_text(&file) {
			log::error!("cannot read file: {e:?}");
		}
	});
	input.set_onchange(Some(on_change.as_ref().unchecked_ref()));
	on_change.forget();
	input.click();
	Ok(())
}

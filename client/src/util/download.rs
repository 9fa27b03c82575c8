//! Client-side file downloads for chart exports.
//!
//! Downloads go through a temporary `<a download>` element appended to the
//! body, clicked, and removed again. Requires a browser environment; SSR
//! paths return `false` without side effects.

use charts::export::{CSV_MIME_TYPE, csv_filename, image_filename, records_to_csv};
use protocol::Record;

/// Download an already-rendered chart image as `{filename}.png`.
///
/// Returns `false` when there is no image source or no document.
pub fn save_chart_as_image(src: &str, filename: &str) -> bool {
    if src.is_empty() {
        log::error!("invalid chart element: no image source");
        return false;
    }
    trigger_download(src, &image_filename(filename))
}

/// Download `records` as `{filename}.csv`.
///
/// Returns `false` when there are no records or no document.
pub fn export_data_as_csv(records: &[Record], filename: &str) -> bool {
    let Some(content) = records_to_csv(records) else {
        log::error!("invalid data for CSV export");
        return false;
    };
    download_text(&content, CSV_MIME_TYPE, &csv_filename(filename))
}

fn download_text(content: &str, mime_type: &str, filename: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return false;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return false;
        };
        let downloaded = trigger_download(&url, filename);
        let _ = web_sys::Url::revoke_object_url(&url);
        downloaded
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (content, mime_type, filename);
        false
    }
}

fn trigger_download(href: &str, filename: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(body) = document.body() else {
            return false;
        };
        let Ok(link) = document
            .create_element("a")
            .map(|el| el.unchecked_into::<web_sys::HtmlAnchorElement>())
        else {
            return false;
        };
        link.set_href(href);
        link.set_download(filename);
        if body.append_child(&link).is_err() {
            return false;
        }
        link.click();
        let _ = body.remove_child(&link);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (href, filename);
        false
    }
}

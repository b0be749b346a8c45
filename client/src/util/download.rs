//! Save generated bytes as a browser download.

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("browser refused the download: {0}")]
    Browser(String),

    #[error("downloads need a browser")]
    Unavailable,
}

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const ZIP_MIME: &str = "application/zip";

/// Offer `bytes` to the user as `file_name`.
///
/// # Errors
///
/// Returns an error if the blob or the temporary link cannot be created.
pub fn save_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| DownloadError::Browser(format!("{e:?}"));

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::Unavailable)?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| DownloadError::Browser("anchor element".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        log::info!("downloaded {file_name} ({} bytes)", bytes.len());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, mime, bytes);
        Err(DownloadError::Unavailable)
    }
}

/// `scheme://host[:port]` of the current page; QR labels point back here.
pub fn page_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use tokio::sync::oneshot;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlInputElement, Url};

    /// Blocking alert dialog, matching the browser's native `alert()`.
    pub async fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Prompts the user to pick an image and returns an object URL usable as
    /// an `<img src>`. `Ok(None)` when the picker is dismissed.
    pub async fn pick_image_file() -> Result<Option<String>, String> {
        let (tx, rx) = oneshot::channel();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;
        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into()
            .map_err(|_| "failed to cast to HtmlInputElement".to_string())?;
        input.set_type("file");
        input.set_accept("image/*");

        let onchange_closure = Closure::once(move |event: web_sys::Event| {
            let input: Option<HtmlInputElement> =
                event.target().and_then(|t| t.dyn_into().ok());
            let file = input.and_then(|i| i.files()).and_then(|files| files.get(0));
            let result = match file {
                Some(file) => Url::create_object_url_with_blob(&file)
                    .map(Some)
                    .map_err(|e| format!("{e:?}")),
                None => Ok(None),
            };
            let _ = tx.send(result);
        });
        input.set_onchange(Some(onchange_closure.as_ref().unchecked_ref()));
        onchange_closure.forget();

        body.append_child(&input).map_err(|e| format!("{e:?}"))?;
        input.click();
        body.remove_child(&input).map_err(|e| format!("{e:?}"))?;

        rx.await.map_err(|e| e.to_string())?
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {

    /// Blocking alert dialog via the native message box.
    pub async fn alert(message: &str) {
        let _ = rfd::AsyncMessageDialog::new()
            .set_title("Terrafund")
            .set_description(message)
            .show()
            .await;
    }

    /// Prompts the user to pick an image and returns a `file://` reference.
    /// `Ok(None)` when the picker is dismissed.
    pub async fn pick_image_file() -> Result<Option<String>, String> {
        let file_handle = rfd::AsyncFileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
            .pick_file()
            .await;

        Ok(file_handle.map(|handle| format!("file://{}", handle.path().display())))
    }
}

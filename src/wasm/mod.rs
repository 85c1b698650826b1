//! WASM bindings: the thin rendering adapter
//!
//! The host page owns the DOM and the event listeners; this bridge owns
//! the engine. Input events call back into `notifyInput` /
//! `syncPageContent`, paste goes through `preparePaste`, and `render`
//! hands the serialized view to the mount callback the host registered
//! with `setMount`.

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::document::ViewMode;
use crate::markup::ContentFormat;
use crate::render::{flow_block_html, prepare_paste, RenderError};
use crate::{Editor, PageMetrics};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed editor wrapper
#[wasm_bindgen]
pub struct WasmEditor {
    editor: Editor,
    mount: Option<Function>,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Create an editor with the default A4 page geometry.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            editor: Editor::new(PageMetrics::default()),
            mount: None,
        }
    }

    /// Create an editor with custom page geometry.
    #[wasm_bindgen(js_name = withMetrics)]
    pub fn with_metrics(
        page_height_mm: f32,
        margin_allowance_mm: f32,
        font_size_px: f32,
        line_height_multiplier: f32,
    ) -> Self {
        Self {
            editor: Editor::new(PageMetrics {
                page_height_mm,
                margin_allowance_mm,
                font_size_px,
                line_height_multiplier,
            }),
            mount: None,
        }
    }

    /// Load decoded file content with its extension-derived format tag
    /// (`"plain" | "markdown" | "html"`).
    #[wasm_bindgen(js_name = loadContent)]
    pub fn load_content(&mut self, text: &str, format: &str) -> Result<(), JsError> {
        let format = ContentFormat::from_tag(format)
            .ok_or_else(|| JsError::new(&format!("unknown content format tag: {format}")))?;
        self.editor.load(text, format);
        Ok(())
    }

    /// Bulk replacement with pre-built template markup.
    #[wasm_bindgen(js_name = applyTemplate)]
    pub fn apply_template(&mut self, html: &str) {
        self.editor.apply_template(html);
    }

    /// Register the host function that mounts the rendered view.
    #[wasm_bindgen(js_name = setMount)]
    pub fn set_mount(&mut self, callback: Function) {
        self.mount = Some(callback);
    }

    /// Serialize the current view and hand it to the mount callback.
    ///
    /// Rendering with no mount registered is the one fatal condition in
    /// this subsystem; it is surfaced, not swallowed.
    pub fn render(&self) -> Result<(), JsError> {
        let mount = self.mount.as_ref().ok_or(RenderError::MountDetached)?;
        let payload = ViewPayload::from_editor(&self.editor);
        let json = serde_json::to_string(&payload).map_err(|e| JsError::new(&e.to_string()))?;
        mount
            .call1(&JsValue::NULL, &JsValue::from_str(&json))
            .map_err(|_| JsError::new("mount callback rejected the render payload"))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleViewMode)]
    pub fn toggle_view_mode(&mut self) {
        self.editor.toggle_view_mode();
    }

    #[wasm_bindgen(js_name = rebuildLayout)]
    pub fn rebuild_layout(&mut self) {
        self.editor.rebuild();
    }

    /// Input-event wiring: mark dirty, track the active page.
    #[wasm_bindgen(js_name = notifyInput)]
    pub fn notify_input(&mut self, page_index: usize) {
        self.editor.notify_input(page_index);
    }

    /// Write back one page's edited content.
    #[wasm_bindgen(js_name = syncPageContent)]
    pub fn sync_page_content(&mut self, page_index: usize, html: &str) -> bool {
        self.editor.sync_page_content(page_index, html)
    }

    /// Write back the continuous flow region's text.
    #[wasm_bindgen(js_name = syncContinuousContent)]
    pub fn sync_continuous_content(&mut self, text: &str) {
        self.editor.sync_continuous_content(text);
    }

    /// Turn clipboard text into a safe plain-text fragment.
    #[wasm_bindgen(js_name = preparePaste)]
    pub fn prepare_paste(&self, text: &str) -> String {
        prepare_paste(text)
    }

    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.editor.page_count()
    }

    #[wasm_bindgen(js_name = getStatusLabel)]
    pub fn get_status_label(&self) -> String {
        self.editor.status_label()
    }

    /// Word/character/line counts as a JSON string.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.editor.stats()).map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = isModified)]
    pub fn is_modified(&self) -> bool {
        self.editor.document.is_modified()
    }

    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self) {
        self.editor.document.mark_saved();
    }

    #[wasm_bindgen(js_name = getTitle)]
    pub fn get_title(&self) -> String {
        self.editor.document.title().to_string()
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: &str) {
        self.editor.document.set_title(title);
    }
}

impl Default for WasmEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view data for the mount callback
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewPayload {
    view_mode: &'static str,
    page_count: usize,
    status: String,
    pages: Vec<PagePayload>,
    flow_html: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PagePayload {
    index: usize,
    label: String,
    content: String,
    container_html: String,
}

impl ViewPayload {
    fn from_editor(editor: &Editor) -> Self {
        let document = &editor.document;
        match document.view_mode() {
            ViewMode::Paginated => Self {
                view_mode: "paginated",
                page_count: document.page_count(),
                status: document.status_label(),
                pages: document
                    .pages()
                    .iter()
                    .map(|page| PagePayload {
                        index: page.index,
                        label: page.label().to_string(),
                        content: page.content().to_string(),
                        container_html: page.container_html(),
                    })
                    .collect(),
                flow_html: None,
            },
            ViewMode::Continuous => Self {
                view_mode: "continuous",
                page_count: document.page_count(),
                status: document.status_label(),
                pages: Vec::new(),
                flow_html: Some(flow_block_html(document.flow_text())),
            },
        }
    }
}

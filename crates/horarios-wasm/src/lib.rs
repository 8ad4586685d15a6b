//! WASM bindings for timetable PDF page labeling.
//!
//! Documents come from pdf.js: pass a `PDFDocumentProxy` to
//! [`CatalogLoader::load`] and get back the sorted page catalog.

use std::rc::Rc;

use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use horarios_core::{
    CatalogBuilder, CatalogSession, Category, DocumentSource, HorariosConfig, HorariosError,
    LabelExtractor, LoadOutcome, PdfDocument, PdfError, TextRun,
};

#[wasm_bindgen]
extern "C" {
    /// pdf.js `PDFDocumentProxy`.
    #[derive(Debug, Clone)]
    pub type PdfJsDocument;

    #[wasm_bindgen(method, getter, js_name = numPages)]
    fn num_pages(this: &PdfJsDocument) -> u32;

    #[wasm_bindgen(method, js_name = getPage)]
    fn get_page(this: &PdfJsDocument, page_number: u32) -> Promise;

    /// pdf.js `PDFPageProxy`.
    #[derive(Debug, Clone)]
    pub type PdfJsPage;

    #[wasm_bindgen(method, js_name = getTextContent)]
    fn get_text_content(this: &PdfJsPage) -> Promise;
}

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default configuration as pretty JSON, as a starting point for `withConfig`.
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<String, JsValue> {
    serde_json::to_string_pretty(&HorariosConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Collapse whitespace runs into single spaces.
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    horarios_core::normalize(text)
}

/// Extract the label of a page text with the default configuration.
///
/// `category` accepts `professor`/`prof`/`professores` or `class`/`turma`/`turmas`.
#[wasm_bindgen(js_name = extractLabel)]
pub fn extract_label(text: &str, category: &str) -> Result<Option<String>, JsValue> {
    let category = parse_category(category)?;
    let extractor = LabelExtractor::new(Default::default()).map_err(js_error)?;
    Ok(extractor.extract_label(text, category))
}

fn parse_category(category: &str) -> Result<Category, JsValue> {
    category.parse().map_err(js_error)
}

fn js_error(error: HorariosError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Message of a rejected promise value.
fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// A pdf.js document seen through the core document trait.
struct JsDocument {
    inner: PdfJsDocument,
    page_count: u32,
}

impl PdfDocument for JsDocument {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    async fn page_text(&self, page: u32) -> horarios_core::Result<Vec<TextRun>> {
        if page == 0 || page > self.page_count {
            return Err(PdfError::InvalidPage(page).into());
        }

        let proxy: PdfJsPage = JsFuture::from(self.inner.get_page(page))
            .await
            .map_err(|e| PdfError::Parse(format!("page {}: {}", page, js_message(&e))))?
            .unchecked_into();

        let content = JsFuture::from(proxy.get_text_content())
            .await
            .map_err(|e| PdfError::TextExtraction(js_message(&e)))?;

        let items: Array = Reflect::get(&content, &JsValue::from_str("items"))
            .ok()
            .and_then(|items| items.dyn_into().ok())
            .ok_or_else(|| PdfError::TextExtraction("text content has no items".to_string()))?;

        let str_key = JsValue::from_str("str");
        Ok(items
            .iter()
            .filter_map(|item| Reflect::get(&item, &str_key).ok()?.as_string())
            .map(TextRun::new)
            .collect())
    }
}

/// Serves one already-opened pdf.js document.
struct JsSource {
    document: PdfJsDocument,
}

impl DocumentSource for JsSource {
    type Document = JsDocument;

    async fn open(&self, _category: Category) -> horarios_core::Result<JsDocument> {
        Ok(JsDocument {
            inner: self.document.clone(),
            page_count: self.document.num_pages(),
        })
    }
}

/// Label returned by [`CatalogLoader::label`].
#[derive(serde::Serialize)]
struct LabelResult {
    label: String,
    rule: &'static str,
}

struct LoaderState {
    session: CatalogSession,
    builder: CatalogBuilder,
}

/// Builds catalogs from pdf.js documents, keeping only the newest load.
#[wasm_bindgen]
pub struct CatalogLoader {
    state: Rc<LoaderState>,
}

#[wasm_bindgen]
impl CatalogLoader {
    /// Create a loader with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CatalogLoader, JsValue> {
        Self::from_config(&HorariosConfig::default())
    }

    /// Create a loader from a (partial) configuration object.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<CatalogLoader, JsValue> {
        let config: HorariosConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::from_config(&config)
    }

    fn from_config(config: &HorariosConfig) -> Result<CatalogLoader, JsValue> {
        let builder = CatalogBuilder::from_config(config).map_err(js_error)?;
        Ok(CatalogLoader {
            state: Rc::new(LoaderState {
                session: CatalogSession::new(),
                builder,
            }),
        })
    }

    /// Build the catalog of a document.
    ///
    /// Resolves to `{ category, entries: [{ page_number, label }] }`, or to
    /// `null` when a later `load` call started before this one finished.
    /// Rejects with a message when the document cannot be read.
    pub fn load(&self, document: PdfJsDocument, category: &str) -> Result<Promise, JsValue> {
        let category = parse_category(category)?;
        let state = Rc::clone(&self.state);

        Ok(future_to_promise(async move {
            let source = JsSource { document };
            match state.session.load(&source, category, &state.builder).await {
                Ok(LoadOutcome::Applied(catalog)) => serde_wasm_bindgen::to_value(&*catalog)
                    .map_err(|e| JsValue::from_str(&e.to_string())),
                Ok(LoadOutcome::Superseded) => Ok(JsValue::NULL),
                Err(e) => Err(js_error(e)),
            }
        }))
    }

    /// The catalog of the newest successful load, or `null`.
    pub fn current(&self) -> Result<JsValue, JsValue> {
        match self.state.session.current() {
            Some(catalog) => serde_wasm_bindgen::to_value(&*catalog)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }

    /// Extract a label with this loader's configuration.
    ///
    /// Returns `{ label, rule }` or `null`.
    pub fn label(&self, text: &str, category: &str) -> Result<JsValue, JsValue> {
        let category = parse_category(category)?;
        match self.state.builder.extractor().extract_match(text, category) {
            Some(found) => serde_wasm_bindgen::to_value(&LabelResult {
                label: found.label,
                rule: found.rule,
            })
            .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }
}

// src/core/html.rs
// Small read helpers over the parsed DOM. Anything page-specific lives in `specs`.

use scraper::{ElementRef, Html};

use crate::config::consts::BOLD;

/// All text under `el`, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// The first element matching `sel` anywhere in `doc`.
pub fn first<'a>(doc: &'a Html, sel: &scraper::Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

fn is_bold(el: &ElementRef<'_>) -> bool {
    matches!(el.value().name(), "strong" | "b")
}

/// Text of every outermost `<strong>`/`<b>` under `root`, in document order.
/// `<b><strong>6:45pm</strong></b>` yields one entry, not two.
pub fn bold_texts(root: ElementRef<'_>) -> Vec<String> {
    root.select(selector!(BOLD))
        .filter(|el| !el.ancestors().filter_map(ElementRef::wrap).any(|a| is_bold(&a)))
        .map(text_of)
        .collect()
}

/// Every `<table>` under `root` as rows of trimmed `<td>` texts.
/// Nested tables show up twice (once inside their parent), same as a
/// recursive row search would see them.
pub fn table_cells(root: ElementRef<'_>) -> Vec<Vec<Vec<String>>> {
    root.select(selector!("table"))
        .map(|table| {
            table
                .select(selector!("tr"))
                .map(|tr| {
                    tr.select(selector!("td"))
                        .map(|td| text_of(td).trim().to_string())
                        .collect()
                })
                .collect()
        })
        .collect()
}

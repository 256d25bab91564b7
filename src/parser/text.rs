/// Stray byte left behind when a non-breaking space is decoded as Latin-1.
const ENCODING_ARTIFACT: char = 'Â';

/// Drop encoding artifacts and surrounding whitespace from a text fragment.
pub fn normalize(text: &str) -> String {
    text.replace(ENCODING_ARTIFACT, "").trim().to_string()
}

/// Concatenated text content of an element, normalized.
pub fn element_text(el: scraper::ElementRef) -> String {
    normalize(&el.text().collect::<String>())
}

// ── Tests ──

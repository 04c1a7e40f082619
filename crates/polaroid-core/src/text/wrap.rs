//! Greedy word wrapping for captions.

use super::CaptionFont;

/// Break `text` into lines no wider than `max_width` at `size_px`.
///
/// Words are separated by single spaces, exactly as typed; runs of spaces
/// produce empty words that are kept. A word joins the current line only while the
/// joined line measures strictly less than `max_width`; a single word wider
/// than the limit still gets its own line.
pub fn wrap_words(font: &dyn CaptionFont, text: &str, size_px: f64, max_width: f64) -> Vec<String> {
    let mut words = text.split(' ');
    let mut current = words.next().unwrap_or_default().to_string();
    let mut lines = Vec::new();

    for word in words {
        let candidate = format!("{current} {word}");
        if font.measure(&candidate, size_px) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}


// ============================================================================
// Property-Based Tests
// ============================================================================

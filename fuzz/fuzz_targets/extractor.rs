#![no_main]

use libfuzzer_sys::fuzz_target;

use reelscript::extractor::{ExtractedText, model::MAX_TEXT_CHARS, reader::extract_text};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    // Paragraph extraction must never panic, and the capped text is always
    // usable as prompt context.
    let extracted = ExtractedText::from_raw(&extract_text(&html));
    assert!(!extracted.as_str().is_empty());
    assert!(extracted.as_str().chars().count() <= MAX_TEXT_CHARS);
});

//! Fuzz target for extracting `categories` from an annotation file.
//!
//! Run with:
//!   cargo +nightly fuzz run categories_json_parse

#![no_main]

use images2coco::coco::{assemble, categories_from_slice, to_coco_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // 10MB is generous for JSON annotation files.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    // Whatever parses must also serialize back out.
    if let Ok(categories) = categories_from_slice(data) {
        let doc = assemble(&[], categories).expect("no images, no duplicates");
        let _ = to_coco_string(&doc).expect("parsed categories serialize");
    }
});

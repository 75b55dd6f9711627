#![allow(dead_code)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub const EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "webp", "txt"];

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(32);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// An extension from [`EXTENSIONS`] with randomized letter case.
pub fn arb_extension() -> impl Strategy<Value = String> {
    (
        prop::sample::select(EXTENSIONS.to_vec()),
        prop::collection::vec(any::<bool>(), 4),
    )
        .prop_map(|(ext, upper)| {
            ext.chars()
                .zip(upper.iter().cycle())
                .map(|(c, &u)| if u { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
}

/// Unique file names of the form `<stem>.<ext>`.
pub fn arb_file_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(("[a-z][a-z0-9_]{0,7}", arb_extension()), 0..max).prop_map(|entries| {
        let mut seen = BTreeSet::new();
        entries
            .into_iter()
            .map(|(stem, ext)| format!("{stem}.{ext}"))
            .filter(|name| seen.insert(name.to_lowercase()))
            .collect()
    })
}

/// A subset of [`EXTENSIONS`] to exclude.
pub fn arb_exclusions() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(EXTENSIONS.to_vec(), 0..=EXTENSIONS.len())
        .prop_map(|exts| exts.into_iter().map(String::from).collect())
}

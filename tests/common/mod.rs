//! Shared test utilities
//!
//! Inputs are generated rather than committed: small fixed samples for
//! the boundary scenarios, seeded random line files for the round-trip
//! sweeps.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Writes `lines` to `<dir>/<name>`, one terminator per line
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();
    path
}

/// The five-line sample file used by the end-to-end scenarios
pub fn sample_file(dir: &Path) -> PathBuf {
    write_lines(dir, "sample.txt", &["nula", "jedna", "dva", "tri", "styri"])
}

/// Generates `count` lines of random lowercase text with varying
/// lengths, deterministically from `seed`
pub fn generate_lines(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..80);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

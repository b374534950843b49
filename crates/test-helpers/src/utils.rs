// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{fs, io::Write, path::Path};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{subscriber::DefaultGuard, trace};
use tracing_subscriber::{fmt, EnvFilter};

/// Deterministic rng for reproducible tests.
pub fn create_rng_from_u64(value: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(value)
}

/// Installs a test-scoped subscriber. Output goes through the test harness, so it only shows
/// for failing tests or with `--nocapture`.
pub fn init_test_tracing(filter: &str) -> DefaultGuard {
    let subscriber = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

pub fn write_file_with_dirs(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let abs_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    trace!(path = %abs_path.display(), "Writing to path");

    // Ensure the directory structure exists
    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(&abs_path)?;
    file.write_all(content)?;
    trace!(path = %abs_path.display(), "File written successfully!");
    Ok(())
}

//! Where `preferences.json` is looked up.

use std::path::PathBuf;

/// Folder holding the mandelpan binary, so a copied build carries its
/// preferences along. Uses the working directory when the executable path
/// cannot be resolved.
pub fn exe_directory() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.to_path_buf(),
            None => working_directory(),
        },
        Err(_) => working_directory(),
    }
}

fn working_directory() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

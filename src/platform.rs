/// Host integration: open a folder in the native file manager

use std::io;
use std::path::Path;
use std::process::Command;

/// File manager launcher for the current platform
fn opener() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Open `folder` with the platform's file manager.
///
/// The launcher is spawned and left running; this is called on the UI
/// thread and must not wait for the file manager. Only a failure to start
/// the launcher is reported (explorer.exe exits with 1 even on success).
pub fn open_folder(folder: &Path) -> io::Result<()> {
    log::info!("Opening folder: {}", folder.display());
    Command::new(opener()).arg(folder).spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_matches_platform() {
        #[cfg(target_os = "windows")]
        assert_eq!(opener(), "explorer");
        #[cfg(target_os = "macos")]
        assert_eq!(opener(), "open");
        #[cfg(all(not(target_os = "windows"), not(target_os = "macos")))]
        assert_eq!(opener(), "xdg-open");
    }

    #[test]
    fn test_missing_launcher_is_reported() {
        let result = Command::new("pdf2img-no-such-launcher")
            .arg(std::env::temp_dir())
            .spawn();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}

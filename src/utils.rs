use std::path::{Path, PathBuf};

/// Render `path` for a header, replacing the home prefix with `~`
pub fn display_path(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }
    path.to_string_lossy().into_owned()
}

/// Expand a leading `~` in typed input to the home directory
pub fn expand_tilde(input: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(input);
    };
    if input == "~" {
        return home.to_path_buf();
    }
    match input.strip_prefix("~/").or_else(|| input.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Root directory of a drive letter such as "C:"
pub fn drive_root(drive: &str) -> PathBuf {
    PathBuf::from(format!("{}\\", drive.trim_end_matches('\\')))
}

/// Drives always offered by the selector, mounted or not
const FIXED_DRIVES: [&str; 4] = ["C:", "D:", "E:", "F:"];

/// C: to F: plus any other letter `is_present` accepts, in letter order
#[cfg_attr(not(windows), allow(dead_code))]
fn drive_choices(is_present: impl Fn(&str) -> bool) -> Vec<String> {
    (b'A'..=b'Z')
        .map(|letter| format!("{}:", letter as char))
        .filter(|drive| FIXED_DRIVES.contains(&drive.as_str()) || is_present(drive))
        .collect()
}

/// Get list of drives for the selector (Windows only, returns empty on other platforms)
pub fn get_available_drives() -> Vec<String> {
    #[cfg(windows)]
    {
        drive_choices(|drive| drive_root(drive).exists())
    }
    #[cfg(not(windows))]
    {
        Vec::new()
    }
}

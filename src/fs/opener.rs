//! Handing files to external applications
//!
//! The navigator never launches anything itself; it asks a [`FileOpener`]
//! to open an absolute path. One opener per platform family is picked at
//! startup, optionally wrapped by user-configured handler rules.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use regex::Regex;

use crate::config::Config;

/// Capability to open a file with some external program
pub trait FileOpener {
    /// Start the program for `path`. Returns once the process is spawned.
    fn open(&self, path: &Path) -> io::Result<()>;

    /// Short label for logs
    fn name(&self) -> &str;
}

/// Spawn `command` without waiting for it or capturing its output.
///
/// The child is waited on from a background thread so it never lingers
/// as a zombie once it exits.
fn spawn_detached(mut command: Command) -> io::Result<()> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Own process group, so Ctrl+C in the terminal doesn't reach the viewer
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let mut child = command.spawn()?;
    let pid = child.id();
    thread::Builder::new()
        .name(format!("reap-{}", pid))
        .spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "launched process exited"),
            Err(e) => tracing::warn!(pid, error = %e, "could not wait for launched process"),
        })?;
    Ok(())
}

/// `xdg-open` on Linux and the BSDs
#[cfg(all(unix, not(target_os = "macos")))]
#[derive(Debug, Default)]
pub struct XdgOpener;

#[cfg(all(unix, not(target_os = "macos")))]
impl FileOpener for XdgOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        spawn_detached(command)
    }

    fn name(&self) -> &str {
        "xdg-open"
    }
}

/// `open` on macOS
#[cfg(target_os = "macos")]
#[derive(Debug, Default)]
pub struct MacOpener;

#[cfg(target_os = "macos")]
impl FileOpener for MacOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let mut command = Command::new("open");
        command.arg(path);
        spawn_detached(command)
    }

    fn name(&self) -> &str {
        "open"
    }
}

/// Shell association via `explorer` on Windows
#[cfg(windows)]
#[derive(Debug, Default)]
pub struct WindowsOpener;

#[cfg(windows)]
impl FileOpener for WindowsOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let mut command = Command::new("explorer");
        command.arg(path);
        spawn_detached(command)
    }

    fn name(&self) -> &str {
        "explorer"
    }
}

/// Default-application launcher for the platform we were built for
pub fn platform_opener() -> Box<dyn FileOpener> {
    #[cfg(target_os = "macos")]
    {
        Box::new(MacOpener)
    }
    #[cfg(windows)]
    {
        Box::new(WindowsOpener)
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        Box::new(XdgOpener)
    }
    #[cfg(not(any(unix, windows)))]
    {
        Box::new(UnsupportedOpener)
    }
}

#[cfg(not(any(unix, windows)))]
#[derive(Debug, Default)]
pub struct UnsupportedOpener;

#[cfg(not(any(unix, windows)))]
impl FileOpener for UnsupportedOpener {
    fn open(&self, _path: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no default-application launcher on this platform",
        ))
    }

    fn name(&self) -> &str {
        "unsupported"
    }
}

/// User-supplied command template such as `"vlc {}"` or `"code --reuse-window"`.
///
/// The template is split on whitespace and run directly, without a shell.
/// Each `{}` token is replaced by the path; without one the path is
/// appended as the last argument.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    template: String,
}

impl CommandOpener {
    /// Returns `None` for a blank template
    pub fn new(template: &str) -> Option<Self> {
        if template.trim().is_empty() {
            return None;
        }
        Some(Self { template: template.trim().to_string() })
    }

    pub fn build_command(&self, path: &Path) -> Command {
        let mut parts = self.template.split_whitespace();
        // new() guarantees at least one token
        let program = parts.next().unwrap_or_default();
        let mut command = Command::new(program);

        let mut substituted = false;
        for part in parts {
            if part == "{}" {
                command.arg(path);
                substituted = true;
            } else if part.contains("{}") {
                command.arg(part.replace("{}", &path.to_string_lossy()));
                substituted = true;
            } else {
                command.arg(part);
            }
        }
        if !substituted {
            command.arg(path);
        }
        command
    }
}

impl FileOpener for CommandOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        spawn_detached(self.build_command(path))
    }

    fn name(&self) -> &str {
        &self.template
    }
}

/// File-name pattern rules in front of a fallback opener. First match wins.
pub struct HandlerOpener {
    rules: Vec<(Regex, CommandOpener)>,
    fallback: Box<dyn FileOpener>,
}

impl HandlerOpener {
    pub fn new(fallback: Box<dyn FileOpener>) -> Self {
        Self { rules: Vec::new(), fallback }
    }

    /// Add a rule. Patterns match case-insensitively against the file name.
    pub fn add_rule(&mut self, pattern: &str, command: &str) -> Result<(), regex::Error> {
        let re = Regex::new(&format!("(?i){}", pattern))?;
        if let Some(opener) = CommandOpener::new(command) {
            self.rules.push((re, opener));
        }
        Ok(())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Handler rule matching the file name of `path`, if any
    pub fn handler_for(&self, path: &Path) -> Option<&CommandOpener> {
        let name = path.file_name()?.to_string_lossy();
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(&name))
            .map(|(_, opener)| opener)
    }
}

impl FileOpener for HandlerOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        match self.handler_for(path) {
            Some(handler) => handler.open(path),
            None => self.fallback.open(path),
        }
    }

    fn name(&self) -> &str {
        self.fallback.name()
    }
}

/// Build the opener described by the configuration: the `[opener]` command
/// (or the platform launcher) behind any `[[handlers]]` rules.
pub fn opener_from_config(config: &Config) -> Box<dyn FileOpener> {
    let fallback: Box<dyn FileOpener> = match CommandOpener::new(&config.opener.command) {
        Some(custom) => Box::new(custom),
        None => platform_opener(),
    };

    if config.handlers.is_empty() {
        return fallback;
    }

    let mut handlers = HandlerOpener::new(fallback);
    for handler in &config.handlers {
        if let Err(e) = handlers.add_rule(&handler.pattern, &handler.command) {
            tracing::warn!(pattern = %handler.pattern, error = %e, "skipping invalid handler pattern");
        }
    }
    tracing::debug!(rules = handlers.rule_count(), fallback = handlers.name(), "file handlers loaded");
    Box::new(handlers)
}

#[cfg(test)]
pub mod testing {
    //! Opener double that records instead of spawning

    use std::cell::RefCell;
    use std::io;
    use std::path::{Path, PathBuf};

    use super::FileOpener;

    #[derive(Debug, Default)]
    pub struct RecordingOpener {
        pub opened: RefCell<Vec<PathBuf>>,
    }

    impl FileOpener for RecordingOpener {
        fn open(&self, path: &Path) -> io::Result<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }
}

//! Navigation between screens and hand-off to the external player

use std::io;
use std::process::{Command, Stdio};

use crate::model::{ListType, VideoKind, VideoThumbnail};

use super::detail::DetailScreen;
use super::list::ListScreen;
use super::{AppController, Route};

/// Receives navigation requests from the screens
pub trait Navigator {
    fn open_detail(&mut self, kind: VideoKind, id: u32);

    fn open_list(&mut self, list_type: ListType);

    fn open_player(&mut self, url: &str);

    /// Pop the top screen; false when already on the home screen
    fn back(&mut self) -> bool;
}

/// Starts playback of a stream URL
pub trait PlayerLauncher: Send {
    fn launch(&self, url: &str) -> io::Result<()>;
}

/// Spawns the configured player command, detached from the terminal
#[derive(Clone, Debug)]
pub struct CommandLauncher {
    command: String,
}

impl CommandLauncher {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

/// Split the player command and place the URL at `{url}`, or append it
pub fn player_args(command: &str, url: &str) -> Vec<String> {
    let mut parts: Vec<String> = command.split_whitespace().map(|s| s.to_string()).collect();
    let mut replaced = false;
    for part in &mut parts {
        if part.contains("{url}") {
            *part = part.replace("{url}", url);
            replaced = true;
        }
    }
    if !replaced {
        parts.push(url.to_string());
    }
    parts
}

impl PlayerLauncher for CommandLauncher {
    fn launch(&self, url: &str) -> io::Result<()> {
        let mut parts = player_args(&self.command, url);
        if parts.len() < 2 {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "no player command configured"));
        }
        let program = parts.remove(0);

        tracing::info!(program = %program, args = ?parts, "Launching player");
        let child = Command::new(&program)
            .args(&parts)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::debug!(pid = child.id(), "Player spawned");
        Ok(())
    }
}

impl AppController {
    /// Open the detail screen of a list row, if the row is navigable
    pub(crate) fn open_thumbnail(&mut self, item: &VideoThumbnail) {
        match item.identity() {
            Some((kind, id)) => self.open_detail(kind, id),
            None => {
                tracing::warn!(title = %item.title, "Item has no TMDB id");
                self.ui.set_notice(format!("\"{}\" cannot be opened", item.title));
            }
        }
    }
}

impl Navigator for AppController {
    fn open_detail(&mut self, kind: VideoKind, id: u32) {
        tracing::info!(?kind, id, "Opening detail screen");
        let screen = DetailScreen::mount(kind, id, self.use_cases.clone());
        self.routes.push(Route::Detail { screen, selected: 0 });
    }

    fn open_list(&mut self, list_type: ListType) {
        tracing::info!(?list_type, "Opening list screen");
        let screen = ListScreen::mount(list_type, self.use_cases.observe_list.clone());
        self.routes.push(Route::List { screen, selected: 0 });
    }

    fn open_player(&mut self, url: &str) {
        if let Err(e) = self.launcher.launch(url) {
            tracing::error!(url, error = %e, "Failed to launch player");
            self.ui.set_notice(format!("Could not start the player: {}", e));
        }
    }

    fn back(&mut self) -> bool {
        match self.routes.pop() {
            Some(route) => {
                route.unmount();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_replaces_placeholder() {
        assert_eq!(
            player_args("mpv --fs {url}", "https://x.example/a.m3u8"),
            vec!["mpv", "--fs", "https://x.example/a.m3u8"]
        );
    }

    #[test]
    fn test_url_is_appended_without_placeholder() {
        assert_eq!(
            player_args("vlc --fullscreen", "https://x.example/a.m3u8"),
            vec!["vlc", "--fullscreen", "https://x.example/a.m3u8"]
        );
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let launcher = CommandLauncher::new("   ");
        let err = launcher.launch("https://x.example/a.m3u8").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}

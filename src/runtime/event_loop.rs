use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use async_io::block_on;
use tracing::{debug, info};

use crate::app::App;
use crate::config::PlaybackSettings;
use crate::player::PlaybackBackend;

/// How long to wait for input when no timer deadline is pending.
const IDLE_WAIT: Duration = Duration::from_millis(500);

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Next,
    Prev,
    /// Play the track at this zero-based list index.
    Play(usize),
    List,
    Status,
    Volume(f32),
    Stop,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("empty command".to_string());
    };
    let arg = parts.next();

    match (word.to_ascii_lowercase().as_str(), arg) {
        ("n" | "next", None) => Ok(Command::Next),
        ("p" | "prev" | "previous", None) => Ok(Command::Prev),
        ("l" | "ls" | "list", None) => Ok(Command::List),
        ("s" | "status", None) => Ok(Command::Status),
        ("stop", None) => Ok(Command::Stop),
        ("q" | "quit", None) => Ok(Command::Quit),
        ("play", Some(i)) => i
            .parse()
            .map(Command::Play)
            .map_err(|_| format!("not a track number: {i}")),
        ("v" | "vol" | "volume", Some(v)) => match v.parse::<f32>() {
            Ok(v) if (0.0..=1.0).contains(&v) => Ok(Command::Volume(v)),
            _ => Err(format!("volume must be within 0.0..=1.0, got {v}")),
        },
        _ => Err(format!("unknown command: {}", line.trim())),
    }
}

fn print_status<B: PlaybackBackend>(app: &App<B>, out: &mut impl Write) -> io::Result<()> {
    let name = app
        .player
        .active_track
        .with(|t| t.as_ref().map(|t| t.display_name()))
        .unwrap_or_else(|| "-".to_string());
    let state = if app.player.is_playing.get() {
        "playing"
    } else {
        "stopped"
    };
    writeln!(
        out,
        "[{state}] {name}  {:.0}/{:.0}s ({:.0}%)  vol {:.2}",
        app.playback.position.get(),
        app.playback.duration.get(),
        app.playback.progress.get(),
        app.player.volume.get(),
    )
}

fn print_list<B: PlaybackBackend>(app: &App<B>, out: &mut impl Write) -> io::Result<()> {
    let active = app.player.active_index();
    app.player.track_list.with(|list| -> io::Result<()> {
        for (i, t) in list.iter().enumerate() {
            let marker = if Some(i) == active { '>' } else { ' ' };
            writeln!(out, "{marker} {i:>3}  {}", t.display_name())?;
        }
        Ok(())
    })
}

/// Apply one command. Returns `true` when the loop should exit.
pub fn handle_command<B: PlaybackBackend>(
    cmd: Command,
    app: &mut App<B>,
    out: &mut impl Write,
) -> io::Result<bool> {
    match cmd {
        Command::Next => block_on(app.play_next()),
        Command::Prev => block_on(app.play_previous()),
        Command::Play(i) => block_on(app.play_index(i)),
        Command::List => print_list(app, out)?,
        Command::Status => print_status(app, out)?,
        Command::Volume(v) => app.player.volume.set(v),
        Command::Stop => {
            app.stop_timer();
            app.player.is_playing.set(false);
        }
        Command::Quit => return Ok(true),
    }
    Ok(false)
}

/// Fire due timer ticks and handle the end of the active track.
///
/// Position is never clamped, so the end is detected here: the timer stops
/// and the playing flag drops. With `auto_advance` the next track is then
/// requested; only a successful start raises the flag again.
pub fn on_tick<B: PlaybackBackend>(
    app: &mut App<B>,
    settings: &PlaybackSettings,
    now: Instant,
) {
    app.advance_timer(now);

    if app.playback.timer_running() && app.playback.at_end() {
        app.stop_timer();
        app.player.is_playing.set(false);
        if settings.auto_advance {
            block_on(app.play_next());
        }
    }
}

/// Drive the player from `input` until `quit` or until the input closes.
///
/// Each turn waits for a command no longer than the timer's next deadline,
/// then fires due ticks. A track change (seen through `active_track`) rewinds
/// position, loads the new duration and restarts the timer.
pub fn run<B: PlaybackBackend>(
    app: &mut App<B>,
    settings: &PlaybackSettings,
    input: &Receiver<String>,
    out: &mut impl Write,
) -> io::Result<()> {
    let track_changed = Rc::new(Cell::new(false));
    let flag = track_changed.clone();
    let _on_track = app.player.active_track.subscribe(move |_| flag.set(true));
    // The subscription fires once on registration; that is not a change.
    track_changed.set(false);

    loop {
        if track_changed.replace(false) {
            app.playback
                .reset_for(app.player.active_track.get().as_ref());
            app.start_timer();
            print_status(app, out)?;
        }

        let timeout = app
            .playback
            .next_tick()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_WAIT);

        match input.recv_timeout(timeout) {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => match parse_command(&line) {
                Ok(cmd) => {
                    debug!(?cmd, "command");
                    if handle_command(cmd, app, out)? {
                        break;
                    }
                }
                Err(msg) => writeln!(out, "{msg}")?,
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                info!("input closed");
                break;
            }
        }

        on_tick(app, settings, Instant::now());
    }

    app.shutdown();
    Ok(())
}

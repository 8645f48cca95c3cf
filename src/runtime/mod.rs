//! Headless front end: loads settings and the library, then drives the
//! player from line commands on stdin.

use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use tracing::{info, warn};

use crate::app::App;
use crate::library::scan;

mod backend;
mod event_loop;
mod logging;
mod settings;

pub use backend::ProbeBackend;
pub use event_loop::{Command, handle_command, on_tick, parse_command};


fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, problem) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(msg) = problem {
        warn!("using default settings: {msg}");
    }

    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| ".".to_string())
    });

    let tracks = scan(Path::new(&dir), &settings.library);
    info!(dir = %dir, count = tracks.len(), "library ready");

    let mut app = App::new(ProbeBackend, &settings.playback);
    app.load_library(tracks);

    println!("commands: n(ext) p(rev) play <i> l(ist) s(tatus) v <0..1> stop q(uit)");

    let input = spawn_stdin_reader();
    let mut stdout = io::stdout();
    event_loop::run(&mut app, &settings.playback, &input, &mut stdout)?;
    Ok(())
}

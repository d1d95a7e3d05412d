//! core/playback/mod.rs
//! Audio sample service.
//!
//! - `SampleService` is the seam the GUI playback controller talks to
//! - `Engine` is the real thing: a rodio thread fed by a command channel
//!
//! Everything is fire-and-forget. The only thing that comes back is a start
//! failure, picked up by the controller on its next tick.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

mod engine;
mod probe;

pub use engine::PlaybackEngine;
pub use probe::probe_duration;

use crate::core::error::AudioError;

#[derive(Debug)]
pub enum EngineCommand {
    Play(PathBuf),
    Pause,
    Resume,
    Stop,
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum EngineEvent {
    Started(PathBuf),
    Error(String),
}

/// What the playback controller needs from an audio backend.
pub trait SampleService {
    /// Length of the sample at `path`.
    fn probe(&self, path: &Path) -> Result<Duration, AudioError>;
    fn play(&mut self, path: &Path) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn resume(&mut self);
    /// Stopping with nothing loaded is fine.
    fn stop(&mut self);
    /// A start failure reported since the last call, if any.
    fn take_failure(&mut self) -> Option<AudioError>;
}

/// Handle to the engine thread.
pub struct Engine {
    command_tx: Sender<EngineCommand>,
    event_rx: Receiver<EngineEvent>,
}

impl Engine {
    /// Best-effort send. If the engine died, the command is dropped.
    fn send(&self, cmd: EngineCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.send(EngineCommand::Shutdown);
    }
}

impl SampleService for Engine {
    fn probe(&self, path: &Path) -> Result<Duration, AudioError> {
        probe_duration(path)
    }

    fn play(&mut self, path: &Path) -> Result<(), AudioError> {
        self.command_tx
            .send(EngineCommand::Play(path.to_path_buf()))
            .map_err(|_| AudioError::EngineGone)
    }

    fn pause(&mut self) {
        self.send(EngineCommand::Pause);
    }

    fn resume(&mut self) {
        self.send(EngineCommand::Resume);
    }

    fn stop(&mut self) {
        self.send(EngineCommand::Stop);
    }

    fn take_failure(&mut self) -> Option<AudioError> {
        let mut failure = None;
        while let Ok(ev) = self.event_rx.try_recv() {
            match ev {
                EngineEvent::Started(path) => debug!(path = %path.display(), "sample started"),
                EngineEvent::Error(msg) => failure = Some(AudioError::Engine(msg)),
            }
        }
        failure
    }
}

/// Spawns the playback thread and returns its handle.
pub fn start_engine(volume: f32) -> Engine {
    let (command_tx, command_rx) = mpsc::channel::<EngineCommand>();
    let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

    thread::spawn(move || match PlaybackEngine::new(event_tx.clone(), volume) {
        Ok(mut engine) => engine.run(command_rx),
        Err(msg) => {
            error!("{msg}");
            reject_plays(&msg, &command_rx, &event_tx);
        }
    });

    Engine {
        command_tx,
        event_rx,
    }
}

/// No output device: answer every play request with the same failure
/// until shutdown or the handle goes away.
fn reject_plays(msg: &str, command_rx: &Receiver<EngineCommand>, event_tx: &Sender<EngineEvent>) {
    while let Ok(cmd) = command_rx.recv() {
        match cmd {
            EngineCommand::Play(path) => {
                debug!(path = %path.display(), "no audio output, rejecting");
                let _ = event_tx.send(EngineEvent::Error(msg.to_string()));
            }
            EngineCommand::Shutdown => break,
            _ => {}
        }
    }
}

//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per current song)
//! - command loop
//!
//! Emits EngineEvent back via a channel.
//! No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use super::{EngineCommand, EngineEvent};

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    sink: Option<Sink>,
    volume: f32,

    event_tx: Sender<EngineEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<EngineEvent>, volume: f32) -> Result<Self, String> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("failed to open default audio output: {e}"))?;

        Ok(Self {
            stream,
            sink: None,
            volume: volume.clamp(0.0, 1.0),
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<EngineCommand>) {
        while let Ok(cmd) = command_rx.recv() {
            if self.handle_command(cmd) {
                break;
            }
        }

        self.stop_internal();
    }

    /// Returns true on shutdown.
    fn handle_command(&mut self, cmd: EngineCommand) -> bool {
        match cmd {
            EngineCommand::Play(path) => {
                if let Err(e) = self.play_file(path) {
                    let _ = self.event_tx.send(EngineEvent::Error(e));
                }
            }
            EngineCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                }
            }
            EngineCommand::Resume => {
                if let Some(sink) = &self.sink {
                    sink.play();
                }
            }
            EngineCommand::Stop => self.stop_internal(),
            EngineCommand::Shutdown => return true,
        }

        false
    }

    fn play_file(&mut self, path: PathBuf) -> Result<(), String> {
        self.stop_internal();

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());

        let file = File::open(&path).map_err(|e| format!("failed to open file: {e}"))?;
        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|e| format!("decode failed: {e}"))?;

        sink.set_volume(self.volume);
        sink.append(decoder);
        sink.play();

        self.sink = Some(sink);

        debug!(path = %path.display(), "engine started sample");
        let _ = self.event_tx.send(EngineEvent::Started(path));

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

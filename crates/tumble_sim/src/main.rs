//! Tumble headless runner
//!
//! Starts the stock scene and reads debug commands from stdin:
//! `sphere`, `box`, `reset`, `resize W H`, `quit`.
//!
//! Run with: cargo run -p tumble_sim --bin tumble
//! Config:   TUMBLE_CONFIG=path/to/tumble.toml, TUMBLE_SEED=42

use crossbeam_channel::Sender;
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tumble_audio::{share, AudioOutput, SharedSound, SilentSound};
use tumble_sim::{AudioConfig, ControlMessage, FrameLoop, LogPresenter, SimError, Simulation, SimulationConfig};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SimError> {
    let config = SimulationConfig::discover()?;

    // Keep the output stream alive for the whole run
    let output = match AudioOutput::try_default() {
        Ok(output) => Some(output),
        Err(e) => {
            log::warn!("{}; impacts will be silent", e);
            None
        }
    };
    let sound = impact_sound(&config.audio, output.as_ref());

    let mut sim = Simulation::new(config.clone(), sound)?;
    sim.populate_default_scene()?;

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        log::info!("Received Ctrl+C, shutting down...");
        r.store(false, Ordering::SeqCst);
    }) {
        log::warn!("Failed to set Ctrl+C handler: {}", e);
    }

    let (sender, receiver) = crossbeam_channel::unbounded();
    spawn_command_reader(sender);

    let mut presenter = LogPresenter::new(u64::from(config.frame.target_fps));
    FrameLoop::new(config.frame.target_fps, running, receiver).run(&mut sim, &mut presenter);

    Ok(())
}

/// Load the configured clip, falling back to silence
fn impact_sound(audio: &AudioConfig, output: Option<&AudioOutput>) -> SharedSound {
    let (Some(path), Some(output)) = (audio.clip.as_ref(), output) else {
        return share(SilentSound::new());
    };
    match output.load_clip(path) {
        Ok(clip) => share(clip),
        Err(e) => {
            log::warn!("{}; impacts will be silent", e);
            share(SilentSound::new())
        }
    }
}

/// Forward stdin lines to the frame loop
fn spawn_command_reader(sender: Sender<ControlMessage>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<ControlMessage>() {
                Ok(message) => {
                    if sender.send(message).is_err() || message == ControlMessage::Quit {
                        break;
                    }
                }
                Err(e) => log::warn!("{}", e),
            }
        }
    });
}

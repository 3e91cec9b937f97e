//! Paced frame loop for headless runs

use crate::debug::ControlMessage;
use crate::session::Simulation;
use crossbeam_channel::{Receiver, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tumble_scene::Presenter;

/// Runs frames at a target rate until `running` is cleared or a
/// [`ControlMessage::Quit`] arrives. Pending control messages are applied
/// before each frame.
pub struct FrameLoop {
    frame_time: Duration,
    running: Arc<AtomicBool>,
    commands: Receiver<ControlMessage>,
}

impl FrameLoop {
    pub fn new(target_fps: u32, running: Arc<AtomicBool>, commands: Receiver<ControlMessage>) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            running,
            commands,
        }
    }

    /// Run until stopped; returns the number of frames run
    pub fn run(&mut self, sim: &mut Simulation, presenter: &mut dyn Presenter) -> u64 {
        let mut frames = 0;

        while self.running.load(Ordering::SeqCst) {
            let start = Instant::now();

            if !self.drain_commands(sim, presenter) {
                self.running.store(false, Ordering::SeqCst);
                break;
            }

            sim.frame(presenter);
            frames += 1;

            let spent = start.elapsed();
            if spent < self.frame_time {
                std::thread::sleep(self.frame_time - spent);
            }
        }

        log::info!("Frame loop stopped after {} frames", frames);
        frames
    }

    /// Apply every pending message; false when the loop must stop
    fn drain_commands(&self, sim: &mut Simulation, presenter: &mut dyn Presenter) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(ControlMessage::Debug(action)) => {
                    if let Err(e) = sim.apply(action) {
                        log::warn!("Debug action {:?} failed: {}", action, e);
                    }
                }
                Ok(ControlMessage::Resize { width, height }) => sim.resize(presenter, width, height),
                Ok(ControlMessage::Quit) => return false,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return true,
            }
        }
    }
}

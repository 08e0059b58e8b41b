use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread,
    time::Duration,
};

use rand::Rng;

use crate::types::Coordinate;

// Interval between simulated fixes.
const FIX_INTERVAL: Duration = Duration::from_millis(1000);
// Largest per-fix drift on each axis, in degrees.
const DRIFT: f64 = 0.0005;

/// Authorization outcome reported by a location source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessStatus {
    Granted,
    Denied,
}

/// What the screen controller needs from a location provider:
/// authorization, continuous updates that can be stopped, and the last
/// known fix.
pub trait LocationSource {
    fn request_authorization(&mut self) -> AccessStatus;

    /// Begins delivering fixes; they accumulate until drained with `poll`.
    fn start_updates(&mut self);

    /// Stops continuous updates. Fixes already delivered stay pollable.
    fn stop_updates(&mut self);

    /// Most recent fix seen by `poll`, if any.
    fn current_location(&self) -> Option<Coordinate>;

    /// Drains fixes delivered since the last poll, oldest first.
    fn poll(&mut self) -> Vec<Coordinate>;
}

/// Stand-in for the device GPS: a worker thread wanders around a starting
/// coordinate and delivers one fix per tick through a channel.
pub struct GpsSimulator {
    start: Coordinate,
    interval: Duration,
    running: Arc<AtomicBool>,
    sender: Sender<Coordinate>,
    receiver: Receiver<Coordinate>,
    last: Option<Coordinate>,
}

impl GpsSimulator {
    pub fn new(start: Coordinate) -> Self {
        Self::with_interval(start, FIX_INTERVAL)
    }

    /// Simulator with a custom tick, so tests do not wait a second per fix.
    pub fn with_interval(start: Coordinate, interval: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            start,
            interval,
            running: Arc::new(AtomicBool::new(false)),
            sender,
            receiver,
            last: None,
        }
    }
}

impl LocationSource for GpsSimulator {
    fn request_authorization(&mut self) -> AccessStatus {
        // The simulated device always grants access.
        AccessStatus::Granted
    }

    fn start_updates(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let running = self.running.clone();
        let sender = self.sender.clone();
        let interval = self.interval;
        let mut current = self.start;

        let spawned = thread::Builder::new()
            .name("gps-simulator".to_string())
            .spawn(move || {
                let mut rng = rand::thread_rng();

                while running.load(Ordering::SeqCst) {
                    current.lat += rng.gen_range(-DRIFT..DRIFT);
                    current.lon += rng.gen_range(-DRIFT..DRIFT);

                    if sender.send(current).is_err() {
                        break;
                    }

                    thread::sleep(interval);
                }
            });

        if spawned.is_err() {
            eprintln!("Failed to start the GPS simulator thread");
            self.running.store(false, Ordering::SeqCst);
        }
    }

    fn stop_updates(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn current_location(&self) -> Option<Coordinate> {
        self.last
    }

    fn poll(&mut self) -> Vec<Coordinate> {
        let fixes: Vec<Coordinate> = self.receiver.try_iter().collect();

        if let Some(fix) = fixes.last() {
            self.last = Some(*fix);
        }

        fixes
    }
}

impl Drop for GpsSimulator {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

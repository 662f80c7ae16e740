//! Application events and the owner-thread event queue
//!
//! Every mutation of selection and appearance happens on the thread that owns
//! the [`SceneContext`](crate::runtime::SceneContext). Other threads (asset
//! loaders, a windowing thread) hand work over through an [`EventSender`];
//! the owner drains the [`EventQueue`] between frames.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::scene::SceneObject;

/// Objects arriving after startup, e.g. a model finished loading
#[derive(Debug, Clone, PartialEq)]
pub struct Spawn {
    /// Root object added at the scene root
    pub object: SceneObject,
    /// Children attached under the root, in order
    pub children: Vec<SceneObject>,
    /// Register the root and every child that has pick bounds
    pub pickable: bool,
}

impl Spawn {
    /// Spawn a single object
    pub fn single(object: SceneObject, pickable: bool) -> Self {
        Self {
            object,
            children: Vec::new(),
            pickable,
        }
    }
}

/// Events consumed by the scene runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Pointer click in window pixels (origin top-left)
    Click {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },

    /// Output surface was resized
    Resized {
        /// New width
        width: u32,
        /// New height
        height: u32,
    },

    /// New objects to add to the live scene
    Spawn(Spawn),

    /// Window close requested
    CloseRequested,
}

/// Cloneable handle for posting events from any thread
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<AppEvent>,
}

impl EventSender {
    /// Post an event; returns `false` if the queue no longer exists
    pub fn send(&self, event: AppEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

/// Multi-producer queue drained by the owner thread
#[derive(Debug)]
pub struct EventQueue {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Handle for other threads
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Post an event from the owner thread
    pub fn push(&self, event: AppEvent) {
        // The queue holds its own receiver, so this cannot disconnect
        let _ = self.sender.send(event);
    }

    /// Take every pending event in arrival order without blocking
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether no events are pending
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

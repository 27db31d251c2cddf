//! Slideshow cursor and auto-advance timer discipline.
//!
//! The machine owns no timer itself. Each event yields a [`Step`] saying
//! which slide to show and what to do with the auto-advance timer, so the
//! browser side only has to apply it.

use serde::{Deserialize, Serialize};

/// Position within a non-empty, fixed-length set of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideCursor {
    current: usize,
    len: usize,
}

impl SlideCursor {
    /// Returns `None` when there are no slides to cycle through.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    /// Out-of-range targets leave the cursor untouched.
    pub fn goto(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = index;
        Some(index)
    }

    /// Active flags for `count` elements (slides or dots) given the cursor.
    pub fn active_flags(&self, count: usize) -> Vec<bool> {
        (0..count).map(|i| i == self.current).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideshowEvent {
    Next,
    Prev,
    GoTo(usize),
    /// Auto-advance timer fired.
    Tick,
    PointerEnter,
    PointerLeave,
}

impl SlideshowEvent {
    /// Keyboard shortcut for a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(SlideshowEvent::Prev),
            "ArrowRight" => Some(SlideshowEvent::Next),
            _ => None,
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, SlideshowEvent::Next | SlideshowEvent::Prev | SlideshowEvent::GoTo(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerCommand {
    /// Leave the timer as it is.
    Keep,
    /// Cancel any running timer and arm a fresh one.
    Restart,
    /// Cancel any running timer.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Slide to mark active, if the event moved the cursor.
    pub show: Option<usize>,
    pub timer: TimerCommand,
}

impl Step {
    fn idle() -> Self {
        Self { show: None, timer: TimerCommand::Keep }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slideshow {
    cursor: SlideCursor,
    armed: bool,
}

impl Slideshow {
    pub fn new(len: usize) -> Option<Self> {
        SlideCursor::new(len).map(|cursor| Self {
            cursor,
            armed: false,
        })
    }

    pub fn cursor(&self) -> &SlideCursor {
        &self.cursor
    }

    pub fn current(&self) -> usize {
        self.cursor.current()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Shows the first slide and arms auto-advance.
    pub fn start(&mut self) -> Step {
        self.armed = true;
        Step {
            show: Some(self.cursor.current()),
            timer: TimerCommand::Restart,
        }
    }

    pub fn handle(&mut self, event: SlideshowEvent) -> Step {
        match event {
            SlideshowEvent::Tick => {
                if !self.armed {
                    return Step::idle();
                }
                Step {
                    show: Some(self.cursor.next()),
                    timer: TimerCommand::Keep,
                }
            }
            SlideshowEvent::Next => {
                let shown = self.cursor.next();
                self.manual(Some(shown))
            }
            SlideshowEvent::Prev => {
                let shown = self.cursor.prev();
                self.manual(Some(shown))
            }
            SlideshowEvent::GoTo(index) => {
                let shown = self.cursor.goto(index);
                if shown.is_none() {
                    return Step::idle();
                }
                self.manual(shown)
            }
            SlideshowEvent::PointerEnter => {
                self.armed = false;
                Step { show: None, timer: TimerCommand::Stop }
            }
            SlideshowEvent::PointerLeave => {
                self.armed = true;
                Step { show: None, timer: TimerCommand::Restart }
            }
        }
    }

    // Manual moves always re-arm, even under the pointer.
    fn manual(&mut self, show: Option<usize>) -> Step {
        self.armed = true;
        Step { show, timer: TimerCommand::Restart }
    }
}

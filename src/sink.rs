//! Where rendered lines go.
//!
//! Displays and ducks never call `println!` directly; they write through a
//! [`LineSink`] handed to them at construction. The binaries use [`StdoutSink`],
//! tests use [`RecordingSink`] and assert on the captured transcript.

use std::cell::RefCell;
use std::rc::Rc;

pub trait LineSink {
    fn write_line(&self, line: &str);
}

/// Shared handle to a sink. Several displays and ducks can render into the same one.
pub type SharedSink = Rc<dyn LineSink>;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// In-memory sink that keeps every line in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl LineSink for RecordingSink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

pub fn stdout() -> SharedSink {
    Rc::new(StdoutSink)
}

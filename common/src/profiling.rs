//! Event log for the diagnostics overlay.
//!
//! Keeps the most recent timeline events as short text lines. The
//! time-dependent `ProfilingMetrics` struct lives in the simulator crate since
//! it requires platform-specific time types.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! for event in scene.advance(16) {
//!     log.record(&event);
//! }
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::Write;

use heapless::{Deque, String};

use crate::events::TimelineEvent;

/// Maximum number of lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per line.
pub const LOG_LINE_LENGTH: usize = 48;

/// Line as stored in the log.
pub type LogLine = String<LOG_LINE_LENGTH>;

/// Ring buffer of recent events, oldest first.
///
/// When full, pushing drops the oldest line.
pub struct EventLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a line, truncating it to fit.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LogLine::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Format and push a timeline event.
    pub fn record(
        &mut self,
        event: &TimelineEvent,
    ) {
        let mut line = LogLine::new();
        // Overflow only truncates the line.
        write!(line, "{event}").ok();
        self.push_line(line);
    }

    fn push_line(
        &mut self,
        line: LogLine,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

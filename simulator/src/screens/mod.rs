//! Screen modules for the greeting window and headless snapshots.

mod greeting;
mod overlay;
mod snapshot;

pub use greeting::{GreetingOptions, run_greeting_screen};
pub use snapshot::save_snapshot;

use greeting_common::TimelineEvent;
use tracing::{debug, warn};

/// Log a timeline event at the level matching its importance.
fn report_event(event: &TimelineEvent) {
    match event {
        TimelineEvent::StaleLaunchSkipped { .. } => warn!(%event, "balloon launch outlived its wave"),
        _ => debug!(%event, "timeline"),
    }
}

//! Status reporting from door controllers.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Receives every status update a controller emits.
///
/// Called with a status label and the opened percent whenever an entry
/// action runs or motion advances. Implemented for plain closures.
pub trait StatusSink: Send {
    fn status_updated(&mut self, status: &str, percent: u8);
}

impl<F> StatusSink for F
where
    F: FnMut(&str, u8) + Send,
{
    fn status_updated(&mut self, status: &str, percent: u8) {
        self(status, percent)
    }
}

/// One status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: String,
    pub percent: u8,
}

impl StatusReport {
    pub fn new(status: impl Into<String>, percent: u8) -> Self {
        Self {
            status: status.into(),
            percent,
        }
    }
}

/// Shared, cloneable recording of status updates.
///
/// Hand one clone to a controller and keep another to inspect what it
/// reported.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    reports: Arc<Mutex<Vec<StatusReport>>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every report so far.
    pub fn reports(&self) -> Vec<StatusReport> {
        self.reports.lock().clone()
    }

    pub fn last(&self) -> Option<StatusReport> {
        self.reports.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Take every report so far, leaving the log empty.
    pub fn drain(&self) -> Vec<StatusReport> {
        std::mem::take(&mut *self.reports.lock())
    }

    /// Labels of every report so far, in order.
    pub fn statuses(&self) -> Vec<String> {
        self.reports
            .lock()
            .iter()
            .map(|report| report.status.clone())
            .collect()
    }
}

impl StatusSink for StatusLog {
    fn status_updated(&mut self, status: &str, percent: u8) {
        self.reports.lock().push(StatusReport::new(status, percent));
    }
}

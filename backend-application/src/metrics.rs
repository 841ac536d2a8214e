use std::sync::atomic::{AtomicU64, Ordering};

use backend_domain::EventKind;

#[derive(Debug, Default)]
pub struct Metrics {
    service: &'static str,
    succeeded: AtomicU64,
    rejected: AtomicU64,
    not_found: AtomicU64,
    storage_errors: AtomicU64,
    tracked_events: [AtomicU64; 5],
}

impl Metrics {
    pub fn new(service: &'static str) -> Self {
        Self {
            service,
            ..Self::default()
        }
    }

    /// Counts a request that completed without error.
    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_error(&self) {
        self.storage_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tracked(&self, kind: EventKind) {
        if let Some(index) = EventKind::ALL.iter().position(|item| *item == kind) {
            self.tracked_events[index].fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn tracked(&self, kind: EventKind) -> u64 {
        EventKind::ALL
            .iter()
            .position(|item| *item == kind)
            .map(|index| self.tracked_events[index].load(Ordering::Relaxed))
            .unwrap_or_default()
    }

    pub fn storage_errors(&self) -> u64 {
        self.storage_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let rejected = self.rejected.load(Ordering::Relaxed);
        let not_found = self.not_found.load(Ordering::Relaxed);
        let storage_errors = self.storage_errors.load(Ordering::Relaxed);
        let service = self.service;

        format!(
            "# TYPE gamestore_requests_succeeded_total counter\n\
gamestore_requests_succeeded_total{{service=\"{service}\"}} {succeeded}\n\
# TYPE gamestore_rejected_total counter\n\
gamestore_rejected_total{{service=\"{service}\"}} {rejected}\n\
# TYPE gamestore_not_found_total counter\n\
gamestore_not_found_total{{service=\"{service}\"}} {not_found}\n\
# TYPE gamestore_storage_errors_total counter\n\
gamestore_storage_errors_total{{service=\"{service}\"}} {storage_errors}\n"
        )
    }

    pub fn render_tracked_events(&self) -> String {
        let mut out = String::from("# TYPE gamestore_tracked_events_total counter\n");
        for kind in EventKind::ALL {
            out.push_str(&format!(
                "gamestore_tracked_events_total{{event_type=\"{}\"}} {}\n",
                kind,
                self.tracked(kind)
            ));
        }
        out
    }
}

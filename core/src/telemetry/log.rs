use log::{debug, info};

/// Component-tagged logging front shared by the core components.
pub struct LogManager {
    component: &'static str,
}

impl LogManager {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.component, message);
    }

    pub fn record_debug(&self, message: &str) {
        debug!("[{}] {}", self.component, message);
    }
}

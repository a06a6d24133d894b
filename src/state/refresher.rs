use crate::state::messages::UiEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Periodic refresh of the active tab. Goes through the UI loop because only
/// the app state knows which league and tab are on screen.
pub struct PeriodicRefresher {
    ui_events: mpsc::Sender<UiEvent>,
    period: Duration,
}

impl PeriodicRefresher {
    pub fn new(ui_events: mpsc::Sender<UiEvent>, period: Duration) -> Self {
        Self { ui_events, period }
    }

    pub async fn run(self) {
        let mut refresh_interval = interval(self.period);
        // Skip the immediate first tick so startup loading isn't double-triggered.
        refresh_interval.tick().await;

        loop {
            refresh_interval.tick().await;
            if self.ui_events.send(UiEvent::RefreshTick).await.is_err() {
                break;
            }
        }
    }
}

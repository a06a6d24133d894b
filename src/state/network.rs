use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error, warn};
use sports_api::client::{ApiResult, SportsApi};
use sports_api::endpoints::Endpoints;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';
const FRAME_PERIOD: Duration = Duration::from_millis(50);

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    client: SportsApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
}

impl NetworkWorker {
    pub fn new(
        endpoints: Endpoints,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: SportsApi::with_endpoints(endpoints),
            requests,
            responses,
        }
    }

    /// Serves requests one at a time until either channel closes.
    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let spinner = Spinner::start(self.responses.clone());
            let result = self.handle_request(request).await;
            spinner.finish(result.is_ok()).await;

            let response = match result {
                Ok(response) => {
                    debug!("{request:?} complete");
                    response
                }
                Err(err) => {
                    warn!("{request:?} failed: {err}");
                    NetworkResponse::Error { message: err.to_string() }
                }
            };

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_request(&self, request: NetworkRequest) -> ApiResult<NetworkResponse> {
        match request {
            NetworkRequest::LoadScores { league } => {
                let games = self.client.fetch_scores(league).await?;
                Ok(NetworkResponse::ScoresLoaded { league, games })
            }
            NetworkRequest::LoadSchedule { league } => {
                let games = self.client.fetch_schedule(league).await?;
                Ok(NetworkResponse::ScheduleLoaded { league, games })
            }
            NetworkRequest::LoadStandings { league } => {
                let standings = self.client.fetch_standings(league).await?;
                Ok(NetworkResponse::StandingsLoaded { standings })
            }
        }
    }
}

/// Spinner frames sent to the UI while a request is in flight.
struct Spinner {
    responses: mpsc::Sender<NetworkResponse>,
    frames: JoinHandle<()>,
}

impl Spinner {
    fn start(responses: mpsc::Sender<NetworkResponse>) -> Self {
        let sender = responses.clone();
        let frames = tokio::spawn(async move {
            let mut interval = tokio::time::interval(FRAME_PERIOD);
            for spinner_char in SPINNER_CHARS.iter().copied().cycle() {
                interval.tick().await;
                let loading_state = LoadingState { is_loading: true, spinner_char };
                if sender.send(NetworkResponse::LoadingStateChanged { loading_state }).await.is_err() {
                    break;
                }
            }
        });

        Self { responses, frames }
    }

    /// Stop animating and leave a blank or an error marker behind.
    async fn finish(self, is_ok: bool) {
        // no frame may arrive after the final state
        self.frames.abort();
        let _ = self.frames.await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let loading_state = LoadingState { is_loading: false, spinner_char };
        let _ = self.responses.send(NetworkResponse::LoadingStateChanged { loading_state }).await;
    }
}

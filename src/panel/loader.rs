//! Background loader for the tool list
//!
//! Issues the request on a worker thread when created and hands the result
//! back over a channel. The UI polls it once per frame.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::{error, info};

use crate::client::{FetchError, ToolSource};
use crate::domain::DeveloperToolsResponse;

const WORKER_GONE: &str = "Fetch worker exited without a result";

/// Called from the worker thread once the result has been sent
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// State of the developer tools panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    /// Request in flight
    Loading,
    /// Response received
    Loaded(DeveloperToolsResponse),
    /// Request failed; the message is shown with a retry control
    Failed(String),
}

impl PanelState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }
}

/// Loads the tool list in the background
pub struct ToolsLoader {
    source: Arc<dyn ToolSource>,
    repaint: Option<RepaintHook>,
    rx: Receiver<Result<DeveloperToolsResponse, FetchError>>,
    state: PanelState,
}

impl ToolsLoader {
    /// Create a loader and immediately start fetching
    pub fn start(source: Arc<dyn ToolSource>, repaint: Option<RepaintHook>) -> Self {
        let rx = spawn_fetch(Arc::clone(&source), repaint.clone());
        Self {
            source,
            repaint,
            rx,
            state: PanelState::Loading,
        }
    }

    /// Poll for the fetch result (non-blocking)
    pub fn poll(&mut self) -> &PanelState {
        if self.state.is_loading() {
            match self.rx.try_recv() {
                Ok(result) => self.state = settle(result),
                Err(TryRecvError::Disconnected) => {
                    error!("[devtools] {}", WORKER_GONE);
                    self.state = PanelState::Failed(WORKER_GONE.to_string());
                }
                Err(TryRecvError::Empty) => {}
            }
        }
        &self.state
    }

    /// Block until the fetch completes. Used by the CLI.
    pub fn wait(mut self) -> PanelState {
        if self.state.is_loading() {
            self.state = match self.rx.recv() {
                Ok(result) => settle(result),
                Err(_) => {
                    error!("[devtools] {}", WORKER_GONE);
                    PanelState::Failed(WORKER_GONE.to_string())
                }
            };
        }
        self.state
    }

    /// Get the current state
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Start a fresh request, discarding any previous outcome
    pub fn retry(&mut self) {
        info!("[devtools] Retrying developer tools request");
        self.rx = spawn_fetch(Arc::clone(&self.source), self.repaint.clone());
        self.state = PanelState::Loading;
    }
}

fn settle(result: Result<DeveloperToolsResponse, FetchError>) -> PanelState {
    match result {
        Ok(response) => {
            info!("[devtools] Loaded {} developer tools", response.tools.len());
            PanelState::Loaded(response)
        }
        Err(e) => {
            error!("[devtools] {}", e);
            PanelState::Failed(e.to_string())
        }
    }
}

fn spawn_fetch(
    source: Arc<dyn ToolSource>,
    repaint: Option<RepaintHook>,
) -> Receiver<Result<DeveloperToolsResponse, FetchError>> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        // Declared before `tx` so the sender is dropped first, even on panic
        let _repaint = RepaintOnExit(repaint);
        let tx = tx;
        run_fetch(source.as_ref(), &tx);
    });
    rx
}

/// Wakes the UI when the worker finishes, whether it sent a result or not
struct RepaintOnExit(Option<RepaintHook>);

impl Drop for RepaintOnExit {
    fn drop(&mut self) {
        if let Some(repaint) = &self.0 {
            repaint();
        }
    }
}

fn run_fetch(source: &dyn ToolSource, tx: &Sender<Result<DeveloperToolsResponse, FetchError>>) {
    // The receiver is gone if the panel was closed mid-request
    let _ = tx.send(source.fetch_tools());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use crate::domain::DeveloperTool;

    struct CannedSource {
        results: Mutex<Vec<Result<DeveloperToolsResponse, FetchError>>>,
        calls: AtomicUsize,
    }

    impl CannedSource {
        fn new(results: Vec<Result<DeveloperToolsResponse, FetchError>>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(results),
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl ToolSource for CannedSource {
        fn fetch_tools(&self) -> Result<DeveloperToolsResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results.lock().unwrap().remove(0)
        }
    }

    fn one_tool() -> DeveloperToolsResponse {
        DeveloperToolsResponse {
            tools: vec![DeveloperTool {
                id: "github".to_string(),
                name: "GitHub".to_string(),
                icon: "github".to_string(),
                description: "Repository access".to_string(),
                env_keys: vec!["GITHUB_TOKEN".to_string()],
                connected: false,
                masked_key: None,
                sample_env: "GITHUB_TOKEN=ghp_...".to_string(),
            }],
        }
    }

    fn poll_until_settled(loader: &mut ToolsLoader) -> PanelState {
        let deadline = Instant::now() + Duration::from_secs(5);
        while loader.poll().is_loading() {
            assert!(Instant::now() < deadline, "loader never settled");
            thread::sleep(Duration::from_millis(5));
        }
        loader.state().clone()
    }

    #[test]
    fn test_starts_in_loading_state() {
        let (_tx, rx) = channel();
        let loader = ToolsLoader {
            source: CannedSource::new(vec![]),
            repaint: None,
            rx,
            state: PanelState::Loading,
        };
        assert!(loader.state().is_loading());
    }

    #[test]
    fn test_loading_to_loaded() {
        let source = CannedSource::new(vec![Ok(one_tool())]);
        let mut loader = ToolsLoader::start(source.clone(), None);

        assert_eq!(poll_until_settled(&mut loader), PanelState::Loaded(one_tool()));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_loading_to_failed() {
        let source = CannedSource::new(vec![Err(FetchError::Status(503))]);
        let mut loader = ToolsLoader::start(source, None);

        assert_eq!(
            poll_until_settled(&mut loader),
            PanelState::Failed("Failed to fetch tools (HTTP 503)".to_string())
        );
    }

    #[test]
    fn test_retry_fetches_again() {
        let source = CannedSource::new(vec![
            Err(FetchError::Transport("connection refused".to_string())),
            Ok(one_tool()),
        ]);
        let mut loader = ToolsLoader::start(source.clone(), None);
        assert!(matches!(poll_until_settled(&mut loader), PanelState::Failed(_)));

        loader.retry();
        assert!(loader.state().is_loading());
        assert_eq!(poll_until_settled(&mut loader), PanelState::Loaded(one_tool()));
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_repaint_hook_runs_after_fetch() {
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&repaints);
        let hook: RepaintHook = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let loader = ToolsLoader::start(CannedSource::new(vec![Ok(one_tool())]), Some(hook));
        assert_eq!(loader.wait(), PanelState::Loaded(one_tool()));

        let deadline = Instant::now() + Duration::from_secs(5);
        while repaints.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < deadline, "repaint hook never ran");
            thread::sleep(Duration::from_millis(5));
        }
    }

    struct PanickingSource;

    impl ToolSource for PanickingSource {
        fn fetch_tools(&self) -> Result<DeveloperToolsResponse, FetchError> {
            panic!("source blew up");
        }
    }

    #[test]
    fn test_worker_exit_without_result_fails_poll() {
        let mut loader = ToolsLoader::start(Arc::new(PanickingSource), None);

        assert_eq!(
            poll_until_settled(&mut loader),
            PanelState::Failed(WORKER_GONE.to_string())
        );
    }

    #[test]
    fn test_poll_keeps_loaded_state_after_worker_exits() {
        let mut loader = ToolsLoader::start(CannedSource::new(vec![Ok(one_tool())]), None);
        assert_eq!(poll_until_settled(&mut loader), PanelState::Loaded(one_tool()));

        // The worker has dropped its sender by now
        thread::sleep(Duration::from_millis(20));
        assert_eq!(loader.poll(), &PanelState::Loaded(one_tool()));
    }
}

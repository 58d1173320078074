use std::io::{IsTerminal, Write};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 150;

/// Stderr spinner shown while the agent is working. Silent when stderr is not a terminal.
pub struct AnimatedLogger {
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn start(message: String) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self {
                stop_sender: None,
                task_handle: None,
            };
        }

        let (stop_tx, mut stop_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        Self {
            stop_sender: Some(stop_tx),
            task_handle: Some(handle),
        }
    }

    pub async fn stop(self, final_message: &str) {
        self.finish("✅ ", final_message).await;
    }

    pub async fn error(self, error_message: &str) {
        self.finish("❌", error_message).await;
    }

    async fn finish(mut self, marker: &str, message: &str) {
        let animated = self.task_handle.is_some();
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        if animated {
            eprint!("\r\x1b[K");
        }
        eprintln!("{} {}", marker, message);
        let _ = std::io::stderr().flush();
    }
}

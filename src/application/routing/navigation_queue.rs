use crate::ports::outbound::Navigator;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Navigator backed by an unbounded channel
///
/// Views push URLs through the sender half; the app shell drains the
/// receiver half when it is ready to act on them.
#[derive(Clone)]
pub struct ChannelNavigator {
    sender: UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Creates a navigator and the receiver its requests arrive on
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_by_url(&self, url: &str) {
        tracing::debug!(url, "Navigation requested");
        if self.sender.send(url.to_string()).is_err() {
            tracing::warn!(url, "Navigation dropped: no router is listening");
        }
    }
}

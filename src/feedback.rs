//! Feedback collaborator seam.
//!
//! The session signals correct/incorrect the moment a submission is
//! scored; how that is presented (flash, sound, confetti) belongs to the
//! host. Notifications are fire-and-forget.

use tokio::sync::mpsc;

/// One cue emitted per scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub points_awarded: u32,
    pub was_correct: bool,
}

/// Receives feedback cues from a session.
pub trait FeedbackSink: Send {
    fn notify(&mut self, event: FeedbackEvent);
}

/// Discards every cue.
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn notify(&mut self, _event: FeedbackEvent) {}
}

/// Cues delivered over a channel; a closed receiver is simply ignored.
impl FeedbackSink for mpsc::UnboundedSender<FeedbackEvent> {
    fn notify(&mut self, event: FeedbackEvent) {
        let _ = self.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn channel_sink_delivers_cues() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut sink = tx;
        sink.notify(FeedbackEvent {
            points_awarded: 1,
            was_correct: true,
        });

        let event = rx.recv().await.unwrap();
        assert!(event.was_correct);
        assert_eq!(event.points_awarded, 1);
    }

    #[test]
    fn channel_sink_tolerates_a_dropped_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut sink = tx;
        // Must not panic.
        sink.notify(FeedbackEvent {
            points_awarded: 0,
            was_correct: false,
        });
    }
}

use std::time::Duration;

/// How long the outgoing subtree animates before the swap commits.
pub const EXIT_DURATION: Duration = Duration::from_millis(200);
/// How long the incoming subtree animates after mounting.
pub const ENTER_DURATION: Duration = Duration::from_millis(350);

/// Handle for one requested transition. Only the newest token can commit,
/// so a rapid second request supersedes the first instead of queueing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(u64);

/// Sequences the swap between two rendered subtrees identified by key.
///
/// Exactly one key is "shown" at any time - the outgoing subtree finishes
/// its exit animation before the incoming one mounts, so both are never
/// rendered together. Purely a presentation-layer concern: the sequencer
/// never touches application state, which changes synchronously in the
/// event handler that triggered the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer<K> {
    shown: K,
    pending: Option<(Token, K)>,
    next_token: u64,
}

impl<K: PartialEq> Sequencer<K> {
    pub fn new(initial: K) -> Self {
        Self {
            shown: initial,
            pending: None,
            next_token: 0,
        }
    }

    /// The key whose subtree is currently rendered.
    pub fn shown(&self) -> &K {
        &self.shown
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a swap to `next`. Returns the token the caller should hand
    /// back via [`complete`](Self::complete) once the exit animation is
    /// done, or `None` when the request is a no-op (already showing `next`
    /// with nothing in flight). A request made while another transition is
    /// in flight replaces it - interrupt and restart, never a queue.
    pub fn request(&mut self, next: K) -> Option<Token> {
        if self.pending.is_none() && self.shown == next {
            return None;
        }
        let token = Token(self.next_token);
        self.next_token += 1;
        self.pending = Some((token, next));
        Some(token)
    }

    /// Commit the pending swap. Returns `true` if the shown key changed;
    /// tokens from superseded transitions are ignored.
    pub fn complete(&mut self, token: Token) -> bool {
        match &self.pending {
            Some((current, _)) if *current == token => {
                let (_, next) = self.pending.take().expect("pending was just matched");
                self.shown = next;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_then_complete() {
        let mut seq = Sequencer::new("grid");
        let token = seq.request("detail").expect("swap should be scheduled");
        // Old subtree still shown while it animates out
        assert_eq!(*seq.shown(), "grid");
        assert!(seq.in_flight());

        assert!(seq.complete(token));
        assert_eq!(*seq.shown(), "detail");
        assert!(!seq.in_flight());
    }

    #[test]
    fn test_same_key_is_noop() {
        let mut seq = Sequencer::new("grid");
        assert_eq!(seq.request("grid"), None);
        assert!(!seq.in_flight());
    }

    #[test]
    fn test_rapid_request_supersedes() {
        let mut seq = Sequencer::new("a");
        let first = seq.request("b").unwrap();
        let second = seq.request("c").unwrap();

        // The superseded exit timer fires but must not commit
        assert!(!seq.complete(first));
        assert_eq!(*seq.shown(), "a");

        assert!(seq.complete(second));
        assert_eq!(*seq.shown(), "c");
    }

    #[test]
    fn test_return_to_shown_while_in_flight() {
        let mut seq = Sequencer::new("a");
        let first = seq.request("b").unwrap();
        // User navigates back before the first swap lands
        let second = seq.request("a").expect("in-flight return still swaps");

        assert!(!seq.complete(first));
        assert!(seq.complete(second));
        assert_eq!(*seq.shown(), "a");
        assert!(!seq.in_flight());
    }

    #[test]
    fn test_stale_token_after_commit_is_ignored() {
        let mut seq = Sequencer::new("a");
        let token = seq.request("b").unwrap();
        assert!(seq.complete(token));
        assert!(!seq.complete(token));
        assert_eq!(*seq.shown(), "b");
    }
}

use leptos::prelude::*;

use crate::transition::{Sequencer, EXIT_DURATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Entering,
    Exiting,
}

impl Phase {
    fn class(self) -> &'static str {
        match self {
            Phase::Entering => "swap-enter",
            Phase::Exiting => "swap-exit",
        }
    }
}

/// Cross-fades between the subtrees produced by `render` as `target`
/// changes. The outgoing subtree plays its exit animation to completion
/// before the incoming one mounts, so only one subtree is ever in the
/// layout. A second navigation mid-swap supersedes the first via the
/// sequencer token - the stale timer callback is ignored.
#[component]
pub fn AnimatedSwap<K, F>(#[prop(into)] target: Signal<K>, render: F) -> impl IntoView
where
    K: PartialEq + Clone + Send + Sync + 'static,
    F: Fn(K) -> AnyView + Send + Sync + 'static,
{
    let seq = StoredValue::new(Sequencer::new(target.get_untracked()));
    let (shown, set_shown) = signal(target.get_untracked());
    let (phase, set_phase) = signal(Phase::Entering);

    Effect::new(move |_| {
        let next = target.get();
        let token = seq.try_update_value(|s| s.request(next)).flatten();
        let Some(token) = token else {
            return;
        };
        set_phase(Phase::Exiting);
        set_timeout(
            move || {
                let committed = seq.try_update_value(|s| s.complete(token)).unwrap_or(false);
                if !committed {
                    // Superseded by a newer navigation; its timer will land
                    return;
                }
                if let Some(key) = seq.try_with_value(|s| s.shown().clone()) {
                    set_shown(key);
                    set_phase(Phase::Entering);
                }
            },
            EXIT_DURATION,
        );
    });

    view! { <div class=move || phase.get().class()>{move || render(shown.get())}</div> }
}

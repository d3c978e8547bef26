//! One-time tips dialog shown on first visit.

use leptos::prelude::*;

use crate::state::dialog::{ServerTipsDismissal, TipsDialog};

#[derive(Clone, Copy)]
struct Tip {
    title: &'static str,
    body: &'static str,
}

const TIPS: &[Tip] = &[
    Tip { title: "Dark mode", body: "Switch between light and dark themes from Settings." },
    Tip { title: "Synced everywhere", body: "Your theme follows you across tabs and devices." },
    Tip { title: "Works offline", body: "If the server is unreachable, your last choice is used." },
];

/// Tips dialog container (`#tipsModal`). Hidden unless the controller is open.
#[component]
pub fn TipsModal(tips: TipsDialog<ServerTipsDismissal>) -> impl IntoView {
    view! {
        <div
            id="tipsModal"
            class=move || if tips.is_open() { "modal" } else { "modal hidden" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="tipsModalTitle"
        >
            <div class="modal__panel" tabindex="0">
                <div class="modal__header">
                    <h2 id="tipsModalTitle" class="text-2xl">"Welcome"</h2>
                    <button
                        type="button"
                        class="modal__close"
                        aria-label="Close tips"
                        title="Close tips"
                        on:click=move |_| tips.close()
                    >
                        <span aria-hidden="true">"✕"</span>
                        <span class="sr-only">"Close tips"</span>
                    </button>
                </div>
                <ul class="modal__tips">
                    {TIPS
                        .iter()
                        .map(|tip| {
                            view! {
                                <li class="modal__tip">
                                    <strong>{tip.title}</strong>
                                    " "
                                    <span>{tip.body}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button type="button" class="btn" on:click=move |_| tips.close()>
                    "Got it"
                </button>
            </div>
        </div>
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::{is_past, scroll_to_form, use_scroll_y, STICKY_CTA_THRESHOLD};

/// Bottom bar on phones, shown once the hero has scrolled away.
#[function_component(StickyCta)]
pub fn sticky_cta() -> Html {
    let scroll_y = use_scroll_y();

    if !is_past(scroll_y, STICKY_CTA_THRESHOLD) {
        return html! {};
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_form();
    });

    html! {
        <div class="sticky-cta">
            <div class="sticky-cta-status">
                <span class="sticky-cta-label">{"Fast Estimate"}</span>
                <span class="sticky-cta-slots">
                    <span class="pulse-dot"></span>
                    {"Slots Available"}
                </span>
            </div>
            <button class="sticky-cta-button" {onclick}>
                {"Get Free Quote →"}
            </button>
            <style>
                {r#"
                .sticky-cta {
                    display: none;
                }
                @media (max-width: 768px) {
                    .sticky-cta {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.75rem;
                        padding: 0.75rem;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(20px);
                        border-top: 1px solid rgba(255, 255, 255, 0.5);
                        box-shadow: 0 -10px 40px -10px rgba(0, 0, 0, 0.1);
                        animation: slideUp 0.3s ease-out;
                    }
                }
                @keyframes slideUp {
                    from { transform: translateY(100px); }
                    to { transform: translateY(0); }
                }
                .sticky-cta-status { display: flex; flex-direction: column; padding-left: 0.5rem; }
                .sticky-cta-label {
                    font-size: 0.625rem;
                    color: #64748b;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .sticky-cta-slots { display: flex; align-items: center; gap: 0.4rem; font-size: 0.75rem; font-weight: 700; }
                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                    animation: pulse 1.5s infinite;
                }
                @keyframes pulse { 50% { opacity: 0.4; } }
                .sticky-cta-button {
                    flex: 1;
                    background: linear-gradient(90deg, #0ea5e9, #2563eb);
                    color: #fff;
                    font-weight: 700;
                    border: none;
                    border-radius: 1rem;
                    padding: 0.9rem 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::INSTAGRAM_URL;

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-overlay">
            <div class="success-modal">
                <button class="modal-close" onclick={close.clone()} aria-label="Close">{"✕"}</button>
                <div class="success-check">{"✓"}</div>
                <h3>{"Request Received!"}</h3>
                <p>
                    {"We've added you to our "}
                    <span class="priority-pill">{"Priority List"}</span>
                    {". One of our experts is calculating your estimate right now."}
                </p>
                <p class="while-you-wait">{"While you wait"}</p>
                <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="instagram-button">
                    {"See our Recent Work →"}
                </a>
                <button class="modal-dismiss" onclick={close}>
                    {"Close and return to site"}
                </button>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(15, 23, 42, 0.6);
                    backdrop-filter: blur(12px);
                    animation: fadeIn 0.2s ease-out;
                }
                @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                .success-modal {
                    position: relative;
                    background: #fff;
                    border-radius: 2.5rem;
                    max-width: 28rem;
                    width: 100%;
                    padding: 2.5rem 2rem 2rem;
                    text-align: center;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    border: none;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    background: #f1f5f9;
                    color: #64748b;
                    cursor: pointer;
                }
                .success-check {
                    margin: 0 auto 1.5rem;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #22c55e;
                    font-size: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .success-modal h3 { font-size: 1.9rem; font-weight: 800; color: #0f172a; margin-bottom: 0.5rem; }
                .success-modal p { color: #475569; line-height: 1.6; }
                .priority-pill { font-weight: 700; color: #16a34a; background: #f0fdf4; padding: 0.1rem 0.5rem; border-radius: 0.4rem; }
                .while-you-wait {
                    margin-top: 2rem;
                    font-size: 0.8rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: #94a3b8 !important;
                }
                .instagram-button {
                    display: block;
                    margin: 1rem 0;
                    padding: 1rem 1.5rem;
                    border-radius: 1rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                    background: linear-gradient(90deg, #a855f7, #ec4899, #f97316);
                }
                .modal-dismiss {
                    background: none;
                    border: none;
                    color: #94a3b8;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

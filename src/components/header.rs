use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{BUSINESS_PHONE, BUSINESS_PHONE_HREF};
use crate::scroll::{is_past, scroll_to_form, scroll_to_section, scroll_to_top, use_scroll_y, HEADER_THRESHOLD};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Services", "services"),
    ("Our Process", "process"),
    ("Reviews", "reviews"),
    ("FAQ", "faq"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let scroll_y = use_scroll_y();
    let is_scrolled = is_past(scroll_y, HEADER_THRESHOLD);

    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    let on_quote = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_form();
    });

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#" class="header-logo" onclick={on_logo}>
                    {"StarCleaning"}<span class="logo-dot">{"."}</span>
                </a>

                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|(label, id)| {
                        let id = *id;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(id);
                        });
                        html! {
                            <button class="nav-link" {onclick}>{*label}</button>
                        }
                    }) }
                </nav>

                <div class="header-actions">
                    <a href={BUSINESS_PHONE_HREF} class="header-phone">
                        <span class="header-phone-label">{"Call Us 24/7"}</span>
                        <span class="header-phone-number">{BUSINESS_PHONE}</span>
                    </a>
                    <a href={BUSINESS_PHONE_HREF} class="header-phone-mobile" aria-label="Call us">{"☎"}</a>
                    <button class="header-quote" onclick={on_quote}>
                        {"GET A QUOTE →"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    transition: background 0.3s ease, padding 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(15, 23, 42, 0.85);
                    backdrop-filter: blur(12px);
                    padding: 0.75rem 0;
                }
                .header-content {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .header-logo {
                    font-size: 1.6rem;
                    font-weight: 800;
                    color: #fff;
                    text-decoration: none;
                }
                .logo-dot { color: #0ea5e9; }
                .header-nav { display: flex; gap: 2rem; }
                .nav-link {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.9);
                    font-weight: 700;
                    cursor: pointer;
                }
                .nav-link:hover { color: #fff; }
                .header-actions { display: flex; align-items: center; gap: 2rem; }
                .header-phone {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    color: #fff;
                    text-decoration: none;
                }
                .header-phone-label {
                    font-size: 0.65rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: #bfdbfe;
                }
                .header-phone-number { font-weight: 800; font-size: 1.1rem; }
                .header-phone-mobile { display: none; }
                .header-quote {
                    background: linear-gradient(90deg, #0ea5e9, #2563eb);
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.8rem 1.8rem;
                    font-weight: 800;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .header-nav { display: none; }
                }
                @media (max-width: 768px) {
                    .header-phone, .header-quote { display: none; }
                    .header-phone-mobile {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        text-decoration: none;
                        font-size: 1.4rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::BUSINESS_EMAIL;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    // Land at the top, not wherever the home page was scrolled to
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-page">
            <h1>{"Privacy Policy"}</h1>
            <p>{"When you request a quote we collect your name, email address, phone number, zip code and the details you give us about your home. We use them only to prepare your estimate and to contact you about it."}</p>

            <h2>{"Where your details go"}</h2>
            <p>{"Quote requests are sent straight to our scheduling system. We look up the city for your zip code with a public postal-code service; only the zip code is shared with it. Nothing you type is stored in your browser."}</p>

            <h2>{"Advertising"}</h2>
            <p>{"If our advertising pixel is loaded, we record that a quote was requested along with the estimated price. Your contact details are not included."}</p>

            <h2>{"Contact"}</h2>
            <p>
                {"Questions or deletion requests: "}
                <a href={format!("mailto:{}", BUSINESS_EMAIL)}>{BUSINESS_EMAIL}</a>
            </p>

            <Link<Route> to={Route::Home} classes="back-home">{"← Back to home"}</Link<Route>>
            <style>
                {r#"
                .legal-page {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                    color: #334155;
                    line-height: 1.7;
                }
                .legal-page h1 { font-size: 2.5rem; font-weight: 800; color: #0f172a; margin-bottom: 1.5rem; }
                .legal-page h2 { font-size: 1.4rem; font-weight: 700; color: #0f172a; margin: 2rem 0 0.75rem; }
                .legal-page a { color: #0ea5e9; }
                .back-home { display: inline-block; margin-top: 3rem; font-weight: 700; text-decoration: none; }
                "#}
            </style>
        </div>
    }
}

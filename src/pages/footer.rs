use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{BUSINESS_EMAIL, BUSINESS_PHONE, BUSINESS_PHONE_HREF, INSTAGRAM_URL};
use crate::Route;

pub const SERVICE_AREAS: &[&str] = &[
    "Charleston",
    "Summerville",
    "North Charleston",
    "Mt Pleasant",
    "West Ashley",
    "Goose Creek",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h4 class="footer-brand">{"StarCleaning"}<span class="logo-dot">{"."}</span></h4>
                    <p class="footer-blurb">
                        {"We define the new standard for cleanliness. Powered by technology, delivered by humans who care."}
                    </p>
                    <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="footer-social">{"Instagram"}</a>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><a href="#process">{"How it Works"}</a></li>
                        <li><a href="#services">{"Services"}</a></li>
                        <li><a href="#faq">{"FAQ"}</a></li>
                        <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Get in Touch"}</h4>
                    <ul>
                        <li><a href={BUSINESS_PHONE_HREF} class="footer-phone">{BUSINESS_PHONE}</a></li>
                        <li><a href={format!("mailto:{}", BUSINESS_EMAIL)}>{BUSINESS_EMAIL}</a></li>
                        <li>{"Charleston, SC"}</li>
                    </ul>
                </div>
                <div>
                    <h4>{"We Serve"}</h4>
                    <div class="area-tags">
                        { for SERVICE_AREAS.iter().map(|area| html! { <span class="area-tag">{*area}</span> }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} StarCleaning Services. All rights reserved.", year)}</p>
                <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
            </div>
            <style>
                {r#"
                .site-footer { background: #fff; border-top: 1px solid #f1f5f9; padding: 4rem 1.5rem 6rem; }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto 4rem;
                    display: grid;
                    gap: 2.5rem;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                }
                .site-footer h4 { font-weight: 700; color: #0f172a; margin-bottom: 1.25rem; }
                .footer-brand { font-size: 1.5rem; font-weight: 800 !important; }
                .footer-blurb { color: #64748b; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1.5rem; }
                .site-footer ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .site-footer a { color: #64748b; text-decoration: none; font-size: 0.875rem; font-weight: 500; }
                .site-footer a:hover { color: #0ea5e9; }
                .footer-phone { font-weight: 700 !important; }
                .area-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .area-tag {
                    padding: 0.35rem 0.75rem;
                    border: 1px solid #f1f5f9;
                    border-radius: 0.5rem;
                    background: #f8fafc;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #64748b;
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid #f1f5f9;
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                @media (min-width: 769px) {
                    .site-footer { padding-bottom: 3rem; }
                }
                "#}
            </style>
        </footer>
    }
}

use yew::prelude::*;

use crate::components::before_after::BeforeAfter;
use crate::components::faq::Faq;
use crate::components::lead_form::LeadForm;
use crate::pages::footer::Footer;
use crate::pages::sections::{
    InstagramSection, RiskFreeGuarantee, Services, Testimonials, TheStandard, TrustBadges,
    UsVsThem, WhatClientsSay, WhyChooseUs, SECTIONS_CSS,
};
use crate::scroll::{map_range, use_scroll_y, FORM_ANCHOR};

const HERO_VIDEO_MOBILE: &str = "https://i.imgur.com/Q7QVFW7.mp4";
const HERO_VIDEO_DESKTOP: &str = "https://websites.godaddy.com/categories/v4/videos/raw/video/wVb4Eem";
const HERO_POSTER: &str = "https://images.unsplash.com/photo-1527513231362-77879e6b9a05?ixlib=rb-4.0.3&auto=format&fit=crop&w=1080&q=50&fm=webp";

#[function_component(Hero)]
fn hero() -> Html {
    let scroll_y = use_scroll_y();

    // video drifts slower than the page and the overlay darkens on the way down
    let parallax = map_range(scroll_y, (0.0, 1000.0), (0.0, 400.0));
    let overlay = map_range(scroll_y, (0.0, 500.0), (0.0, 0.7));
    let hint = map_range(scroll_y, (0.0, 200.0), (1.0, 0.0));

    html! {
        <section class="hero">
            <div class="hero-media" style={format!("transform: translateY({}px);", parallax)}>
                <div class="hero-shade"></div>
                <video class="hero-video hero-video-mobile" autoplay=true loop=true muted=true playsinline=true preload="metadata">
                    <source src={HERO_VIDEO_MOBILE} type="video/mp4" />
                </video>
                <video class="hero-video hero-video-desktop" autoplay=true loop=true muted=true playsinline=true preload="metadata" poster={HERO_POSTER}>
                    <source src={HERO_VIDEO_DESKTOP} type="video/mp4" />
                </video>
            </div>
            <div class="hero-darken" style={format!("opacity: {};", overlay)}></div>

            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-trust">
                        <span class="stars">{"★★★★★"}</span>
                        <span>{"Trusted by "}<strong>{"500+ Neighbors"}</strong></span>
                    </div>
                    <h1>{"Reclaim Your "}<br/><span class="hero-accent">{"Weekends."}</span></h1>
                    <p class="hero-subtitle">
                        {"Don't spend your free time cleaning. We bring 5-star hotel standards to your home."}
                    </p>
                    <div class="hero-points">
                        <span>{"✓ 100% Satisfaction"}</span>
                        <span>{"🛡 Bonded & Insured"}</span>
                    </div>
                </div>
                <div class="hero-form" id={FORM_ANCHOR}>
                    <LeadForm />
                </div>
            </div>

            <div class="scroll-hint" style={format!("opacity: {};", hint)}>
                <span>{"Scroll"}</span>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <TrustBadges />
            <WhatClientsSay />
            <TheStandard />
            <UsVsThem />
            <WhyChooseUs />
            <BeforeAfter />
            <Services />
            <RiskFreeGuarantee />
            <Testimonials />
            <InstagramSection />
            <Faq />
            <Footer />
            <style>{ SECTIONS_CSS }</style>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 8rem 1rem 5rem;
                    background: #0f172a;
                }
                .hero-media { position: absolute; inset: 0; z-index: 0; }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: linear-gradient(to top, #0f172a, rgba(15, 23, 42, 0.4), transparent),
                                rgba(15, 23, 42, 0.6);
                }
                .hero-video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .hero-video-desktop { display: none; }
                @media (min-width: 1024px) {
                    .hero-video-mobile { display: none; }
                    .hero-video-desktop { display: block; }
                }
                .hero-darken { position: absolute; inset: 0; background: #000; z-index: 2; pointer-events: none; }
                .hero-grid {
                    position: relative;
                    z-index: 3;
                    max-width: 1400px;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .hero-copy { color: #fff; }
                .hero-trust {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.4rem 1.25rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.8rem;
                    margin-bottom: 1.5rem;
                }
                .hero-copy h1 { font-size: 4rem; line-height: 1.1; font-weight: 800; margin-bottom: 1.5rem; }
                .hero-accent {
                    background: linear-gradient(90deg, #7dd3fc, #fff, #e0f2fe);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle { font-size: 1.25rem; color: #dbeafe; max-width: 36rem; margin-bottom: 2rem; }
                .hero-points { display: flex; gap: 1rem; font-weight: 700; }
                .hero-points span {
                    padding: 0.75rem 1.25rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .hero-form { display: flex; justify-content: flex-end; }
                .scroll-hint {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 3;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.65rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    pointer-events: none;
                }
                @media (max-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr; gap: 1.5rem; text-align: center; }
                    .hero-copy h1 { font-size: 2.25rem; }
                    .hero-subtitle, .hero-points, .hero-trust, .scroll-hint { display: none; }
                    .hero-form { justify-content: center; }
                }
                "#}
            </style>
        </div>
    }
}

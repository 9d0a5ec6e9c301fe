use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::INSTAGRAM_URL;

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

struct Review {
    initials: &'static str,
    name: &'static str,
    area: &'static str,
    text: &'static str,
}

const BADGES: &[(&str, &str)] = &[
    ("🏆", "Best of Charleston '24"),
    ("⭐", "Google 5-Star Rated"),
    ("🛡️", "Licensed & Insured"),
    ("❤️", "100% Satisfaction"),
];

const REVIEWS: &[Review] = &[
    Review {
        initials: "AL",
        name: "Amanda L.",
        area: "Mt Pleasant",
        text: "They noticed things I'd stopped seeing. The baseboards look brand new.",
    },
    Review {
        initials: "DT",
        name: "David T.",
        area: "West Ashley",
        text: "Booked on Monday, cleaned on Wednesday. Same crew every visit since.",
    },
    Review {
        initials: "KP",
        name: "Karen P.",
        area: "Summerville",
        text: "Two dogs, three kids, and somehow the house smells like a hotel lobby.",
    },
];

const PROCESS: &[Feature] = &[
    Feature { icon: "1", title: "Get Your Quote", desc: "Three quick steps and you see your price instantly." },
    Feature { icon: "2", title: "We Confirm", desc: "A coordinator calls to lock in a time that suits you." },
    Feature { icon: "3", title: "We Clean", desc: "A vetted, uniformed team follows our 50-point checklist." },
    Feature { icon: "4", title: "You Relax", desc: "Not thrilled? We come back within 24 hours, free." },
];

const COMPARISON: &[(&str, bool, bool)] = &[
    ("Background-checked cleaners", true, false),
    ("Same team every visit", true, false),
    ("Eco-friendly supplies included", true, false),
    ("Instant online estimate", true, false),
    ("24-hour re-clean guarantee", true, false),
    ("Licensed & insured", true, true),
];

const WHY_US: &[Feature] = &[
    Feature { icon: "⏰", title: "Reliable & Punctual", desc: "App-managed scheduling means we are on time, every time." },
    Feature { icon: "❤️", title: "Pet & Family Safe", desc: "Non-toxic, eco-friendly products safe for your loved ones." },
    Feature { icon: "✅", title: "Vetted Professionals", desc: "Every cleaner is background checked and rigorously trained." },
    Feature { icon: "🤝", title: "Senior Discounts", desc: "Special rates for seniors and military families." },
];

const SERVICES: &[Feature] = &[
    Feature { icon: "🏠", title: "Residential Standard", desc: "Weekly/Bi-weekly maintenance." },
    Feature { icon: "✨", title: "Deep Cleaning", desc: "Top-to-bottom detailed scrub." },
    Feature { icon: "📦", title: "Move-In / Move-Out", desc: "Empty home turnaround." },
    Feature { icon: "🏢", title: "Commercial", desc: "Office & retail spaces." },
];

const COMMUNITY_COMMENTS: &[Review] = &[
    Review {
        initials: "MR",
        name: "Mike Ross",
        area: "1h",
        text: "You HAVE to call @StarCleaning. They saved my life before Thanksgiving. The deep clean is no joke!",
    },
    Review {
        initials: "SJ",
        name: "Sarah Jenkins",
        area: "45m",
        text: "+1 for StarCleaning! 🙌 They are the only ones I trust with my dogs in the house. Super professional and they show up ON TIME.",
    },
    Review {
        initials: "EB",
        name: "Emily Blunt",
        area: "12m",
        text: "Just used them for a move-out clean. Got my full deposit back! 💸 Highly recommend.",
    },
];

fn stars() -> Html {
    html! { <span class="stars">{"★★★★★"}</span> }
}

fn feature_grid(features: &'static [Feature], card_class: &'static str) -> Html {
    html! {
        <div class="feature-grid">
            { for features.iter().enumerate().map(|(idx, feature)| html! {
                <Reveal delay_ms={idx as u32 * 100}>
                    <div class={classes!("feature-card", card_class)}>
                        <div class="feature-icon">{feature.icon}</div>
                        <h3>{feature.title}</h3>
                        <p>{feature.desc}</p>
                    </div>
                </Reveal>
            }) }
        </div>
    }
}

#[function_component(TrustBadges)]
pub fn trust_badges() -> Html {
    html! {
        <div class="trust-badges">
            <p class="trust-title">{"Charleston's Most Trusted Team"}</p>
            <div class="badge-row">
                { for BADGES.iter().map(|(icon, text)| html! {
                    <div class="badge">
                        <span>{*icon}</span>
                        <span class="badge-text">{*text}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(WhatClientsSay)]
pub fn what_clients_say() -> Html {
    html! {
        <section id="reviews" class="section">
            <div class="section-heading">
                <span class="section-pill">{"Verified Reviews"}</span>
                <h2>{"What Clients Say"}</h2>
            </div>
            <div class="review-grid">
                { for REVIEWS.iter().enumerate().map(|(idx, review)| html! {
                    <Reveal delay_ms={idx as u32 * 150}>
                        <div class="review-card">
                            { stars() }
                            <p class="review-text">{format!("\u{201c}{}\u{201d}", review.text)}</p>
                            <div class="review-author">
                                <span class="avatar">{review.initials}</span>
                                <div>
                                    <strong>{review.name}</strong>
                                    <span class="review-area">{review.area}</span>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(TheStandard)]
pub fn the_standard() -> Html {
    html! {
        <section id="process" class="section section-muted">
            <div class="section-heading">
                <span class="section-pill">{"How It Works"}</span>
                <h2>{"The Star Standard"}</h2>
                <p>{"From quote to sparkle in four simple steps."}</p>
            </div>
            { feature_grid(PROCESS, "process-card") }
        </section>
    }
}

#[function_component(UsVsThem)]
pub fn us_vs_them() -> Html {
    let mark = |yes: bool| if yes { html! { <span class="yes">{"✓"}</span> } } else { html! { <span class="no">{"✕"}</span> } };

    html! {
        <section class="section">
            <div class="section-heading">
                <h2>{"StarCleaning vs. The Other Guys"}</h2>
            </div>
            <Reveal>
                <table class="comparison">
                    <thead>
                        <tr>
                            <th></th>
                            <th class="us">{"StarCleaning"}</th>
                            <th>{"Typical Service"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for COMPARISON.iter().map(|(label, us, them)| html! {
                            <tr>
                                <td>{*label}</td>
                                <td class="us">{ mark(*us) }</td>
                                <td>{ mark(*them) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </Reveal>
        </section>
    }
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section class="section section-muted">
            <div class="section-heading">
                <span class="section-pill">{"The Star Standard"}</span>
                <h2>{"Why we are rated #1"}</h2>
                <p>{"We don't just clean; we care for your home. Experience the difference."}</p>
            </div>
            { feature_grid(WHY_US, "why-card") }
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section">
            <div class="section-heading">
                <h2>{"Our Services"}</h2>
                <p>{"Comprehensive cleaning solutions tailored to your lifestyle. No contracts, just great service."}</p>
            </div>
            { feature_grid(SERVICES, "service-card") }
        </section>
    }
}

#[function_component(RiskFreeGuarantee)]
pub fn risk_free_guarantee() -> Html {
    html! {
        <section class="section guarantee">
            <Reveal>
                <div class="guarantee-card">
                    <div class="guarantee-seal">{"100%"}</div>
                    <div>
                        <h2>{"Risk-Free Guarantee"}</h2>
                        <p>{"If anything isn't sparkling, tell us within 24 hours and we'll re-clean it at no cost. Still not happy? Your money back."}</p>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section section-muted">
            <div class="section-heading">
                { stars() }
                <span class="section-pill">{"Google 5-Star Rated"}</span>
                <h2>{"Talk of the Town"}</h2>
                <p>{"Real neighbors recommending us in your local community groups."}</p>
            </div>
            <div class="community-post">
                <div class="post-group">
                    <strong>{"Charleston Neighbors & Moms"}</strong>
                    <span>{"Public Group • 15.2k Members"}</span>
                </div>
                <div class="post-body">
                    <strong>{"Jessica Miller"}</strong>
                    <span class="post-meta">{"2h ago • Summerville, SC"}</span>
                    <p>
                        {"🆘 Help needed! My in-laws are coming to visit this weekend and my house is a DISASTER with the kids and work. Does anyone have a "}
                        <strong>{"cleaning service they actually trust?"}</strong>
                        {" I've been burned before. Need someone reliable who does a deep clean! 🙏"}
                    </p>
                </div>
                { for COMMUNITY_COMMENTS.iter().enumerate().map(|(idx, comment)| html! {
                    <Reveal delay_ms={200 + idx as u32 * 200}>
                        <div class="post-comment">
                            <span class="avatar">{comment.initials}</span>
                            <div>
                                <strong>{comment.name}</strong>
                                <p>{comment.text}</p>
                                <span class="post-meta">{"Like · Reply · "}{comment.area}</span>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(InstagramSection)]
pub fn instagram_section() -> Html {
    html! {
        <section class="section instagram">
            <span class="section-pill">{"📷 @star.cleaningsc"}</span>
            <h2>{"See the "}<span class="shine">{"Shine"}</span>{" on our Instagram."}</h2>
            <p>{"Join our community of happy homeowners. Check out our latest transformations, cleaning tips, and daily satisfaction."}</p>
            <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="instagram-link">
                {"Follow Us on Instagram →"}
            </a>
        </section>
    }
}

pub const SECTIONS_CSS: &str = r#"
.section { padding: 5rem 1rem; background: #fff; }
.section-muted { background: #f8fafc; }
.section-heading { text-align: center; max-width: 42rem; margin: 0 auto 3rem; }
.section-heading h2 { font-size: 2.5rem; font-weight: 800; color: #0f172a; margin: 0.75rem 0; }
.section-heading p { color: #475569; font-size: 1.1rem; }
.section-pill {
    display: inline-block;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: #0ea5e9;
    background: #e0f2fe;
    padding: 0.3rem 0.8rem;
    border-radius: 9999px;
}
.stars { color: #f59e0b; letter-spacing: 0.1em; }
.reveal { opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease; }
.reveal.visible { opacity: 1; transform: none; }
.trust-badges { padding: 1.5rem 1rem; border-bottom: 1px solid #f1f5f9; background: #fff; }
.trust-title { text-align: center; font-size: 0.65rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.15em; color: #94a3b8; margin-bottom: 1rem; }
.badge-row { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem 3rem; }
.badge { display: flex; align-items: center; gap: 0.5rem; background: #f8fafc; border: 1px solid #f1f5f9; border-radius: 9999px; padding: 0.5rem 1rem; }
.badge-text { font-weight: 700; font-size: 0.875rem; color: #334155; white-space: nowrap; }
.review-grid, .feature-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}
.review-card, .feature-card {
    background: #fff;
    border-radius: 2rem;
    padding: 2rem;
    box-shadow: 0 20px 40px -20px rgba(15, 23, 42, 0.15);
    border: 1px solid #f1f5f9;
    height: 100%;
}
.feature-card { text-align: center; transition: transform 0.3s ease; }
.feature-card:hover { transform: translateY(-8px); }
.feature-icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    font-weight: 800;
    color: #fff;
    background: linear-gradient(135deg, #0ea5e9, #1d4ed8);
}
.feature-card h3 { font-size: 1.2rem; font-weight: 700; margin-bottom: 0.5rem; }
.feature-card p, .review-text { color: #475569; line-height: 1.6; }
.review-text { margin: 1rem 0 1.5rem; font-style: italic; }
.review-author { display: flex; align-items: center; gap: 0.75rem; }
.review-area { display: block; font-size: 0.8rem; color: #94a3b8; }
.avatar {
    flex-shrink: 0;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 800;
    font-size: 0.8rem;
    color: #fff;
    background: #0ea5e9;
}
.comparison { max-width: 48rem; width: 100%; margin: 0 auto; border-collapse: collapse; }
.comparison th, .comparison td { padding: 1rem; border-bottom: 1px solid #f1f5f9; text-align: center; }
.comparison td:first-child { text-align: left; font-weight: 600; color: #334155; }
.comparison .us { background: #f0f9ff; font-weight: 800; }
.comparison .yes { color: #22c55e; font-weight: 800; }
.comparison .no { color: #ef4444; }
.guarantee-card {
    max-width: 56rem;
    margin: 0 auto;
    display: flex;
    align-items: center;
    gap: 2rem;
    padding: 3rem;
    border-radius: 2rem;
    color: #fff;
    background: linear-gradient(135deg, #0f172a, #1e3a8a);
}
.guarantee-card h2 { font-size: 2rem; font-weight: 800; margin-bottom: 0.5rem; }
.guarantee-seal {
    flex-shrink: 0;
    width: 7rem;
    height: 7rem;
    border-radius: 50%;
    border: 4px solid #f59e0b;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.6rem;
    font-weight: 800;
    color: #f59e0b;
}
.community-post {
    max-width: 40rem;
    margin: 0 auto;
    background: #fff;
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.2);
}
.post-group { display: flex; flex-direction: column; padding: 1rem 1.5rem; border-bottom: 1px solid #f1f5f9; }
.post-group span, .post-meta { font-size: 0.75rem; color: #94a3b8; }
.post-body { padding: 1.5rem; border-bottom: 1px solid #f1f5f9; }
.post-body p { margin-top: 0.75rem; color: #334155; line-height: 1.6; }
.post-comment { display: flex; gap: 0.75rem; padding: 1rem 1.5rem; }
.post-comment p { background: #f1f5f9; border-radius: 1rem; padding: 0.75rem 1rem; margin: 0.25rem 0; color: #334155; }
.instagram { text-align: center; color: #fff; background: linear-gradient(135deg, #7c3aed, #db2777, #f97316); }
.instagram h2 { font-size: 2.5rem; font-weight: 800; margin: 1rem 0; }
.instagram p { max-width: 36rem; margin: 0 auto 2rem; opacity: 0.9; }
.instagram .section-pill { color: #fff; background: rgba(255, 255, 255, 0.2); }
.shine { font-style: italic; }
.instagram-link {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 9999px;
    background: #fff;
    color: #db2777;
    font-weight: 800;
    text-decoration: none;
}
@media (max-width: 768px) {
    .section-heading h2, .instagram h2 { font-size: 1.9rem; }
    .guarantee-card { flex-direction: column; text-align: center; padding: 2rem; }
}
"#;

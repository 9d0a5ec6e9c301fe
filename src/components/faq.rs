use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::reveal::Reveal;

pub const FAQS: &[(&str, &str)] = &[
    (
        "Which areas do you serve?",
        "We proudly serve the entire Greater Charleston area, including Summerville, North Charleston, Mt Pleasant, West Ashley, Goose Creek, and Ladson. If you're unsure if you're in our zone, just give us a call!",
    ),
    (
        "How is pricing calculated?",
        "We believe in fair, transparent pricing based on the size of your home and the specific type of service (Standard, Deep, or Move-in/Move-out). Fill out our instant quote form above to get an accurate estimate in seconds.",
    ),
    (
        "Do I need to provide cleaning supplies?",
        "Not at all! We bring our own professional-grade, eco-friendly supplies and equipment. However, if you have specific products you'd prefer us to use, we are happy to accommodate.",
    ),
    (
        "Are you insured and bonded?",
        "Yes, absolutely. StarCleaning is fully licensed, insured, and bonded. We take the safety and security of your home seriously, so you can have complete peace of mind.",
    ),
    (
        "Is your service pet-friendly?",
        "We love pets! Our cleaning products are safe for dogs, cats, and kids. We just ask that you let us know if you have pets so our team is aware upon arrival.",
    ),
];

/// Clicking the open question closes it, any other question replaces it.
pub fn toggle_index(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{props.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <div class="section-heading">
                <span class="section-pill">{"Common Questions"}</span>
                <h2>{"Frequently Asked Questions"}</h2>
                <p>{"Everything you need to know about our premium services."}</p>
            </div>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(idx, (question, answer))| {
                    let on_toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |_: ()| {
                            open_index.set(toggle_index(*open_index, idx));
                        })
                    };
                    html! {
                        <Reveal delay_ms={idx as u32 * 100}>
                            <FaqItem
                                question={*question}
                                answer={*answer}
                                is_open={*open_index == Some(idx)}
                                {on_toggle}
                            />
                        </Reveal>
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-section { padding: 5rem 1rem; background: #f8fafc; }
                .faq-list { max-width: 800px; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
                .faq-item {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 1.25rem;
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }
                .faq-item.open { box-shadow: 0 10px 30px -10px rgba(14, 165, 233, 0.3); border-color: #bae6fd; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }
                .question-text { font-weight: 700; font-size: 1.05rem; color: #1e293b; }
                .faq-item.open .question-text { color: #0ea5e9; }
                .toggle-icon {
                    margin-left: 1rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f1f5f9;
                    color: #64748b;
                }
                .faq-item.open .toggle-icon { background: #0ea5e9; color: #fff; }
                .faq-answer { padding: 0 1.5rem 1.25rem; color: #475569; line-height: 1.6; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_question_is_open() {
        assert_eq!(toggle_index(None, 2), Some(2));
        assert_eq!(toggle_index(Some(2), 2), None);
        assert_eq!(toggle_index(Some(2), 0), Some(0));
    }
}

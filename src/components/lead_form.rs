use web_sys::js_sys::Math;
use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::success_modal::SuccessModal;
use crate::lead::analytics::{track_lead, AnalyticsSink, PixelSink};
use crate::lead::api::{lookup_city, submit_lead, ApiError};
use crate::lead::form_state::{format_phone, sanitize_zip, LeadState, Step};
use crate::lead::models::{
    options_for, CleaningType, Pet, ServiceVariant, MAX_PEOPLE, MAX_ROOMS, MAX_SQ_FT, MIN_PEOPLE,
    MIN_ROOMS, MIN_SQ_FT, SQ_FT_STEP,
};

pub enum LeadFormMsg {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetZip(String),
    CityLookedUp(Result<String, ApiError>),
    SetBedrooms(u8),
    SetBathrooms(u8),
    SetSqFt(u32),
    SetPeople(u8),
    TogglePet(Pet),
    SetCleaningType(CleaningType),
    SetService(ServiceVariant),
    NextStep,
    PrevStep,
    Submit,
    Submitted(Result<(), ApiError>),
    CloseSuccess,
}

pub struct LeadForm {
    state: LeadState,
    analytics: Box<dyn AnalyticsSink>,
}

fn input_value(e: &InputEvent) -> HtmlInputElement {
    e.target_unchecked_into()
}

fn count_label(count: u8, max: u8) -> String {
    if count == max {
        format!("{}+", count)
    } else {
        count.to_string()
    }
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LeadState::default(),
            analytics: Box::new(PixelSink),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::SetName(name) => {
                self.state.set_name(name);
                true
            }
            LeadFormMsg::SetEmail(email) => {
                self.state.set_email(email);
                true
            }
            LeadFormMsg::SetPhone(phone) => {
                self.state.set_phone(&phone);
                true
            }
            LeadFormMsg::SetZip(zip) => {
                if let Some(zip) = self.state.set_zip(&zip) {
                    ctx.link().send_future(async move {
                        LeadFormMsg::CityLookedUp(lookup_city(&zip).await)
                    });
                }
                true
            }
            LeadFormMsg::CityLookedUp(result) => {
                self.state.apply_city_lookup(result, Math::random());
                true
            }
            LeadFormMsg::SetBedrooms(count) => {
                self.state.set_bedrooms(count);
                true
            }
            LeadFormMsg::SetBathrooms(count) => {
                self.state.set_bathrooms(count);
                true
            }
            LeadFormMsg::SetSqFt(sq_ft) => {
                self.state.set_sq_ft(sq_ft);
                true
            }
            LeadFormMsg::SetPeople(count) => {
                self.state.set_people(count);
                true
            }
            LeadFormMsg::TogglePet(pet) => {
                self.state.toggle_pet(pet);
                true
            }
            LeadFormMsg::SetCleaningType(cleaning_type) => {
                self.state.set_cleaning_type(cleaning_type);
                true
            }
            LeadFormMsg::SetService(variant) => {
                self.state.set_service(variant);
                true
            }
            LeadFormMsg::NextStep => {
                let _ = self.state.next_step();
                true
            }
            LeadFormMsg::PrevStep => {
                self.state.prev_step();
                true
            }
            LeadFormMsg::Submit => {
                // Enter on an earlier step moves forward instead of submitting
                if self.state.step != Step::ServiceSelection {
                    ctx.link().send_message(LeadFormMsg::NextStep);
                    return false;
                }
                let Some(submission) = self.state.begin_submission() else {
                    return false;
                };
                track_lead(self.analytics.as_ref(), &submission);
                ctx.link().send_future(async move {
                    LeadFormMsg::Submitted(submit_lead(&submission).await)
                });
                true
            }
            LeadFormMsg::Submitted(result) => {
                self.state.finish_submission(result);
                true
            }
            LeadFormMsg::CloseSuccess => {
                self.state.close_success();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        html! {
            <>
                if self.state.show_success {
                    <SuccessModal on_close={ctx.link().callback(|_: ()| LeadFormMsg::CloseSuccess)} />
                }
                <div class="lead-card">
                    <div class="lead-card-header">
                        <span class="lead-pill">{"✨ Instant Quote"}</span>
                        <h3>{"Free Estimate"}</h3>
                        <p>{"No hidden fees. Fast & Accurate."}</p>
                    </div>
                    { self.render_progress() }
                    <form class="lead-form" {onsubmit}>
                        {
                            match self.state.step {
                                Step::Contact => self.render_contact(ctx),
                                Step::HomeDetails => self.render_home(ctx),
                                Step::ServiceSelection => self.render_service(ctx),
                            }
                        }
                        if let Some(error) = &self.state.error {
                            <p class="form-error">{ error }</p>
                        }
                        { self.render_actions(ctx) }
                        <p class="form-footnote">{"Secure connection. Your privacy is our priority."}</p>
                    </form>
                    <style>{ LEAD_FORM_CSS }</style>
                </div>
            </>
        }
    }
}

impl LeadForm {
    fn render_progress(&self) -> Html {
        let current = self.state.step;
        html! {
            <div class="lead-progress">
                { for [Step::Contact, Step::HomeDetails, Step::ServiceSelection].into_iter().map(|step| {
                    html! {
                        <div class={classes!(
                            "progress-step",
                            (step == current).then(|| "active"),
                            (step < current).then(|| "done")
                        )}>
                            <span class="progress-number">{ step.number() }</span>
                            <span class="progress-title">{ step.title() }</span>
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn render_contact(&self, ctx: &Context<Self>) -> Html {
        let data = &self.state.data;
        html! {
            <div class="form-step">
                <input
                    type="text"
                    id="name"
                    name="name"
                    autocomplete="name"
                    placeholder="Full Name"
                    value={data.name.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| LeadFormMsg::SetName(input_value(&e).value()))}
                />
                <div class="form-row">
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        autocomplete="tel"
                        placeholder="(555) 000-0000"
                        value={data.phone.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input = input_value(&e);
                            let formatted = format_phone(&input.value());
                            input.set_value(&formatted);
                            LeadFormMsg::SetPhone(formatted)
                        })}
                    />
                    <input
                        type="text"
                        id="zipCode"
                        name="zipCode"
                        autocomplete="postal-code"
                        inputmode="numeric"
                        maxlength="5"
                        placeholder="Zip Code"
                        value={data.zip_code.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input = input_value(&e);
                            let zip = sanitize_zip(&input.value());
                            input.set_value(&zip);
                            LeadFormMsg::SetZip(zip)
                        })}
                    />
                </div>
                if let (Some(city), Some(neighbors)) = (&self.state.city, self.state.neighbors) {
                    <p class="city-badge">
                        {format!("📍 {} neighbors in {} booked this week", neighbors, city)}
                    </p>
                }
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="Email Address"
                    value={data.email.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| LeadFormMsg::SetEmail(input_value(&e).value()))}
                />
            </div>
        }
    }

    fn render_counter(
        &self,
        ctx: &Context<Self>,
        label: &'static str,
        selected: u8,
        range: (u8, u8),
        to_msg: fn(u8) -> LeadFormMsg,
    ) -> Html {
        let (min, max) = range;
        html! {
            <div class="field-group">
                <span class="field-label">{label}</span>
                <div class="choice-row">
                    { for (min..=max).map(|count| {
                        html! {
                            <button
                                type="button"
                                class={classes!("choice", (count == selected).then(|| "selected"))}
                                onclick={ctx.link().callback(move |_: MouseEvent| to_msg(count))}
                            >
                                { count_label(count, max) }
                            </button>
                        }
                    }) }
                </div>
            </div>
        }
    }

    fn render_home(&self, ctx: &Context<Self>) -> Html {
        let data = &self.state.data;
        let pets = data.pets;
        let pet_button = |pet: Pet, label: &'static str, active: bool| {
            html! {
                <button
                    type="button"
                    class={classes!("choice", "pet-choice", active.then(|| "selected"))}
                    onclick={ctx.link().callback(move |_: MouseEvent| LeadFormMsg::TogglePet(pet))}
                >
                    {label}
                </button>
            }
        };

        html! {
            <div class="form-step">
                { self.render_counter(ctx, "Bedrooms", data.bedrooms, (MIN_ROOMS, MAX_ROOMS), LeadFormMsg::SetBedrooms) }
                { self.render_counter(ctx, "Bathrooms", data.bathrooms, (MIN_ROOMS, MAX_ROOMS), LeadFormMsg::SetBathrooms) }
                <div class="field-group">
                    <label class="field-label" for="sqFt">
                        {"Approx. Square Feet: "}<strong>{ data.sq_ft }</strong>
                    </label>
                    <input
                        type="range"
                        id="sqFt"
                        min={MIN_SQ_FT.to_string()}
                        max={MAX_SQ_FT.to_string()}
                        step={SQ_FT_STEP.to_string()}
                        value={data.sq_ft.to_string()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let sq_ft = input_value(&e).value().parse().unwrap_or(MIN_SQ_FT);
                            LeadFormMsg::SetSqFt(sq_ft)
                        })}
                    />
                </div>
                { self.render_counter(ctx, "People in the Home", data.people, (MIN_PEOPLE, MAX_PEOPLE), LeadFormMsg::SetPeople) }
                <div class="field-group">
                    <span class="field-label">{"Pets"}</span>
                    <div class="choice-row">
                        { pet_button(Pet::Dogs, "🐶 Dogs", pets.dogs) }
                        { pet_button(Pet::Cats, "🐱 Cats", pets.cats) }
                        { pet_button(Pet::NoPets, "No Pets", pets.none) }
                    </div>
                </div>
            </div>
        }
    }

    fn render_service(&self, ctx: &Context<Self>) -> Html {
        let data = &self.state.data;
        html! {
            <div class="form-step">
                <div class="cadence-toggle">
                    { for [CleaningType::OneTime, CleaningType::Recurring].into_iter().map(|cadence| {
                        html! {
                            <button
                                type="button"
                                class={classes!("cadence", (cadence == data.cleaning_type).then(|| "selected"))}
                                onclick={ctx.link().callback(move |_: MouseEvent| LeadFormMsg::SetCleaningType(cadence))}
                            >
                                { cadence.label() }
                            </button>
                        }
                    }) }
                </div>
                <div class="service-options">
                    { for options_for(data.cleaning_type).map(|opt| {
                        let id = opt.id;
                        html! {
                            <button
                                type="button"
                                class={classes!("service-option", (id == data.service_detail).then(|| "selected"))}
                                onclick={ctx.link().callback(move |_: MouseEvent| LeadFormMsg::SetService(id))}
                            >
                                <span class="service-label">{ opt.label }</span>
                                if let Some(tag) = opt.tag {
                                    <span class="service-tag">{ tag }</span>
                                }
                                <span class="service-description">{ opt.description }</span>
                            </button>
                        }
                    }) }
                </div>
                <div class="price-estimate">
                    <span class="price-label">{"Estimated Price"}</span>
                    <span class="price-value">{ format!("${}", data.estimated_price) }</span>
                </div>
            </div>
        }
    }

    fn render_actions(&self, ctx: &Context<Self>) -> Html {
        let back = ctx.link().callback(|_: MouseEvent| LeadFormMsg::PrevStep);
        let next = ctx.link().callback(|_: MouseEvent| LeadFormMsg::NextStep);

        html! {
            <div class="form-actions">
                if self.state.step != Step::Contact {
                    <button type="button" class="back-button" onclick={back}>{"← Back"}</button>
                }
                if self.state.step == Step::ServiceSelection {
                    <button type="submit" class="primary-button" disabled={self.state.is_submitting}>
                        if self.state.is_submitting {
                            {"Sending..."}
                        } else {
                            {"Get My Free Quote →"}
                        }
                    </button>
                } else {
                    <button type="button" class="primary-button" onclick={next}>{"Continue →"}</button>
                }
            </div>
        }
    }
}

const LEAD_FORM_CSS: &str = r#"
.lead-card {
    position: relative;
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(40px);
    border-radius: 2rem;
    padding: 2.5rem;
    border: 1px solid rgba(255, 255, 255, 0.6);
    box-shadow: 0 40px 80px -20px rgba(15, 23, 42, 0.2);
    color: #0f172a;
    max-width: 36rem;
    width: 100%;
}
.lead-card-header { margin-bottom: 1.5rem; }
.lead-pill {
    display: inline-block;
    background: #eff6ff;
    color: #0ea5e9;
    font-weight: 700;
    font-size: 0.75rem;
    text-transform: uppercase;
    padding: 0.35rem 0.75rem;
    border-radius: 9999px;
    border: 1px solid #dbeafe;
}
.lead-card-header h3 { font-size: 2.25rem; font-weight: 800; margin: 0.75rem 0 0.25rem; }
.lead-card-header p { color: #64748b; font-weight: 500; }
.lead-progress { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.progress-step { flex: 1; display: flex; align-items: center; gap: 0.5rem; opacity: 0.5; font-size: 0.8rem; font-weight: 700; }
.progress-step.active, .progress-step.done { opacity: 1; }
.progress-number {
    width: 1.75rem;
    height: 1.75rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #e2e8f0;
}
.progress-step.active .progress-number { background: #0ea5e9; color: #fff; }
.progress-step.done .progress-number { background: #22c55e; color: #fff; }
.lead-form { display: flex; flex-direction: column; gap: 1.25rem; }
.form-step { display: flex; flex-direction: column; gap: 1rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.lead-form input[type="text"], .lead-form input[type="tel"], .lead-form input[type="email"] {
    width: 100%;
    padding: 1rem 1.25rem;
    border: 1px solid #e2e8f0;
    border-radius: 1rem;
    font-weight: 600;
    background: rgba(255, 255, 255, 0.6);
}
.lead-form input:focus { outline: none; border-color: #0ea5e9; background: #fff; }
.city-badge { font-size: 0.85rem; font-weight: 700; color: #16a34a; }
.field-group { display: flex; flex-direction: column; gap: 0.5rem; }
.field-label { font-size: 0.85rem; font-weight: 700; color: #475569; }
.choice-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.choice, .cadence {
    min-width: 3rem;
    padding: 0.6rem 1rem;
    border-radius: 0.9rem;
    border: 1px solid #e2e8f0;
    background: #fff;
    font-weight: 700;
    cursor: pointer;
}
.choice.selected, .cadence.selected { background: #0ea5e9; border-color: #0ea5e9; color: #fff; }
.cadence-toggle { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
.service-options { display: flex; flex-direction: column; gap: 0.6rem; }
.service-option {
    text-align: left;
    padding: 0.9rem 1.1rem;
    border-radius: 1rem;
    border: 1px solid #e2e8f0;
    background: #fff;
    cursor: pointer;
    display: grid;
    grid-template-columns: 1fr auto;
    gap: 0.25rem;
}
.service-option.selected { border-color: #0ea5e9; box-shadow: 0 0 0 3px rgba(14, 165, 233, 0.15); }
.service-label { font-weight: 800; }
.service-tag {
    font-size: 0.7rem;
    font-weight: 800;
    color: #b45309;
    background: #fef3c7;
    padding: 0.15rem 0.5rem;
    border-radius: 9999px;
}
.service-description { grid-column: 1 / -1; color: #64748b; font-size: 0.85rem; }
.price-estimate {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 1.25rem;
    border-radius: 1rem;
    background: #f0f9ff;
}
.price-label { font-weight: 700; color: #475569; }
.price-value { font-size: 1.75rem; font-weight: 800; color: #0ea5e9; }
.form-error {
    color: #ef4444;
    font-size: 0.875rem;
    text-align: center;
    background: #fef2f2;
    padding: 0.5rem;
    border-radius: 0.75rem;
}
.form-actions { display: flex; gap: 0.75rem; }
.back-button {
    padding: 1rem 1.25rem;
    border-radius: 1rem;
    border: 1px solid #e2e8f0;
    background: #fff;
    font-weight: 700;
    cursor: pointer;
}
.primary-button {
    flex: 1;
    padding: 1rem;
    border-radius: 1rem;
    border: none;
    color: #fff;
    font-size: 1.1rem;
    font-weight: 700;
    background: linear-gradient(90deg, #0ea5e9, #06b6d4);
    cursor: pointer;
}
.primary-button:disabled { opacity: 0.7; cursor: wait; }
.form-footnote { text-align: center; font-size: 0.7rem; color: #94a3b8; }
@media (max-width: 768px) {
    .lead-card { padding: 1.5rem; }
    .form-row { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_count_reads_as_plus() {
        assert_eq!(count_label(3, MAX_ROOMS), "3");
        assert_eq!(count_label(MAX_ROOMS, MAX_ROOMS), "5+");
        assert_eq!(count_label(MAX_PEOPLE, MAX_PEOPLE), "6+");
    }
}

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

pub const STICKY_CTA_THRESHOLD: f64 = 600.0; // roughly the hero height
pub const HEADER_THRESHOLD: f64 = 500.0;
pub const FORM_ANCHOR: &str = "lead-quote-form";
pub const FORM_FOCUS_FIELD: &str = "name";
const FOCUS_DELAY_MS: u32 = 500;

/// Linear map of `value` from `input` onto `output`, clamped to the output range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_end;
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + progress * (out_end - out_start)
}

pub fn is_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Window scroll offset, refreshed on every `scroll` event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    scroll_y.set(current_scroll_y());
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_section(id: &str) {
    scroll_element_into_view(id, None);
}

/// Centers the quote form and focuses its first field once the scroll settles.
pub fn scroll_to_form() {
    if scroll_element_into_view(FORM_ANCHOR, Some(ScrollLogicalPosition::Center)) {
        Timeout::new(FOCUS_DELAY_MS, || {
            let field = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(FORM_FOCUS_FIELD))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(field) = field {
                let _ = field.focus();
            }
        })
        .forget();
    }
}

fn scroll_element_into_view(id: &str, block: Option<ScrollLogicalPosition>) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            if let Some(block) = block {
                options.block(block);
            }
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_is_linear_inside_the_input() {
        assert_eq!(map_range(0.0, (0.0, 1000.0), (0.0, 400.0)), 0.0);
        assert_eq!(map_range(500.0, (0.0, 1000.0), (0.0, 400.0)), 200.0);
        assert_eq!(map_range(250.0, (0.0, 500.0), (0.0, 0.7)), 0.35);
    }

    #[test]
    fn map_range_clamps_outside_the_input() {
        assert_eq!(map_range(5000.0, (0.0, 1000.0), (0.0, 400.0)), 400.0);
        assert_eq!(map_range(-20.0, (0.0, 500.0), (0.0, 0.7)), 0.0);
        // descending output, like the fading scroll hint
        assert_eq!(map_range(100.0, (0.0, 200.0), (1.0, 0.0)), 0.5);
        assert_eq!(map_range(300.0, (0.0, 200.0), (1.0, 0.0)), 0.0);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!is_past(600.0, STICKY_CTA_THRESHOLD));
        assert!(is_past(600.5, STICKY_CTA_THRESHOLD));
        assert!(!is_past(0.0, HEADER_THRESHOLD));
    }
}

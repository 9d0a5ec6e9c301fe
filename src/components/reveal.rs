use web_sys::Element;
use yew::prelude::*;

use crate::scroll::use_scroll_y;

const VIEWPORT_MARGIN: f64 = 50.0;

/// True once an element's top edge is `margin` pixels inside the viewport.
pub fn in_view(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Stagger in milliseconds, applied as a CSS transition delay.
    #[prop_or_default]
    pub delay_ms: u32,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);
    let scroll_y = use_scroll_y();

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                if !*revealed {
                    let viewport = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64());
                    if let (Some(element), Some(viewport)) = (node.cast::<Element>(), viewport) {
                        let top = element.get_bounding_client_rect().top();
                        if in_view(top, viewport, VIEWPORT_MARGIN) {
                            revealed.set(true);
                        }
                    }
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_the_margin() {
        assert!(!in_view(900.0, 800.0, VIEWPORT_MARGIN));
        assert!(!in_view(760.0, 800.0, VIEWPORT_MARGIN));
        assert!(in_view(740.0, 800.0, VIEWPORT_MARGIN));
        assert!(in_view(-200.0, 800.0, VIEWPORT_MARGIN));
    }
}

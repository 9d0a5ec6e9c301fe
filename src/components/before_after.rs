use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

const BEFORE_IMAGE: &str = "https://i.imgur.com/XhU71Rx.jpeg";
const AFTER_IMAGE: &str = "https://i.imgur.com/gpqI75L.jpeg";
const AFTER_LABEL_MIN: f64 = 10.0;

/// Slider position in percent for a pointer at `client_x`, or `None` when the
/// container has no width to measure against.
pub fn slider_position(client_x: f64, left: f64, width: f64) -> Option<f64> {
    if width <= 0.0 {
        return None;
    }
    Some(((client_x - left) / width * 100.0).clamp(0.0, 100.0))
}

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    let container = use_node_ref();
    let position = use_state(|| 50.0_f64);
    let dragging = use_state(|| false);

    let move_to = {
        let container = container.clone();
        let position = position.clone();
        Callback::from(move |client_x: f64| {
            if let Some(element) = container.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                if let Some(pos) = slider_position(client_x, rect.left(), rect.width()) {
                    position.set(pos);
                }
            }
        })
    };

    {
        let dragging = dragging.clone();
        use_event_with_window("mouseup", move |_: MouseEvent| {
            dragging.set(false);
        });
    }

    let onmousedown = {
        let dragging = dragging.clone();
        let move_to = move_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dragging.set(true);
            move_to.emit(e.client_x() as f64);
        })
    };

    let onmousemove = {
        let dragging = dragging.clone();
        let move_to = move_to.clone();
        Callback::from(move |e: MouseEvent| {
            if *dragging {
                move_to.emit(e.client_x() as f64);
            }
        })
    };

    let ontouchmove = {
        let move_to = move_to.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                move_to.emit(touch.client_x() as f64);
            }
        })
    };

    let pos = *position;

    html! {
        <section class="before-after">
            <div class="section-heading">
                <h2>{"See the Difference"}</h2>
                <p>{"Drag the slider to clean the room."}</p>
            </div>
            <div
                class="ba-frame"
                ref={container}
                {onmousedown}
                {onmousemove}
                {ontouchmove}
            >
                <img class="ba-image" src={AFTER_IMAGE} alt="Clean Room" loading="lazy" decoding="async" />
                <div class="ba-before" style={format!("clip-path: inset(0 0 0 {}%);", pos)}>
                    <img class="ba-image ba-dirty" src={BEFORE_IMAGE} alt="Dirty Room" loading="lazy" decoding="async" />
                    <span class="ba-label ba-label-before">{"Before"}</span>
                </div>
                <span
                    class="ba-label ba-label-after"
                    style={format!("opacity: {};", if pos > AFTER_LABEL_MIN { 1 } else { 0 })}
                >
                    {"After"}
                </span>
                <div class="ba-handle" style={format!("left: {}%;", pos)}>
                    <span class="ba-grip">{"⇔"}</span>
                </div>
            </div>
            <style>
                {r#"
                .before-after { padding: 5rem 1rem; background: #fff; }
                .ba-frame {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                    aspect-ratio: 21 / 9;
                    border-radius: 2rem;
                    overflow: hidden;
                    cursor: ew-resize;
                    user-select: none;
                    touch-action: pan-y;
                }
                @media (max-width: 768px) {
                    .ba-frame { aspect-ratio: 4 / 5; }
                }
                .ba-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    pointer-events: none;
                }
                .ba-before { position: absolute; inset: 0; }
                .ba-dirty { filter: sepia(0.4) brightness(0.7) contrast(1.1); }
                .ba-label {
                    position: absolute;
                    top: 1.5rem;
                    padding: 0.3rem 0.9rem;
                    border-radius: 9999px;
                    font-weight: 800;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: #fff;
                    background: rgba(0, 0, 0, 0.5);
                    transition: opacity 0.2s;
                }
                .ba-label-before { right: 1.5rem; }
                .ba-label-after { left: 1.5rem; background: rgba(14, 165, 233, 0.85); }
                .ba-handle {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 4px;
                    margin-left: -2px;
                    background: #fff;
                    box-shadow: 0 0 20px rgba(0, 0, 0, 0.3);
                }
                .ba-grip {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #0ea5e9;
                    font-size: 1.4rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_pointer() {
        assert_eq!(slider_position(150.0, 100.0, 200.0), Some(25.0));
        assert_eq!(slider_position(300.0, 100.0, 200.0), Some(100.0));
    }

    #[test]
    fn clamps_outside_the_frame() {
        assert_eq!(slider_position(20.0, 100.0, 200.0), Some(0.0));
        assert_eq!(slider_position(900.0, 100.0, 200.0), Some(100.0));
    }

    #[test]
    fn zero_width_keeps_position() {
        assert_eq!(slider_position(150.0, 100.0, 0.0), None);
    }
}

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Motion, RevealGate, Trigger};

/// Wraps its children in a block that plays `motion` as an entrance.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (shown, set_shown) = signal(false);

    match motion.trigger {
        Trigger::Mount => {
            // wait a frame so the hidden pose is painted before transitioning
            Effect::new(move |_| {
                request_animation_frame(move || set_shown.set(true));
            });
        }
        Trigger::InView => {
            let visible = use_element_visibility(node_ref);
            let gate = StoredValue::new(RevealGate::default());
            Effect::watch(
                move || visible.get(),
                move |visible, _, _| {
                    let mut entered = false;
                    gate.update_value(|g| entered = g.observe(*visible));
                    if entered {
                        log::debug!("revealing element (delay {}ms)", motion.delay_ms);
                        set_shown.set(true);
                    }
                },
                true,
            );
        }
    }

    view! {
        <div node_ref=node_ref class=class style=move || motion.style(shown.get())>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::render;
    use crate::motion::Pose;

    #[test]
    fn test_renders_hidden_pose_on_server() {
        let motion = Motion::in_view(Pose::shifted(0, 20)).staggered(2);
        let html = render(move || {
            view! {
                <Reveal motion class="glass-card">
                    <p>"content"</p>
                </Reveal>
            }
        });
        assert!(html.contains("class=\"glass-card\""));
        assert!(html.contains("opacity: 0; transform: translate(0px, 20px)"));
        assert!(html.contains("ease-out 200ms"));
        assert!(html.contains("<p>content</p>"));
    }
}

use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NAV_LINKS, OWNER_NAME};
use crate::motion::{Motion, Pose};
use crate::scroll::{HeaderVariant, ScrollTracker};

use super::reveal::Reveal;

#[component]
pub fn NavigationBar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let tracker = StoredValue::new(ScrollTracker::default());
    let (variant, set_variant) = signal(HeaderVariant::default());

    Effect::watch(
        move || scroll_y.get(),
        move |offset, _, _| {
            let mut crossed = None;
            tracker.update_value(|t| crossed = t.observe(*offset));
            if let Some(next) = crossed {
                log::debug!("header is now {next:?} at offset {offset}");
                set_variant.set(next);
            }
        },
        true,
    );

    view! {
        <nav class=move || variant.get().class()>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center">
                <Reveal
                    motion=Motion::on_mount(Pose::shifted(-20, 0))
                    class="text-xl font-bold font-mono text-brand-primary"
                >
                    {format!("<{OWNER_NAME}>")}
                </Reveal>
                <div class="hidden md:flex gap-8">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <Reveal motion=Motion::on_mount(Pose::shifted(0, -10)).staggered(i)>
                                    <a
                                        href=link.target.href()
                                        class="text-sm font-medium hover:text-brand-primary transition-colors"
                                    >
                                        {link.name}
                                    </a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::*;

    #[test]
    fn test_links_in_order() {
        let html = render(|| view! { <NavigationBar /> });
        let needles = NAV_LINKS
            .iter()
            .flat_map(|l| [format!("href=\"{}\"", l.target.href()), format!(">{}</a>", l.name)])
            .collect::<Vec<_>>();
        assert_in_order(&html, &needles);
        assert_eq!(html.matches("<a ").count(), NAV_LINKS.len());
    }

    #[test]
    fn test_brand_is_escaped() {
        let html = render(|| view! { <NavigationBar /> });
        assert!(html.contains(&escaped("<Hoang Duc Thien>")));
    }

    #[test]
    fn test_links_cascade() {
        let html = render(|| view! { <NavigationBar /> });
        assert!(html.contains("ease-out 0ms"));
        assert!(html.contains("ease-out 400ms"));
    }
}

use leptos::{either::Either, prelude::*};

use crate::content::{ContactChannel, ContactLink, SectionId, CONTACT_CHANNELS, EMAIL};

use super::icon::IconSvg;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() class="py-24 bg-zinc-900/30">
            <div class="max-w-5xl mx-auto px-6 text-center">
                <h2 class="text-3xl font-bold mb-6">"Get In Touch"</h2>
                <p class="text-zinc-400 mb-12">
                    "I'm currently looking for new opportunities as an SDET or Automation Engineer. Whether you have a question or just want to say hi, my inbox is always open!"
                </p>

                <div class="grid md:grid-cols-3 gap-6 mb-12">
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| view! { <ContactCard channel /> })
                        .collect_view()}
                </div>

                <a href=ContactLink::Mail(EMAIL).href() class="btn-primary px-12 py-4 text-lg">
                    "Say Hello"
                </a>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(channel: &'static ContactChannel) -> impl IntoView {
    let body = move || {
        view! {
            <IconSvg icon=channel.icon size=24 class="mx-auto mb-4 text-brand-primary" />
            <p class="text-xs text-zinc-500 uppercase font-mono mb-1">{channel.label}</p>
            <p class="text-sm font-medium">{channel.value}</p>
        }
    };
    match channel.link {
        Some(link) => Either::Left(view! {
            <a
                href=link.href()
                class="glass-card p-6 hover:border-brand-primary/30 transition-all"
            >
                {body()}
            </a>
        }),
        None => Either::Right(view! { <div class="glass-card p-6">{body()}</div> }),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::*;

    #[test]
    fn test_one_card_per_channel_in_order() {
        let html = render(|| view! { <ContactSection /> });
        assert_eq!(
            html.matches("text-xs text-zinc-500 uppercase font-mono").count(),
            CONTACT_CHANNELS.len()
        );
        let needles = CONTACT_CHANNELS
            .iter()
            .flat_map(|c| [format!(">{}</p>", c.label), format!(">{}</p>", c.value)])
            .collect::<Vec<_>>();
        assert_in_order(&html, &needles);
    }

    #[test]
    fn test_links_keep_scheme_and_value() {
        let html = render(|| view! { <ContactSection /> });
        assert!(html.contains("href=\"tel:+84357031801\""));
        // the email card and the "Say Hello" button
        assert_eq!(
            html.matches("href=\"mailto:hoangducthien176@gmail.com\"").count(),
            2
        );
        assert_eq!(html.matches("href=\"tel:").count(), 1);
    }

    #[test]
    fn test_location_is_not_a_link() {
        let html = render(|| view! { <ContactSection /> });
        let location = html.find("Go Vap, HCM, VN").expect("location rendered");
        let card_start = html[..location].rfind("glass-card").unwrap();
        assert!(html[..card_start].ends_with("<div class=\""));
    }
}

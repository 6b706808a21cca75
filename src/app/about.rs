use leptos::prelude::*;

use crate::content::{SectionId, OWNER_NAME, PORTRAIT_URL};
use crate::motion::{Motion, Pose};

use super::reveal::Reveal;

const STATS: &[(&str, &str)] = &[("3+", "Years in QC"), ("2+", "Years Automation")];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-24 bg-zinc-900/30">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal motion=Motion::in_view(Pose::shifted(-30, 0))>
                        <h2 class="text-3xl font-bold mb-8 flex items-center gap-3">
                            <span class="text-brand-primary font-mono text-xl">"01."</span>
                            " About Me"
                        </h2>
                        <div class="space-y-6 text-zinc-400 leading-relaxed">
                            <p>
                                "I am a Software Development Engineer in Test (SDET) based in Ho Chi Minh City, with a strong foundation in Computer Science and a passion for integrating AI into quality assurance."
                            </p>
                            <p>
                                "My journey started with a Bachelor's in Computer Science from the Industrial University of Ho Chi Minh City, where I specialized in Machine Learning and Computer Vision. This unique background allows me to approach testing not just as a verification step, but as a data-driven engineering challenge."
                            </p>
                            <p>
                                "Currently at DR Digital, I focus on building scalable automation frameworks for Web, Mobile, and AI systems, significantly reducing regression times while ensuring high-quality releases."
                            </p>
                        </div>

                        <div class="mt-10 grid grid-cols-2 gap-6">
                            {STATS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="p-4 rounded-xl bg-white/5 border border-white/5">
                                            <p class="text-2xl font-bold text-white">{*value}</p>
                                            <p class="text-xs text-zinc-500 uppercase tracking-wider mt-1">
                                                {*label}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal motion=Motion::in_view(Pose::shifted(30, 0)) class="relative">
                        <div class="aspect-square rounded-2xl overflow-hidden grayscale hover:grayscale-0 transition-all duration-500 border border-white/10">
                            <img
                                src=PORTRAIT_URL
                                alt=OWNER_NAME
                                class="w-full h-full object-cover"
                                referrerpolicy="no-referrer"
                            />
                        </div>
                        <div class="absolute -inset-4 border-2 border-brand-primary/30 rounded-2xl -z-10 translate-x-4 translate-y-4" />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::{assert_in_order, render};

    #[test]
    fn test_portrait_suppresses_referrer() {
        let html = render(|| view! { <AboutSection /> });
        assert!(html.contains(&format!("src=\"{PORTRAIT_URL}\"")));
        assert!(html.contains("referrerpolicy=\"no-referrer\""));
        assert!(html.contains("alt=\"Hoang Duc Thien\""));
    }

    #[test]
    fn test_stats_and_reveal() {
        let html = render(|| view! { <AboutSection /> });
        assert_in_order(
            &html,
            &["Years in QC".to_string(), "Years Automation".to_string()],
        );
        assert!(html.contains("translate(-30px, 0px)"));
        assert!(html.contains("translate(30px, 0px)"));
    }
}

use leptos::prelude::*;

use crate::content::{SectionId, SkillCategory, SKILL_CATEGORIES};
use crate::motion::{Motion, Pose};

use super::{icon::IconSvg, reveal::Reveal};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-24">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold mb-4">"Technical Arsenal"</h2>
                    <p class="text-zinc-500">
                        "A comprehensive set of tools and technologies I use to build and test robust systems."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| view! { <SkillCard category index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory, index: usize) -> impl IntoView {
    view! {
        <Reveal
            motion=Motion::in_view(Pose::shifted(0, 20)).staggered(index)
            class="glass-card p-6 hover:border-brand-primary/30 transition-colors group"
        >
            <div class="w-12 h-12 rounded-xl bg-white/5 flex items-center justify-center text-brand-primary mb-6 group-hover:bg-brand-primary group-hover:text-bg-dark transition-all">
                <IconSvg icon=category.icon />
            </div>
            <h3 class="text-lg font-bold mb-4">{category.title}</h3>
            <div class="flex flex-wrap gap-2">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="px-2 py-1 rounded-md bg-white/5 text-xs font-mono text-zinc-400 border border-white/5">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::*;

    #[test]
    fn test_one_card_per_category_in_order() {
        let html = render(|| view! { <SkillsSection /> });
        assert_eq!(html.matches("<h3").count(), SKILL_CATEGORIES.len());
        let titles = SKILL_CATEGORIES
            .iter()
            .map(|c| escaped(c.title))
            .collect::<Vec<_>>();
        assert_in_order(&html, &titles);
    }

    #[test]
    fn test_skills_listed_under_their_category() {
        let html = render(|| view! { <SkillsSection /> });
        let needles = SKILL_CATEGORIES
            .iter()
            .flat_map(|c| {
                std::iter::once(escaped(c.title))
                    .chain(c.skills.iter().map(|s| format!(">{}</span>", escaped(s))))
            })
            .collect::<Vec<_>>();
        assert_in_order(&html, &needles);
        let total: usize = SKILL_CATEGORIES.iter().map(|c| c.skills.len()).sum();
        assert_eq!(html.matches("text-xs font-mono text-zinc-400").count(), total);
    }

    #[test]
    fn test_cards_cascade_into_view() {
        let html = render(|| view! { <SkillsSection /> });
        for i in 0..SKILL_CATEGORIES.len() {
            assert!(html.contains(&format!("ease-out {}ms", i * 100)));
        }
    }
}

use leptos::prelude::*;

use crate::content::{ExperienceEntry, Icon, SectionId, EXPERIENCES};
use crate::motion::{Motion, Pose};

use super::{icon::IconSvg, reveal::Reveal};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="py-24 bg-zinc-900/30">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="text-3xl font-bold mb-16 flex items-center gap-3">
                    <span class="text-brand-primary font-mono text-xl">"02."</span>
                    " Professional Journey"
                </h2>

                <div class="space-y-12 relative before:absolute before:left-0 before:top-0 before:bottom-0 before:w-px before:bg-white/10 ml-4">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| view! { <TimelineEntry entry index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: &'static ExperienceEntry, index: usize) -> impl IntoView {
    view! {
        <Reveal
            motion=Motion::in_view(Pose::shifted(20, 0)).staggered(index)
            class="pl-8 relative"
        >
            <div class="absolute left-[-5px] top-2 w-[10px] h-[10px] rounded-full bg-brand-primary shadow-[0_0_10px_rgba(16,185,129,0.5)]" />
            <div class="flex flex-wrap justify-between items-baseline gap-2 mb-4">
                <h3 class="text-xl font-bold text-white">
                    {entry.role}
                    " "
                    <span class="text-brand-primary">{format!("@ {}", entry.company)}</span>
                </h3>
                <span class="text-sm font-mono text-zinc-500">{entry.period}</span>
            </div>
            <ul class="space-y-3">
                {entry
                    .achievements
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="text-zinc-400 text-sm flex gap-3">
                                <span class="text-brand-primary mt-1.5 shrink-0">
                                    <IconSvg icon=Icon::CheckCircle size=14 />
                                </span>
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::*;

    #[test]
    fn test_one_entry_per_job_in_order() {
        let html = render(|| view! { <ExperienceSection /> });
        assert_eq!(html.matches("<h3").count(), EXPERIENCES.len());
        let needles = EXPERIENCES
            .iter()
            .flat_map(|e| [escaped(&format!("@ {}", e.company)), e.period.to_string()])
            .collect::<Vec<_>>();
        assert_in_order(&html, &needles);
    }

    #[test]
    fn test_achievements_in_order() {
        let html = render(|| view! { <ExperienceSection /> });
        let total: usize = EXPERIENCES.iter().map(|e| e.achievements.len()).sum();
        assert_eq!(html.matches("<li").count(), total);
        let needles = EXPERIENCES
            .iter()
            .flat_map(|e| e.achievements.iter().map(|a| escaped(a)))
            .collect::<Vec<_>>();
        assert_in_order(&html, &needles);
    }
}

use leptos::prelude::*;

use crate::content::{Icon, ProjectEntry, SectionId, PROJECTS};
use crate::motion::{Motion, Pose};

use super::{icon::IconSvg, reveal::Reveal};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-24">
            <div class="max-w-7xl mx-auto px-6">
                <h2 class="text-3xl font-bold mb-16 flex items-center gap-3">
                    <span class="text-brand-primary font-mono text-xl">"03."</span>
                    " Featured Projects"
                </h2>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry, index: usize) -> impl IntoView {
    view! {
        <Reveal motion=Motion::in_view(Pose::shifted(0, 20)).staggered(index) class="glass-card group">
            <div class="aspect-video overflow-hidden relative">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                    referrerpolicy="no-referrer"
                />
                <div class="absolute inset-0 bg-brand-primary/20 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center">
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-3 bg-white text-bg-dark rounded-full shadow-xl"
                        aria-label=format!("{} repository", project.title)
                    >
                        <IconSvg icon=Icon::Github size=24 />
                    </a>
                </div>
            </div>
            <div class="p-6">
                <div class="flex gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-[10px] font-mono uppercase tracking-wider text-brand-primary px-2 py-0.5 rounded-full bg-brand-primary/10 border border-brand-primary/20">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="text-xl font-bold mb-3 group-hover:text-brand-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-zinc-400 text-sm leading-relaxed mb-6">{project.description}</p>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-sm font-medium flex items-center gap-2 text-white hover:text-brand-primary transition-colors"
                >
                    "View Repository"
                    <IconSvg icon=Icon::ExternalLink size=14 />
                </a>
            </div>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::*;

    #[test]
    fn test_one_card_per_project_in_order() {
        let html = render(|| view! { <ProjectsSection /> });
        assert_eq!(html.matches("<h3").count(), PROJECTS.len());
        let titles = PROJECTS
            .iter()
            .map(|p| format!(">{}</h3>", escaped(p.title)))
            .collect::<Vec<_>>();
        assert_in_order(&html, &titles);
    }

    #[test]
    fn test_cards_link_out_and_load_remote_images() {
        let html = render(|| view! { <ProjectsSection /> });
        assert_eq!(html.matches("View Repository").count(), PROJECTS.len());
        assert_eq!(html.matches("target=\"_blank\"").count(), PROJECTS.len() * 2);
        assert_eq!(
            html.matches("referrerpolicy=\"no-referrer\"").count(),
            PROJECTS.len()
        );
        let images = PROJECTS
            .iter()
            .map(|p| format!("src=\"{}\"", p.image))
            .collect::<Vec<_>>();
        assert_in_order(&html, &images);
    }
}

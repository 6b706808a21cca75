use leptos::prelude::*;

use crate::content::{Icon, SectionId, OWNER_NAME};
use crate::motion::{Motion, Pose};

use super::{icon::IconSvg, reveal::Reveal};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center pt-20 overflow-hidden">
            // background glow
            <div class="absolute top-1/4 -left-20 w-96 h-96 bg-brand-primary/10 blur-[120px] rounded-full" />
            <div class="absolute bottom-1/4 -right-20 w-96 h-96 bg-brand-secondary/10 blur-[120px] rounded-full" />

            <div class="max-w-7xl mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center relative z-10">
                <Reveal motion=Motion::on_mount(Pose::shifted(0, 30)).duration(600)>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-brand-primary/10 border border-brand-primary/20 text-brand-primary text-xs font-mono mb-6">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-brand-primary opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-brand-primary"></span>
                        </span>
                        "AVAILABLE FOR NEW OPPORTUNITIES"
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        "Ensuring " <span class="text-gradient">"Quality"</span> " Through "
                        <span class="italic font-serif">"Automation"</span>
                    </h1>
                    <p class="text-lg text-zinc-400 mb-8 max-w-xl leading-relaxed">
                        "Hi, I'm " <span class="text-white font-medium">{OWNER_NAME}</span>
                        ". An SDET with 3+ years of experience building robust automation frameworks and integrating Machine Learning into the testing lifecycle."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a href=SectionId::Projects.href() class="btn-primary flex items-center gap-2">
                            "View Projects"
                            <IconSvg icon=Icon::ExternalLink size=18 />
                        </a>
                        <a href=SectionId::Contact.href() class="btn-secondary">
                            "Contact Me"
                        </a>
                    </div>
                </Reveal>

                <Reveal
                    motion=Motion::on_mount(Pose::scaled(0.9)).duration(800).delay(200)
                    class="relative hidden lg:block"
                >
                    <CodeCard />
                    <ExpertiseBadge />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn CodeCard() -> impl IntoView {
    view! {
        <div class="glass-card p-8 border-white/10 bg-zinc-900/50 backdrop-blur-xl">
            <div class="flex items-center gap-2 mb-6 border-b border-white/5 pb-4">
                <div class="w-3 h-3 rounded-full bg-red-500/50" />
                <div class="w-3 h-3 rounded-full bg-yellow-500/50" />
                <div class="w-3 h-3 rounded-full bg-green-500/50" />
                <span class="ml-2 text-xs font-mono text-zinc-500">"test_suite_v2.py"</span>
            </div>
            <div class="font-mono text-sm space-y-2">
                <p class="text-brand-secondary">"import pytest"</p>
                <p class="text-brand-secondary">"from ml_model import QualityPredictor"</p>
                <p class="text-zinc-500 mt-4">"# Initializing AI-driven test suite"</p>
                <p>
                    <span class="text-purple-400">"def"</span>
                    " "
                    <span class="text-blue-400">"test_rag_system_accuracy"</span>
                    "():"
                </p>
                <p class="pl-4">
                    "predictor = QualityPredictor(model_path="
                    <span class="text-orange-300">"'./weights'"</span>
                    ")"
                </p>
                <p class="pl-4">"results = predictor.evaluate(test_data)"</p>
                <p class="pl-4 text-brand-primary">"assert results.accuracy > 0.95"</p>
                <p class="text-zinc-500 mt-4">"# Output:"</p>
                <p class="text-brand-primary flex items-center gap-2">
                    <IconSvg icon=Icon::CheckCircle size=14 />
                    "142 tests passed in 12.4s"
                </p>
            </div>
        </div>
    }
}

#[component]
fn ExpertiseBadge() -> impl IntoView {
    view! {
        <div class="absolute -bottom-6 -right-6 glass-card p-4 shadow-2xl border-brand-primary/20">
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 rounded-lg bg-brand-primary/20 flex items-center justify-center text-brand-primary">
                    <IconSvg icon=Icon::Cpu />
                </div>
                <div>
                    <p class="text-xs text-zinc-500 font-mono">"ML Expertise"</p>
                    <p class="text-sm font-bold">"Computer Vision & NLP"</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_utils::{assert_in_order, render};

    #[test]
    fn test_call_to_action_links() {
        let html = render(|| view! { <HeroSection /> });
        assert_in_order(
            &html,
            &[
                "href=\"#projects\"".to_string(),
                "View Projects".to_string(),
                "href=\"#contact\"".to_string(),
                "Contact Me".to_string(),
            ],
        );
    }

    #[test]
    fn test_hero_plays_on_mount() {
        let html = render(|| view! { <HeroSection /> });
        assert!(html.contains("translate(0px, 30px)"));
        assert!(html.contains("scale(0.9)"));
        assert!(html.contains("test_suite_v2.py"));
    }
}

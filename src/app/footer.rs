use leptos::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};

use super::icon::IconSvg;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="text-sm text-zinc-500 font-mono">
                    {format!("Designed & Built by {OWNER_NAME} © {BUILD_YEAR}")}
                </div>
                <div class="flex gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target=social.is_external().then_some("_blank")
                                    rel=social.is_external().then_some("noopener noreferrer")
                                    aria-label=social.label
                                    class="text-zinc-400 hover:text-white transition-colors"
                                >
                                    <IconSvg icon=social.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod icon;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use nav::NavigationBar;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="SDET building automation frameworks and bringing Machine Learning into the testing lifecycle."
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-bg-dark text-zinc-100 font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{OWNER_NAME} | SDET & Automation Engineer") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio, top to bottom.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="selection:bg-brand-primary/30">
            <NavigationBar />
            <main>
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ExperienceSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod test_utils {
    use leptos::prelude::*;

    /// Renders a view to an HTML string inside a fresh reactive owner.
    pub fn render<F, V>(f: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView,
    {
        let owner = Owner::new();
        owner.set();
        f().into_view().to_html()
    }

    /// Text as it appears after HTML escaping.
    pub fn escaped(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Asserts every needle occurs in `html`, in the given order.
    pub fn assert_in_order(html: &str, needles: &[String]) {
        let mut pos = 0;
        for needle in needles {
            let found = html[pos..]
                .find(needle.as_str())
                .unwrap_or_else(|| panic!("{needle:?} missing or out of order"));
            pos += found + needle.len();
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::test_utils::*;
    use super::*;
    use crate::content::{SectionId, NAV_LINKS};

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render(|| view! { <PortfolioPage /> });
        let order = SectionId::ALL
            .iter()
            .map(|s| format!("id=\"{}\"", s.as_str()))
            .collect::<Vec<_>>();
        assert_in_order(&html, &order);
        assert!(html.find("<nav").unwrap() < html.find("<main").unwrap());
        assert!(html.find("</main>").unwrap() < html.find("<footer").unwrap());
    }

    #[test]
    fn test_nav_anchors_resolve_to_unique_sections() {
        let html = render(|| view! { <PortfolioPage /> });
        for link in NAV_LINKS {
            let id = format!("id=\"{}\"", link.target.as_str());
            assert_eq!(html.matches(&id).count(), 1, "section {id} must exist once");
            assert!(html.contains(&format!("href=\"{}\"", link.target.href())));
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = render(|| view! { <PortfolioPage /> });
        let second = render(|| view! { <PortfolioPage /> });
        assert_eq!(first, second);
    }

    #[test]
    fn test_page_starts_with_transparent_header() {
        let html = render(|| view! { <PortfolioPage /> });
        assert!(html.contains("bg-transparent py-6"));
        assert!(!html.contains("backdrop-blur-md border-b"));
    }
}

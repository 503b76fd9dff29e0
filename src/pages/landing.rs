use crate::components::finance::FinanceSections;
use crate::components::hero::ParallaxHero;
use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    let page_css = r#"
        .landing-page {
            min-height: 100vh;
            background: linear-gradient(to bottom, #020617, #020617, #0f172a);
            color: #dbeafe;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        }
        .landing-footer {
            margin: 0 auto;
            max-width: 72rem;
            padding: 3rem 1.5rem;
        }
        .footer-card {
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 1rem;
            background: rgba(255, 255, 255, 0.05);
            padding: 1.5rem;
            text-align: center;
            font-size: 0.875rem;
            color: rgba(191, 219, 254, 0.7);
        }
        @media (min-width: 768px) {
            .landing-footer {
                padding: 3rem 2.5rem;
            }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{page_css}</style>
            <ParallaxHero />
            <FinanceSections />
            <footer class="landing-footer">
                <div class="footer-card">
                    {"Built for performance • GPU-accelerated parallax • Responsive across devices"}
                </div>
            </footer>
        </div>
    }
}

use crate::components::parallax::use_parallax;
use crate::config;
use yew::prelude::*;

#[function_component(ParallaxHero)]
pub fn parallax_hero() -> Html {
    let background = use_node_ref();
    let midground = use_node_ref();
    let foreground = use_node_ref();

    // Different speeds create depth; smaller reads as farther away.
    use_parallax(background.clone(), 0.08);
    use_parallax(midground.clone(), 0.14);
    use_parallax(foreground.clone(), 0.22);

    let hero_css = r#"
        .hero {
            position: relative;
            height: 85vh;
            min-height: 560px;
            width: 100%;
            overflow: hidden;
            background: #020617;
        }
        .hero-scene {
            position: absolute;
            inset: 0;
        }
        .hero-scene iframe {
            width: 100%;
            height: 100%;
            border: none;
        }
        .hero-shade {
            pointer-events: none;
            position: absolute;
            inset: 0;
            background: linear-gradient(to bottom,
                rgba(2, 6, 23, 0.4),
                rgba(2, 6, 23, 0.1),
                rgba(2, 6, 23, 0.7));
        }
        .hero-glow {
            pointer-events: none;
            position: absolute;
            inset: 0;
            background: radial-gradient(80% 60% at 50% 0%,
                rgba(15, 23, 42, 0.0),
                rgba(15, 23, 42, 0.6));
        }
        .hero-accents {
            position: absolute;
            inset: 0;
        }
        .accent {
            position: absolute;
            filter: blur(40px);
        }
        .accent-cyan {
            right: 2rem;
            top: 6rem;
            height: 7rem;
            width: 7rem;
            border-radius: 1rem;
            background: rgba(34, 211, 238, 0.1);
        }
        .accent-blue {
            left: 2.5rem;
            bottom: 6rem;
            height: 6rem;
            width: 6rem;
            border-radius: 50%;
            background: rgba(59, 130, 246, 0.1);
        }
        .hero-content {
            position: relative;
            z-index: 10;
            margin: 0 auto;
            display: flex;
            height: 100%;
            max-width: 72rem;
            flex-direction: column;
            align-items: flex-start;
            justify-content: center;
            padding: 0 1.5rem;
        }
        .hero-badge {
            display: inline-flex;
            align-items: center;
            margin-bottom: 0.75rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.05);
            padding: 0.25rem 0.75rem;
            font-size: 0.75rem;
            color: #dbeafe;
            backdrop-filter: blur(8px);
        }
        .hero-title {
            margin: 0;
            font-size: 2.75rem;
            font-weight: 600;
            letter-spacing: -0.02em;
            color: white;
        }
        .hero-subtitle {
            margin-top: 1rem;
            max-width: 42rem;
            color: rgba(219, 234, 254, 0.9);
        }
        .hero-cta-group {
            margin-top: 2rem;
            display: flex;
            align-items: center;
            gap: 0.75rem;
        }
        .hero-cta {
            border: none;
            border-radius: 0.5rem;
            background: #3b82f6;
            padding: 0.625rem 1.25rem;
            font-size: 0.875rem;
            font-weight: 500;
            color: white;
            cursor: pointer;
            box-shadow: 0 10px 15px rgba(59, 130, 246, 0.25);
            transition: background 0.2s ease;
        }
        .hero-cta:hover {
            background: #60a5fa;
        }
        .hero-cta.secondary {
            border: 1px solid rgba(255, 255, 255, 0.15);
            background: rgba(255, 255, 255, 0.05);
            color: rgba(255, 255, 255, 0.9);
            box-shadow: none;
            backdrop-filter: blur(8px);
        }
        .hero-cta.secondary:hover {
            background: rgba(255, 255, 255, 0.1);
        }
        @media (min-width: 768px) {
            .hero-title {
                font-size: 3.75rem;
            }
            .hero-content {
                padding: 0 2.5rem;
            }
        }
    "#;

    html! {
        <section class="hero">
            <style>{hero_css}</style>
            <div class="hero-scene" ref={background}>
                <iframe src={config::SCENE_URL} title="3D cover scene" loading="lazy"></iframe>
            </div>
            <div class="hero-shade"></div>
            <div class="hero-glow"></div>
            <div class="hero-accents" ref={midground}>
                <div class="accent accent-cyan"></div>
                <div class="accent accent-blue"></div>
            </div>
            <div class="hero-content" ref={foreground}>
                <p class="hero-badge">{"Premium Finance Platform"}</p>
                <h1 class="hero-title">{"Smooth Parallax for Modern Fintech"}</h1>
                <p class="hero-subtitle">
                    {"A subtle, high-performance scroll effect designed for dashboards, analytics, and investor-grade experiences."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta">{"Get Started"}</button>
                    <button class="hero-cta secondary">{"View Demo"}</button>
                </div>
            </div>
        </section>
    }
}

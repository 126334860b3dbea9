//! Documentation Page

use leptos::prelude::*;

use crate::components::{FaqCard, FeatureCard, QuickLinkCard, StepCard};
use crate::content::{CHAT_API_SNIPPET, DISCORD_URL, FAQ, FEATURES, GUIDE_STEPS, QUICK_LINKS};
use crate::splash::SplashGate;

#[component]
pub fn DocsPage() -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title("Documentation | PrivGPT Studio - User Guide & API Reference");
    }

    view! {
        <SplashGate>
            <div class="docs">
                <header class="hero">
                    <span class="badge">"📚 Documentation"</span>
                    <h1>"Documentation"</h1>
                    <p class="tagline">
                        "Everything you need to know about using "
                        <strong>"PrivGPT Studio"</strong>
                        ". From getting started to advanced features, find all the information here."
                    </p>
                </header>

                <section class="quick-links">
                    <h2>"Quick Start Guide"</h2>
                    <div class="card-grid">
                        {QUICK_LINKS
                            .iter()
                            .map(|link| view! { <QuickLinkCard link=*link /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="getting-started">
                    <h2>"Getting Started"</h2>
                    <div class="card-stack">
                        {GUIDE_STEPS
                            .iter()
                            .map(|step| view! { <StepCard step=*step /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="features">
                    <h2>"Key Features"</h2>
                    <div class="card-grid">
                        {FEATURES
                            .iter()
                            .map(|feature| view! { <FeatureCard feature=*feature /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="api-reference">
                    <h2>"API Reference"</h2>
                    <div class="card">
                        <h3>"Chat API"</h3>
                        <p>"Integrate PrivGPT Studio's AI capabilities into your applications."</p>
                        <pre><code>{CHAT_API_SNIPPET}</code></pre>
                        <p class="note">
                            "For detailed API documentation, visit our "
                            <a href="/api-docs">"API Docs"</a>
                            " page."
                        </p>
                    </div>
                </section>

                <section class="faq">
                    <h2>"Frequently Asked Questions"</h2>
                    <div class="card-stack">
                        {FAQ
                            .iter()
                            .map(|entry| view! { <FaqCard entry=*entry /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="support">
                    <h2>"Need More Help?"</h2>
                    <p>
                        "Can't find what you're looking for? Our community and support team are here to help."
                    </p>
                    <div class="cta">
                        <a href=DISCORD_URL class="btn btn-primary">"Join Discord"</a>
                        <a href="/chat" class="btn">"Try Live Chat"</a>
                    </div>
                </section>
            </div>
        </SplashGate>
    }
}

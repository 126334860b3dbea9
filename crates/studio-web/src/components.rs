//! UI Components

use leptos::prelude::*;

use crate::content::{FaqEntry, Feature, GuideStep, QuickLink};

/// Quick-start card
#[component]
pub fn QuickLinkCard(link: QuickLink) -> impl IntoView {
    view! {
        <div class="card quick-link">
            <span class="glyph">{link.glyph}</span>
            <h3>{link.title}</h3>
            <p>{link.blurb}</p>
        </div>
    }
}

/// Numbered getting-started step with its checklist
#[component]
pub fn StepCard(step: GuideStep) -> impl IntoView {
    view! {
        <div class="card step">
            <h3>{step.title}</h3>
            <p>{step.summary}</p>
            <ul>
                {step.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// Key-feature card
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="card feature">
            <span class="glyph">{feature.glyph}</span>
            <h3>{feature.title}</h3>
            <p>{feature.blurb}</p>
        </div>
    }
}

/// Question/answer card
#[component]
pub fn FaqCard(entry: FaqEntry) -> impl IntoView {
    view! {
        <div class="card faq">
            <h3>{entry.question}</h3>
            <p>{entry.answer}</p>
        </div>
    }
}

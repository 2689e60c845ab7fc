//! Numbered progress markers above a multi-step form.

use leptos::prelude::*;

use crate::state::wizard::FormWizardState;

#[component]
pub fn StepIndicator(wizard: RwSignal<FormWizardState>) -> impl IntoView {
    let titles = wizard.with_untracked(|w| w.steps.iter().map(|s| s.title).collect::<Vec<_>>());

    view! {
        <div class="form-steps">
            {titles
                .into_iter()
                .enumerate()
                .map(|(index, title)| {
                    view! {
                        <div class=move || wizard.with(|w| w.indicator(index).css_class())>
                            <span class="step-number">{index + 1}</span>
                            <span class="step-title">{title}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

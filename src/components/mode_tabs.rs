//! Desktop mode tab strip.
//!
//! Roving tabindex: only the active tab sits in the normal tab order, arrow
//! keys (and Home/End or a mode's shortcut character) move selection and
//! focus together.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::models::MODES;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/mode_tabs.module.css");

/// Tab strip presentation adapter for the mode selector.
#[component]
pub fn ModeTabs(#[prop(into)] reduced_motion: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Selection moved via keyboard: focus follows the new active tab.
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ctx.handle_key_navigation(&ev.key()) {
            ev.prevent_default();
            dom::focus_element(&format!("#mode-tab-{}", ctx.selector.active_mode().id()));
        }
    };

    let indicator_class = move || {
        if reduced_motion.get() {
            format!("{} {}", css::indicator, css::noMotion)
        } else {
            css::indicator.to_string()
        }
    };

    view! {
        <div class=css::tablist role="tablist" aria-label="Cipher mode">
            {MODES.iter().map(|mode| {
                let mode = *mode;
                let is_active = Signal::derive(move || ctx.selector.active_mode() == mode);
                view! {
                    <button
                        id=format!("mode-tab-{}", mode.id())
                        class=move || {
                            if is_active.get() {
                                format!("{} {}", css::tab, css::tabActive)
                            } else {
                                css::tab.to_string()
                            }
                        }
                        role="tab"
                        aria-selected=move || is_active.get().to_string()
                        tabindex=move || if is_active.get() { "0" } else { "-1" }
                        title=format!("{} (shortcut: {})", mode.description(), mode.shortcut())
                        on:click=move |_| ctx.select_mode(mode)
                        on:keydown=on_keydown
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}

            // Sliding underline under the active tab.
            <div
                class=indicator_class
                style:width=format!("{}%", 100.0 / MODES.len() as f64)
                style:transform=move || {
                    format!("translateX({}%)", ctx.selector.active_index() * 100)
                }
            ></div>
        </div>
    }
}

//! Mobile collapsible mode menu.
//!
//! The toggle shows the active mode; the open list closes on selection, on
//! an explicit toggle, or on a pointer interaction outside the menu region
//! (full-screen backdrop).

use leptos::prelude::CollectView;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::MODES;

stylance::import_crate_style!(css, "src/components/mode_menu.module.css");

/// Collapsible-menu presentation adapter for the mode selector.
#[component]
pub fn ModeMenu(#[prop(into)] reduced_motion: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_open = Signal::derive(move || ctx.selector.is_menu_open());

    let chevron_class = move || {
        let mut class = css::chevron.to_string();
        if is_open.get() {
            class = format!("{} {}", class, css::chevronOpen);
        }
        if reduced_motion.get() {
            class = format!("{} {}", class, css::noMotion);
        }
        class
    };

    view! {
        // Pointer interaction outside the menu region dismisses it.
        <Show when=move || is_open.get()>
            <div class=css::backdrop on:pointerdown=move |_| ctx.close_menu()></div>
        </Show>

        <div class=css::menu>
            <button
                class=css::toggle
                aria-haspopup="listbox"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| ctx.toggle_menu()
            >
                <span class=css::toggleLabel>
                    {move || ctx.selector.active_mode().label()}
                </span>
                <span class=chevron_class aria-hidden="true">
                    <Icon icon=ic::CHEVRON_RIGHT />
                </span>
            </button>

            <Show when=move || is_open.get()>
                <ul class=css::list role="listbox" aria-label="Cipher mode">
                    {MODES.iter().map(|mode| {
                        let mode = *mode;
                        let is_active = Signal::derive(move || {
                            ctx.selector.active_mode() == mode
                        });
                        // Stagger entries outward from the active one.
                        let delay = move || {
                            if reduced_motion.get() {
                                "0ms".to_string()
                            } else {
                                format!("{}ms", ctx.selector.index_delta(mode).unsigned_abs() * 20)
                            }
                        };
                        view! {
                            <li class=css::item>
                                <button
                                    class=move || {
                                        if is_active.get() {
                                            format!("{} {}", css::option, css::optionActive)
                                        } else {
                                            css::option.to_string()
                                        }
                                    }
                                    role="option"
                                    aria-selected=move || is_active.get().to_string()
                                    style:transition-delay=delay
                                    on:click=move |_| ctx.select_mode(mode)
                                >
                                    <span class=css::optionLabel>{mode.label()}</span>
                                    <span class=css::optionHint>{mode.description()}</span>
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

//! Key and IV/counter input fields.
//!
//! Every keystroke runs the hex field validator and records the result in
//! the validation gate; the gate itself is only consulted when an operation
//! is attempted.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::config::{IV_HEX_LEN, KEY_HEX_LEN};

stylance::import_crate_style!(css, "src/components/fields.module.css");

/// Key and IV entry panel. The IV row is hidden entirely for modes that do
/// not consume one, and its label follows the active mode ("counter" for
/// CTR).
#[component]
pub fn KeyFields() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_key_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.set_key_input(input.value());
    };

    let on_iv_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.set_iv_input(input.value());
    };

    let key_class = move || {
        if ctx.validation.key_valid.get() {
            css::input.to_string()
        } else {
            format!("{} {}", css::input, css::inputInvalid)
        }
    };

    let iv_class = move || {
        if ctx.validation.iv_valid.get() {
            css::input.to_string()
        } else {
            format!("{} {}", css::input, css::inputInvalid)
        }
    };

    view! {
        <div class=css::fields>
            <div class=css::row>
                <label class=css::label for="key-input">"Key"</label>
                <input
                    id="key-input"
                    type="text"
                    class=key_class
                    autocomplete="off"
                    spellcheck="false"
                    placeholder=format!("{} hex characters", KEY_HEX_LEN)
                    prop:value=ctx.key_text
                    on:input=on_key_input
                />
                <button
                    class=css::generate
                    title="Generate a random key"
                    on:click=move |_| ctx.regenerate_key()
                >
                    "Generate"
                </button>
            </div>

            <Show when=move || ctx.selector.active_mode().requires_iv()>
                <div class=css::row>
                    <label class=css::label for="iv-input">
                        {move || ctx.selector.active_mode().iv_label()}
                    </label>
                    <input
                        id="iv-input"
                        type="text"
                        class=iv_class
                        autocomplete="off"
                        spellcheck="false"
                        placeholder=format!("{} hex characters", IV_HEX_LEN)
                        prop:value=ctx.iv_text
                        on:input=on_iv_input
                    />
                    <button
                        class=css::generate
                        title="Generate a random value"
                        on:click=move |_| ctx.regenerate_iv()
                    >
                        "Generate"
                    </button>
                </div>
            </Show>
        </div>
    }
}

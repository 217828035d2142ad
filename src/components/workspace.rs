//! Main workbench layout.
//!
//! Picks the mode-selector presentation from the viewport (tab strip on
//! desktop, collapsible menu on mobile), hosts the key/IV fields, the image
//! upload, the encrypt/decrypt actions, and the blocking-message banner.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::app::AppContext;
use crate::components::fields::KeyFields;
use crate::components::icons as ic;
use crate::components::mode_menu::ModeMenu;
use crate::components::mode_tabs::ModeTabs;
use crate::config::{APP_NAME, APP_TAGLINE, MOBILE_QUERY, REDUCED_MOTION_QUERY};
use crate::models::LoadedImage;
use crate::utils::{dom, format_size};

stylance::import_crate_style!(css, "src/components/workspace.module.css");

/// Root workbench component.
#[component]
pub fn Workspace() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_mobile = use_media_query(MOBILE_QUERY);
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1 class=css::brand>
                    <span class=css::brandIcon aria-hidden="true">
                        <Icon icon=ic::LOCK />
                    </span>
                    {APP_NAME}
                </h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </header>

            // Mode selector: one state machine, two presentations.
            <Show
                when=move || is_mobile.get()
                fallback=move || view! { <ModeTabs reduced_motion=reduced_motion /> }
            >
                <ModeMenu reduced_motion=reduced_motion />
            </Show>

            <KeyFields />

            <UploadPanel />

            <div class=css::actions>
                <button
                    class=format!("{} {}", css::action, css::actionPrimary)
                    on:click=move |_| ctx.run_operation(true)
                >
                    "Encrypt"
                </button>
                <button
                    class=css::action
                    on:click=move |_| ctx.run_operation(false)
                >
                    "Decrypt"
                </button>
                <button
                    class=css::clear
                    title="Clear everything"
                    on:click=move |_| ctx.clear_all()
                >
                    <span class=css::clearIcon aria-hidden="true">
                        <Icon icon=ic::CLOSE />
                    </span>
                    "Clear"
                </button>
            </div>

            <Show when=move || ctx.banner.with(|b| b.is_some())>
                <div class=css::banner role="alert">
                    {move || ctx.banner.get().unwrap_or_default()}
                </div>
            </Show>

            <OutputPanel />
        </div>
    }
}

/// Image upload input plus a caption for the loaded file.
#[component]
fn UploadPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_file_change = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let Some(files) = input.files() else { return };
        let Some(file) = files.get(0) else { return };

        let name = file.name();
        let mime = file.type_();
        spawn_local(async move {
            let bytes = ctx
                .hooks
                .safe_async(None, async move {
                    let buffer = JsFuture::from(file.array_buffer()).await?;
                    Ok::<_, wasm_bindgen::JsValue>(Some(
                        js_sys::Uint8Array::new(&buffer).to_vec(),
                    ))
                })
                .await;
            if let Some(bytes) = bytes {
                ctx.load_image(LoadedImage::new(name, mime, bytes));
            }
        });
    };

    view! {
        <div class=css::upload>
            <label class=css::uploadLabel for="image-input">"Image"</label>
            <input
                id="image-input"
                type="file"
                class=css::uploadInput
                accept="image/*"
                on:change=on_file_change
            />
            <span class=css::uploadMeta>
                {move || {
                    ctx.plain_image.with(|image| match image {
                        Some(image) => format!("{} ({})", image.name, format_size(image.bytes.len())),
                        None => "no image loaded".to_string(),
                    })
                }}
            </span>
        </div>
    }
}

/// Encrypted/decrypted outputs with download links.
#[component]
fn OutputPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let source_name = move || {
        ctx.plain_image
            .with(|i| i.as_ref().map(|i| i.name.clone()))
            .unwrap_or_else(|| "image".to_string())
    };
    let source_mime = move || {
        ctx.plain_image
            .with(|i| i.as_ref().map(|i| i.mime.clone()))
            .unwrap_or_default()
    };

    let download_encrypted = move |_: ev::MouseEvent| {
        let Some(data) = ctx.encrypted_image.get() else { return };
        let name = ctx.plain_image.with(|i| {
            i.as_ref()
                .map(|i| format!("{}.enc", i.stem()))
                .unwrap_or_else(|| "image.enc".to_string())
        });
        ctx.hooks
            .safe_sync((), || dom::download_bytes(&data, &name, "application/octet-stream"));
    };

    let download_decrypted = move |_: ev::MouseEvent| {
        let Some(data) = ctx.decrypted_image.get() else { return };
        let name = format!("decrypted-{}", source_name());
        ctx.hooks
            .safe_sync((), || dom::download_bytes(&data, &name, &source_mime()));
    };

    view! {
        <div class=css::outputs>
            <Show when=move || ctx.encrypted_image.with(|e| e.is_some())>
                <div class=css::outputRow>
                    <span class=css::outputLabel>"Encrypted"</span>
                    <span class=css::outputMeta>
                        {move || {
                            ctx.encrypted_image
                                .with(|e| e.as_ref().map(|e| format_size(e.len())))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        class=css::download
                        title="Download encrypted bytes"
                        on:click=download_encrypted
                    >
                        <Icon icon=ic::DOWNLOAD />
                    </button>
                </div>
            </Show>

            <Show when=move || ctx.decrypted_image.with(|d| d.is_some())>
                <div class=css::outputRow>
                    <span class=css::outputLabel>"Decrypted"</span>
                    <span class=css::outputMeta>
                        {move || {
                            ctx.decrypted_image
                                .with(|d| d.as_ref().map(|d| format_size(d.len())))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        class=css::download
                        title="Download decrypted bytes"
                        on:click=download_decrypted
                    >
                        <Icon icon=ic::DOWNLOAD />
                    </button>
                </div>
            </Show>
        </div>
    }
}

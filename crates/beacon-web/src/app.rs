//! Console View
//!
//! The single view of the beacon: header with the inquiry input, the bento
//! directory grid, the footer, and the four overlays. All state flows
//! through one [`ConsoleState`] signal so every guard and transition lives
//! in `beacon-core`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use beacon_core::{ConsoleState, InquiryDispatcher, Overlay};
use beacon_gemini::GeminiOracle;

use crate::components::{LinkCard, OverlayPanel, render_markdown};
use crate::content;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ConsoleState::new());

    // The browser has no runtime environment, so a key present at build
    // time is baked in (as the original bundler did); otherwise the process
    // environment is consulted at call time and its absence settles as an
    // ordinary failed inquiry.
    let oracle = match option_env!("GEMINI_API_KEY") {
        Some(key) => GeminiOracle::with_key(key),
        None => GeminiOracle::from_env(),
    };
    let dispatcher = Arc::new(InquiryDispatcher::with_defaults(Arc::new(oracle)));

    let submit = {
        let dispatcher = Arc::clone(&dispatcher);
        move || {
            // Silent no-op on blank input or while a request is in flight.
            let Some(prompt) = state.try_update(ConsoleState::begin_inquiry).flatten() else {
                return;
            };
            let dispatcher = Arc::clone(&dispatcher);
            spawn_local(async move {
                let outcome = dispatcher.dispatch(&prompt).await;
                state.update(|s| s.settle(outcome));
            });
        }
    };
    let submit_on_click = submit.clone();
    let submit_on_enter = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    let busy = move || state.with(ConsoleState::is_busy);

    // Logo click: scroll to top and reload; a reload discards every piece
    // of view state at once, exactly like a fresh mount.
    let on_logo = move |_| {
        state.update(ConsoleState::reset);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
            let _ = window.location().reload();
        }
    };

    let open = move |overlay: Overlay| state.update(|s| s.open(overlay));
    let close_all = move || state.update(ConsoleState::close_all);

    view! {
        <header class="console-header">
            <div class="logo-title-group">
                <div class="logo-wrap" on:click=on_logo inner_html=content::LOGO_SVG></div>
                <h1 class="site-title">{content::SITE_TITLE}</h1>
            </div>

            <div class="gaia-prompt-container">
                <div class="gaia-prompt-wrapper">
                    <i class="fas fa-brain gaia-icon" class:overload=busy></i>
                    <div class="gaia-input-group">
                        <input
                            type="text"
                            class="gaia-input"
                            placeholder=content::PROMPT_PLACEHOLDER
                            autocomplete="off"
                            prop:value=move || state.with(|s| s.query().to_string())
                            on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                            on:keydown=submit_on_enter
                            disabled=busy
                        />
                        <div class="gaia-status">
                            {move || if busy() { content::STATUS_BUSY } else { content::STATUS_IDLE }}
                        </div>
                    </div>
                    <button class="gaia-submit" on:click=move |_| submit_on_click() disabled=busy>
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </div>
            </div>
        </header>

        <main class="bento-grid">
            {content::SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <section class=format!("bento-item {}", section.class)>
                            <h2>{section.title}</h2>
                            <p>{section.tagline}</p>
                            <ul class="link-grid">
                                {section
                                    .entries
                                    .iter()
                                    .map(|entry| view! { <LinkCard entry=entry /> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </main>

        <footer>
            <p class="footer-status">
                {content::FOOTER_STATUS}
                <br />
                <br />
                <a href=content::LEGACY_ARCHIVE_HREF>"🏛️ 访问旧世界数据库 (Legacy Archive)"</a>
                " | "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open(Overlay::Mandate);
                    }
                >
                    "📜 文明纲领 (The Mandate)"
                </a>
                " | "
                <a
                    href="#"
                    class="footer-collection-link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open(Overlay::Collection);
                    }
                >
                    "📚 The Mandate Collection"
                </a>
            </p>
            <p class="footer-blurb">{content::FOOTER_BLURB}</p>
            <p class="footer-legal">
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open(Overlay::Privacy);
                    }
                >
                    "Privacy Policy"
                </a>
                " | "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open(Overlay::Privacy);
                    }
                >
                    "Terms of Service"
                </a>
                " | "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open(Overlay::Privacy);
                    }
                >
                    "Cookie Policy"
                </a>
                " | "
                <a href=content::CONTACT_MAILTO target="_blank" rel="noopener noreferrer">
                    "Contact"
                </a>
            </p>
            <p class="footer-copyright">{content::FOOTER_COPYRIGHT}</p>
        </footer>

        <OverlayPanel
            open=Signal::derive(move || state.with(|s| s.is_open(Overlay::Mandate)))
            on_close=move || state.update(|s| s.close(Overlay::Mandate))
            on_backdrop=close_all
        >
            <h2 class="overlay-title">{content::MANDATE_TITLE}</h2>
            <div class="mandate-text" inner_html=content::MANDATE_HTML></div>
        </OverlayPanel>

        <OverlayPanel
            open=Signal::derive(move || state.with(|s| s.is_open(Overlay::Response)))
            on_close=move || state.update(|s| s.close(Overlay::Response))
            on_backdrop=close_all
        >
            <h2 class="overlay-title">
                <i class="fas fa-brain"></i>
                " "
                {content::RESPONSE_TITLE}
            </h2>
            <div class="mandate-text">
                <div
                    class="markdown-body"
                    inner_html=move || state.with(|s| render_markdown(s.response()))
                ></div>
            </div>
        </OverlayPanel>

        <OverlayPanel
            open=Signal::derive(move || state.with(|s| s.is_open(Overlay::Privacy)))
            on_close=move || state.update(|s| s.close(Overlay::Privacy))
            on_backdrop=close_all
            narrow=true
        >
            <h2 class="overlay-title">
                <i class="fas fa-shield-alt"></i>
                " "
                {content::PRIVACY_TITLE}
            </h2>
            <div class="mandate-text" inner_html=content::PRIVACY_HTML></div>
        </OverlayPanel>

        <OverlayPanel
            open=Signal::derive(move || state.with(|s| s.is_open(Overlay::Collection)))
            on_close=move || state.update(|s| s.close(Overlay::Collection))
            on_backdrop=close_all
            narrow=true
        >
            <h2 class="overlay-title">
                <i class="fas fa-book-open"></i>
                " "
                {content::COLLECTION_TITLE}
            </h2>
            <div class="mandate-text collection-body">
                <div class="book-card">
                    <div class="book-card-accent"></div>
                    <div class="book-card-logo" inner_html=content::LOGO_SVG></div>
                    <h3 class="book-card-series">"The Promethean"</h3>
                    <h3 class="book-card-title">"Mandate"</h3>
                    <div class="book-card-footer">"TYPE I CIVILIZATION"</div>
                </div>
                <p class="collection-pitch">{content::COLLECTION_PITCH}</p>
                <div class="collection-buttons">
                    <a
                        href=content::KINDLE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="amazon-btn"
                    >
                        <i class="fab fa-amazon"></i>
                        " Get Kindle Edition"
                    </a>
                    <a
                        href=content::PAPERBACK_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="amazon-btn"
                    >
                        <i class="fas fa-book"></i>
                        " Get Paperback Edition"
                    </a>
                </div>
                <div class="collection-author">
                    <i class="fas fa-pen-nib"></i>
                    " Author: "
                    <strong>{content::COLLECTION_AUTHOR}</strong>
                </div>
            </div>
        </OverlayPanel>
    }
}

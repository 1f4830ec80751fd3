//! UI Components

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::content::LinkEntry;

/// Overlay panel shown above the main content
///
/// Dismissed by the explicit close control or by a click landing exactly on
/// the dimmed backdrop; a click inside the panel content never closes it.
#[component]
pub fn OverlayPanel(
    /// Whether the overlay is currently shown
    #[prop(into)]
    open: Signal<bool>,
    /// Explicit close control inside the panel
    #[prop(into)]
    on_close: Callback<()>,
    /// Click on the backdrop region
    #[prop(into)]
    on_backdrop: Callback<()>,
    /// Narrow panel variant (privacy / collection)
    #[prop(optional)]
    narrow: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal"
            class:open=move || open.get()
            on:click=move |ev| {
                // Only when the click target is the backdrop itself, never
                // when it bubbled up from inside the panel.
                if ev.target() == ev.current_target() {
                    on_backdrop.run(());
                }
            }
        >
            <div class="modal-content" class:narrow=narrow>
                <span class="close-btn" on:click=move |_| on_close.run(())>
                    "\u{d7}"
                </span>
                {children()}
            </div>
        </div>
    }
}

/// One hyperlink card in the directory grid
#[component]
pub fn LinkCard(entry: &'static LinkEntry) -> impl IntoView {
    view! {
        <li>
            <a href=entry.href target="_blank" rel="noopener noreferrer">
                <i class=format!("{} link-icon", entry.icon)></i>
                <div class="link-content">
                    <strong>{entry.name}</strong>
                    <span>{entry.blurb}</span>
                </div>
            </a>
        </li>
    }
}

/// Render the oracle's answer as HTML
///
/// Raw inline/block HTML events are dropped before rendering; the service
/// text is otherwise passed through verbatim.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

//! Page controller: host skeleton, feed rendering, language toggle, initialization.

use crate::article::Article;
use crate::card::create_card;
use crate::dom::{Display, Document, DomError, NodeId};
use crate::fetcher::ArticleFetcher;
use crate::i18n::{Language, PAGE_STRINGS};
use tracing::{debug, info};

/// Id of the container cards are rendered into.
pub const FEED_ID: &str = "news-feed";

/// Id of the checkbox that switches summaries to Hindi.
pub const TOGGLE_ID: &str = "langToggle";

/// Build the host page the controller runs against.
///
/// Contains a heading, the `langToggle` checkbox with its label, and the
/// `news-feed` container holding a loading placeholder.
pub fn host_page() -> Document {
    let mut doc = Document::new();
    doc.set_title(PAGE_STRINGS.page_heading);

    let container = doc.create_element("div");
    doc.set_class_name(container, "container py-4");

    let heading = doc.create_element("h1");
    doc.set_class_name(heading, "mb-3");
    doc.set_text_content(heading, PAGE_STRINGS.page_heading);

    let switch = doc.create_element("div");
    doc.set_class_name(switch, "form-check form-switch mb-3");

    let toggle = doc.create_element("input");
    doc.set_id(toggle, TOGGLE_ID);
    doc.set_class_name(toggle, "form-check-input");
    doc.set_attribute(toggle, "type", "checkbox");

    let label = doc.create_element("label");
    doc.set_class_name(label, "form-check-label");
    doc.set_attribute(label, "for", TOGGLE_ID);
    doc.set_text_content(label, PAGE_STRINGS.toggle_label);

    doc.append_child(switch, toggle);
    doc.append_child(switch, label);

    let feed = doc.create_element("div");
    doc.set_id(feed, FEED_ID);
    let loading = doc.create_element("div");
    doc.set_class_name(loading, "text-muted");
    doc.set_text_content(loading, PAGE_STRINGS.loading);
    doc.append_child(feed, loading);

    for child in [heading, switch, feed] {
        doc.append_child(container, child);
    }
    let body = doc.body();
    doc.append_child(body, container);

    doc
}

/// Show the summaries for the language selected by `show_hindi` and hide all others.
///
/// Visibility is recomputed from scratch for every summary element on the page.
pub fn toggle_language(doc: &mut Document, show_hindi: bool) {
    let shown = Language::from_toggle(show_hindi);

    for language in Language::all() {
        let visibility = if language == shown {
            Display::Default
        } else {
            Display::None
        };
        let nodes = doc.get_elements_by_class_name(language.summary_class());
        debug!(
            "Setting {} {} summaries to {:?}",
            nodes.len(),
            language.name(),
            visibility
        );
        for node in nodes {
            doc.set_display(node, visibility);
        }
    }
}

/// Replace the feed contents with one card per article, or the empty-feed message.
///
/// Returns the number of cards rendered. New cards show the language the toggle
/// currently selects.
pub fn render_feed(doc: &mut Document, articles: &[Article]) -> Result<usize, DomError> {
    let feed = doc.require_element_by_id(FEED_ID)?;
    doc.clear(feed);

    if articles.is_empty() {
        let alert = doc.create_element("div");
        doc.set_class_name(alert, "alert alert-info");
        doc.set_text_content(alert, PAGE_STRINGS.no_articles);
        doc.append_child(feed, alert);
        return Ok(0);
    }

    let shown = Language::from_toggle(toggle_checked(doc));
    for article in articles {
        let card = create_card(doc, article, shown);
        doc.append_child(feed, card);
    }

    Ok(articles.len())
}

fn toggle_checked(doc: &Document) -> bool {
    doc.get_element_by_id(TOGGLE_ID)
        .map(|toggle| doc.element(toggle).is_checked())
        .unwrap_or(false)
}

/// Run the page-load flow: fetch, render, and wire the language toggle.
///
/// Running it again on the same document re-renders the feed and leaves a
/// single toggle listener in place.
///
/// Fetch failures never surface here; they arrive as an empty list and the
/// feed shows the empty message. The only error is a host page missing
/// `news-feed` or `langToggle`.
pub async fn initialize(doc: &mut Document, fetcher: &ArticleFetcher) -> Result<usize, DomError> {
    doc.require_element_by_id(FEED_ID)?;

    let articles = fetcher.fetch_articles().await;
    let rendered = render_feed(doc, &articles)?;
    if rendered == 0 {
        info!("No articles to show");
        return Ok(0);
    }

    let toggle: NodeId = doc.require_element_by_id(TOGGLE_ID)?;
    doc.remove_change_listeners(toggle);
    doc.add_change_listener(toggle, |doc, checked| toggle_language(doc, checked));

    info!("Rendered {} article cards", rendered);
    Ok(rendered)
}

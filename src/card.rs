use crate::article::Article;
use crate::dom::{Display, Document, NodeId};
use crate::i18n::{Language, PAGE_STRINGS};

/// Build the card element for one article.
///
/// The card is returned detached; the caller decides where it goes. One summary
/// block is rendered per supported language and only `shown` is visible.
pub fn create_card(doc: &mut Document, article: &Article, shown: Language) -> NodeId {
    let card = doc.create_element("div");
    doc.set_class_name(card, "card");

    let body = doc.create_element("div");
    doc.set_class_name(body, "card-body");

    let title = doc.create_element("h5");
    doc.set_class_name(title, "card-title");
    doc.set_text_content(title, article.title());

    let meta = doc.create_element("div");
    doc.set_class_name(meta, "meta mb-2");
    doc.set_text_content(meta, &article.meta_line());

    let link = doc.create_element("a");
    if let Some(url) = article.original_url.as_deref() {
        doc.set_attribute(link, "href", url);
    }
    doc.set_attribute(link, "target", "_blank");
    doc.set_attribute(link, "rel", "noopener noreferrer");
    doc.set_class_name(link, "btn btn-sm btn-outline-primary me-2");
    doc.set_text_content(link, PAGE_STRINGS.read_original);

    let score = doc.create_element("span");
    doc.set_class_name(score, "badge text-bg-secondary");
    doc.set_text_content(score, &article.score_label());

    for child in [title, meta, link, score] {
        doc.append_child(body, child);
    }

    for language in Language::all() {
        let summary = doc.create_element("div");
        doc.set_class_name(summary, &format!("{} mt-2", language.summary_class()));
        doc.set_text_content(summary, article.summary(language));
        if language != shown {
            doc.set_display(summary, Display::None);
        }
        doc.append_child(body, summary);
    }

    doc.append_child(card, body);
    card
}

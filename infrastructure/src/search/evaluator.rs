use domain::{Document, SearchRequest};
use tracing::trace;

/// Decides whether a single document satisfies a search request.
///
/// Criteria combine with AND; an empty list or unset bound imposes no
/// constraint. All string comparisons are case-sensitive.
pub fn matches(request: &SearchRequest, document: &Document) -> bool {
    let doc_id = document.id_str().unwrap_or("<unsaved>");

    if !title_matches(&request.title_prefixes, &document.title) {
        trace!(doc_id, "No title prefix matched, skipping doc.");
        return false;
    }

    if !content_matches(&request.contains_contents, &document.content) {
        trace!(doc_id, "Content is missing a required substring, skipping doc.");
        return false;
    }

    if !author_matches(&request.author_ids, &document.author.id) {
        trace!(doc_id, author_id = %document.author.id, "Author filter not met, skipping doc.");
        return false;
    }

    if !created_in_range(request, document) {
        trace!(doc_id, created = ?document.created, "Creation time outside range, skipping doc.");
        return false;
    }

    trace!(doc_id, "All filter conditions met.");
    true
}

/// At least one prefix must match (OR within the field).
fn title_matches(prefixes: &[String], title: &str) -> bool {
    prefixes.is_empty() || prefixes.iter().any(|prefix| title.starts_with(prefix.as_str()))
}

/// Every substring must be present (AND within the field).
fn content_matches(needles: &[String], content: &str) -> bool {
    needles.iter().all(|needle| content.contains(needle.as_str()))
}

/// The author id must equal every listed id, so two distinct ids never match.
fn author_matches(author_ids: &[String], author_id: &str) -> bool {
    author_ids.iter().all(|id| id == author_id)
}

/// Both bounds are inclusive. A document without a creation time fails any bound.
fn created_in_range(request: &SearchRequest, document: &Document) -> bool {
    if request.created_from.is_none() && request.created_to.is_none() {
        return true;
    }
    let Some(created) = document.created else {
        return false;
    };
    if request.created_from.is_some_and(|from| created < from) {
        return false;
    }
    if request.created_to.is_some_and(|to| created > to) {
        return false;
    }
    true
}

use serde::Serialize;

/// One slot in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItem {
    /// Zero-based page index
    Page(u32),
    Ellipsis,
}

/// Windowed list of pages to display around `current`.
///
/// First and last pages are always present, `sibling_count` pages are shown
/// on each side of the current one and any gap wider than a single page
/// collapses into one ellipsis. A one-page gap shows the page itself.
pub fn compute_range(current: u32, total: u32, sibling_count: u32) -> Vec<PageItem> {
    let dense_limit = sibling_count.saturating_mul(2).saturating_add(5);
    if total <= dense_limit {
        return (0..total).map(PageItem::Page).collect();
    }

    let last = total - 1;
    let current = current.min(last);
    let left = current.saturating_sub(sibling_count).max(1);
    let right = current.saturating_add(sibling_count).min(last - 1);

    let mut range = vec![PageItem::Page(0)];

    if left > 2 {
        range.push(PageItem::Ellipsis);
    } else {
        range.extend((1..left).map(PageItem::Page));
    }

    range.extend((left..=right).map(PageItem::Page));

    if right + 2 < last {
        range.push(PageItem::Ellipsis);
    } else {
        range.extend((right + 1..last).map(PageItem::Page));
    }

    range.push(PageItem::Page(last));
    range
}

/// Validate a page requested from the pagination bar.
///
/// Negative pages and pages past the known total are rejected.
pub fn page_request(next: i64, total_pages: Option<u32>) -> Option<u32> {
    let next = u32::try_from(next).ok()?;
    match total_pages {
        Some(total) if next >= total => None,
        _ => Some(next),
    }
}

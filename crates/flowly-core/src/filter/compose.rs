use crate::filter::state::FilterState;
use crate::model::visualization::VisualizationItem;

/// Whether `item` passes every active dimension of `state`.
pub fn matches(item: &VisualizationItem, state: &FilterState) -> bool {
    matches_search(item, &state.search_term)
        && (state.selected_tags.is_empty()
            || state.selected_tags.iter().any(|t| item.tags.contains(t)))
        && (state.selected_dashboards.is_empty()
            || state.selected_dashboards.iter().any(|d| item.dashboards.contains(d)))
        && state.chart_type_filter.accepts(item.chart_type)
}

fn matches_search(item: &VisualizationItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();

    item.title.to_lowercase().contains(&term)
        || item.description.to_lowercase().contains(&term)
        || item.tags.iter().any(|t| t.to_lowercase().contains(&term))
}

/// Items passing `state`, in input order. `items` is left untouched.
pub fn apply_filters(items: &[VisualizationItem], state: &FilterState) -> Vec<VisualizationItem> {
    items.iter().filter(|item| matches(item, state)).cloned().collect()
}

use crate::commands::{listed, CmdMessage, CmdResult, NO_GALLERY_MESSAGE};
use crate::error::Result;
use crate::evaluate::evaluate;
use crate::facets::extract_facets;
use crate::model::FilterState;
use crate::source::ItemSource;

/// One-shot evaluation of `state` against the page.
pub fn run<S: ItemSource>(source: &S, state: &FilterState, noun: &str) -> Result<CmdResult> {
    let Some(items) = source.load_gallery()? else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NO_GALLERY_MESSAGE));
        return Ok(result);
    };

    let facets = extract_facets(&items);
    let evaluation = evaluate(&items, state);
    let status = evaluation.summary.status_text(noun);

    let mut result = CmdResult::default()
        .with_listed_items(listed(&items, &evaluation.visible))
        .with_summary(evaluation.summary, status);

    for (facet, value) in facets.unknown_selections(state) {
        result.add_message(CmdMessage::warning(format!(
            "No artwork has {} \"{}\"",
            facet, value
        )));
    }

    Ok(result.with_facets(facets))
}

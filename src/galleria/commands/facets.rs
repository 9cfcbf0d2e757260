use crate::commands::{CmdMessage, CmdResult, NO_GALLERY_MESSAGE};
use crate::error::Result;
use crate::facets::extract_facets;
use crate::source::ItemSource;

pub fn run<S: ItemSource>(source: &S) -> Result<CmdResult> {
    let Some(items) = source.load_gallery()? else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NO_GALLERY_MESSAGE));
        return Ok(result);
    };

    Ok(CmdResult::default().with_facets(extract_facets(&items)))
}

//! Block dispatch shared by the document body, headers, footers,
//! footnotes and table cells

use doc_model::{Block, BlockContainer};

use crate::emitter::Emitter;
use crate::error::Result;
use crate::image::render_image;
use crate::paragraph::{render_paragraph, ParagraphMode};
use crate::table::render_table;

/// State threaded through an entire render pass.
pub(crate) struct RenderCtx {
    /// Footnotes emitted so far, for trace output only; numbering in the
    /// document itself is done by the viewer via `\chftn`.
    pub footnote_seq: u32,
}

impl RenderCtx {
    pub fn new() -> Self {
        Self { footnote_seq: 0 }
    }
}

/// Render every block of a container in order.
///
/// With `omit_last_par` set, the final paragraph block does not emit its
/// closing `\par`; footnote groups end their last paragraph by closing the
/// group instead.
pub(crate) fn render_container(
    e: &mut Emitter,
    container: &BlockContainer,
    ctx: &mut RenderCtx,
    omit_last_par: bool,
) -> Result<()> {
    let last_paragraph = if omit_last_par {
        container
            .blocks()
            .iter()
            .rposition(|b| matches!(b, Block::Paragraph(_)))
    } else {
        None
    };
    for (i, block) in container.blocks().iter().enumerate() {
        match block {
            Block::Paragraph(p) => {
                let mode = ParagraphMode::Body {
                    omit_par: last_paragraph == Some(i),
                };
                render_paragraph(e, p, ctx, mode)?;
            }
            Block::Table(t) => render_table(e, t, ctx)?,
            Block::Image(img) => render_image(e, img)?,
        }
    }
    Ok(())
}

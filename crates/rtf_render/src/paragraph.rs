//! Paragraph rendering: format runs, anchors, footnotes and fields
//!
//! A body paragraph renders as its own group, `{\pard ... \par}`, so
//! character state never leaks between paragraphs. Within the group the
//! paragraph's format runs are walked in order, each run re-split so that
//! every footnote or field anchor falls exactly on a segment boundary; the
//! anchored group is then spliced in right after the character it follows.

use std::collections::BTreeSet;

use doc_model::units::points_to_twips;
use doc_model::{Alignment, CharFormat, FieldKind, Footnote, Paragraph};

use crate::blocks::{render_container, RenderCtx};
use crate::charstate::{emit_diff, CharState};
use crate::emitter::Emitter;
use crate::error::Result;
use crate::escape::escape;

pub(crate) enum ParagraphMode {
    /// Standalone paragraph in a body-like flow. `omit_par` suppresses the
    /// trailing `\par` for the last paragraph of a footnote group.
    Body { omit_par: bool },
    /// Paragraph inside a table cell; the row renderer owns `\pard\intbl`
    /// and the `\par` separators.
    InTable,
}

pub(crate) fn alignment_word(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "ql",
        Alignment::Center => "qc",
        Alignment::Right => "qr",
        Alignment::Justify => "qj",
    }
}

pub(crate) fn render_paragraph(
    e: &mut Emitter,
    par: &Paragraph,
    ctx: &mut RenderCtx,
    mode: ParagraphMode,
) -> Result<()> {
    match mode {
        ParagraphMode::Body { omit_par } => {
            e.open_group();
            e.control("pard");
            if par.starts_new_page() {
                e.control("pagebb");
            }
            e.control(alignment_word(par.alignment));
            emit_spacing(e, par);
            render_runs(e, par, ctx)?;
            if !omit_par {
                e.control("par");
            }
            e.close_group()?;
            e.newline();
        }
        ParagraphMode::InTable => {
            // The cell's own alignment is already in force; only an explicit
            // non-default paragraph alignment overrides it.
            if par.alignment != Alignment::Left {
                e.control(alignment_word(par.alignment));
            }
            emit_spacing(e, par);
            e.open_group();
            render_runs(e, par, ctx)?;
            e.close_group()?;
        }
    }
    Ok(())
}

fn emit_spacing(e: &mut Emitter, par: &Paragraph) {
    if let Some(indent) = par.first_line_indent {
        e.control_value("fi", points_to_twips(indent));
    }
    if let Some(spacing) = par.line_spacing {
        e.control_value("sl", points_to_twips(spacing));
    }
}

/// Walk the paragraph's format runs, splicing anchored groups at their
/// offsets and emitting only the control words that change between runs.
fn render_runs(e: &mut Emitter, par: &Paragraph, ctx: &mut RenderCtx) -> Result<()> {
    let runs = par.runs();
    if runs.is_empty() {
        return Ok(());
    }
    let chars: Vec<char> = par.text().chars().collect();

    // Anchors must land on segment boundaries: cut after each anchored char.
    let mut cuts: BTreeSet<usize> = BTreeSet::new();
    for f in par.footnotes() {
        cuts.insert(f.offset() + 1);
    }
    for f in par.fields() {
        cuts.insert(f.offset() + 1);
    }

    let mut prev = CharState::base();
    for run in &runs {
        let next = CharState::from_format(&run.format);
        let scoped = run.format.bookmark.is_some()
            || run.format.local_hyperlink.is_some()
            || run.format.two_in_one.is_some();

        let mut bounds: Vec<usize> = cuts.range(run.start + 1..run.end).copied().collect();
        bounds.push(run.end);

        if scoped {
            // One scope for the whole run; anchors splice inside it so the
            // bookmark or field never opens twice under the same name.
            render_scoped_run(e, &prev, &next, &run.format, |e| {
                let mut start = run.start;
                for &end in &bounds {
                    let segment: String = chars[start..end].iter().collect();
                    e.text(&segment);
                    splice_anchors(e, par, end, ctx)?;
                    start = end;
                }
                Ok(())
            })?;
        } else {
            emit_diff(e, &prev, &next);
            prev = next.clone();
            let mut start = run.start;
            for &end in &bounds {
                let segment: String = chars[start..end].iter().collect();
                e.text(&segment);
                splice_anchors(e, par, end, ctx)?;
                start = end;
            }
        }
    }
    Ok(())
}

/// Emit every footnote and field group anchored just before `end`.
fn splice_anchors(e: &mut Emitter, par: &Paragraph, end: usize, ctx: &mut RenderCtx) -> Result<()> {
    for f in par.footnotes().iter().filter(|f| f.offset() + 1 == end) {
        render_footnote(e, f, ctx)?;
    }
    for f in par.fields().iter().filter(|f| f.offset() + 1 == end) {
        render_field(e, f.kind)?;
    }
    Ok(())
}

/// Render a run whose format needs its own group: bookmarks, local
/// hyperlinks and two-in-one stacking. The group restores state on close,
/// so the caller's previous-state tracker is deliberately not advanced.
/// `content` emits the run's text segments and any spliced anchors.
fn render_scoped_run(
    e: &mut Emitter,
    prev: &CharState,
    next: &CharState,
    format: &CharFormat,
    content: impl FnOnce(&mut Emitter) -> Result<()>,
) -> Result<()> {
    if let Some(name) = &format.bookmark {
        e.open_group();
        e.raw("\\*");
        e.control("bkmkstart");
        e.text(name);
        e.close_group()?;
    }
    if let Some(target) = &format.local_hyperlink {
        e.open_group();
        e.control("field");
        e.open_group();
        e.raw("\\*");
        e.control("fldinst");
        e.raw(&format_hyperlink_instruction(target, format.hyperlink_tip.as_deref()));
        e.close_group()?;
        e.open_group();
        e.control("fldrslt");
        emit_scope_format(e, prev, next, format);
        content(e)?;
        e.close_group()?;
        e.close_group()?;
    } else {
        e.open_group();
        emit_scope_format(e, prev, next, format);
        content(e)?;
        e.close_group()?;
    }
    if let Some(name) = &format.bookmark {
        e.open_group();
        e.raw("\\*");
        e.control("bkmkend");
        e.text(name);
        e.close_group()?;
    }
    Ok(())
}

fn emit_scope_format(e: &mut Emitter, prev: &CharState, next: &CharState, format: &CharFormat) {
    emit_diff(e, prev, next);
    if let Some(style) = format.two_in_one {
        e.control_value("twoinone", i32::from(style.code()));
    }
}

/// The instruction text of a `HYPERLINK` field targeting a bookmark.
/// Switch backslashes are doubled so the consumer reads them as literals.
fn format_hyperlink_instruction(target: &str, tip: Option<&str>) -> String {
    let mut inst = format!(" HYPERLINK \\\\l \"{}\"", escape(target));
    if let Some(tip) = tip {
        inst.push_str(" \\\\o \"");
        inst.push_str(&escape(tip));
        inst.push('"');
    }
    inst
}

/// `{\super\chftn}{\footnote\plain\chftn ...}` after the anchored char.
/// The footnote body ends with the group, not a `\par`.
fn render_footnote(e: &mut Emitter, footnote: &Footnote, ctx: &mut RenderCtx) -> Result<()> {
    ctx.footnote_seq += 1;
    tracing::trace!(number = ctx.footnote_seq, "emitting footnote");
    e.open_group();
    e.control("super");
    e.control("chftn");
    e.close_group()?;
    e.open_group();
    e.control("footnote");
    e.control("plain");
    e.control("chftn");
    render_container(e, footnote.container(), ctx, true)?;
    e.close_group()?;
    Ok(())
}

/// A field group with an empty result; the viewer substitutes the value.
fn render_field(e: &mut Emitter, kind: FieldKind) -> Result<()> {
    e.open_group();
    e.control("field");
    e.open_group();
    e.raw("\\*");
    e.control("fldinst");
    e.text(kind.instruction());
    e.close_group()?;
    e.open_group();
    e.control("fldrslt");
    e.close_group()?;
    e.close_group()?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

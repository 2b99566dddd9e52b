//! The "teach me a new command" dialog.

use shrdlurn_core::CoverageSpan;

use crate::coverage::intel_highlight;
use crate::error::UiError;
use crate::settings::UiSettings;
use crate::status::status;
use crate::target::UiTarget;
use crate::view::ViewBinding;

/// Server response marking the old query as part of the core language.
pub const RESPONSE_CORE: &str = "Core";
/// Server response marking a definition that shares nothing with the old query.
pub const RESPONSE_NO_COVER: &str = "NoCover";

/// One attempt at a definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefineRequest<'a> {
    pub query: &'a str,
    /// `false` when the dialog has just been opened, `true` for each later attempt.
    pub refine: bool,
    pub can_answer: bool,
    pub coverage: &'a [CoverageSpan],
    pub response: &'a [String],
    pub old_query: &'a str,
}

impl<'a> DefineRequest<'a> {
    pub fn opening(query: &'a str, can_answer: bool, coverage: &'a [CoverageSpan]) -> Self {
        Self {
            query,
            can_answer,
            coverage,
            ..Self::default()
        }
    }

    fn has_response(&self, tag: &str) -> bool {
        self.response.iter().any(|r| r == tag)
    }
}

/// Header text shown above the definition input.
pub fn define_header(assistant: &str, req: &DefineRequest<'_>) -> String {
    let query = html_escape::encode_text(req.query);

    if !req.refine {
        return if req.can_answer {
            format!("Already understand {query}, teach another meaning?")
        } else {
            format!(
                "Didn't understand \"{}\". Please rephrase:",
                intel_highlight(req.coverage)
            )
        };
    }

    let old = html_escape::encode_text(req.old_query);
    if req.has_response(RESPONSE_CORE) {
        format!(
            "\"{old}\" is precisely understood, and cannot be redefined by \"{}\".",
            intel_highlight(req.coverage)
        )
    } else if req.has_response(RESPONSE_NO_COVER) {
        format!(
            "Nothing (colors, numbers, etc) in \"{}\" matches \"{old}\", so {assistant} cannot learn from this.",
            intel_highlight(req.coverage)
        )
    } else if req.can_answer {
        format!(
            "{assistant} understands the definition, \"{query}\". If this is correct, click \"define\" to submit the definition."
        )
    } else {
        format!(
            "Still don't understand \"{}\". Please rephrase:",
            intel_highlight(req.coverage)
        )
    }
}

pub fn try_define<V: ViewBinding + ?Sized>(
    view: &mut V,
    settings: &UiSettings,
    req: &DefineRequest<'_>,
) -> Result<(), UiError> {
    view.hide(UiTarget::DefinePrompt)?;
    view.set_html(
        UiTarget::DefineHeader,
        &define_header(&settings.assistant_name, req),
    )
}

/// Opens the dialog for `query`. Returns `false`, leaving the dialog closed, when there is
/// nothing to define.
pub fn open_define_interface<V: ViewBinding + ?Sized>(
    view: &mut V,
    settings: &UiSettings,
    query: &str,
    can_answer: bool,
    coverage: &[CoverageSpan],
) -> Result<bool, UiError> {
    if query.is_empty() {
        log::warn!("define requested without a query");
        status(view, &settings.glyphs, "nothing to define", "", 0.0)?;
        return Ok(false);
    }

    view.show(UiTarget::DefineInterface)?;
    view.hide(UiTarget::Console)?;
    view.hide(UiTarget::MainButtons)?;
    let teach = format!(
        "Teach {} {}.",
        settings.assistant_name,
        html_escape::encode_text(query)
    );
    view.set_html(UiTarget::DefineStatus, &teach)?;

    try_define(view, settings, &DefineRequest::opening(query, can_answer, coverage))?;

    view.focus(UiTarget::DefineInput)?;
    Ok(true)
}

pub fn close_define_interface<V: ViewBinding + ?Sized>(view: &mut V) -> Result<(), UiError> {
    view.hide(UiTarget::DefineInterface)?;
    view.set_html(UiTarget::DefinePhraseButton, "try")?;
    view.show(UiTarget::Console)?;
    view.focus(UiTarget::Console)?;
    view.show(UiTarget::MainButtons)
}

pub fn prompt_define<V: ViewBinding + ?Sized>(view: &mut V) -> Result<(), UiError> {
    view.show(UiTarget::DefinePrompt)
}

pub fn remove_prompt_define<V: ViewBinding + ?Sized>(view: &mut V) -> Result<(), UiError> {
    view.hide(UiTarget::DefinePrompt)
}

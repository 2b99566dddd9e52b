use shrdlurn_core::{sort_blocks, Block, CoverageSpan, HistoryEntry};
use shrdlurn_io::AppConfig;
use shrdlurn_renderer::{BoardRenderer, RenderSurface};
use shrdlurn_ui::coverage::intel_highlight;
use shrdlurn_ui::define::{self, DefineRequest};
use shrdlurn_ui::history::{render_history, STEP_ATTRIBUTE};
use shrdlurn_ui::reaction::{update_reaction, Reaction};
use shrdlurn_ui::status;
use shrdlurn_ui::{UiSettings, UiTarget, ViewBinding};

use crate::error::AppError;
use crate::session::GameSession;

/// Class marking the history entry the board was reverted to.
pub const ACTIVE: &str = "active";

/// Board renderer plus page reflectors.
pub struct Setting<S, V> {
    renderer: BoardRenderer<S>,
    view: V,
    ui: UiSettings,
}

impl<S: RenderSurface, V: ViewBinding> Setting<S, V> {
    /// Builds the renderer (drawing an empty board on both surfaces) and binds the page.
    pub fn new(config: &AppConfig, main: S, target: S, view: V) -> Result<Self, AppError> {
        let renderer = BoardRenderer::new(
            config.board,
            config.palette.clone(),
            config.color_count,
            main,
            target,
        )?;
        Ok(Self {
            renderer,
            view,
            ui: config.ui_settings(),
        })
    }

    pub fn renderer(&self) -> &BoardRenderer<S> {
        &self.renderer
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn ui_settings(&self) -> &UiSettings {
        &self.ui
    }

    // ── Boards ───────────────────────────────────────────────────────

    pub fn render_canvas(&mut self, blocks: &[Block]) -> Result<(), AppError> {
        Ok(self.renderer.render_canvas(blocks)?)
    }

    pub fn render_target(&mut self, blocks: &[Block]) -> Result<(), AppError> {
        Ok(self.renderer.render_target(blocks)?)
    }

    pub fn sort_blocks(&self, blocks: &[Block]) -> Vec<Block> {
        sort_blocks(blocks)
    }

    // ── Reflectors ───────────────────────────────────────────────────

    pub fn status(&mut self, msg: &str, query: &str, prob: f64) -> Result<(), AppError> {
        Ok(status::status(&mut self.view, &self.ui.glyphs, msg, query, prob)?)
    }

    pub fn update_reaction(&mut self, prob: f64) -> Result<Reaction, AppError> {
        Ok(update_reaction(&mut self.view, &self.ui.glyphs, prob)?)
    }

    pub fn render_history(&mut self, history: &[HistoryEntry]) -> Result<(), AppError> {
        Ok(render_history(&mut self.view, history)?)
    }

    pub fn set_steps(&mut self, possible: u32, max: u32) -> Result<(), AppError> {
        Ok(status::set_steps(&mut self.view, possible, max)?)
    }

    pub fn update_steps(&mut self, current: u32) -> Result<(), AppError> {
        Ok(status::update_steps(&mut self.view, current)?)
    }

    pub fn set_skips(&mut self, skips_left: u32) -> Result<(), AppError> {
        Ok(status::set_skips(&mut self.view, skips_left)?)
    }

    pub fn open_define_interface(
        &mut self,
        query: &str,
        can_answer: bool,
        coverage: &[CoverageSpan],
    ) -> Result<bool, AppError> {
        Ok(define::open_define_interface(
            &mut self.view,
            &self.ui,
            query,
            can_answer,
            coverage,
        )?)
    }

    pub fn close_define_interface(&mut self) -> Result<(), AppError> {
        Ok(define::close_define_interface(&mut self.view)?)
    }

    pub fn try_define(&mut self, request: &DefineRequest<'_>) -> Result<(), AppError> {
        Ok(define::try_define(&mut self.view, &self.ui, request)?)
    }

    pub fn intel_highlight(&self, coverage: &[CoverageSpan]) -> String {
        intel_highlight(coverage)
    }

    pub fn prompt_define(&mut self) -> Result<(), AppError> {
        Ok(define::prompt_define(&mut self.view)?)
    }

    pub fn remove_prompt_define(&mut self) -> Result<(), AppError> {
        Ok(define::remove_prompt_define(&mut self.view)?)
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Redraws the history list and the main board from `session`.
    pub fn update(&mut self, session: &GameSession) -> Result<(), AppError> {
        self.render_history(&session.history)?;
        self.render_canvas(&session.current_state)
    }

    /// Restores the board to the step shown at position `index` of the rendered history
    /// list and marks that entry active.
    pub fn revert_history(
        &mut self,
        index: usize,
        session: &mut GameSession,
    ) -> Result<(), AppError> {
        let step = self
            .view
            .child_attribute(UiTarget::History, index, STEP_ATTRIBUTE)?
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|&step| session.step(step).is_some());
        let Some(step) = step else {
            log::warn!("cannot revert to history entry {index}: no matching step");
            return Err(AppError::UnknownStep { index });
        };

        let state = session
            .step(step)
            .and_then(|entry| entry.state.clone())
            .ok_or(AppError::MissingState { step })?;
        // session changes only once the board has accepted the state
        self.render_canvas(&state)?;
        self.render_history(&session.history)?;
        session.current_state = state;

        self.view.add_child_class(UiTarget::History, index, ACTIVE)?;
        log::debug!("reverted to step {step}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrdlurn_core::StepKind;
    use shrdlurn_renderer::Scene;
    use shrdlurn_ui::MemoryView;

    const TILES: usize = 144;

    fn setting() -> Setting<Scene, MemoryView> {
        Setting::new(
            &AppConfig::default(),
            Scene::new(),
            Scene::new(),
            MemoryView::with_all_targets(),
        )
        .unwrap()
    }

    fn session() -> GameSession {
        GameSession::new(
            vec![
                HistoryEntry::new(1, StepKind::Accept, "add red")
                    .with_state(vec![Block::new(0, 0, 0, 0)]),
                HistoryEntry::new(2, StepKind::Accept, "add blue on top")
                    .with_state(vec![Block::new(0, 0, 0, 0), Block::new(0, 0, 1, 4)]),
                HistoryEntry::new(3, StepKind::Reject, "remove all"),
            ],
            vec![Block::new(0, 0, 0, 0), Block::new(0, 0, 1, 4)],
        )
    }

    #[test]
    fn test_new_draws_empty_boards() {
        let s = setting();
        assert_eq!(s.renderer().main().len(), TILES);
        assert_eq!(s.renderer().target().len(), TILES);
    }

    #[test]
    fn test_new_rejects_palette_gap() {
        let config = AppConfig {
            color_count: 9,
            ..AppConfig::default()
        };
        let result = Setting::new(
            &config,
            Scene::new(),
            Scene::new(),
            MemoryView::with_all_targets(),
        );
        assert!(matches!(result, Err(AppError::Render(_))));
    }

    #[test]
    fn test_render_both_boards() {
        let mut s = setting();
        s.render_canvas(&[Block::new(1, 1, 0, 2), Block::new(1, 1, 1, 3)])
            .unwrap();
        s.render_target(&[Block::new(5, 5, 0, 1)]).unwrap();
        assert_eq!(s.renderer().main().len(), TILES + 2);
        assert_eq!(s.renderer().target().len(), TILES + 1);
    }

    #[test]
    fn test_reflectors_reach_the_view() {
        let mut s = setting();
        s.status("ready", "add red", 0.07).unwrap();
        s.set_steps(3, 10).unwrap();
        s.set_skips(0).unwrap();

        let view = s.view();
        assert_eq!(view.html(UiTarget::Status), Some("ready"));
        assert_eq!(view.html(UiTarget::CurrentCommand), Some("<b>↵: add red</b>"));
        assert_eq!(view.html_all(UiTarget::MaxSteps), vec!["10"]);
        assert!(view.is_hidden(UiTarget::SkipButton));
    }

    #[test]
    fn test_revert_history() {
        let mut s = setting();
        let mut game = session();
        s.update(&game).unwrap();

        // newest first: index 1 is step 2, index 2 is step 1
        s.revert_history(2, &mut game).unwrap();

        assert_eq!(game.current_state, vec![Block::new(0, 0, 0, 0)]);
        assert_eq!(s.renderer().main().len(), TILES + 1);
        let children = s.view().children(UiTarget::History);
        assert!(children[2].has_class(ACTIVE));
        assert!(!children[1].has_class(ACTIVE));
    }

    #[test]
    fn test_revert_to_step_without_state() {
        let mut s = setting();
        let mut game = session();
        s.update(&game).unwrap();

        let err = s.revert_history(0, &mut game).unwrap_err();
        assert!(matches!(err, AppError::MissingState { step: 3 }));
        assert_eq!(game.current_state.len(), 2);
    }

    #[test]
    fn test_revert_to_unknown_colour_keeps_session() {
        let mut s = setting();
        let mut game = session();
        game.history[0].state = Some(vec![Block::new(0, 0, 0, 99)]);
        s.update(&game).unwrap();
        let before = game.current_state.clone();

        let err = s.revert_history(2, &mut game).unwrap_err();

        assert!(matches!(err, AppError::Render(_)));
        assert_eq!(game.current_state, before);
        assert_eq!(s.renderer().main().len(), TILES + 2);
        let children = s.view().children(UiTarget::History);
        assert!(children.iter().all(|c| !c.has_class(ACTIVE)));
    }

    #[test]
    fn test_revert_out_of_range() {
        let mut s = setting();
        let mut game = session();
        s.update(&game).unwrap();

        let err = s.revert_history(7, &mut game).unwrap_err();
        assert!(matches!(err, AppError::Ui(_)));
    }

    #[test]
    fn test_revert_unknown_step() {
        let mut s = setting();
        let mut game = session();
        s.update(&game).unwrap();
        game.history.remove(0);

        let err = s.revert_history(2, &mut game).unwrap_err();
        assert!(matches!(err, AppError::UnknownStep { index: 2 }));
    }
}

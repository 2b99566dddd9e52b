use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical place on the page the reflectors write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UiTarget {
    Status,
    CurrentCommand,
    Reaction,
    History,
    PossibleSteps,
    MaxSteps,
    CurrentSteps,
    DefineInterface,
    DefineHeader,
    DefineStatus,
    DefinePrompt,
    DefineInput,
    DefinePhraseButton,
    Console,
    MainButtons,
    SkipsLeft,
    SkipButton,
}

impl UiTarget {
    pub const ALL: [UiTarget; 17] = [
        UiTarget::Status,
        UiTarget::CurrentCommand,
        UiTarget::Reaction,
        UiTarget::History,
        UiTarget::PossibleSteps,
        UiTarget::MaxSteps,
        UiTarget::CurrentSteps,
        UiTarget::DefineInterface,
        UiTarget::DefineHeader,
        UiTarget::DefineStatus,
        UiTarget::DefinePrompt,
        UiTarget::DefineInput,
        UiTarget::DefinePhraseButton,
        UiTarget::Console,
        UiTarget::MainButtons,
        UiTarget::SkipsLeft,
        UiTarget::SkipButton,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UiTarget::Status => "status",
            UiTarget::CurrentCommand => "current command",
            UiTarget::Reaction => "reaction",
            UiTarget::History => "history",
            UiTarget::PossibleSteps => "possible steps",
            UiTarget::MaxSteps => "max steps",
            UiTarget::CurrentSteps => "current steps",
            UiTarget::DefineInterface => "define interface",
            UiTarget::DefineHeader => "define header",
            UiTarget::DefineStatus => "define status",
            UiTarget::DefinePrompt => "define prompt",
            UiTarget::DefineInput => "define input",
            UiTarget::DefinePhraseButton => "define phrase button",
            UiTarget::Console => "console",
            UiTarget::MainButtons => "main buttons",
            UiTarget::SkipsLeft => "skips left",
            UiTarget::SkipButton => "skip button",
        }
    }

    /// Counters are repeated around the page and addressed by class; everything else is a
    /// single element addressed by id.
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            UiTarget::PossibleSteps | UiTarget::MaxSteps | UiTarget::CurrentSteps
        )
    }
}

impl fmt::Display for UiTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a target is found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Class(class) => write!(f, ".{class}"),
        }
    }
}

/// Element ids (or class names, for the step counters) of each target on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub status: String,
    pub current_command: String,
    pub reaction: String,
    pub history: String,
    pub possible_steps: String,
    pub max_steps: String,
    pub current_steps: String,
    pub define_interface: String,
    pub define_header: String,
    pub define_status: String,
    pub define_prompt: String,
    pub define_input: String,
    pub define_phrase_button: String,
    pub console: String,
    pub main_buttons: String,
    pub skips_left: String,
    pub skip_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            status: "status".to_string(),
            current_command: "current_cmd".to_string(),
            reaction: "reaction".to_string(),
            history: "command_history".to_string(),
            possible_steps: "poss_steps".to_string(),
            max_steps: "max_steps".to_string(),
            current_steps: "curr_steps".to_string(),
            define_interface: "define_interface".to_string(),
            define_header: "define_header".to_string(),
            define_status: "define_status".to_string(),
            define_prompt: "define_prompt".to_string(),
            define_input: "define_phrase".to_string(),
            define_phrase_button: "define_phrase_button".to_string(),
            console: "console".to_string(),
            main_buttons: "mainbuttons".to_string(),
            skips_left: "skips_left".to_string(),
            skip_button: "skip_button".to_string(),
        }
    }
}

impl ElementIds {
    pub fn name_of(&self, target: UiTarget) -> &str {
        match target {
            UiTarget::Status => &self.status,
            UiTarget::CurrentCommand => &self.current_command,
            UiTarget::Reaction => &self.reaction,
            UiTarget::History => &self.history,
            UiTarget::PossibleSteps => &self.possible_steps,
            UiTarget::MaxSteps => &self.max_steps,
            UiTarget::CurrentSteps => &self.current_steps,
            UiTarget::DefineInterface => &self.define_interface,
            UiTarget::DefineHeader => &self.define_header,
            UiTarget::DefineStatus => &self.define_status,
            UiTarget::DefinePrompt => &self.define_prompt,
            UiTarget::DefineInput => &self.define_input,
            UiTarget::DefinePhraseButton => &self.define_phrase_button,
            UiTarget::Console => &self.console,
            UiTarget::MainButtons => &self.main_buttons,
            UiTarget::SkipsLeft => &self.skips_left,
            UiTarget::SkipButton => &self.skip_button,
        }
    }

    pub fn selector(&self, target: UiTarget) -> Selector {
        let name = self.name_of(target).to_string();
        if target.is_group() {
            Selector::Class(name)
        } else {
            Selector::Id(name)
        }
    }
}

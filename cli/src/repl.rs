//! Interactive line editor used when stdin is a terminal.

use dexpr::{Bindings, Engine};
use reedline::{
    ColumnarMenu, DefaultCompleter, DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs,
    ExampleHighlighter, KeyCode, KeyModifiers, MenuBuilder, Reedline, ReedlineEvent,
    ReedlineMenu, Signal, default_emacs_keybindings,
};

const MENU: &str = "completion_menu";

pub struct Repl {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl Repl {
    /// Build an editor that completes and highlights the given names.
    pub fn new(names: Vec<String>) -> Self {
        let mut completer = DefaultCompleter::with_inclusions(&['_']);
        completer.insert(names.clone());

        let mut keys = default_emacs_keybindings();
        keys.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );
        keys.add_binding(
            KeyModifiers::ALT,
            KeyCode::Enter,
            ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
        );

        let editor = Reedline::create()
            .with_highlighter(Box::new(ExampleHighlighter::new(names)))
            .with_completer(Box::new(completer))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(
                ColumnarMenu::default().with_name(MENU),
            )))
            .with_edit_mode(Box::new(Emacs::new(keys)));

        Self {
            editor,
            prompt: DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty),
        }
    }

    /// Completion words: registered function names followed by bound variables.
    pub fn names(engine: &Engine, vars: &Bindings) -> Vec<String> {
        let mut names: Vec<String> = engine.functions().names().map(str::to_string).collect();
        let mut var_names: Vec<String> = vars.keys().cloned().collect();
        var_names.sort();
        names.extend(var_names);
        names
    }

    /// Read lines until end of input, handing each non-blank one to `run`.
    pub fn run(mut self, mut run: impl FnMut(&str)) -> miette::Result<()> {
        println!("dexpr: enter an expression per line (Ctrl+D to quit)");
        loop {
            match self.editor.read_line(&self.prompt) {
                Ok(Signal::Success(line)) if line.trim().is_empty() => {}
                Ok(Signal::Success(line)) => run(&line),
                Ok(Signal::CtrlD | Signal::CtrlC) => return Ok(()),
                Err(e) => miette::bail!("line editor failed: {}", e),
            }
        }
    }
}

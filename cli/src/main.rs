mod lexer;

use clap::Parser;
use crispy::{Engine, EngineOptions, render_error};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DescriptionMode, EditCommand, Emacs, ExampleHighlighter, IdeMenu, KeyCode,
    KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal, ValidationResult,
    Validator, default_emacs_keybindings,
};
use std::borrow::Cow;
use std::io::BufRead;
use std::io::BufReader;

const VERSION_BANNER: &str = "Crispy Version 0.0.4";

/// Crispy - A small Lisp with q-expressions
#[derive(Parser, Debug)]
#[command(name = "crispy")]
#[command(about = "Evaluate Crispy expressions", long_about = None)]
struct Args {
    /// Print the read value tree before evaluating (for debugging)
    #[arg(long)]
    debug_read: bool,

    /// Maximum evaluation depth before an expression is abandoned
    #[arg(long, default_value_t = EngineOptions::default().max_depth)]
    max_depth: usize,

    /// List the builtin functions and exit
    #[arg(long)]
    list_builtins: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

struct CrispyPrompt;

impl Prompt for CrispyPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("crispy")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("...   ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search: {}) ", prefix, history_search.term))
    }
}

/// Keeps reading lines while brackets are left open.
struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match lexer::calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline(engine: &Engine) -> Reedline {
    let commands: Vec<String> = engine.environment().names().map(String::from).collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&[
            '-', '_', '+', '*', '/', '%', '^', '=', '<', '>', '!', '&',
        ]);
        completions.insert(commands.clone());
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    Reedline::create()
        .with_highlighter(Box::new(ExampleHighlighter::new(commands)))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_validator(Box::new(BracketValidator))
        .with_edit_mode(edit_mode)
}

fn interpret_input(engine: &mut Engine, input: &str, debug_read: bool) {
    if input.trim().is_empty() {
        return;
    }

    tracing::debug!(len = input.len(), "evaluating input");

    let program = match engine.read(input) {
        Ok(program) => program,
        Err(e) => {
            tracing::debug!(errors = e.diagnostics().len(), "input failed to parse");
            render_error(&e);
            return;
        }
    };

    if debug_read {
        println!("=== Read Value ===");
        println!("{:#?}", program);
        println!();
    }

    let value = engine.eval_value(program);
    println!("{}", value);
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use CRISPY_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("CRISPY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = EngineOptions {
        max_depth: args.max_depth,
        ..Default::default()
    };
    let mut engine = Engine::new(options, |_| {});

    if args.list_builtins {
        for name in engine.environment().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&mut engine, &expr, args.debug_read);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = setup_reedline(&engine);
        let prompt = CrispyPrompt;

        println!("{}", VERSION_BANNER);
        println!("Press Ctrl+c to Exit\n");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&mut engine, &buffer, args.debug_read);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            interpret_input(&mut engine, &line, args.debug_read);
        }
    }

    Ok(())
}

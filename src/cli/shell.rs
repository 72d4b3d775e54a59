use std::{
    borrow::Cow,
    env, fmt,
    io::{self, BufRead, StdinLock},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;
use tracing::debug;

use crate::{
    cli::{
        context::{CliMode, LoopControl, ShellContext, SCRIPT_ENV_VAR},
        output,
    },
    errors::CliError,
};

/// Subcommands offered by tab completion after the command word.
const SUBCOMMANDS: &[(&str, &[&str])] = &[
    (
        "budget",
        &[
            "new", "total", "quick", "add", "planned", "actual", "remove", "show", "summary",
        ],
    ),
    ("goal", &["add", "list", "select", "remove", "show"]),
    ("entry", &["add", "list"]),
    ("config", &["show", "set"]),
    ("products", &["banking", "investments"]),
];

/// Runs the shell until `exit`, end of input, or Ctrl-C.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let mut context = ShellContext::new(mode)?;
    debug!(?mode, "shell started");

    match mode {
        CliMode::Interactive => {
            let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
            editor.set_helper(Some(CommandHelper::new(context.command_names())));
            editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
            output::info("Welcome to Finwise. Type `help` to list commands.");
            drive(&mut context, &mut EditorInput(editor))
        }
        CliMode::Script => {
            let stdin = io::stdin();
            drive(&mut context, &mut ScriptInput(stdin.lock()))
        }
    }
}

/// Where shell lines come from. `None` ends the session.
trait LineSource {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    fn remember(&mut self, _line: &str) {}
}

struct EditorInput(Editor<CommandHelper, DefaultHistory>);

impl LineSource for EditorInput {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.0.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        self.0.add_history_entry(line).ok();
    }
}

struct ScriptInput<'a>(StdinLock<'a>);

impl LineSource for ScriptInput<'_> {
    fn next_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn drive(context: &mut ShellContext, input: &mut dyn LineSource) -> Result<(), CliError> {
    while context.running {
        let Some(line) = input.next_line(&context.prompt())? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        input.remember(line);
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    /// Candidates for the word being typed, given the words before it.
    fn candidates(&self, previous: &[&str], needle: &str) -> Vec<&'static str> {
        let pool: &[&'static str] = match previous {
            [] => &self.commands,
            [command] => SUBCOMMANDS
                .iter()
                .find(|(name, _)| command.eq_ignore_ascii_case(name))
                .map(|(_, subs)| *subs)
                .unwrap_or(&[]),
            _ => &[],
        };
        pool.iter()
            .copied()
            .filter(|name| name.starts_with(needle))
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let previous: Vec<&str> = prefix[..start].split_whitespace().collect();
        let needle = prefix[start..].to_ascii_lowercase();
        let pairs = self
            .candidates(&previous, &needle)
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError(err.to_string()))
}

#[derive(Debug)]
pub(crate) struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not parse input: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = parse_command_line(r#"goal add "Gaming Laptop" 65000 2025-06-15"#).unwrap();
        assert_eq!(tokens, ["goal", "add", "Gaming Laptop", "65000", "2025-06-15"]);
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        let err = parse_command_line("budget add \"Food").unwrap_err();
        assert!(err.to_string().starts_with("Could not parse input"));
    }

    #[test]
    fn completes_commands_then_subcommands() {
        let helper = CommandHelper::new(vec!["budget", "fd", "goal", "help"]);
        assert_eq!(helper.candidates(&[], "g"), ["goal"]);
        assert_eq!(helper.candidates(&["budget"], "s"), ["show", "summary"]);
        assert_eq!(helper.candidates(&["GOAL"], "re"), ["remove"]);
        assert!(helper.candidates(&["fd"], "").is_empty());
        assert!(helper.candidates(&["budget", "add"], "").is_empty());
    }
}

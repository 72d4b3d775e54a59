use std::{env, io};

use chrono::NaiveDate;
use tracing::debug;

use finwise_config::{Config, ConfigError, ConfigManager, Theme};
use finwise_core::{Clock, CoreError, FixedClock, SystemClock};
use finwise_domain::{Budget, GoalBook};

use crate::{
    cli::{
        commands,
        output::{self, OutputPreferences},
        registry::CommandRegistry,
        shell::parse_command_line,
    },
    currency::CurrencyFormat,
    errors::{CliError, FinwiseError},
};

/// Set to run the shell non-interactively, reading commands from stdin.
pub const SCRIPT_ENV_VAR: &str = "FINWISE_CLI_SCRIPT";
/// Pins "today" to a `YYYY-MM-DD` date for reproducible goal metrics.
pub const TODAY_ENV_VAR: &str = "FINWISE_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No budget yet. Use `budget new <household|event|festival>` first.")]
    NoBudget,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Finwise(#[from] FinwiseError),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Finwise(FinwiseError::Core(err))
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Finwise(FinwiseError::Config(err))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Finwise(FinwiseError::Serde(err))
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Finwise(FinwiseError::Io(err))
    }
}

/// Everything one shell session works on. Nothing but the config outlives it.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub config: Config,
    pub budget: Option<Budget>,
    pub goals: GoalBook,
    pub(crate) registry: CommandRegistry,
    config_manager: ConfigManager,
    clock: Box<dyn Clock>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_environment()?;
        let config = config_manager.load()?;
        let clock: Box<dyn Clock> = match env::var(TODAY_ENV_VAR)
            .ok()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        {
            Some(date) => Box::new(FixedClock::on(date)),
            None => Box::new(SystemClock),
        };
        Ok(Self::with_parts(mode, config, config_manager, clock))
    }

    pub fn with_parts(
        mode: CliMode,
        config: Config,
        config_manager: ConfigManager,
        clock: Box<dyn Clock>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let context = Self {
            mode,
            running: true,
            config,
            budget: None,
            goals: GoalBook::new(),
            registry,
            config_manager,
            clock,
        };
        context.apply_output_preferences();
        context
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn money(&self) -> CurrencyFormat {
        CurrencyFormat::from_config(&self.config)
    }

    pub fn prompt(&self) -> String {
        match &self.budget {
            Some(budget) => format!("finwise [{}]> ", budget.name),
            None => "finwise> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn budget_mut(&mut self) -> Result<&mut Budget, CommandError> {
        self.budget.as_mut().ok_or(CommandError::NoBudget)
    }

    pub fn budget_ref(&self) -> Result<&Budget, CommandError> {
        self.budget.as_ref().ok_or(CommandError::NoBudget)
    }

    pub fn save_config(&mut self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        self.apply_output_preferences();
        debug!(path = %self.config_manager.config_path().display(), "config saved");
        Ok(())
    }

    pub fn config_path(&self) -> String {
        self.config_manager.config_path().display().to_string()
    }

    fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            color: self.config.ui_color_enabled && self.mode == CliMode::Interactive,
            icons: self.config.theme == Theme::Iconic,
        });
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and runs one input line.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        match self.dispatch(&command, raw, &args)? {
            LoopControl::Exit => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            LoopControl::Continue => Ok(LoopControl::Continue),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(name) = self.registry.closest(input) {
            output::info(format!("Suggestion: `{}`?", name));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }
}

pub(crate) fn parse_amount(field: &str, input: &str) -> Result<f64, CommandError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('\u{20b9}')
        .chars()
        .filter(|ch| *ch != ',' && *ch != '_')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("invalid {field} `{input}`")))
}

pub(crate) fn parse_count(field: &str, input: &str) -> Result<u32, CommandError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {field} `{input}`")))
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

/// Resolves a 1-based list position shown to the user into a 0-based index.
pub(crate) fn parse_index(input: &str, len: usize) -> Result<usize, CommandError> {
    match input.trim().parse::<usize>() {
        Ok(position) if (1..=len).contains(&position) => Ok(position - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a position between 1 and {}",
            input, len
        ))),
    }
}

pub(crate) fn parse_flag(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "essential" | "yes" | "y" | "true" => Some(true),
        "optional" | "no" | "n" | "false" | "non-essential" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn test_context(today: NaiveDate) -> (ShellContext, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("config manager");
    let context = ShellContext::with_parts(
        CliMode::Script,
        Config::default(),
        manager,
        Box::new(FixedClock::on(today)),
    );
    (context, dir)
}

//! Command registry, dispatch, and shell context.

use strsim::levenshtein;
use thiserror::Error;

use crate::checkout::ValidationError;
use crate::config::{Config, ConfigManager};
use crate::core::services::{
    LogoService, ProfileService, RandomAvailability, ReservationService, ServiceError,
    SuggestionService,
};
use crate::domain::logo::LogoTemplate;
use crate::domain::profile::UserInfo;
use crate::domain::Displayable;
use crate::errors::CoreError;
use crate::storage::{JsonStore, SessionStash};

use super::checkout_wizard;
use super::output;

const SUGGESTION_LIMIT: usize = 8;
const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Recoverable per-command failure, reported and swallowed by the loop.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.message)
    }
}

pub(crate) type CommandResult = Result<LoopControl, CommandError>;

type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub(crate) struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    handler: CommandHandler,
}

impl CommandEntry {
    const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", "help", cmd_help),
        CommandEntry::new(
            "suggest",
            "Generate team name ideas",
            "suggest [seed phrase]",
            cmd_suggest,
        ),
        CommandEntry::new(
            "search",
            "Check name availability across platforms",
            "search <team name>",
            cmd_search,
        ),
        CommandEntry::new(
            "reserve",
            "Reserve a team name (last searched when omitted)",
            "reserve [team name]",
            cmd_reserve,
        ),
        CommandEntry::new("codes", "List reservation codes", "codes", cmd_codes),
        CommandEntry::new(
            "use",
            "Mark a reservation code as used",
            "use <code>",
            cmd_use,
        ),
        CommandEntry::new(
            "logo",
            "Create a logo for a reserved name",
            "logo <team name>",
            cmd_logo,
        ),
        CommandEntry::new(
            "pay",
            "Pay for a reservation",
            "pay <team name>",
            cmd_pay,
        ),
        CommandEntry::new(
            "profile",
            "Show or update the user profile",
            "profile [name] [interests...]",
            cmd_profile,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

/// Owns the stores and config for the lifetime of the shell.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub config: Config,
    pub(crate) store: JsonStore,
    pub(crate) stash: SessionStash,
    pub(crate) availability: RandomAvailability,
    commands: Vec<CommandEntry>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, super::CliError> {
        let config = ConfigManager::new()?.load()?;
        let store = JsonStore::new_default()?;
        let availability = RandomAvailability::new(config.availability_rate);
        Ok(Self {
            mode,
            running: true,
            config,
            store,
            stash: SessionStash::new(),
            availability,
            commands: definitions(),
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|entry| entry.name).collect()
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        let Some(entry) = self
            .commands
            .iter()
            .find(|entry| entry.name == command)
            .cloned()
        else {
            let mut message = format!("Unknown command: {command}");
            if let Some(closest) = self.closest_command(command) {
                message.push_str(&format!(". Did you mean \"{closest}\"?"));
            }
            return Err(CommandError::new(message));
        };
        (entry.handler)(self, args)
    }

    fn closest_command(&self, input: &str) -> Option<&'static str> {
        self.commands
            .iter()
            .map(|entry| (levenshtein(input, entry.name), entry.name))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    pub fn report_error(&self, err: CommandError) {
        output::error(err.message);
    }
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    for entry in definitions() {
        output::info(format!("  {:<28} {}", entry.usage, entry.description));
    }
    let _ = context;
    Ok(LoopControl::Continue)
}

fn cmd_suggest(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let seed = if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    };
    let profile = ProfileService::load_info(&context.store)?;
    let suggestions =
        SuggestionService::suggest(profile.as_ref(), seed.as_deref(), SUGGESTION_LIMIT);
    output::section("Name ideas");
    for name in suggestions {
        output::info(format!("  {name}"));
    }
    Ok(LoopControl::Continue)
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined_name(args, "search <team name>")?;
    let report = ReservationService::search(&mut context.availability, &name);
    output::section(format!("Availability for \"{name}\""));
    for platform in &report.available_on {
        output::success(format!("  {:<12} available", platform.label()));
    }
    for platform in &report.taken_on {
        output::warning(format!("  {:<12} taken", platform.label()));
    }
    if report.is_reservable() {
        context.stash.stash(&name);
        output::info("Run \"reserve\" to secure this name.");
    } else {
        output::warning("This name is taken everywhere. Try another.");
    }
    Ok(LoopControl::Continue)
}

fn cmd_reserve(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = if args.is_empty() {
        context
            .stash
            .take()
            .ok_or_else(|| CommandError::new("Nothing searched yet. Usage: reserve <team name>"))?
    } else {
        args.join(" ")
    };
    let report = ReservationService::search(&mut context.availability, &name);
    let code = ReservationService::reserve(&context.store, &report)?;
    output::success(format!(
        "Reserved \"{}\" on {} platform(s). Code: {}",
        code.team_name,
        code.platforms.len(),
        code.code
    ));
    Ok(LoopControl::Continue)
}

fn cmd_codes(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let codes = ReservationService::list(&context.store)?;
    if codes.is_empty() {
        output::info("No reservations yet. Try \"search\" first.");
        return Ok(LoopControl::Continue);
    }
    output::section("Your codes");
    for code in codes {
        output::info(format!("  {}", code.display_label()));
    }
    Ok(LoopControl::Continue)
}

fn cmd_use(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [code] = args else {
        return Err(CommandError::new("Usage: use <code>"));
    };
    let updated = ReservationService::mark_used(&context.store, code)?;
    output::success(format!("Marked {} as used.", updated.display_label()));
    Ok(LoopControl::Continue)
}

fn cmd_logo(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined_name(args, "logo <team name>")?;
    let template = if context.mode == CliMode::Interactive {
        checkout_wizard::pick_logo_template()?
    } else {
        LogoTemplate::Shield
    };
    let design = LogoService::create(&context.store, &name, template, "#1d3557", "#f1faee")?;
    output::success(format!("Saved logo {}.", design.display_label()));
    Ok(LoopControl::Continue)
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined_name(args, "pay <team name>")?;
    let reserved = ReservationService::find_by_name(&context.store, &name)?;
    if reserved.is_none() {
        return Err(CommandError::new(format!(
            "\"{name}\" has no reservation to pay for. Run \"reserve\" first."
        )));
    }
    match context.mode {
        CliMode::Interactive => checkout_wizard::run_interactive(context, &name),
        CliMode::Script => checkout_wizard::run_scripted(&name),
    }
}

fn cmd_profile(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        match ProfileService::load_info(&context.store)? {
            Some(info) => {
                output::section(info.display_label());
                for interest in &info.interests {
                    output::info(format!("  - {interest}"));
                }
            }
            None => output::info("No profile yet. Usage: profile <name> [interests...]"),
        }
        return Ok(LoopControl::Continue);
    }
    let mut info = UserInfo::new(args[0]);
    for interest in &args[1..] {
        info = info.with_interest(*interest);
    }
    ProfileService::save_info(&context.store, &info)?;
    output::success(format!("Profile saved for {}.", info.display_name));
    Ok(LoopControl::Continue)
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    output::info("Goodbye!");
    Ok(LoopControl::Exit)
}

fn joined_name(args: &[&str], usage: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::new(format!("Usage: {usage}")));
    }
    Ok(args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_command_tolerates_small_typos() {
        let context = test_context();
        assert_eq!(context.closest_command("serch"), Some("search"));
        assert_eq!(context.closest_command("payy"), Some("pay"));
        assert_eq!(context.closest_command("zzzzzzzz"), None);
    }

    fn test_context() -> ShellContext {
        ShellContext {
            mode: CliMode::Script,
            running: true,
            config: Config::default(),
            store: JsonStore::new(Some(std::env::temp_dir().join("gotoguys-cmd-test"))).unwrap(),
            stash: SessionStash::new(),
            availability: RandomAvailability::default(),
            commands: definitions(),
        }
    }
}

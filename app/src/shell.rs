//! Line-oriented command shell driving the store.
//!
//! Each input line is parsed into a [`ShellCommand`], turned into an
//! [`AppAction`] and sent to the store. Malformed lines are reported as
//! [`ShellError`]; commands that the reducers ignore are not errors.

use crate::app::{AppAction, AppStore};
use crate::categories::CategoryAction;
use crate::tabs::{ParseTabError, Tab, TabAction};
use crate::todos::{DraftField, TodoAction};
use thiserror::Error;
use todo_tabs_runtime::StoreError;

/// Usage text printed by `help`
pub const HELP: &str = "\
Befehle:
  tab todos|kategorien   Ansicht wechseln
  text <TEXT>            Todo-Text setzen
  short <TEXT>           Kurzbeschreibung setzen
  long <TEXT>            Langbeschreibung setzen
  category <NAME|NR>     Kategorie auswählen (leer: Auswahl aufheben)
  save                   Todo hinzufügen / aktualisieren
  edit <NR>              Todo bearbeiten
  toggle <NR>            Todo erledigt / offen
  delete <NR>            Todo löschen
  cat-input <TEXT>       Kategorie eingeben
  cat-save               Kategorie hinzufügen
  cat-edit <NR>          Kategorie bearbeiten
  cat-delete <NR>        Kategorie löschen
  show                   Ansicht anzeigen
  help                   Diese Hilfe
  quit                   Beenden";

/// Shell errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The verb is not known
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// A required argument is missing
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        /// The verb
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// A position argument is not a number
    #[error("'{command}': '{value}' is not a valid number")]
    InvalidIndex {
        /// The verb
        command: &'static str,
        /// The offending argument
        value: String,
    },

    /// The tab name is unknown
    #[error(transparent)]
    UnknownTab(#[from] ParseTabError),

    /// The picked category is not in the category list
    #[error("no category '{0}'")]
    NoSuchCategory(String),

    /// The store rejected the action
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// A category picked from the category list
///
/// The argument names a category exactly; if no category has that name and
/// it is a number, it is taken as a position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPick {
    /// Clear the selection
    None,
    /// Pick by name, falling back to position
    Name(String),
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Switch the visible view
    Tab(Tab),
    /// Set one of the todo draft's text fields
    Draft(DraftField, String),
    /// Pick the draft's category
    Category(CategoryPick),
    /// Commit the todo draft
    Save,
    /// Load a todo into the draft
    Edit(usize),
    /// Flip a todo's completed flag
    Toggle(usize),
    /// Remove a todo
    Delete(usize),
    /// Set the category input
    CategoryInput(String),
    /// Commit the category input
    CategorySave,
    /// Move a category into the input
    CategoryEdit(usize),
    /// Remove a category
    CategoryDelete(usize),
    /// Print the current view
    Show,
    /// Print usage
    Help,
    /// Leave the shell
    Quit,
}

/// Parses one input line
///
/// A blank line is treated as `show`.
///
/// # Errors
///
/// Returns [`ShellError`] for unknown verbs, missing arguments, non-numeric
/// positions and unknown tab names.
pub fn parse_command(line: &str) -> Result<ShellCommand, ShellError> {
    let line = line.trim_start();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim_end_matches(['\r', '\n']);

    let command = match verb {
        "" | "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        "tab" => {
            let name = required("tab", "a tab name", rest)?;
            ShellCommand::Tab(name.parse()?)
        },
        "text" => ShellCommand::Draft(DraftField::Text, rest.to_string()),
        "short" => ShellCommand::Draft(DraftField::ShortDescription, rest.to_string()),
        "long" => ShellCommand::Draft(DraftField::LongDescription, rest.to_string()),
        "category" => {
            let pick = rest.trim();
            ShellCommand::Category(if pick.is_empty() {
                CategoryPick::None
            } else {
                CategoryPick::Name(pick.to_string())
            })
        },
        "save" => ShellCommand::Save,
        "edit" => ShellCommand::Edit(index("edit", rest)?),
        "toggle" => ShellCommand::Toggle(index("toggle", rest)?),
        "delete" => ShellCommand::Delete(index("delete", rest)?),
        "cat-input" => ShellCommand::CategoryInput(rest.to_string()),
        "cat-save" => ShellCommand::CategorySave,
        "cat-edit" => ShellCommand::CategoryEdit(index("cat-edit", rest)?),
        "cat-delete" => ShellCommand::CategoryDelete(index("cat-delete", rest)?),
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

fn required<'a>(
    command: &'static str,
    argument: &'static str,
    rest: &'a str,
) -> Result<&'a str, ShellError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(ShellError::MissingArgument { command, argument });
    }
    Ok(value)
}

fn index(command: &'static str, rest: &str) -> Result<usize, ShellError> {
    let value = required(command, "a position", rest)?;
    value.parse().map_err(|_| ShellError::InvalidIndex {
        command,
        value: value.to_string(),
    })
}

/// What the caller should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Print the current view
    Render,
    /// Print [`HELP`]
    Help,
    /// Stop reading input
    Quit,
}

/// Executes shell commands against a store
#[derive(Clone)]
pub struct Shell {
    store: AppStore,
}

impl Shell {
    /// Creates a shell driving `store`
    #[must_use]
    pub const fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// The store driven by this shell
    #[must_use]
    pub const fn store(&self) -> &AppStore {
        &self.store
    }

    /// Parses and runs one input line
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if the line cannot be parsed, names a category
    /// that does not exist, or the store has shut down.
    pub async fn execute(&self, line: &str) -> Result<Outcome, ShellError> {
        let command = parse_command(line)?;
        tracing::debug!(?command, "Parsed shell command");
        self.run(command).await
    }

    /// Runs an already parsed command
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if a picked category does not exist or the
    /// store has shut down.
    pub async fn run(&self, command: ShellCommand) -> Result<Outcome, ShellError> {
        let action: AppAction = match command {
            ShellCommand::Show => return Ok(Outcome::Render),
            ShellCommand::Help => return Ok(Outcome::Help),
            ShellCommand::Quit => return Ok(Outcome::Quit),
            ShellCommand::Tab(tab) => TabAction::SelectTab { tab }.into(),
            ShellCommand::Draft(field, value) => TodoAction::DraftFieldChanged { field, value }.into(),
            ShellCommand::Category(pick) => TodoAction::CategorySelected {
                category: self.resolve_category(pick).await?,
            }
            .into(),
            ShellCommand::Save => TodoAction::CommitTodo.into(),
            ShellCommand::Edit(index) => TodoAction::BeginEdit { index }.into(),
            ShellCommand::Toggle(index) => TodoAction::ToggleCompleted { index }.into(),
            ShellCommand::Delete(index) => TodoAction::DeleteTodo { index }.into(),
            ShellCommand::CategoryInput(value) => CategoryAction::InputChanged { value }.into(),
            ShellCommand::CategorySave => CategoryAction::CommitCategory.into(),
            ShellCommand::CategoryEdit(index) => CategoryAction::EditCategory { index }.into(),
            ShellCommand::CategoryDelete(index) => CategoryAction::DeleteCategory { index }.into(),
        };

        self.store.send(action).await?;
        Ok(Outcome::Render)
    }

    /// Maps a pick onto a name from the category list
    ///
    /// An exact name wins over a position, so numeric names stay reachable.
    async fn resolve_category(&self, pick: CategoryPick) -> Result<String, ShellError> {
        let CategoryPick::Name(name) = pick else {
            return Ok(String::new());
        };

        let resolved = self
            .store
            .state(|s| {
                if s.categories.contains(&name) {
                    return Some(name.clone());
                }
                name.parse::<usize>()
                    .ok()
                    .and_then(|index| s.categories.get(index))
                    .map(str::to_string)
            })
            .await;

        resolved.ok_or(ShellError::NoSuchCategory(name))
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell").finish_non_exhaustive()
    }
}

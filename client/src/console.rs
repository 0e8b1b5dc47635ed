//! Interactive console - turns typed commands into controller intents.

use std::io;

use roster_engine::{Intent, RemoteCollection, SyncController, UserFields, UserRecord};
use tracing::debug;

use crate::render::render;
use crate::terminal::Prompter;

const HELP: &str = "\
Commands:
  list | ls          show the current users
  add                create a user
  edit <id>          edit a user
  delete | rm <id>   delete a user
  retry              resend the last rejected add or edit
  cancel             leave edit mode
  refresh            reload users from the server
  dismiss            clear the error message
  help               show this help
  quit | exit        leave";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(String),
    Delete(String),
    Retry,
    Cancel,
    Refresh,
    Dismiss,
    Help,
    Quit,
}

/// Command parse failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    Unknown(String),

    #[error("usage: {0} <id>")]
    MissingId(&'static str),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().map(str::to_string);

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(arg.ok_or(CommandError::MissingId("edit"))?),
            "delete" | "rm" => Command::Delete(arg.ok_or(CommandError::MissingId("delete"))?),
            "retry" => Command::Retry,
            "cancel" => Command::Cancel,
            "refresh" => Command::Refresh,
            "dismiss" => Command::Dismiss,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Fields of a write the remote rejected, and the record it targeted.
#[derive(Debug, Clone)]
struct Draft {
    target: Option<UserRecord>,
    fields: UserFields,
}

/// The terminal presentation: owns the controller and the prompter.
#[derive(Debug)]
pub struct Console<R> {
    controller: SyncController<R, Prompter>,
    prompter: Prompter,
    draft: Option<Draft>,
}

impl<R: RemoteCollection> Console<R> {
    pub fn new(remote: R, prompter: Prompter) -> Self {
        Self {
            controller: SyncController::new(remote, prompter.clone()),
            prompter,
            draft: None,
        }
    }

    pub fn controller(&self) -> &SyncController<R, Prompter> {
        &self.controller
    }

    /// Load the collection, then process commands until `quit` or end of
    /// input.
    pub async fn run(&mut self) -> io::Result<()> {
        self.refresh().await?;
        self.render()?;

        while let Some(line) = self.prompter.read_line("> ")? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.prompter.println(&e.to_string())?;
                    continue;
                }
            };

            debug!(?command, "Console command");
            match command {
                Command::Quit => break,
                Command::Help => self.prompter.println(HELP)?,
                command => {
                    self.execute(command).await?;
                    self.render()?;
                }
            }
        }

        Ok(())
    }

    async fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Add => {
                self.controller.dispatch(Intent::CancelEdit).await;
                let defaults = self.draft_for(None);
                if let Some(fields) = self.prompt_fields(defaults.as_ref())? {
                    self.submit(fields).await?;
                }
            }
            Command::Edit(id) => {
                let Some(record) = self.controller.state().find(&id).cloned() else {
                    return self.prompter.println(&format!("No user with id {id}"));
                };
                let defaults = self
                    .draft_for(Some(&record.id))
                    .unwrap_or_else(|| record.fields());
                self.controller.dispatch(Intent::Edit(record)).await;
                if let Some(fields) = self.prompt_fields(Some(&defaults))? {
                    self.submit(fields).await?;
                }
            }
            Command::Retry => {
                let Some(draft) = self.draft.take() else {
                    return self.prompter.println("Nothing to retry");
                };
                let intent = match draft.target {
                    Some(record) => Intent::Edit(record),
                    None => Intent::CancelEdit,
                };
                self.controller.dispatch(intent).await;
                self.submit(draft.fields).await?;
            }
            Command::Delete(id) => self.controller.dispatch(Intent::Delete(id)).await,
            Command::Cancel => {
                self.draft = None;
                self.controller.dispatch(Intent::CancelEdit).await;
            }
            Command::Refresh => self.refresh().await?,
            Command::Dismiss => self.controller.dispatch(Intent::DismissError).await,
            Command::List | Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    async fn refresh(&mut self) -> io::Result<()> {
        self.prompter.println("Loading users...")?;
        self.controller.dispatch(Intent::Refresh).await;
        Ok(())
    }

    /// Save `fields`, keeping them as the draft if the remote rejects them.
    async fn submit(&mut self, fields: UserFields) -> io::Result<()> {
        let target = self.controller.state().edit_target().cloned();
        if self.controller.save(fields.clone()).await {
            self.draft = None;
            return Ok(());
        }

        debug!(editing = target.is_some(), "Keeping rejected fields");
        self.draft = Some(Draft { target, fields });
        self.prompter
            .println("Your changes were kept; type `retry` to send them again.")
    }

    /// The rejected fields, if they were meant for the record `id`
    /// (`None` for a new user).
    fn draft_for(&self, id: Option<&str>) -> Option<UserFields> {
        self.draft
            .as_ref()
            .filter(|draft| draft.target.as_ref().map(|t| t.id.as_str()) == id)
            .map(|draft| draft.fields.clone())
    }

    /// Ask for each field; an empty answer keeps the default.
    ///
    /// Returns `None` if input ends mid-form.
    fn prompt_fields(&self, defaults: Option<&UserFields>) -> io::Result<Option<UserFields>> {
        let blank = UserFields::default();
        let defaults = defaults.unwrap_or(&blank);

        let Some(name) = self.ask("Name", &defaults.name)? else {
            return Ok(None);
        };
        let Some(email) = self.ask("Email", &defaults.email)? else {
            return Ok(None);
        };
        let Some(phone) = self.ask("Phone", &defaults.phone)? else {
            return Ok(None);
        };
        let Some(department) = self.ask("Department", &defaults.department)? else {
            return Ok(None);
        };

        Ok(Some(UserFields {
            name,
            email,
            phone,
            department,
        }))
    }

    fn ask(&self, label: &str, default: &str) -> io::Result<Option<String>> {
        let prompt = if default.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{default}]: ")
        };

        Ok(self.prompter.read_line(&prompt)?.map(|answer| {
            let answer = answer.trim();
            if answer.is_empty() {
                default.to_string()
            } else {
                answer.to_string()
            }
        }))
    }

    fn render(&self) -> io::Result<()> {
        self.prompter
            .with_output(|out| render(self.controller.state(), out))
    }
}

//! Terminal host: line commands in, page snapshot out

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    sync::Mutex,
};
use tracing::warn;

use crate::{
    client::AdminPanelClient,
    confirm::Confirm,
    document::{
        ClickTarget, Document, DocumentSnapshot, ErrorSlot, FormField, Severity, SubmitEvent,
        TableRow, UserTable,
    },
};

pub const HELP: &str = "\
commands:
  list                 reload both tables
  set <field> <value>  fill a form field (userId, name, email, password, roles)
  save                 submit the form
  edit <id>            load a user into the form
  delete <id>          delete a user
  clear                reset the form
  help                 show this text
  quit                 exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Set(FormField, String),
    Save,
    Edit(String),
    Delete(String),
    Clear,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "list" => Ok(Command::List),
            "save" => Ok(Command::Save),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "edit" | "delete" if rest.is_empty() => Err(format!("usage: {verb} <id>")),
            "edit" => Ok(Command::Edit(rest.to_string())),
            "delete" => Ok(Command::Delete(rest.to_string())),
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                let field = FormField::from_element_id(name)
                    .ok_or_else(|| format!("unknown field: {name}"))?;
                Ok(Command::Set(field, value.to_string()))
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Run one command; returns `false` when the host should exit
pub async fn dispatch(client: &AdminPanelClient, document: &dyn Document, command: Command) -> bool {
    match command {
        Command::List => {
            client.fetch_users().await;
        }
        Command::Set(field, value) => document.set_value(field, &value),
        Command::Save => {
            client.handle_submit(&mut SubmitEvent::new()).await;
        }
        Command::Edit(id) => {
            client.handle_table_click(&ClickTarget::button("edit", &id)).await;
        }
        Command::Delete(id) => {
            client
                .handle_table_click(&ClickTarget::button("delete", &id))
                .await;
        }
        Command::Clear => client.clear_form(),
        Command::Help => {}
        Command::Quit => return false,
    }
    true
}

fn write_rows(f: &mut fmt::Formatter<'_>, title: &str, rows: &[TableRow]) -> fmt::Result {
    writeln!(f, "== {title}")?;
    writeln!(
        f,
        "{:<6} {:<20} {:<28} {:<19} {:<19}",
        "ID", "Name", "Email", "Created", "Updated"
    )?;
    for row in rows {
        match row {
            TableRow::User(user) => writeln!(
                f,
                "{:<6} {:<20} {:<28} {:<19} {:<19} [edit] [delete]",
                user.id, user.name, user.email, user.created, user.updated
            )?,
            TableRow::Placeholder { message, .. } => writeln!(f, "  {message}")?,
        }
    }
    Ok(())
}

/// Text view of the whole page
pub struct PageView<'a>(pub &'a DocumentSnapshot);

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        write_rows(f, "Admins", snapshot.rows(UserTable::Admin))?;
        write_rows(f, "Users", snapshot.rows(UserTable::User))?;

        writeln!(f, "== Form")?;
        for field in FormField::ALL {
            let value = match field {
                FormField::Password if !snapshot.password.is_empty() => "********",
                _ => snapshot.field(field),
            };
            writeln!(f, "  {:<9} {}", field.element_id(), value)?;
        }
        for slot in ErrorSlot::ALL {
            let text = snapshot.error(slot);
            if !text.is_empty() {
                writeln!(f, "  ! {text}")?;
            }
        }

        if let Some(notification) = &snapshot.notification {
            let tag = match notification.severity {
                Severity::Success => "ok",
                Severity::Error => "error",
            };
            writeln!(f, "[{tag}] {}", notification.message)?;
        }
        Ok(())
    }
}

/// Text rendering of the whole page
pub fn render_snapshot(snapshot: &DocumentSnapshot) -> String {
    PageView(snapshot).to_string()
}

/// Shared stdin line reader
pub type SharedLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> SharedLines {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// Confirmation read from the terminal; anything but `y`/`yes` declines
pub struct StdinConfirm {
    lines: SharedLines,
}

impl StdinConfirm {
    pub fn new(lines: SharedLines) -> Self {
        Self { lines }
    }
}

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        println!("{prompt} [y/N]");
        match self.lines.lock().await.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

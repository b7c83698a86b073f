use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tracing::*;

pub const USAGE: &str = "usage: property-client fetch <id> | load <id> | create [name=value | name=@path]...";

#[derive(Debug, PartialEq)]
pub enum Command {
    Fetch(String),
    Load(String),
    Create(Vec<FormField>),
}

#[derive(Debug, PartialEq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, path: PathBuf },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}\n{}", USAGE)]
    Usage(String),
    #[error("Could not read form file {} : {1}", .0.display())]
    Io(PathBuf, std::io::Error),
}

/// Parses the arguments following the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, CliError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliError::Usage("Missing command".to_string()))?;

    match command.as_str() {
        "fetch" | "load" => {
            let id = args.next().ok_or_else(|| CliError::Usage(format!("Missing property id for {}", command)))?;
            if let Some(extra) = args.next() {
                return Err(CliError::Usage(format!("Unexpected argument {}", extra)));
            }
            Ok(if command == "fetch" { Command::Fetch(id) } else { Command::Load(id) })
        }
        "create" => args.map(|arg| parse_field(&arg)).collect::<Result<Vec<_>, _>>().map(Command::Create),
        other => Err(CliError::Usage(format!("Unknown command {}", other))),
    }
}

fn parse_field(arg: &str) -> Result<FormField, CliError> {
    let (name, value) = arg.split_once('=').filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| CliError::Usage(format!("Form field {} must look like name=value", arg)))?;

    Ok(match value.strip_prefix('@') {
        Some(path) => FormField::File { name: name.to_string(), path: PathBuf::from(path) },
        None => FormField::Text { name: name.to_string(), value: value.to_string() },
    })
}

#[instrument(skip(fields), level = "debug")]
pub async fn build_form(fields: Vec<FormField>) -> Result<Form, CliError> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(name, value),
            FormField::File { name, path } => {
                let data = tokio::fs::read(&path).await.map_err(|err| CliError::Io(path.clone(), err))?;
                let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| name.clone());
                debug!("Attaching {} ({} bytes) as {}", path.display(), data.len(), name);
                form.part(name, Part::bytes(data).file_name(file_name))
            }
        };
    }
    Ok(form)
}

//! Command-line front end for the notes core.
//!
//! # Responsibility
//! - Exercise every core operation: init, list, add, delete.
//! - Keep output deterministic for quick local sanity checks.

use notetrack_core::{
    default_log_level, init_logging, DeleteOutcome, FileBackend, Note, NoteForm, NoteRepository,
    NoteService, NoteServiceError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use uuid::Uuid;

const USAGE: &str = "usage: notetrack [list | add <title> <content> | delete <id>]";

fn main() {
    if let Err(message) = run() {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let data_dir = resolve_data_dir()?;
    if let Err(err) = init_logging(default_log_level(), &data_dir.join("logs").to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let backend = FileBackend::new(data_dir.join("store"));
    let mut service = NoteService::new(NoteRepository::new(backend));
    service.initialize().map_err(surface)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("list") => list_notes(&mut service),
        Some("add") => {
            let (title, content) = match (args.get(1), args.get(2)) {
                (Some(title), Some(content)) => (title.clone(), content.clone()),
                _ => return Err(USAGE.to_string()),
            };
            let created = service
                .submit(&NoteForm::new(title, content))
                .map_err(surface)?;
            println!("added {}", created.id);
            Ok(())
        }
        Some("delete") => {
            let raw = args.get(1).ok_or_else(|| USAGE.to_string())?;
            let id = Uuid::parse_str(raw).map_err(|_| format!("not a note id: {raw}"))?;
            match service.delete(id, confirm_on_stdin).map_err(surface)? {
                DeleteOutcome::Deleted => println!("deleted {id}"),
                DeleteOutcome::Cancelled => println!("kept {id}"),
                DeleteOutcome::NotFound => println!("no note with id {id}"),
            }
            Ok(())
        }
        Some(_) => Err(USAGE.to_string()),
    }
}

fn list_notes(service: &mut NoteService<FileBackend>) -> Result<(), String> {
    let notes = service.notes().map_err(surface)?;
    if notes.is_empty() {
        println!("no notes yet");
        return Ok(());
    }
    for note in notes {
        println!(
            "{}  {}  {}\n    {}",
            note.id,
            note.created_at.to_rfc3339(),
            note.title,
            note.content
        );
    }
    Ok(())
}

fn confirm_on_stdin(note: &Note) -> bool {
    print!("Are you sure you want to delete \"{}\"? [y/N] ", note.title);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn resolve_data_dir() -> Result<PathBuf, String> {
    if let Some(dir) = std::env::var_os("NOTETRACK_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let cwd = std::env::current_dir()
        .map_err(|err| format!("cannot determine working directory: {err}"))?;
    Ok(cwd.join(".notetrack"))
}

fn surface(err: NoteServiceError) -> String {
    match err {
        NoteServiceError::Validation(errors) => format!("invalid input: {errors}"),
        NoteServiceError::SubmissionInFlight => "busy, try again".to_string(),
        NoteServiceError::Repo(err) => {
            format!("could not save your notes, please try again: {err}")
        }
    }
}

use clap::{Parser, Subcommand};
use notes_core::{
    parse_tag_filter, FileNoteStore, NoteError, NoteRequest, NoteResult, NoteService, PageRequest,
    Tag, DEFAULT_NOTE_DATA_DIR, DEFAULT_PAGE_SIZE,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Manage notes stored in a local note data directory")]
struct Cli {
    /// Directory holding note data
    #[arg(long, env = "NOTE_DATA_DIR", default_value = DEFAULT_NOTE_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a note
    Create {
        title: String,
        text: String,
        /// Tags (comma-separated, e.g. personal,business)
        #[arg(long)]
        tags: Option<String>,
    },
    /// List notes, newest first
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
        /// Only notes with at least one of these tags; ignored if any tag is unknown
        #[arg(long)]
        tags: Option<String>,
    },
    /// Show a note
    Get { id: String },
    /// Replace a note's title, text and tags
    Update {
        id: String,
        title: String,
        text: String,
        /// Tags (comma-separated); omitting this clears the note's tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete a note
    Delete { id: String },
    /// Word counts of a note's text
    Stats { id: String },
}

/// Tags given on create/update must all be known; unlike the list filter nothing is dropped.
fn parse_note_tags(raw: Option<String>) -> NoteResult<Option<Vec<Tag>>> {
    raw.map(|raw| {
        raw.split(',')
            .map(|t| t.trim().to_uppercase().parse::<Tag>())
            .collect()
    })
    .transpose()
}

fn run(cli: Cli) -> NoteResult<()> {
    let Some(command) = cli.command else {
        println!("Use 'notes --help' for commands");
        return Ok(());
    };

    let store = FileNoteStore::open(&cli.data_dir)?;
    let service = NoteService::new(Arc::new(store));

    match command {
        Commands::Create { title, text, tags } => {
            let note = service.create_note(NoteRequest::new(title, text, parse_note_tags(tags)?))?;
            println!("Created note {}", note.id);
        }
        Commands::List { page, size, tags } => {
            let tags = parse_tag_filter(tags.as_deref());
            let notes = service.list_notes(PageRequest::new(page, size)?, &tags)?;
            if notes.content.is_empty() {
                println!("No notes found.");
            }
            for summary in &notes.content {
                println!(
                    "ID: {}, Title: {}, Created: {}",
                    summary.id,
                    summary.title,
                    summary.created_date.to_rfc3339()
                );
            }
            println!(
                "Page {} of {} ({} notes)",
                notes.page + 1,
                notes.total_pages.max(1),
                notes.total_elements
            );
        }
        Commands::Get { id } => {
            let note = service.get_note(&id)?;
            let tags: Vec<&str> = note.tags.iter().map(Tag::as_str).collect();
            println!("ID: {}", note.id);
            println!("Title: {}", note.title);
            println!("Created: {}", note.created_date.to_rfc3339());
            println!("Tags: {}", tags.join(", "));
            println!();
            println!("{}", note.text);
        }
        Commands::Update {
            id,
            title,
            text,
            tags,
        } => {
            let note =
                service.update_note(&id, NoteRequest::new(title, text, parse_note_tags(tags)?))?;
            println!("Updated note {}", note.id);
        }
        Commands::Delete { id } => {
            service.delete_note(&id)?;
            println!("Deleted note {}", id);
        }
        Commands::Stats { id } => {
            let stats = service.word_statistics(&id)?;
            if stats.is_empty() {
                println!("No words found.");
            }
            for (word, count) in stats.iter() {
                println!("{}: {}", word, count);
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e {
            NoteError::NotFound(id) => eprintln!("No note with id: {}", id),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }

    Ok(())
}

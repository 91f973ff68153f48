use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use dialoguer::{Input, Select};
use memline_core::config::MemlineConfig;
use memline_core::event::{Event, EventDate};
use memline_remote::{MediaStore, SheetStore};
use owo_colors::OwoColorize;

use super::{create_spinner, timeline_or_empty};

const UPLOAD_FAILURE: &str = "Event not added";
const APPEND_FAILURE: &str = "Event not stored (the image was already uploaded)";

pub struct AddArgs {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub image: Option<PathBuf>,
    pub caption: Option<String>,
    pub date: Option<String>,
    pub tag: Option<String>,
}

/// One field-level validation failure, shown before any network call.
#[derive(Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub async fn run(config: &MemlineConfig, args: AddArgs) -> Result<()> {
    let store = SheetStore::new(config);
    let media = MediaStore::new(config);

    // The existing tag set feeds the tag picker
    let spinner = create_spinner("Loading events".to_string());
    let rows = store.load_all().await;
    spinner.finish_and_clear();

    let mut timeline = timeline_or_empty(rows, config.header_rows);

    // --- Gather form fields, prompting for whatever wasn't flagged ---

    let headline = match args.headline {
        Some(h) => h,
        None => Input::new()
            .with_prompt("  Headline")
            .interact_text()?,
    };

    let description = match args.description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
    };

    let image = match args.image {
        Some(p) => p,
        None => PathBuf::from(
            Input::<String>::new()
                .with_prompt("  Image path")
                .interact_text()?,
        ),
    };

    let caption = match args.caption {
        Some(c) => c,
        None => Input::new()
            .with_prompt("  Image caption (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
    };

    let date = match args.date {
        Some(d) => d,
        None => Input::new()
            .with_prompt("  Date")
            .default(Local::now().date_naive().format("%Y-%m-%d").to_string())
            .interact_text()?,
    };

    let tag = resolve_tag(args.tag, &timeline.tags)?;

    // --- Validate everything before touching the network ---

    let mut errors = validate_fields(&date, &tag);
    let image_bytes = match read_image(&image) {
        Ok(bytes) => Some(bytes),
        Err(error) => {
            errors.insert(0, error);
            None
        }
    };

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{} {}", "✗".red(), error.to_string().red());
        }
        anyhow::bail!("Event not added: {} field error(s)", errors.len());
    }

    let image_bytes = image_bytes.unwrap_or_default();
    let start_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(EventDate::from_naive)
        .expect("validated above");

    let filename = image
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("Invalid image path: {}", image.display()))?;
    let content_type = content_type_for(&image);

    // --- Upload, then append. A failed append after a successful upload
    //     leaves an orphaned object; the user resubmits manually. ---

    let spinner = create_spinner("Uploading image".to_string());
    let upload = media.upload(image_bytes, &filename, content_type).await;
    spinner.finish_and_clear();

    let media_url = upload.context(UPLOAD_FAILURE)?;

    let event = Event {
        headline,
        description,
        media_url,
        media_caption: caption,
        start_date,
        tag,
    };

    let spinner = create_spinner("Saving event".to_string());
    let append = store.append(&event.to_row()).await;
    spinner.finish_and_clear();

    append.context(APPEND_FAILURE)?;

    timeline.push(event.clone());

    println!(
        "{} Added '{}' ({} events, {} tags)",
        "✓".green(),
        event.headline,
        timeline.events.len(),
        timeline.tags.len()
    );

    Ok(())
}

/// Resolve the event's tag: an explicit new-tag value wins over a pick from
/// the existing tag set.
fn resolve_tag(flag: Option<String>, existing: &BTreeSet<String>) -> Result<String> {
    if let Some(tag) = flag {
        return Ok(tag);
    }

    let new_tag: String = Input::new()
        .with_prompt("  New tag (leave empty to pick an existing one)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    if !new_tag.is_empty() {
        return Ok(new_tag);
    }

    if existing.is_empty() {
        // Nothing to pick from; caught by validation below
        return Ok(String::new());
    }

    let options: Vec<&String> = existing.iter().collect();
    let choice = Select::new()
        .with_prompt("  Select tag")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(options[choice].clone())
}

/// Presence and format checks that need no I/O.
fn validate_fields(date: &str, tag: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").is_err() {
        errors.push(FieldError {
            field: "date",
            message: format!("'{date}' is not a valid date (expected YYYY-MM-DD)"),
        });
    }

    if tag.trim().is_empty() {
        errors.push(FieldError {
            field: "tag",
            message: "a tag is required (new or picked from the existing set)".to_string(),
        });
    }

    errors
}

fn read_image(path: &Path) -> Result<Vec<u8>, FieldError> {
    match std::fs::read(path) {
        Ok(bytes) if bytes.is_empty() => Err(FieldError {
            field: "image",
            message: format!("{} is empty", path.display()),
        }),
        Ok(bytes) => Ok(bytes),
        Err(e) => Err(FieldError {
            field: "image",
            message: format!("cannot read {}: {}", path.display(), e),
        }),
    }
}

/// Content type from the file extension, for the upload's declared type.
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

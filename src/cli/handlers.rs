use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::CatalogConfig;
use crate::entity::{CatalogEntry, Category, Gradient, Icon, TAG_VOCABULARY};
use crate::error::{CatalogError, Result};
use crate::form::DraftField;
use crate::host::{Confirm, FixedAnswer, TerminalConfirm, TerminalNotifier};
use crate::manager::CatalogManager;
use crate::search::{parse_query, StatusFilter};
use crate::storage::{CatalogStore, FileStore, DATA_DIR};
use crate::warnings::format_warning;

use super::commands::{AddArgs, EditArgs, FieldArgs};

/// Find the project root by looking for .therapy-catalog/ or .git/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(DATA_DIR).exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

/// Open the project's catalog as the configured session, or as `role` when given.
fn open_manager(role: Option<String>) -> Result<CatalogManager<FileStore>> {
    let root = find_project_root();
    let kv = FileStore::open(&root)?;
    let mut config = CatalogConfig::load(kv.data_dir())?;

    if let Some(role) = role {
        config.session.role = role;
    }

    let store = CatalogStore::with_key(kv, config.storage_key);
    CatalogManager::open(&config.session, store)
}

fn notifier_for(json: bool) -> TerminalNotifier {
    if json {
        TerminalNotifier::quiet()
    } else {
        TerminalNotifier::new()
    }
}

fn parse_field<T>(field: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|_| CatalogError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Convert the shared CLI options into draft assignments, failing on the
/// first value that is not in its option set.
fn draft_fields(args: FieldArgs) -> Result<Vec<DraftField>> {
    let mut fields = Vec::new();

    if let Some(v) = args.description {
        fields.push(DraftField::Description(v));
    }
    if let Some(v) = args.icon {
        fields.push(DraftField::Icon(parse_field("icon", &v)?));
    }
    if let Some(v) = args.color {
        fields.push(DraftField::Color(parse_field("color", &v)?));
    }
    if let Some(v) = args.duration {
        fields.push(DraftField::Duration(v));
    }
    if let Some(v) = args.difficulty {
        fields.push(DraftField::Difficulty(parse_field("difficulty", &v)?));
    }
    if let Some(v) = args.sessions {
        fields.push(DraftField::Sessions(v));
    }
    if let Some(v) = args.category {
        fields.push(DraftField::Category(parse_field("category", &v)?));
    }
    if let Some(v) = args.status {
        fields.push(DraftField::Status(parse_field("status", &v)?));
    }
    if let Some(v) = args.route {
        fields.push(DraftField::Route(v));
    }
    if let Some(v) = args.module_id {
        fields.push(DraftField::ModuleId(v));
    }

    Ok(fields)
}

fn print_warnings(manager: &CatalogManager<FileStore>) {
    for warning in manager.overlay_warnings() {
        eprintln!("{}", format_warning(&warning));
    }
}

/// Changes to built-in entries apply to this run only.
fn note_if_not_persisted(entry: &CatalogEntry) {
    if !entry.is_custom() {
        eprintln!(
            "Note: '{}' is a built-in module; this change is not saved.",
            entry.title
        );
    }
}

fn print_entry_line(e: &CatalogEntry) {
    println!("  {:>13} [{}] {}", e.id, e.status, e.title);
    println!(
        "      {} | {} | {} sessions | {}",
        e.category, e.difficulty, e.sessions, e.duration
    );
    if !e.tags.is_empty() {
        println!("      tags: {}", e.tags.join(", "));
    }
}

fn print_entries(heading: &str, entries: &[CatalogEntry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else if entries.is_empty() {
        println!("No therapy modules found.");
    } else {
        println!("{} ({}):\n", heading, entries.len());
        for e in entries {
            print_entry_line(e);
        }
    }
    Ok(())
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let store = FileStore::init(&root)?;
    CatalogConfig::for_new_project().save(store.data_dir())?;

    println!("Initialized therapy catalog in {}", root.display());
    Ok(())
}

pub fn handle_list(
    role: Option<String>,
    search: Option<String>,
    status: String,
    json: bool,
) -> Result<()> {
    let status: StatusFilter = parse_field("status filter", &status)?;
    let manager = open_manager(role)?;
    print_warnings(&manager);

    let term = search.unwrap_or_default();
    let visible = manager.visible(&term, status);
    print_entries("Therapy modules", &visible, json)
}

pub fn handle_search(role: Option<String>, query: String, json: bool) -> Result<()> {
    let manager = open_manager(role)?;
    let (term, filter) = parse_query(&query);
    let results = filter.apply(manager.entries(), &term);

    if !json && results.is_empty() {
        println!("No results found for '{}'.", query);
        return Ok(());
    }
    print_entries(&format!("Search results for '{}'", query), &results, json)
}

pub fn handle_get(role: Option<String>, id: String, json: bool) -> Result<()> {
    let manager = open_manager(role)?;
    let entry = manager
        .find(&id)
        .ok_or_else(|| CatalogError::EntryNotFound(id.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        println!("Therapy module {}", entry.id);
        println!("Title: {}", entry.title);
        println!("Description: {}", entry.description);
        println!("Status: {}", entry.status);
        println!("Category: {}", entry.category);
        println!("Difficulty: {}", entry.difficulty);
        println!("Sessions: {}", entry.sessions);
        println!("Duration: {}", entry.duration);
        println!("Icon: {}", entry.icon);
        println!("Color: {}", entry.color.label());
        println!("Route: {}", entry.route);
        println!("Module ID: {}", entry.module_id);
        if !entry.tags.is_empty() {
            println!("Tags: {}", entry.tags.join(", "));
        }
        println!("Created: {}", entry.created_at);
        println!("Updated: {}", entry.updated_at);
    }

    Ok(())
}

pub fn handle_add(role: Option<String>, args: AddArgs) -> Result<()> {
    let mut manager = open_manager(role)?;
    let json = args.json;
    let fields = draft_fields(args.fields)?;

    let form = manager.form_mut();
    form.open_for_create();
    form.set_field(DraftField::Title(args.title));
    for field in fields {
        form.set_field(field);
    }
    for tag in &args.tags {
        // Repeated --tag flags should not cancel each other out.
        if !form.draft().tags.contains(tag) {
            form.toggle_tag(tag);
        }
    }

    let mut notifier = notifier_for(json);
    let entry = manager.save_form(&mut notifier)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("  {} - {}", entry.id, entry.title);
    }
    Ok(())
}

pub fn handle_edit(role: Option<String>, args: EditArgs) -> Result<()> {
    let mut manager = open_manager(role)?;
    let json = args.json;
    let fields = draft_fields(args.fields)?;

    manager.edit(&args.id)?;
    let form = manager.form_mut();
    if let Some(title) = args.title {
        form.set_field(DraftField::Title(title));
    }
    for field in fields {
        form.set_field(field);
    }
    for tag in &args.toggle_tags {
        form.toggle_tag(tag);
    }

    let mut notifier = notifier_for(json);
    let entry = manager.save_form(&mut notifier)?;
    note_if_not_persisted(&entry);

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("  {} - {}", entry.id, entry.title);
    }
    Ok(())
}

pub fn handle_delete(role: Option<String>, id: String, force: bool) -> Result<()> {
    let mut manager = open_manager(role)?;

    let mut confirm: Box<dyn Confirm> = if force {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalConfirm)
    };
    let mut notifier = TerminalNotifier::new();

    let target = manager.find(&id).cloned();
    if !manager.delete(&id, confirm.as_mut(), &mut notifier)? {
        println!("Cancelled.");
    } else if let Some(entry) = target {
        note_if_not_persisted(&entry);
    }
    Ok(())
}

pub fn handle_toggle(role: Option<String>, id: String, json: bool) -> Result<()> {
    let mut manager = open_manager(role)?;
    let mut notifier = notifier_for(json);

    let entry = manager.toggle(&id, &mut notifier)?;
    note_if_not_persisted(&entry);
    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    }
    Ok(())
}

pub fn handle_stats(role: Option<String>, json: bool) -> Result<()> {
    let manager = open_manager(role)?;
    let stats = manager.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_warnings(&manager);
        println!("Total Therapies: {}", stats.total);
        println!("Active Therapies: {}", stats.active);
        println!("Categories: {}", stats.categories);
        println!("Total Sessions: {}", stats.total_sessions);
    }
    Ok(())
}

pub fn handle_options() -> Result<()> {
    println!("Icons:");
    for icon in Icon::ALL {
        println!("  {:<12} {}", icon.as_str(), icon.label());
    }

    println!("\nColors:");
    for color in Gradient::ALL {
        println!("  {:<32} {}", color.as_str(), color.label());
    }

    println!("\nCategories:");
    for category in Category::ALL {
        println!("  {}", category);
    }

    println!("\nTags:");
    println!("  {}", TAG_VOCABULARY.join(", "));
    Ok(())
}

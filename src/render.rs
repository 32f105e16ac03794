//! Presentation Models
//!
//! What each card and empty state shows, computed from the records. The
//! Leptos components only lay these out, always as text nodes so names and
//! descriptions never become markup.

use crate::dashboard::{load_failure_message, DeleteTarget, Listing};
use crate::models::{Category, FileRecord, Person};
use crate::nav::{Selection, View};

/// Text content of one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub icon: &'static str,
    pub title: String,
    pub subtitle: String,
    pub description: Option<String>,
}

/// A card plus what clicking it does
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: u32,
    pub model: CardModel,
    pub select: Option<Selection>,
    pub delete: DeleteTarget,
}

/// Button shown in an empty state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyAction {
    CreateCategory,
    AddPerson,
    Retry,
}

impl EmptyAction {
    pub fn label(&self) -> &'static str {
        match self {
            EmptyAction::CreateCategory => "Create Your First Category",
            EmptyAction::AddPerson => "Add First Person",
            EmptyAction::Retry => "Retry",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    pub icon: Option<&'static str>,
    pub heading: Option<String>,
    pub lines: Vec<String>,
    pub hint: Option<String>,
    pub action: Option<EmptyAction>,
}

/// An empty list never renders as an empty container
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Empty(EmptyState),
    Cards(Vec<Card>),
    /// The fetch for this view failed before any list arrived
    Failed(EmptyState),
}

pub fn file_icon(file_type: &str) -> &'static str {
    if file_type.contains("image") {
        "🖼️"
    } else if file_type.contains("video") {
        "🎬"
    } else if file_type.contains("audio") {
        "🎵"
    } else if file_type.contains("pdf") {
        "📕"
    } else {
        "📄"
    }
}

pub fn category_card(category: &Category) -> Card {
    Card {
        key: category.id,
        model: CardModel {
            icon: "📁",
            title: category.cat_name.clone(),
            subtitle: "Click to view people".to_string(),
            description: None,
        },
        select: Some(Selection::Category(category.clone())),
        delete: DeleteTarget::Category(category.clone()),
    }
}

pub fn person_card(person: &Person) -> Card {
    Card {
        key: person.id,
        model: CardModel {
            icon: "👤",
            title: person.person_name.clone(),
            subtitle: "Click to view files".to_string(),
            description: None,
        },
        select: Some(Selection::Person(person.clone())),
        delete: DeleteTarget::Person(person.clone()),
    }
}

pub fn file_card(person_id: u32, file: &FileRecord) -> Card {
    Card {
        key: file.id,
        model: CardModel {
            icon: file_icon(&file.file_type),
            title: file.file_name.clone(),
            subtitle: file.file_type.clone(),
            description: file.description.clone().filter(|d| !d.is_empty()),
        },
        select: None,
        delete: DeleteTarget::File { person_id, file: file.clone() },
    }
}

pub fn categories_empty() -> EmptyState {
    EmptyState {
        icon: Some("👋"),
        heading: Some("Welcome to Memoir!".to_string()),
        lines: vec!["Start by creating your first category.".to_string()],
        hint: Some("Examples: Family, Friends, Travel".to_string()),
        action: Some(EmptyAction::CreateCategory),
    }
}

pub fn people_empty(category: &Category) -> EmptyState {
    EmptyState {
        icon: Some("👥"),
        heading: Some("Add People".to_string()),
        lines: vec![format!("Who belongs in \"{}\"?", category.cat_name)],
        hint: None,
        action: Some(EmptyAction::AddPerson),
    }
}

pub fn files_empty(person: &Person) -> EmptyState {
    EmptyState {
        icon: None,
        heading: None,
        lines: vec![format!("No files yet for {}.", person.person_name)],
        hint: Some("Use the upload section above.".to_string()),
        action: None,
    }
}

fn empty_state(view: &View) -> EmptyState {
    match view {
        View::Categories => categories_empty(),
        View::People { category } => people_empty(category),
        View::Files { person, .. } => files_empty(person),
    }
}

/// Shown in place of the list when loading `view` failed
pub fn load_failed(view: &View) -> EmptyState {
    EmptyState {
        icon: Some("⚠️"),
        heading: None,
        lines: vec![load_failure_message(view).to_string()],
        hint: None,
        action: Some(EmptyAction::Retry),
    }
}

/// Body for `listing` as shown under `view`
pub fn list_body(listing: &Listing, view: &View) -> ListBody {
    let cards: Vec<Card> = match (view, listing) {
        (View::Categories, Listing::Categories(cats)) => cats.iter().map(category_card).collect(),
        (View::People { .. }, Listing::People(people)) => people.iter().map(person_card).collect(),
        (View::Files { person, .. }, Listing::Files(files)) => {
            files.iter().map(|f| file_card(person.id, f)).collect()
        }
        // A listing left over from another view counts as nothing for this one
        _ => Vec::new(),
    };
    if cards.is_empty() {
        ListBody::Empty(empty_state(view))
    } else {
        ListBody::Cards(cards)
    }
}

/// Header name, "User" when none was stored
pub fn display_name(username: Option<&str>) -> String {
    match username.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "User".to_string(),
    }
}

pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

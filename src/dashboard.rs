//! Dashboard Data Loading
//!
//! Fetches behind each view and the create/delete actions. Returns plain
//! records; the components decide what to show.

use crate::api::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::{Category, FileRecord, Person};
use crate::nav::View;
use crate::session::KeyValueStore;

/// The list on screen, as returned by the server (order preserved)
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Categories(Vec<Category>),
    People(Vec<Person>),
    Files(Vec<FileRecord>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Listing::Categories(v) => v.len(),
            Listing::People(v) => v.len(),
            Listing::Files(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exactly one request: the list `view` displays
pub async fn fetch_listing<T: Transport, K: KeyValueStore>(client: &ApiClient<T, K>, view: &View) -> ApiResult<Listing> {
    let listing = match view {
        View::Categories => Listing::Categories(client.list_categories().await?),
        View::People { category } => Listing::People(client.list_people(category.id).await?),
        View::Files { person, .. } => Listing::Files(client.list_files(person.id).await?),
    };
    log::info!("loaded {} {}", listing.len(), view.name());
    Ok(listing)
}

pub fn load_failure_message(view: &View) -> &'static str {
    match view {
        View::Categories => "Failed to load categories",
        View::People { .. } => "Failed to load people",
        View::Files { .. } => "Failed to load files",
    }
}

/// Something a card's delete control removes
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Category(Category),
    Person(Person),
    File { person_id: u32, file: FileRecord },
}

impl DeleteTarget {
    pub fn confirm_prompt(&self) -> String {
        match self {
            DeleteTarget::Category(c) => format!("Delete \"{}\"?", c.cat_name),
            DeleteTarget::Person(p) => format!("Delete \"{}\"?", p.person_name),
            DeleteTarget::File { .. } => "Delete file?".to_string(),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            DeleteTarget::Category(_) => "Category deleted",
            DeleteTarget::Person(_) => "Person deleted",
            DeleteTarget::File { .. } => "File deleted",
        }
    }
}

pub async fn delete_entity<T: Transport, K: KeyValueStore>(client: &ApiClient<T, K>, target: &DeleteTarget) -> ApiResult<()> {
    match target {
        DeleteTarget::Category(c) => client.delete_category(c.id).await,
        DeleteTarget::Person(p) => client.delete_person(p.id).await,
        DeleteTarget::File { person_id, file } => client.delete_file(*person_id, file.id).await,
    }
}

/// Create-form input refused before any request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    EmptyCategoryName,
    EmptyPersonName,
    NoCategory,
}

impl Rejected {
    pub fn message(&self) -> &'static str {
        match self {
            Rejected::EmptyCategoryName => "Please enter a category name",
            Rejected::EmptyPersonName => "Please enter a person name",
            Rejected::NoCategory => "No category selected",
        }
    }
}

/// Trimmed category name
pub fn category_draft(raw: &str) -> Result<String, Rejected> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Rejected::EmptyCategoryName);
    }
    Ok(name.to_string())
}

/// Trimmed person name and the category it goes under
pub fn person_draft(raw: &str, view: &View) -> Result<(String, u32), Rejected> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Rejected::EmptyPersonName);
    }
    let category = view.current_category().ok_or(Rejected::NoCategory)?;
    Ok((name.to_string(), category.id))
}

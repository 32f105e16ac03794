//! Navigation
//!
//! Page switching and the dashboard view state machine:
//! Categories -> People(category) -> Files(person).

use crate::models::{Category, Person};

/// Top-level pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    SignUp,
    Dashboard,
}

/// Which list the dashboard shows. A person is only ever held together
/// with its category.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Categories,
    People { category: Category },
    Files { category: Category, person: Person },
}

impl View {
    pub fn current_category(&self) -> Option<&Category> {
        match self {
            View::Categories => None,
            View::People { category } | View::Files { category, .. } => Some(category),
        }
    }

    pub fn current_person(&self) -> Option<&Person> {
        match self {
            View::Files { person, .. } => Some(person),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Categories => "categories",
            View::People { .. } => "people",
            View::Files { .. } => "files",
        }
    }
}

/// A card click that navigates deeper
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Category(Category),
    Person(Person),
}

/// Stamp for one listing fetch; only the latest one may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Navigator {
    view: View,
    generation: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    fn stamp(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Whether a fetch stamped with `ticket` may still update the view
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation == ticket.0
    }

    /// Refetch the list already on screen
    pub fn reload(&mut self) -> Ticket {
        self.stamp()
    }

    /// Categories -> People(category). Any person selection is dropped.
    pub fn select_category(&mut self, category: Category) -> Ticket {
        log::info!("open category {} ({})", category.id, category.cat_name);
        self.view = View::People { category };
        self.stamp()
    }

    /// People(category) -> Files(person). Ignored outside the People view.
    pub fn select_person(&mut self, person: Person) -> Option<Ticket> {
        let View::People { category } = &self.view else {
            log::warn!("person {} selected outside people view", person.id);
            return None;
        };
        log::info!("open person {} ({})", person.id, person.person_name);
        self.view = View::Files {
            category: category.clone(),
            person,
        };
        Some(self.stamp())
    }

    pub fn select(&mut self, selection: Selection) -> Option<Ticket> {
        match selection {
            Selection::Category(c) => Some(self.select_category(c)),
            Selection::Person(p) => self.select_person(p),
        }
    }

    /// One level up; `None` at the root
    pub fn back(&mut self) -> Option<Ticket> {
        self.view = match std::mem::take(&mut self.view) {
            View::Categories => return None,
            View::People { .. } => View::Categories,
            View::Files { category, .. } => View::People { category },
        };
        log::info!("back to {}", self.view.name());
        Some(self.stamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u32, name: &str) -> Category {
        Category { id, cat_name: name.into(), user_id: None, created_at: None }
    }

    fn person(id: u32, category_id: u32) -> Person {
        Person { id, person_name: format!("P{}", id), category_id, created_at: None }
    }

    #[test]
    fn test_starts_on_categories() {
        let nav = Navigator::new();
        assert_eq!(nav.view(), &View::Categories);
        assert!(nav.view().current_category().is_none());
    }

    #[test]
    fn test_forward_and_back() {
        let mut nav = Navigator::new();
        nav.select_category(category(1, "Family"));
        assert_eq!(nav.view().current_category().map(|c| c.id), Some(1));

        nav.select_person(person(4, 1)).unwrap();
        assert_eq!(nav.view().current_person().map(|p| p.id), Some(4));
        assert_eq!(nav.view().current_category().map(|c| c.id), Some(1));

        nav.back().unwrap();
        assert_eq!(nav.view(), &View::People { category: category(1, "Family") });

        nav.back().unwrap();
        assert_eq!(nav.view(), &View::Categories);
        assert!(nav.back().is_none());
    }

    #[test]
    fn test_person_requires_category() {
        let mut nav = Navigator::new();
        assert!(nav.select_person(person(4, 1)).is_none());
        assert_eq!(nav.view(), &View::Categories);
    }

    #[test]
    fn test_select_category_from_files_clears_person() {
        let mut nav = Navigator::new();
        nav.select_category(category(1, "Family"));
        nav.select_person(person(4, 1));
        nav.select_category(category(2, "Friends"));
        assert!(nav.view().current_person().is_none());
        assert_eq!(nav.view().current_category().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_late_ticket_is_stale() {
        let mut nav = Navigator::new();
        let people = nav.select_category(category(1, "Family"));
        assert!(nav.is_current(people));

        let back = nav.back().unwrap();
        assert!(!nav.is_current(people));
        assert!(nav.is_current(back));

        let reload = nav.reload();
        assert!(!nav.is_current(back));
        assert!(nav.is_current(reload));
    }
}

//! Store access and listing output for users.
//!
//! Operations are written against [`UserStore`] so they can run against the
//! MongoDB collection in production and an in-memory store in tests.

use std::io::{self, Write};

use bson::doc;
use crossterm::style::{style, Color, Stylize};
use log::{debug, info};
use mongodb::sync::{Client, Collection};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::user::User;

/// Persistence operations the commands need.
pub trait UserStore {
    /// Insert one new document.
    fn insert(&self, user: &User) -> Result<()>;
    /// Every document in the collection, in the store's natural order.
    fn find_all(&self) -> Result<Vec<User>>;
}

/// The `users` collection on a live MongoDB deployment.
pub struct MongoStore {
    collection: Collection<User>,
}

impl MongoStore {
    /// Connect, ping, and bind to the configured collection.
    ///
    /// A failed ping is reported as [`Error::Connect`]; nothing is retried.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        debug!("connecting to {}", config.uri);
        let client = Client::with_uri_str(&config.uri).map_err(Error::Connect)?;
        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(Error::Connect)?;
        info!("connected to {}/{}", config.database, config.collection);

        Ok(MongoStore {
            collection: database.collection(&config.collection),
        })
    }
}

impl UserStore for MongoStore {
    fn insert(&self, user: &User) -> Result<()> {
        self.collection.insert_one(user).run().map_err(Error::Store)?;
        debug!("inserted user {}", user.id);
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<User>> {
        let cursor = self.collection.find(doc! {}).run().map_err(Error::Store)?;
        // One bad document fails the whole listing.
        let users = cursor
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Store)?;
        debug!("decoded {} users", users.len());
        Ok(users)
    }
}

/// Outcome of listing the collection.
#[derive(Debug, PartialEq)]
pub enum Listing {
    /// The collection holds no documents.
    Empty,
    /// At least one user, in store order.
    Users(Vec<User>),
}

/// Validate `name`, then insert a new user with it.
///
/// An empty name fails before the store is touched. Names are not unique.
pub fn create_user(store: &impl UserStore, name: &str) -> Result<User> {
    let user = User::new(name)?;
    store.insert(&user)?;
    Ok(user)
}

/// Fetch every user, separating the empty collection from a populated one.
pub fn list_users(store: &impl UserStore) -> Result<Listing> {
    let users = store.find_all()?;
    if users.is_empty() {
        Ok(Listing::Empty)
    } else {
        Ok(Listing::Users(users))
    }
}

/// Color for a user's line: green once completed, yellow otherwise.
pub fn status_color(completed: bool) -> Color {
    if completed {
        Color::Green
    } else {
        Color::Yellow
    }
}

/// Print `index: name` per user, 1-based, colored by completion.
pub fn print_users<W: Write>(out: &mut W, users: &[User]) -> io::Result<()> {
    for (i, user) in users.iter().enumerate() {
        let line = format!("{}: {}", i + 1, user.name);
        writeln!(out, "{}", style(line).with(status_color(user.completed)))?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// In-memory stand-in for the collection.
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub users: RefCell<Vec<User>>,
        pub inserts: Cell<usize>,
        pub queries: Cell<usize>,
        pub down: bool,
    }

    impl MemoryStore {
        pub fn down() -> Self {
            MemoryStore {
                down: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<()> {
            if self.down {
                return Err(Error::Store(mongodb::error::Error::from(io::Error::other(
                    "store unavailable",
                ))));
            }
            Ok(())
        }
    }

    impl UserStore for MemoryStore {
        fn insert(&self, user: &User) -> Result<()> {
            self.inserts.set(self.inserts.get() + 1);
            self.check()?;
            self.users.borrow_mut().push(user.clone());
            Ok(())
        }

        fn find_all(&self) -> Result<Vec<User>> {
            self.queries.set(self.queries.get() + 1);
            self.check()?;
            Ok(self.users.borrow().clone())
        }
    }

    fn users_of(listing: Listing) -> Vec<User> {
        match listing {
            Listing::Users(users) => users,
            Listing::Empty => panic!("expected users"),
        }
    }

    #[test]
    fn test_create_then_list_contains_pending_user() {
        let store = MemoryStore::default();
        let created = create_user(&store, "alice").unwrap();

        let users = users_of(list_users(&store).unwrap());
        let found = users.iter().find(|u| u.id == created.id).unwrap();
        assert_eq!(found.name, "alice");
        assert!(!found.completed);
    }

    #[test]
    fn test_empty_name_never_reaches_store() {
        let store = MemoryStore::default();
        assert!(matches!(create_user(&store, ""), Err(Error::EmptyName)));
        assert_eq!(store.inserts.get(), 0);
        assert_eq!(store.queries.get(), 0);
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        let store = MemoryStore::default();
        assert_eq!(list_users(&store).unwrap(), Listing::Empty);
    }

    #[test]
    fn test_list_returns_every_inserted_user() {
        let store = MemoryStore::default();
        for name in ["a", "b", "c", "d"] {
            create_user(&store, name).unwrap();
        }
        let users = users_of(list_users(&store).unwrap());
        assert_eq!(users.len(), 4);
        assert_eq!(
            users.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_duplicate_names_are_separate_users() {
        let store = MemoryStore::default();
        let first = create_user(&store, "same").unwrap();
        let second = create_user(&store, "same").unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(users_of(list_users(&store).unwrap()).len(), 2);
    }

    #[test]
    fn test_store_errors_propagate() {
        let store = MemoryStore::down();
        assert!(matches!(create_user(&store, "x"), Err(Error::Store(_))));
        assert!(matches!(list_users(&store), Err(Error::Store(_))));
        assert_eq!(store.inserts.get(), 1);
    }

    #[test]
    fn test_print_users_numbers_from_one() {
        let users: Vec<User> = ["x", "y", "z"]
            .iter()
            .map(|n| User::new(*n).unwrap())
            .collect();
        let mut out = Vec::new();
        print_users(&mut out, &users).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("1: x"));
        assert!(lines[1].contains("2: y"));
        assert!(lines[2].contains("3: z"));
    }

    #[test]
    fn test_completed_users_render_differently() {
        assert_ne!(status_color(true), status_color(false));

        let pending = User::new("task").unwrap();
        let mut done = pending.clone();
        done.completed = true;

        let mut out = Vec::new();
        print_users(&mut out, &[pending, done]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            format!("{}", style("1: task".to_string()).with(Color::Yellow))
        );
        assert_eq!(
            lines[1],
            format!("{}", style("2: task".to_string()).with(Color::Green))
        );
    }
}

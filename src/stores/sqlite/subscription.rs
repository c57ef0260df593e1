//! Implements a SQLite backed subscription store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::{
    Error,
    stores::SubscriptionStore,
    subscription::{
        NewSubscription, Subscription, SubscriptionId, create_subscription, create_subscriptions,
        delete_matching_subscriptions, delete_subscription, get_all_subscriptions,
        get_subscription,
    },
    user::{UserProfile, get_user_profile, upsert_user_profile},
};

/// Records and retrieves subscriptions to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteSubscriptionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteSubscriptionStore {
    /// Create a new subscription store with a SQLite database.
    ///
    /// The caller is expected to have created the tables, e.g. with [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl SubscriptionStore for SQLiteSubscriptionStore {
    fn record_subscription(&self, subscription: NewSubscription) -> Result<Subscription, Error> {
        let connection = self.lock()?;
        create_subscription(subscription, &connection)
    }

    fn record_subscriptions(
        &self,
        subscriptions: Vec<NewSubscription>,
    ) -> Result<Vec<Subscription>, Error> {
        let connection = self.lock()?;
        create_subscriptions(subscriptions, &connection)
    }

    fn get_subscriptions(&self) -> Result<Vec<Subscription>, Error> {
        let connection = self.lock()?;
        get_all_subscriptions(&connection)
    }

    fn get_subscription(&self, id: SubscriptionId) -> Result<Option<Subscription>, Error> {
        let connection = self.lock()?;
        get_subscription(id, &connection)
    }

    fn delete_subscription(&self, id: SubscriptionId) -> Result<(), Error> {
        let connection = self.lock()?;
        delete_subscription(id, &connection)
    }

    fn delete_matching_subscriptions(&self, name: &str, amount: Decimal) -> Result<usize, Error> {
        let connection = self.lock()?;
        delete_matching_subscriptions(name, amount, &connection)
    }

    fn record_user_details(&self, name: &str, email: &str) -> Result<UserProfile, Error> {
        let connection = self.lock()?;
        upsert_user_profile(name, email, &connection)
    }

    fn get_user_details(&self) -> Result<UserProfile, Error> {
        let connection = self.lock()?;
        get_user_profile(&connection)
    }
}

#[cfg(test)]
mod sqlite_subscription_store_tests {
    use std::{
        str::FromStr,
        sync::{Arc, Mutex},
    };

    use rusqlite::Connection;
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        stores::SubscriptionStore,
        subscription::NewSubscription,
        user::UserProfile,
    };

    use super::SQLiteSubscriptionStore;

    fn get_test_store() -> SQLiteSubscriptionStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SQLiteSubscriptionStore::new(Arc::new(Mutex::new(connection)))
    }

    fn netflix() -> NewSubscription {
        NewSubscription {
            name: "Netflix".to_owned(),
            amount: Decimal::from_str("14.99").unwrap(),
            due_date: date!(2020 - 11 - 29),
        }
    }

    #[test]
    fn recorded_subscription_is_visible_to_later_reads() {
        let store = get_test_store();

        let recorded = store
            .record_subscription(netflix())
            .expect("Could not record subscription");

        assert_eq!(store.get_subscriptions(), Ok(vec![recorded.clone()]));
        assert_eq!(store.get_subscription(recorded.id), Ok(Some(recorded)));
    }

    #[test]
    fn record_subscriptions_assigns_ids_in_order() {
        let store = get_test_store();
        let mut kfc = netflix();
        kfc.name = "KFC".to_owned();

        let recorded = store
            .record_subscriptions(vec![netflix(), kfc])
            .expect("Could not record subscriptions");

        assert_eq!(recorded.len(), 2);
        assert!(recorded[0].id < recorded[1].id);
        assert_eq!(store.get_subscriptions(), Ok(recorded));
    }

    #[test]
    fn get_subscriptions_on_empty_store_is_empty() {
        let store = get_test_store();

        assert_eq!(store.get_subscriptions(), Ok(vec![]));
    }

    #[test]
    fn delete_zero_id_is_invalid() {
        let store = get_test_store();
        store
            .record_subscription(netflix())
            .expect("Could not record subscription");

        assert_eq!(store.delete_subscription(0), Err(Error::InvalidSubscriptionId(0)));
        assert_eq!(store.get_subscriptions().map(|s| s.len()), Ok(1));
    }

    #[test]
    fn delete_matching_removes_both_instances() {
        let store = get_test_store();
        store
            .record_subscription(netflix())
            .expect("Could not record subscription");
        store
            .record_subscription(netflix())
            .expect("Could not record subscription");

        let deleted = store.delete_matching_subscriptions("Netflix", netflix().amount);

        assert_eq!(deleted, Ok(2));
        assert_eq!(store.get_subscriptions(), Ok(vec![]));
    }

    #[test]
    fn user_details_default_to_empty() {
        let store = get_test_store();

        assert_eq!(store.get_user_details(), Ok(UserProfile::default()));
    }

    #[test]
    fn user_details_are_replaced() {
        let store = get_test_store();
        store
            .record_user_details("Gary Gopher", "gary@gopher.com")
            .expect("Could not record user details");

        store
            .record_user_details("Gwen Gopher", "gwen@gopher.com")
            .expect("Could not record user details");

        assert_eq!(
            store.get_user_details(),
            Ok(UserProfile {
                name: "Gwen Gopher".to_owned(),
                email: "gwen@gopher.com".to_owned(),
            })
        );
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let store = get_test_store();
        let connection = store.connection.clone();
        let _ = std::thread::spawn(move || {
            let _guard = connection.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.get_subscriptions(), Err(Error::DatabaseLockError));
    }
}

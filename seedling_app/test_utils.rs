#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use serde_json::Value;
    use std::{
        cmp::Ordering,
        collections::{BTreeMap, HashMap},
        sync::{
            Arc, Mutex,
            atomic::{self, AtomicUsize},
        },
        time::Duration,
    };

    use seedling_types::{
        errors::{ApplicationError, DbError},
        league::{League, Member, compare_points},
    };

    use crate::{
        repository::{LeagueRepository, PostRepository},
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    struct LeagueEntry {
        id: String,
        data: Value,
        members: Vec<(String, Value)>,
    }

    #[derive(Default)]
    struct StoreState {
        leagues: Vec<LeagueEntry>,
        posts: BTreeMap<String, Value>,
        read_failure: Option<String>,
        delete_failure: Option<String>,
        probe_delays: HashMap<String, Duration>,
        probes: usize,
    }

    /// Document store kept in memory. Leagues enumerate in insertion order.
    #[derive(Default, Clone)]
    pub struct InMemoryStore {
        state: Arc<Mutex<StoreState>>,
    }

    impl InMemoryStore {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn add_league(&self, id: &str, data: Value) {
            self.state.lock().unwrap().leagues.push(LeagueEntry {
                id: id.to_string(),
                data,
                members: Vec::new(),
            });
        }

        /// Inserts or replaces the member document keyed by `user_id`.
        pub fn add_member(&self, league_id: &str, user_id: &str, data: Value) {
            let mut state = self.state.lock().unwrap();
            let league = state
                .leagues
                .iter_mut()
                .find(|l| l.id == league_id)
                .unwrap_or_else(|| panic!("league {league_id} not seeded"));

            match league.members.iter_mut().find(|(id, _)| id == user_id) {
                Some((_, existing)) => *existing = data,
                None => league.members.push((user_id.to_string(), data)),
            }
        }

        pub fn add_post(&self, id: &str, data: Value) {
            self.state
                .lock()
                .unwrap()
                .posts
                .insert(id.to_string(), data);
        }

        pub fn post_count(&self) -> usize {
            self.state.lock().unwrap().posts.len()
        }

        /// Every subsequent read fails with `message`.
        pub fn fail_reads(&self, message: &str) {
            self.state.lock().unwrap().read_failure = Some(message.to_string());
        }

        /// Every subsequent batch delete fails with `message`.
        pub fn fail_deletes(&self, message: &str) {
            self.state.lock().unwrap().delete_failure = Some(message.to_string());
        }

        /// Delays membership probes against `league_id`.
        pub fn set_probe_delay(&self, league_id: &str, delay: Duration) {
            self.state
                .lock()
                .unwrap()
                .probe_delays
                .insert(league_id.to_string(), delay);
        }

        /// Number of membership probes issued so far.
        pub fn probe_count(&self) -> usize {
            self.state.lock().unwrap().probes
        }

        fn check_reads(&self) -> Result<(), ApplicationError> {
            match &self.state.lock().unwrap().read_failure {
                Some(msg) => Err(ApplicationError::Db(DbError::Unavailable(msg.clone()))),
                None => Ok(()),
            }
        }

        fn apply_deletes(&self, ids: &[String]) {
            let mut state = self.state.lock().unwrap();
            for id in ids {
                state.posts.remove(id);
            }
        }
    }

    #[derive(Clone)]
    pub struct MockLeagueRepository {
        store: InMemoryStore,
    }

    impl MockLeagueRepository {
        pub fn new(store: InMemoryStore) -> Self {
            Self { store }
        }
    }

    #[async_trait]
    impl LeagueRepository for MockLeagueRepository {
        async fn list_leagues(&self) -> Result<Vec<League>, ApplicationError> {
            self.store.check_reads()?;
            let state = self.store.state.lock().unwrap();

            Ok(state
                .leagues
                .iter()
                .map(|l| League::from_document(l.id.clone(), l.data.clone()))
                .collect())
        }

        async fn member_exists(
            &self,
            league_id: &str,
            user_id: &str,
        ) -> Result<bool, ApplicationError> {
            let (exists, delay) = {
                let mut state = self.store.state.lock().unwrap();
                state.probes += 1;
                let exists = state
                    .leagues
                    .iter()
                    .find(|l| l.id == league_id)
                    .is_some_and(|l| l.members.iter().any(|(id, _)| id == user_id));
                (exists, state.probe_delays.get(league_id).copied())
            };

            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.store.check_reads()?;

            Ok(exists)
        }

        async fn list_members_by_points(
            &self,
            league_id: &str,
        ) -> Result<Vec<Member>, ApplicationError> {
            self.store.check_reads()?;
            let state = self.store.state.lock().unwrap();

            let mut members: Vec<Member> = state
                .leagues
                .iter()
                .find(|l| l.id == league_id)
                .map(|l| {
                    l.members
                        .iter()
                        .map(|(id, data)| Member::from_document(id.clone(), data))
                        .filter(|m| m.point.is_some())
                        .collect()
                })
                .unwrap_or_default();

            // Stable sort: equal points keep insertion order.
            members.sort_by(|a, b| match (&a.point, &b.point) {
                (Some(a), Some(b)) => compare_points(b, a),
                _ => Ordering::Equal,
            });

            Ok(members)
        }
    }

    #[derive(Clone)]
    pub struct MockPostRepository {
        store: InMemoryStore,
        staged: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn list_ids(&self) -> Result<Vec<String>, ApplicationError> {
            self.store.check_reads()?;
            Ok(self.store.state.lock().unwrap().posts.keys().cloned().collect())
        }

        async fn delete_batch(&self, ids: &[String]) -> Result<u64, ApplicationError> {
            if let Some(msg) = &self.store.state.lock().unwrap().delete_failure {
                return Err(ApplicationError::Db(DbError::Unavailable(msg.clone())));
            }

            self.staged.lock().unwrap().extend_from_slice(ids);
            Ok(ids.len() as u64)
        }
    }

    #[derive(Default)]
    struct UowStats {
        begun: AtomicUsize,
        commits: AtomicUsize,
        rollbacks: AtomicUsize,
    }

    /// Unit of work over an [`InMemoryStore`]. Deletes are applied only on commit.
    pub struct MockUnitOfWork {
        store: InMemoryStore,
        staged: Arc<Mutex<Vec<String>>>,
        stats: Arc<UowStats>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::with_store(InMemoryStore::new())
        }

        pub fn with_store(store: InMemoryStore) -> Self {
            Self {
                store,
                staged: Arc::new(Mutex::new(Vec::new())),
                stats: Arc::new(UowStats::default()),
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn leagues(&self) -> Arc<dyn LeagueRepository + 'a> {
            Arc::new(MockLeagueRepository::new(self.store.clone()))
        }

        fn posts(&self) -> Arc<dyn PostRepository + 'a> {
            Arc::new(MockPostRepository {
                store: self.store.clone(),
                staged: self.staged.clone(),
            })
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            let staged = std::mem::take(&mut *self.staged.lock().unwrap());
            self.store.apply_deletes(&staged);
            self.stats.commits.fetch_add(1, atomic::Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.staged.lock().unwrap().clear();
            self.stats.rollbacks.fetch_add(1, atomic::Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out units of work over one shared [`InMemoryStore`] and counts them.
    pub struct MockUnitOfWorkProvider {
        store: InMemoryStore,
        stats: Arc<UowStats>,
    }

    impl MockUnitOfWorkProvider {
        pub fn new(store: InMemoryStore) -> Self {
            Self {
                store,
                stats: Arc::new(UowStats::default()),
            }
        }

        pub fn store(&self) -> &InMemoryStore {
            &self.store
        }

        pub fn begun(&self) -> usize {
            self.stats.begun.load(atomic::Ordering::SeqCst)
        }

        pub fn commits(&self) -> usize {
            self.stats.commits.load(atomic::Ordering::SeqCst)
        }

        pub fn rollbacks(&self) -> usize {
            self.stats.rollbacks.load(atomic::Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            self.stats.begun.fetch_add(1, atomic::Ordering::SeqCst);

            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork {
                store: self.store.clone(),
                staged: Arc::new(Mutex::new(Vec::new())),
                stats: self.stats.clone(),
            });
            Ok(uow)
        }
    }
}

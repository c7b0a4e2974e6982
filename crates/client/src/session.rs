use crate::{
    api::{ImportSummary, PlanApi},
    detail_cache::DetailCache,
    error::ClientError,
};
use log::{error, warn};
use models::{Course, CourseDetails, CourseKey, Semester, SemesterCourseEntry};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct SessionState {
    loaded: bool,
    semesters: Vec<Semester>,
    catalog: Vec<Course>,
    semester_courses: HashMap<String, Vec<SemesterCourseEntry>>,
    details: DetailCache,
}

/// One user's course-plan view: the semesters, the global catalog, each
/// loaded semester's course entries, and the detail cache.
///
/// State lives behind a mutex that is never held across an await, so
/// concurrent UI actions interleave exactly like the cooperative
/// single-threaded model they mirror. Two update policies apply, and they
/// are deliberately not unified because they trade latency differently:
/// - confirmed-append (`add_course`, `create_semester`, `remove_course`):
///   local state changes only after the server acknowledges;
/// - eager-mirror (`toggle_details`): local state changes immediately and
///   the server write's outcome is not awaited on the UI path.
pub struct PlanSession<A: PlanApi> {
    api: A,
    state: Mutex<SessionState>,
}

impl<A: PlanApi> PlanSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state lock poisoned")
    }

    /// Initial load: semesters and the global catalog are requested
    /// concurrently and both must resolve before the session counts as
    /// loaded.
    pub async fn load(&self) -> Result<(), ClientError> {
        let (semesters, catalog) =
            tokio::join!(self.api.list_semesters(), self.api.list_all_courses());
        let semesters = semesters?;
        let catalog = catalog?;

        let mut state = self.state();
        state.semesters = semesters;
        state.catalog = catalog;
        state.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.state().loaded
    }

    pub fn semesters(&self) -> Vec<Semester> {
        self.state().semesters.clone()
    }

    pub fn catalog(&self) -> Vec<Course> {
        self.state().catalog.clone()
    }

    pub fn semester_courses(&self, semester_id: &str) -> Vec<SemesterCourseEntry> {
        self.state()
            .semester_courses
            .get(semester_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a detail fetch for this course is in flight (drives the UI
    /// loading indicator)
    pub fn is_detail_loading(&self, key: &CourseKey) -> bool {
        self.state().details.is_in_flight(key)
    }

    pub async fn create_semester(&self, name: &str) -> Result<Semester, ClientError> {
        let semester = self.api.create_semester(name).await?;
        self.state().semesters.push(semester.clone());
        Ok(semester)
    }

    /// Loads a semester's course entries from the server, replacing the
    /// local list.
    pub async fn load_semester_courses(
        &self,
        semester_id: &str,
    ) -> Result<Vec<SemesterCourseEntry>, ClientError> {
        let entries = self.api.courses_for_semester(semester_id).await?;
        self.state()
            .semester_courses
            .insert(semester_id.to_owned(), entries.clone());
        Ok(entries)
    }

    /// Adds a course to a semester under the confirmed-append policy: the
    /// server write happens first and only its confirmed entry is appended
    /// locally. On failure nothing changes locally.
    pub async fn add_course(
        &self,
        semester_id: &str,
        course: &Course,
    ) -> Result<SemesterCourseEntry, ClientError> {
        let entry = match self.api.add_course_to_semester(semester_id, course).await {
            Ok(entry) => entry,
            Err(err) => {
                error!("failed to add course {} to semester {semester_id}: {err}", course.key());
                return Err(err);
            }
        };

        self.state()
            .semester_courses
            .entry(semester_id.to_owned())
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    /// Removes a course from a semester (confirmed: the local entry goes
    /// away only after the server delete succeeds).
    pub async fn remove_course(
        &self,
        semester_id: &str,
        course_id: &str,
    ) -> Result<(), ClientError> {
        self.api
            .delete_course_from_semester(semester_id, course_id)
            .await?;

        let mut state = self.state();
        if let Some(entries) = state.semester_courses.get_mut(semester_id) {
            entries.retain(|entry| entry.course.id.as_deref() != Some(course_id));
        }
        Ok(())
    }

    /// Fetches and merges the extended details for one course, deduplicating
    /// concurrent requests per structural key.
    ///
    /// Cached key: merge locally, no network. Key in flight: return
    /// immediately, the running fetch will merge for everyone. Otherwise the
    /// key is claimed, fetched, cached, and merged into every loaded entry
    /// that matches it; the claim is released on every exit path, success or
    /// failure.
    pub async fn show_details(
        &self,
        subject: &str,
        catalog_nbr: u32,
    ) -> Result<(), ClientError> {
        let key = CourseKey::new(subject, catalog_nbr);

        {
            let mut state = self.state();
            if let Some(details) = state.details.get(&key) {
                let details = details.clone();
                Self::merge_details(&mut state, &key, &details);
                return Ok(());
            }
            if !state.details.begin_fetch(&key) {
                // another task owns the fetch for this key
                return Ok(());
            }
        }

        match self.api.fetch_course_details(subject, catalog_nbr).await {
            Ok(details) => {
                let mut state = self.state();
                state.details.complete(key.clone(), details.clone());
                Self::merge_details(&mut state, &key, &details);
                Ok(())
            }
            Err(err) => {
                self.state().details.abort(&key);
                error!("failed to fetch details for {key}: {err}");
                Err(err)
            }
        }
    }

    /// Flips a semester entry's visibility under the eager-mirror policy:
    /// the local flag changes immediately and the server PATCH outcome is
    /// only logged. Matching is by structural key, not store id, which
    /// assumes the key is unique within the semester's list.
    pub async fn toggle_details(
        &self,
        semester_id: &str,
        subject: &str,
        catalog_nbr: u32,
        show_details: bool,
    ) {
        let key = CourseKey::new(subject, catalog_nbr);

        let course_id = {
            let state = self.state();
            state
                .semester_courses
                .get(semester_id)
                .and_then(|entries| {
                    entries
                        .iter()
                        .find(|entry| key.matches(&entry.course))
                        .and_then(|entry| entry.course.id.clone())
                })
        };

        // the server write is issued when the entry is known, but its
        // outcome never gates the local mirror
        if let Some(course_id) = course_id {
            if let Err(err) = self
                .api
                .update_course_details_visibility(semester_id, &course_id, show_details)
                .await
            {
                warn!("failed to persist visibility for {key} in {semester_id}: {err}");
            }
        }

        let mut state = self.state();
        if let Some(entries) = state.semester_courses.get_mut(semester_id) {
            for entry in entries.iter_mut().filter(|entry| key.matches(&entry.course)) {
                entry.show_details = show_details;
            }
        }
    }

    /// Triggers a catalog import on the server and, when it succeeds,
    /// refreshes the whole local catalog list.
    pub async fn populate_from_catalog(
        &self,
        term: &str,
        subject: &str,
    ) -> Result<ImportSummary, ClientError> {
        let summary = self.api.import_subject(term, subject).await?;

        let catalog = self.api.list_all_courses().await?;
        self.state().catalog = catalog;
        Ok(summary)
    }

    fn merge_details(state: &mut SessionState, key: &CourseKey, details: &CourseDetails) {
        for entries in state.semester_courses.values_mut() {
            for entry in entries.iter_mut().filter(|entry| key.matches(&entry.course)) {
                details.merge_into(&mut entry.course);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn api_error() -> ClientError {
        ClientError::Api {
            status: 500,
            message: "injected failure".to_owned(),
        }
    }

    fn course(id: &str, subject: &str, catalog_nbr: u32) -> Course {
        Course {
            id: Some(id.to_owned()),
            subject: subject.to_owned(),
            catalog_nbr,
            title_short: format!("{subject} {catalog_nbr}"),
            ..Default::default()
        }
    }

    fn entry(id: &str, subject: &str, catalog_nbr: u32) -> SemesterCourseEntry {
        SemesterCourseEntry {
            course: course(id, subject, catalog_nbr),
            show_details: false,
        }
    }

    #[derive(Default)]
    struct MockApi {
        detail_fetches: AtomicUsize,
        fail_details: AtomicBool,
        fail_add: AtomicBool,
        fail_toggle: AtomicBool,
        catalog_size: AtomicUsize,
    }

    impl MockApi {
        fn new() -> Self {
            let api = Self::default();
            api.catalog_size.store(2, Ordering::SeqCst);
            api
        }
    }

    #[async_trait]
    impl PlanApi for MockApi {
        async fn list_semesters(&self) -> Result<Vec<Semester>, ClientError> {
            Ok(vec![Semester {
                id: "s1".to_owned(),
                name: "Semester 1".to_owned(),
                sem_num: 1,
            }])
        }

        async fn create_semester(&self, name: &str) -> Result<Semester, ClientError> {
            Ok(Semester {
                id: "s2".to_owned(),
                name: name.to_owned(),
                sem_num: models::sem_num_from_name(name),
            })
        }

        async fn list_all_courses(&self) -> Result<Vec<Course>, ClientError> {
            let size = self.catalog_size.load(Ordering::SeqCst);
            Ok((0..size)
                .map(|i| course(&format!("c{i}"), "CS", 1110 + i as u32))
                .collect())
        }

        async fn courses_for_semester(
            &self,
            _semester_id: &str,
        ) -> Result<Vec<SemesterCourseEntry>, ClientError> {
            Ok(vec![entry("c0", "CS", 1110), entry("c1", "CS", 2110)])
        }

        async fn add_course_to_semester(
            &self,
            _semester_id: &str,
            course: &Course,
        ) -> Result<SemesterCourseEntry, ClientError> {
            if self.fail_add.load(Ordering::SeqCst) {
                return Err(api_error());
            }
            Ok(SemesterCourseEntry {
                course: course.clone(),
                show_details: false,
            })
        }

        async fn delete_course_from_semester(
            &self,
            _semester_id: &str,
            _course_id: &str,
        ) -> Result<(), ClientError> {
            Ok(())
        }

        async fn update_course_details_visibility(
            &self,
            _semester_id: &str,
            _course_id: &str,
            _show_details: bool,
        ) -> Result<(), ClientError> {
            if self.fail_toggle.load(Ordering::SeqCst) {
                return Err(api_error());
            }
            Ok(())
        }

        async fn import_subject(
            &self,
            _term: &str,
            _subject: &str,
        ) -> Result<ImportSummary, ClientError> {
            self.catalog_size.fetch_add(1, Ordering::SeqCst);
            Ok(ImportSummary {
                message: "Successfully added 1 courses".to_owned(),
                count: 1,
            })
        }

        async fn fetch_course_details(
            &self,
            _subject: &str,
            _catalog_nbr: u32,
        ) -> Result<CourseDetails, ClientError> {
            self.detail_fetches.fetch_add(1, Ordering::SeqCst);
            // suspend once so a concurrent caller gets a chance to observe
            // the in-flight claim
            tokio::task::yield_now().await;

            if self.fail_details.load(Ordering::SeqCst) {
                return Err(api_error());
            }
            Ok(CourseDetails {
                description: Some("Fetched description".to_owned()),
                credits: Some(4.0),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_load_joins_semesters_and_catalog() {
        let session = PlanSession::new(MockApi::new());
        assert!(!session.is_loaded());

        session.load().await.unwrap();
        assert!(session.is_loaded());
        assert_eq!(session.semesters().len(), 1);
        assert_eq!(session.catalog().len(), 2);
    }

    #[tokio::test]
    async fn test_add_course_appends_only_confirmed_entries() {
        let session = PlanSession::new(MockApi::new());
        let added = session.add_course("s1", &course("c0", "CS", 1110)).await.unwrap();
        assert_eq!(added.course.id.as_deref(), Some("c0"));
        assert_eq!(session.semester_courses("s1").len(), 1);
    }

    #[tokio::test]
    async fn test_add_course_failure_leaves_local_state_untouched() {
        let api = MockApi::new();
        api.fail_add.store(true, Ordering::SeqCst);
        let session = PlanSession::new(api);

        assert!(session.add_course("s1", &course("c0", "CS", 1110)).await.is_err());
        assert!(session.semester_courses("s1").is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_show_details_fetches_once() {
        let session = PlanSession::new(MockApi::new());
        session.load_semester_courses("s1").await.unwrap();

        let (first, second) =
            tokio::join!(session.show_details("CS", 1110), session.show_details("CS", 1110));
        first.unwrap();
        second.unwrap();

        assert_eq!(session.api.detail_fetches.load(Ordering::SeqCst), 1);
        assert!(!session.is_detail_loading(&CourseKey::new("CS", 1110)));

        let entries = session.semester_courses("s1");
        let merged = entries
            .iter()
            .find(|entry| entry.course.catalog_nbr == 1110)
            .unwrap();
        assert_eq!(merged.course.credits, Some(4.0));
        // the other entry is untouched
        let other = entries
            .iter()
            .find(|entry| entry.course.catalog_nbr == 2110)
            .unwrap();
        assert!(other.course.credits.is_none());
    }

    #[tokio::test]
    async fn test_cached_details_skip_the_network() {
        let session = PlanSession::new(MockApi::new());
        session.load_semester_courses("s1").await.unwrap();

        session.show_details("CS", 1110).await.unwrap();
        session.show_details("CS", 1110).await.unwrap();

        assert_eq!(session.api.detail_fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_releases_the_in_flight_claim() {
        let api = MockApi::new();
        api.fail_details.store(true, Ordering::SeqCst);
        let session = PlanSession::new(api);
        session.load_semester_courses("s1").await.unwrap();

        assert!(session.show_details("CS", 1110).await.is_err());
        assert!(!session.is_detail_loading(&CourseKey::new("CS", 1110)));

        // the key can be retried once the upstream recovers
        session.api.fail_details.store(false, Ordering::SeqCst);
        session.show_details("CS", 1110).await.unwrap();
        assert_eq!(session.api.detail_fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_toggle_mirrors_locally_even_when_server_fails() {
        let api = MockApi::new();
        api.fail_toggle.store(true, Ordering::SeqCst);
        let session = PlanSession::new(api);
        session.load_semester_courses("s1").await.unwrap();

        session.toggle_details("s1", "CS", 1110, true).await;

        let entries = session.semester_courses("s1");
        assert!(entries.iter().any(|entry| entry.course.catalog_nbr == 1110 && entry.show_details));
        // only the structurally matching entry flips
        assert!(entries.iter().any(|entry| entry.course.catalog_nbr == 2110 && !entry.show_details));
    }

    #[tokio::test]
    async fn test_remove_course_confirms_then_removes() {
        let session = PlanSession::new(MockApi::new());
        session.load_semester_courses("s1").await.unwrap();
        assert_eq!(session.semester_courses("s1").len(), 2);

        session.remove_course("s1", "c0").await.unwrap();
        let entries = session.semester_courses("s1");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].course.id.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn test_populate_refreshes_the_catalog() {
        let session = PlanSession::new(MockApi::new());
        session.load().await.unwrap();
        assert_eq!(session.catalog().len(), 2);

        let summary = session.populate_from_catalog("FA25", "CS").await.unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(session.catalog().len(), 3);
    }

    #[tokio::test]
    async fn test_create_semester_appends_after_confirmation() {
        let session = PlanSession::new(MockApi::new());
        session.load().await.unwrap();

        let created = session.create_semester("Semester 2").await.unwrap();
        assert_eq!(created.sem_num, 2);
        assert_eq!(session.semesters().len(), 2);
    }
}

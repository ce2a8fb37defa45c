use chrono::NaiveDate;
use legaldoc::drafting::{
    ContractOutline, OutlineDraft, OutlineId, OutlineRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Outline drafts kept for the lifetime of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryOutlineRepository {
    drafts: Arc<Mutex<HashMap<OutlineId, OutlineDraft>>>,
}

impl InMemoryOutlineRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<OutlineId, OutlineDraft>>, RepositoryError> {
        self.drafts
            .lock()
            .map_err(|_| RepositoryError::Unavailable("outline store poisoned".to_string()))
    }
}

impl OutlineRepository for InMemoryOutlineRepository {
    fn insert(&self, draft: OutlineDraft) -> Result<OutlineDraft, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&draft.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(draft.id.clone(), draft.clone());
        Ok(draft)
    }

    fn fetch(&self, id: &OutlineId) -> Result<Option<OutlineDraft>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn modify<E, F>(&self, id: &OutlineId, edit: F) -> Result<OutlineDraft, E>
    where
        F: FnOnce(&mut ContractOutline) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        let mut guard = self.lock()?;
        let draft = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut outline = draft.outline.clone();
        edit(&mut outline)?;
        draft.outline = outline;
        Ok(draft.clone())
    }

    fn remove(&self, id: &OutlineId) -> Result<OutlineDraft, RepositoryError> {
        self.lock()?.remove(id).ok_or(RepositoryError::NotFound)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use legaldoc::drafting::DraftingServiceError;
    use std::thread;

    fn draft(id: &str) -> OutlineDraft {
        OutlineDraft {
            id: OutlineId(id.to_string()),
            outline: ContractOutline::new(),
        }
    }

    #[test]
    fn duplicate_insert_conflicts() {
        let repository = InMemoryOutlineRepository::default();
        repository.insert(draft("outline-1")).expect("first insert");
        match repository.insert(draft("outline-1")) {
            Err(RepositoryError::Conflict) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
        let stored = repository
            .fetch(&OutlineId("outline-1".to_string()))
            .expect("fetch");
        assert!(stored.is_some());
    }

    #[test]
    fn modify_requires_existing_draft() {
        let repository = InMemoryOutlineRepository::default();
        let result = repository.modify(&OutlineId("outline-2".to_string()), |outline| {
            outline.add_section("Predmet".to_string());
            Ok::<_, RepositoryError>(())
        });
        match result {
            Err(RepositoryError::NotFound) => {}
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn failed_edit_leaves_stored_outline_untouched() {
        let repository = InMemoryOutlineRepository::default();
        let id = OutlineId("outline-3".to_string());
        repository.insert(draft("outline-3")).expect("insert");

        let result = repository.modify(&id, |outline| {
            outline.add_section("Predmet".to_string());
            outline
                .add_article(5, "Izvan raspona.".to_string())
                .map(|_| ())
                .map_err(DraftingServiceError::from)
        });
        assert!(matches!(result, Err(DraftingServiceError::Outline(_))));

        let stored = repository.fetch(&id).expect("fetch").expect("stored");
        assert_eq!(stored.outline.section_count(), 0);
    }

    #[test]
    fn concurrent_edits_are_not_lost() {
        let repository = InMemoryOutlineRepository::default();
        let id = OutlineId("outline-4".to_string());
        repository.insert(draft("outline-4")).expect("insert");

        thread::scope(|scope| {
            for worker in 0..8 {
                let repository = &repository;
                let id = &id;
                scope.spawn(move || {
                    for step in 0..25 {
                        repository
                            .modify(id, |outline| {
                                outline.add_section(format!("{worker}-{step}"));
                                Ok::<_, RepositoryError>(())
                            })
                            .expect("edit applied");
                    }
                });
            }
        });

        let stored = repository.fetch(&id).expect("fetch").expect("stored");
        assert_eq!(stored.outline.section_count(), 200);
    }

    #[test]
    fn removed_drafts_are_gone() {
        let repository = InMemoryOutlineRepository::default();
        let id = OutlineId("outline-5".to_string());
        repository.insert(draft("outline-5")).expect("insert");

        assert_eq!(repository.remove(&id).expect("removed").id, id);
        assert!(repository.fetch(&id).expect("fetch").is_none());
        match repository.remove(&id) {
            Err(RepositoryError::NotFound) => {}
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2024-05-20 "),
            Ok(NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date"))
        );
        assert!(parse_date("20.05.2024.")
            .expect_err("croatian format is rejected")
            .contains("YYYY-MM-DD"));
    }
}

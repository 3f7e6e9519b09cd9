//! In-memory ordered store of subjects.

use crate::registry::subject::{Subject, SubjectId, Title};

/// Records present at process start.
const SEED: [(u64, &str, bool); 5] = [
    (1, "Matematica", false),
    (2, "Lengua", true),
    (3, "Fisica", true),
    (4, "Quimica", true),
    (5, "Ed.Fisica", true),
];

/// Ordered collection of subjects plus the id counter.
///
/// Not thread-safe on its own; the HTTP layer wraps it in a lock and holds
/// that lock across each read-check-mutate sequence.
#[derive(Debug, Clone)]
pub struct Registry {
    subjects: Vec<Subject>,
    next_id: u64,
}

impl Registry {
    /// Registry holding the five seed subjects, next id 6.
    pub fn seeded() -> Self {
        let seed = SEED
            .iter()
            .filter_map(|(id, title, done)| {
                Title::parse(title).ok().map(|title| Subject {
                    id: SubjectId(*id),
                    title,
                    done: *done,
                })
            })
            .collect();
        Self::with_subjects(seed)
    }

    /// Registry starting from arbitrary records.
    ///
    /// The counter starts one past the highest seed id. Duplicate ids in the
    /// seed keep only their first occurrence.
    pub fn with_subjects(seed: Vec<Subject>) -> Self {
        let mut subjects: Vec<Subject> = Vec::with_capacity(seed.len());
        for subject in seed {
            if subjects.iter().all(|s| s.id != subject.id) {
                subjects.push(subject);
            }
        }
        let next_id = subjects.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        Self { subjects, next_id }
    }

    /// All subjects in insertion order.
    pub fn list(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn get(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SubjectId) -> bool {
        self.get(id).is_some()
    }

    /// Append a new subject under the next id.
    pub fn create(&mut self, title: Title, done: bool) -> Subject {
        let id = SubjectId(self.next_id);
        self.next_id += 1;

        let subject = Subject { id, title, done };
        self.subjects.push(subject.clone());
        subject
    }

    /// Replace the title and, when given, the completion flag.
    ///
    /// Returns `None` if no subject has this id.
    pub fn update(&mut self, id: SubjectId, title: Title, done: Option<bool>) -> Option<Subject> {
        let subject = self.subjects.iter_mut().find(|s| s.id == id)?;
        subject.title = title;
        if let Some(done) = done {
            subject.done = done;
        }
        Some(subject.clone())
    }

    /// Drop every subject with this id. Returns whether anything was removed.
    pub fn delete(&mut self, id: SubjectId) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != id);
        self.subjects.len() != before
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Id the next `create` will assign.
    pub fn next_id(&self) -> SubjectId {
        SubjectId(self.next_id)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(s: &str) -> Title {
        Title::parse(s).unwrap()
    }

    #[test]
    fn test_seed_data() {
        let registry = Registry::seeded();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.next_id(), SubjectId(6));

        let first = registry.get(SubjectId(1)).unwrap();
        assert_eq!(first.title.as_str(), "Matematica");
        assert!(!first.done);

        let names: Vec<_> = registry.list().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(names, ["Matematica", "Lengua", "Fisica", "Quimica", "Ed.Fisica"]);
    }

    #[test]
    fn test_create_appends_with_increasing_ids() {
        let mut registry = Registry::seeded();

        let a = registry.create(title("Historia"), false);
        let b = registry.create(title("Geografia"), true);

        assert_eq!(a.id, SubjectId(6));
        assert_eq!(b.id, SubjectId(7));
        assert_eq!(registry.list().last(), Some(&b));
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut registry = Registry::seeded();
        let created = registry.create(title("Historia"), false);

        assert!(registry.delete(created.id));
        let next = registry.create(title("Arte"), false);

        assert_eq!(next.id, SubjectId(7));
        assert!(registry.get(created.id).is_none());
    }

    #[test]
    fn test_update_keeps_done_when_absent() {
        let mut registry = Registry::seeded();

        let updated = registry.update(SubjectId(2), title("Lengua II"), None).unwrap();
        assert_eq!(updated.title.as_str(), "Lengua II");
        assert!(updated.done);

        let updated = registry.update(SubjectId(2), title("Lengua II"), Some(false)).unwrap();
        assert!(!updated.done);
        assert_eq!(updated.id, SubjectId(2));
    }

    #[test]
    fn test_update_missing_id() {
        let mut registry = Registry::seeded();
        assert!(registry.update(SubjectId(99), title("X"), Some(true)).is_none());
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_delete_twice() {
        let mut registry = Registry::seeded();
        assert!(registry.delete(SubjectId(3)));
        assert!(!registry.delete(SubjectId(3)));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_counts_after_creates_and_deletes() {
        let mut registry = Registry::seeded();
        for i in 0..4 {
            registry.create(title(&format!("Materia {i}")), false);
        }
        for id in [1, 6, 9] {
            assert!(registry.delete(SubjectId(id)));
        }
        assert_eq!(registry.len(), 4 + 5 - 3);
    }

    #[test]
    fn test_with_subjects_counter_and_duplicates() {
        let registry = Registry::with_subjects(vec![
            Subject { id: SubjectId(10), title: title("A"), done: false },
            Subject { id: SubjectId(3), title: title("B"), done: true },
            Subject { id: SubjectId(10), title: title("C"), done: true },
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.next_id(), SubjectId(11));

        let empty = Registry::with_subjects(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.next_id(), SubjectId(1));
    }
}

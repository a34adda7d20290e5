//! Learn-record normalization and method grouping.
//!
//! The fetch/cache layer hands over a raw, version-fragmented list of
//! [`LearnRecord`]s: one row per (subject, method, version) observation,
//! with plenty of exact duplicates across versions. [`normalize`] collapses
//! that into one entry per subject carrying its distinct
//! (method, level, version) tuples; [`group`] then assigns each subject to
//! a single primary bucket by method priority, producing the structure the
//! pagination cursor walks.

use schema::{LearnMethod, LearnRecord, VersionGroup};
use serde::{Deserialize, Serialize};

/// One distinct way a subject is learnable: method, level (level-up only)
/// and the version-group the record was observed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveMethod {
    pub method: LearnMethod,
    pub level: Option<u8>,
    pub version: VersionGroup,
}

/// A subject with its de-duplicated learn methods, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSubject {
    pub name: String,
    pub methods: Vec<MoveMethod>,
}

/// One line of a rendered bucket: the subject, the representative
/// level/version for the bucket's method, and the other methods the subject
/// is also learnable by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedEntry {
    pub name: String,
    pub level: Option<u8>,
    pub version: VersionGroup,
    pub other_methods: Vec<LearnMethod>,
}

/// Subjects partitioned into one bucket per learn method, in the fixed
/// method order. Every subject appears in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedMoves {
    buckets: [Vec<GroupedEntry>; 5],
}

/// Collapse raw learn records into one [`NormalizedSubject`] per subject.
///
/// Exact duplicate (method, level, version) tuples are dropped; distinct
/// versions survive, so a move learnable at different levels in two
/// version-groups keeps both rows. Unrecognized method strings degrade to
/// [`LearnMethod::Other`], and a stray `level` on a non-level-up record is
/// discarded. Subject order and per-subject method order are first-seen.
pub fn normalize(records: &[LearnRecord]) -> Vec<NormalizedSubject> {
    let mut subjects: Vec<NormalizedSubject> = Vec::new();

    for record in records {
        let method = LearnMethod::from_wire(&record.method);
        let entry = MoveMethod {
            method,
            level: match method {
                LearnMethod::LevelUp => record.level,
                _ => None,
            },
            version: record.version.clone(),
        };

        match subjects
            .iter_mut()
            .find(|subject| subject.name == record.subject_name)
        {
            Some(subject) => {
                if !subject.methods.contains(&entry) {
                    subject.methods.push(entry);
                }
            }
            None => subjects.push(NormalizedSubject {
                name: record.subject_name.clone(),
                methods: vec![entry],
            }),
        }
    }

    subjects
}

/// Partition normalized subjects into method buckets.
pub fn group(subjects: &[NormalizedSubject]) -> GroupedMoves {
    GroupedMoves::from_subjects(subjects)
}

impl GroupedMoves {
    /// Assign each subject to its highest-priority method's bucket.
    ///
    /// The representative level/version is taken from the subject's first
    /// record (input order) matching the chosen method; there is no
    /// re-sorting by "best" version. Bucket order is first-seen subject
    /// order.
    pub fn from_subjects(subjects: &[NormalizedSubject]) -> Self {
        let mut grouped = GroupedMoves::default();

        for subject in subjects {
            // LearnMethod::ALL is priority order, so the first method with
            // a hit is the primary bucket; `find` keeps input order for the
            // representative record.
            let primary = LearnMethod::ALL.iter().find_map(|&method| {
                subject
                    .methods
                    .iter()
                    .find(|candidate| candidate.method == method)
            });
            let Some(primary) = primary else {
                continue;
            };

            let other_methods: Vec<LearnMethod> = LearnMethod::ALL
                .iter()
                .copied()
                .filter(|&method| {
                    method != primary.method
                        && subject.methods.iter().any(|m| m.method == method)
                })
                .collect();

            grouped.buckets[primary.method.priority()].push(GroupedEntry {
                name: subject.name.clone(),
                level: primary.level,
                version: primary.version.clone(),
                other_methods,
            });
        }

        grouped
    }

    /// The ordered entries grouped under one method.
    pub fn bucket(&self, method: LearnMethod) -> &[GroupedEntry] {
        &self.buckets[method.priority()]
    }

    /// Bucket lookup by position in the fixed method order.
    pub fn bucket_at(&self, index: usize) -> Option<&[GroupedEntry]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    pub fn total_entries(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(name: &str, method: &str, level: Option<u8>, version: &str) -> LearnRecord {
        LearnRecord::new(name, method, level, version)
    }

    #[test]
    fn subject_groups_under_highest_priority_method() {
        let records = [
            rec("tackle", "level-up", Some(1), "red-blue"),
            rec("tackle", "machine", None, "gold-silver"),
        ];
        let grouped = group(&normalize(&records));

        let bucket = grouped.bucket(LearnMethod::LevelUp);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].name, "tackle");
        assert_eq!(bucket[0].level, Some(1));
        assert_eq!(bucket[0].version, VersionGroup::from("red-blue"));
        assert_eq!(bucket[0].other_methods, vec![LearnMethod::Machine]);
        assert!(grouped.bucket(LearnMethod::Machine).is_empty());
    }

    #[test]
    fn exact_duplicate_tuples_collapse() {
        let records = [
            rec("ember", "level-up", Some(7), "red-blue"),
            rec("ember", "level-up", Some(7), "red-blue"),
        ];
        let subjects = normalize(&records);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].methods.len(), 1);
    }

    #[test]
    fn distinct_versions_are_preserved() {
        let records = [
            rec("ember", "level-up", Some(7), "red-blue"),
            rec("ember", "level-up", Some(9), "gold-silver"),
        ];
        let subjects = normalize(&records);
        assert_eq!(subjects[0].methods.len(), 2);
        assert_eq!(subjects[0].methods[0].level, Some(7));
        assert_eq!(subjects[0].methods[1].level, Some(9));
    }

    #[test]
    fn unknown_method_degrades_to_other() {
        let records = [rec("volt-tackle", "light-ball-egg", None, "emerald")];
        let grouped = group(&normalize(&records));
        let bucket = grouped.bucket(LearnMethod::Other);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].name, "volt-tackle");
    }

    #[test]
    fn stray_level_on_non_level_up_record_is_dropped() {
        let records = [rec("surf", "machine", Some(40), "red-blue")];
        let subjects = normalize(&records);
        assert_eq!(subjects[0].methods[0].level, None);
    }

    #[test]
    fn normalize_is_idempotent() {
        let records = [
            rec("tackle", "level-up", Some(1), "red-blue"),
            rec("tackle", "machine", None, "gold-silver"),
            rec("growl", "level-up", Some(3), "red-blue"),
            rec("tackle", "level-up", Some(1), "red-blue"),
        ];
        let once = normalize(&records);

        // Flatten back to raw records and normalize again.
        let flattened: Vec<LearnRecord> = once
            .iter()
            .flat_map(|subject| {
                subject.methods.iter().map(|m| {
                    rec(
                        &subject.name,
                        &m.method.to_string(),
                        m.level,
                        m.version.as_str(),
                    )
                })
            })
            .collect();
        let twice = normalize(&flattened);

        assert_eq!(once, twice);
    }

    #[test]
    fn grouping_is_a_total_partition() {
        let records = [
            rec("tackle", "level-up", Some(1), "red-blue"),
            rec("tackle", "egg", None, "gold-silver"),
            rec("surf", "machine", None, "red-blue"),
            rec("mimic", "tutor", None, "yellow"),
            rec("volt-tackle", "special", None, "emerald"),
        ];
        let subjects = normalize(&records);
        let grouped = group(&subjects);

        assert_eq!(grouped.total_entries(), subjects.len());
        for subject in &subjects {
            let holders = LearnMethod::ALL
                .iter()
                .filter(|&&method| grouped.bucket(method).iter().any(|e| e.name == subject.name))
                .count();
            assert_eq!(holders, 1, "{} must live in exactly one bucket", subject.name);
        }
    }

    #[test]
    fn bucket_order_is_first_seen_subject_order() {
        let records = [
            rec("growl", "level-up", Some(1), "red-blue"),
            rec("tackle", "level-up", Some(1), "red-blue"),
            rec("growl", "level-up", Some(4), "gold-silver"),
        ];
        let grouped = group(&normalize(&records));
        let names: Vec<&str> = grouped
            .bucket(LearnMethod::LevelUp)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["growl", "tackle"]);
    }

    #[test]
    fn representative_record_is_first_in_input_order() {
        let records = [
            rec("ember", "level-up", Some(9), "gold-silver"),
            rec("ember", "level-up", Some(7), "red-blue"),
        ];
        let grouped = group(&normalize(&records));
        let entry = &grouped.bucket(LearnMethod::LevelUp)[0];
        assert_eq!(entry.level, Some(9));
        assert_eq!(entry.version, VersionGroup::from("gold-silver"));
    }

    #[test]
    fn empty_input_yields_empty_groups() {
        let grouped = group(&normalize(&[]));
        assert!(grouped.is_empty());
        assert_eq!(grouped.total_entries(), 0);
    }
}

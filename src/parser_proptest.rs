//! Property-based tests for git output parsing.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::git::{parse_parent_count, parse_show_output};
    use crate::record::{self, CommitRecord};
    use proptest::prelude::*;
    use std::path::Path;

    // ============================================================================
    // parse_show_output property tests
    // ============================================================================

    proptest! {
        /// Property: header lines land in hash/date/subject and every file survives in order
        #[test]
        fn show_output_keeps_header_and_files(
            hash in "[0-9a-f]{40}",
            date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
            subject in "[A-Za-z][A-Za-z0-9 ]{0,40}[A-Za-z0-9]",
            files in prop::collection::vec("[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.[a-z]{1,3}", 0..10),
        ) {
            let mut output = format!("{}\n{}\n{}\n\n", hash, date, subject);
            for file in &files {
                output.push_str(file);
                output.push('\n');
            }

            let parsed = parse_show_output(&hash, &output).unwrap().unwrap();
            prop_assert_eq!(&parsed.hash, &hash);
            prop_assert_eq!(&parsed.date, &date);
            prop_assert_eq!(&parsed.subject, &subject);
            prop_assert_eq!(parsed.files, files);
        }

        /// Property: whitespace-only output is always treated as "no details"
        #[test]
        fn show_output_blank_is_none(output in "[ \t\n]*") {
            prop_assert!(parse_show_output("abc", &output).unwrap().is_none());
        }

        /// Property: parsed files never contain blank entries
        #[test]
        fn show_output_files_never_blank(output in "[a-z0-9\n]{0,200}") {
            if let Ok(Some(parsed)) = parse_show_output("abc", &output) {
                prop_assert!(parsed.files.iter().all(|f| !f.is_empty()));
            }
        }
    }

    // ============================================================================
    // parse_parent_count property tests
    // ============================================================================

    proptest! {
        /// Property: parent count is the number of tokens after the commit itself
        #[test]
        fn parent_count_is_tokens_minus_one(
            commit in "[0-9a-f]{40}",
            parents in prop::collection::vec("[0-9a-f]{40}", 0..5),
        ) {
            let mut line = commit.clone();
            for parent in &parents {
                line.push(' ');
                line.push_str(parent);
            }
            line.push('\n');

            prop_assert_eq!(parse_parent_count(&commit, &line).unwrap(), parents.len());
        }
    }

    // ============================================================================
    // commits file property tests
    // ============================================================================

    proptest! {
        /// Property: record order survives serialization
        #[test]
        fn records_keep_order_through_json(hashes in prop::collection::vec("[0-9a-f]{7,40}", 0..20)) {
            let records: Vec<CommitRecord> = hashes
                .iter()
                .map(|hash| CommitRecord {
                    hash: hash.clone(),
                    date: "2024-01-01".to_string(),
                    subject: "s".to_string(),
                    files: Vec::new(),
                })
                .collect();

            let json = record::to_json(&records).unwrap();
            let parsed = record::parse(Path::new("c.json"), &json).unwrap();
            let parsed_hashes: Vec<String> = parsed.into_iter().map(|r| r.hash).collect();
            prop_assert_eq!(parsed_hashes, hashes);
        }
    }
}

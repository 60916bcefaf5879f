//! Snapshot tests for tome-core using insta
//!
//! These tests capture the serialized ranking report to detect unintended
//! changes in its shape.

use tome_core::{Catalog, CatalogSeed};

/// Helper to create the sample catalog used by the report snapshot
fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.create_book("Dune", "111").unwrap();
    catalog.create_book("Clean Code", "222").unwrap();
    catalog.register_reader("Alice", "alice@example.com").unwrap();
    catalog.register_reader("Bob", "bob@example.com").unwrap();

    catalog.record_reading("Alice", "Dune", Some(4)).unwrap();
    catalog.record_reading("Bob", "Dune", Some(3)).unwrap();
    catalog.record_reading("Alice", "Clean Code", None).unwrap();
    catalog
}

#[test]
fn test_summary_snapshot() {
    let summary = sample_catalog().summary(3);
    insta::assert_json_snapshot!(summary, @r###"
    {
      "books": 2,
      "readers": 2,
      "most_read": [
        "Dune"
      ],
      "highest_rated": {
        "title": "Dune",
        "average": 3.5
      },
      "top_books": [
        {
          "name": "Dune",
          "count": 2
        },
        {
          "name": "Clean Code",
          "count": 1
        }
      ],
      "top_readers": [
        {
          "name": "Alice",
          "count": 2
        },
        {
          "name": "Bob",
          "count": 1
        }
      ]
    }
    "###);
}

#[test]
fn test_seed_replay_matches_direct_calls() {
    let seed = CatalogSeed::from_json(
        r#"{
            "books": [
                { "title": "Dune", "isbn": "111", "kind": "general" },
                { "title": "Clean Code", "isbn": "222", "kind": "general" }
            ],
            "readers": [
                { "name": "Alice", "email": "alice@example.com" },
                { "name": "Bob", "email": "bob@example.com" }
            ],
            "readings": [
                { "reader": "Alice", "book": "Dune", "rating": 4 },
                { "reader": "Bob", "book": "Dune", "rating": 3 },
                { "reader": "Alice", "book": "Clean Code" }
            ]
        }"#,
    )
    .unwrap();

    let replayed = seed.build().unwrap();
    assert_eq!(replayed.summary(3), sample_catalog().summary(3));
}

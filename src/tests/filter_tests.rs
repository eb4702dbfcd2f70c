//! Filter Engine Tests
//!
//! Criteria composition over the seeded catalog: idempotence, monotonicity
//! and the no-op behavior of absent criteria.

use crate::catalog::Catalog;
use crate::filter::{apply, CollegeCriteria, CourseCriteria, EventCriteria};
use crate::models::{CollegeType, EventType, Medium, Priority, Stream};

#[test]
fn test_default_criteria_are_a_no_op() {
    let catalog = Catalog::seeded();

    let colleges = apply(catalog.colleges(), &CollegeCriteria::default());
    assert_eq!(colleges.len(), 3);

    let courses = apply(catalog.courses(), &CourseCriteria::default());
    assert_eq!(courses.len(), 4);
    let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "B.Tech Computer Science",
            "BBA",
            "B.A. Psychology",
            "Diploma in Digital Marketing",
        ],
        "input order preserved"
    );

    let events = apply(catalog.events(), &EventCriteria::default());
    assert_eq!(events.len(), 4);
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = Catalog::seeded();
    let criteria = CollegeCriteria {
        search: "delhi".to_string(),
        ..Default::default()
    };

    let once: Vec<_> = apply(catalog.colleges(), &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice = apply(&once, &criteria);

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice) {
        assert_eq!(a.id, b.id);
    }
}

#[test]
fn test_lowering_max_fees_never_grows_the_result() {
    let catalog = Catalog::seeded();
    let mut previous = usize::MAX;
    for max_fees in [1_000_000, 300_000, 200_000, 50_000, 10_000] {
        let criteria = CollegeCriteria {
            max_fees: Some(max_fees),
            ..Default::default()
        };
        let matched = apply(catalog.colleges(), &criteria).len();
        assert!(
            matched <= previous,
            "stricter fee bound {} grew the result",
            max_fees
        );
        previous = matched;
    }
}

#[test]
fn test_criteria_are_anded() {
    let catalog = Catalog::seeded();
    let criteria = CollegeCriteria {
        college_type: Some(CollegeType::Government),
        max_fees: Some(100_000),
        ..Default::default()
    };
    let matched = apply(catalog.colleges(), &criteria);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Delhi University");
}

#[test]
fn test_medium_membership_filter() {
    let catalog = Catalog::seeded();
    let criteria = CollegeCriteria {
        medium: Some(Medium::Hindi),
        ..Default::default()
    };
    let matched = apply(catalog.colleges(), &criteria);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "2");
}

#[test]
fn test_hostel_flag_is_no_op_when_unset() {
    let catalog = Catalog::seeded();
    let unset = apply(catalog.colleges(), &CollegeCriteria::default());
    let set = apply(
        catalog.colleges(),
        &CollegeCriteria {
            hostel_only: true,
            ..Default::default()
        },
    );
    // Every seeded college has a hostel, so both pass everything.
    assert_eq!(unset.len(), set.len());
}

#[test]
fn test_course_search_is_case_insensitive() {
    let catalog = Catalog::seeded();
    let criteria = CourseCriteria {
        search: "b.tech".to_string(),
        ..Default::default()
    };
    let matched = apply(catalog.courses(), &criteria);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].stream, Stream::Science);
}

#[test]
fn test_search_plus_stream_narrows_further() {
    let catalog = Catalog::seeded();
    let loose = apply(
        catalog.courses(),
        &CourseCriteria {
            search: "b".to_string(),
            ..Default::default()
        },
    );
    let tight = apply(
        catalog.courses(),
        &CourseCriteria {
            search: "b".to_string(),
            stream: Some(Stream::Arts),
        },
    );
    assert!(tight.len() <= loose.len());
    assert_eq!(tight.len(), 1);
    assert_eq!(tight[0].name, "B.A. Psychology");
}

#[test]
fn test_event_tabs_partition_the_timeline() {
    let catalog = Catalog::seeded();
    let total: usize = [EventType::Exam, EventType::Admission, EventType::Scholarship]
        .into_iter()
        .map(|event_type| {
            apply(
                catalog.events(),
                &EventCriteria {
                    event_type: Some(event_type),
                    ..Default::default()
                },
            )
            .len()
        })
        .sum();
    assert_eq!(total, catalog.events().len());
}

#[test]
fn test_event_priority_ands_with_type_tab() {
    let catalog = Catalog::seeded();

    let high = apply(
        catalog.events(),
        &EventCriteria {
            priority: Some(Priority::High),
            ..Default::default()
        },
    );
    assert_eq!(high.len(), 2);
    assert!(high.iter().all(|e| e.event_type == EventType::Exam));

    let medium_scholarships = apply(
        catalog.events(),
        &EventCriteria {
            event_type: Some(EventType::Scholarship),
            priority: Some(Priority::Medium),
        },
    );
    assert_eq!(medium_scholarships.len(), 1);
    assert_eq!(medium_scholarships[0].id, "4");

    // Both criteria must pass; no seeded admission event is high priority.
    let high_admissions = apply(
        catalog.events(),
        &EventCriteria {
            event_type: Some(EventType::Admission),
            priority: Some(Priority::High),
        },
    );
    assert!(high_admissions.is_empty());
}

#[test]
fn test_no_match_yields_empty_not_error() {
    let catalog = Catalog::seeded();
    let criteria = CollegeCriteria {
        search: "bangalore".to_string(),
        max_fees: Some(1),
        ..Default::default()
    };
    assert!(apply(catalog.colleges(), &criteria).is_empty());
}

use std::collections::HashSet;

use folio::domain::JobId;

#[test]
fn given_new_id_when_formatted_then_has_task_prefix_timestamp_and_random_suffix() {
    let id = JobId::new();
    let parts: Vec<&str> = id.as_str().split('_').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "task");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), 32);
    assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn given_many_ids_generated_in_a_burst_when_compared_then_all_distinct() {
    let ids: HashSet<JobId> = (0..10_000).map(|_| JobId::new()).collect();

    assert_eq!(ids.len(), 10_000);
}

#[test]
fn given_raw_string_when_wrapped_then_displays_unchanged() {
    let id = JobId::from_raw("not-a-real-id");

    assert_eq!(id.to_string(), "not-a-real-id");
}

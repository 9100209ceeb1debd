//! Domain-focused tests for stage navigation and the task record.

use crate::board::domain::{BoardDomainError, Stage, StageSet, Task, TaskId, Weight};
use rstest::{fixture, rstest};

#[fixture]
fn pipeline() -> StageSet {
    StageSet::default_pipeline()
}

#[rstest]
fn stage_set_rejects_empty_pipeline() {
    let result = StageSet::new(Vec::<String>::new());
    assert_eq!(result, Err(BoardDomainError::EmptyStagePipeline));
}

#[rstest]
fn default_pipeline_has_three_named_stages(pipeline: StageSet) {
    assert_eq!(pipeline.stage_count(), 3);
    assert_eq!(pipeline.name(Stage::new(0)), Some("To Do"));
    assert_eq!(pipeline.name(Stage::new(1)), Some("In Progress"));
    assert_eq!(pipeline.name(Stage::new(2)), Some("Done"));
    assert_eq!(pipeline.name(Stage::new(3)), None);
}

#[rstest]
#[case(Stage::new(0), Some(Stage::new(1)), None)]
#[case(Stage::new(1), Some(Stage::new(2)), Some(Stage::new(0)))]
#[case(Stage::new(2), None, Some(Stage::new(1)))]
#[case(Stage::new(3), None, None)]
fn stage_navigation_is_clamped(
    pipeline: StageSet,
    #[case] stage: Stage,
    #[case] forward: Option<Stage>,
    #[case] backward: Option<Stage>,
) {
    assert_eq!(pipeline.forward_of(stage), forward);
    assert_eq!(pipeline.backward_of(stage), backward);
}

#[rstest]
fn pipeline_bounds_are_first_and_last(pipeline: StageSet) {
    assert_eq!(pipeline.first(), Stage::new(0));
    assert_eq!(pipeline.last(), Stage::new(2));
    assert!(pipeline.contains(pipeline.last()));
    assert!(!pipeline.contains(Stage::new(3)));
}

#[rstest]
fn pipeline_iterates_in_order(pipeline: StageSet) {
    let stages: Vec<(Stage, &str)> = pipeline.iter().collect();
    assert_eq!(
        stages,
        vec![
            (Stage::new(0), "To Do"),
            (Stage::new(1), "In Progress"),
            (Stage::new(2), "Done"),
        ]
    );
}

#[rstest]
fn new_task_starts_in_initial_stage_with_weight_equal_to_id() {
    let task = Task::new(TaskId::new(7), "Water plants", "the ficus too");

    assert_eq!(task.id(), TaskId::new(7));
    assert_eq!(task.theme(), "Water plants");
    assert_eq!(task.description(), "the ficus too");
    assert_eq!(task.stage(), Stage::FIRST);
    assert_eq!(task.weight(), Weight::new(7));
}

#[rstest]
fn task_id_successor_is_monotonic() {
    assert_eq!(TaskId::FIRST.successor(), TaskId::new(1));
    assert_eq!(TaskId::new(41).successor(), TaskId::new(42));
    assert_eq!(TaskId::new(i64::MAX).successor(), TaskId::new(i64::MAX));
}

#[rstest]
fn task_serializes_with_stable_field_order() {
    let task = Task::from_persisted(
        TaskId::new(3),
        "Pay bills",
        "rent and power",
        Stage::new(1),
        Weight::new(3),
    );

    let json = serde_json::to_string(&task).expect("task serializes");
    assert_eq!(
        json,
        r#"{"id":3,"theme":"Pay bills","description":"rent and power","stage":1,"weight":3}"#
    );
}

#[rstest]
fn task_round_trips_through_storage_format() {
    let task = Task::from_persisted(
        TaskId::new(12),
        "Buy milk",
        "2%",
        Stage::new(2),
        Weight::new(12),
    );

    let json = serde_json::to_string(&task).expect("task serializes");
    let decoded: Task = serde_json::from_str(&json).expect("task deserializes");
    assert_eq!(decoded, task);
}

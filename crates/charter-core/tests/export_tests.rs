//! Integration tests for the export serializers over a plan built through
//! the workshop operations.

use charter_core::{
    export::{write_workbook, PrintDocument, SpreadsheetOptions, WORKBOOK_FILENAME},
    params::{AddObjective, AddTask, ListField, NarrativeField},
    Workshop, WorkshopBuilder,
};

fn populated_workshop() -> Workshop {
    let mut workshop = WorkshopBuilder::new().build();
    workshop.begin_session();

    workshop.set_narrative(NarrativeField::Vision, "A leading service");
    workshop.set_narrative(NarrativeField::Constraints, "Budget approval may slip");
    workshop.append_list_entry(ListField::Goals, "Reduce wait times");
    workshop.append_list_entry(ListField::Goals, "Strengthen prevention");

    let goal_id = workshop.plan().goals[0].id;
    let objective_id = workshop.add_objective(&AddObjective {
        goal_id,
        text: "Cut average wait to 5 days".to_string(),
    });
    workshop.add_task(&AddTask {
        objective_id,
        description: "Audit intake".to_string(),
        responsibility: "Coordinator".to_string(),
        timeline: "Q1".to_string(),
    });

    workshop
}

#[test]
fn document_round_trip_through_the_filesystem() {
    let workshop = populated_workshop();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("plan.md");

    let document = PrintDocument::new(workshop.plan(), None);
    document.write_to(&path).expect("document written");

    let written = std::fs::read_to_string(&path).expect("document readable");
    assert!(written.contains("A leading service"));
    assert!(written.contains("| Reduce wait times | Cut average wait to 5 days | Audit intake | Coordinator | Q1 |"));
    // The childless goal still appears, as a placeholder row.
    assert!(written.contains("| Strengthen prevention |  |  |  |  |"));
    assert!(written.contains("Budget approval may slip"));
}

#[test]
fn workbook_lands_in_the_output_directory() {
    let workshop = populated_workshop();
    let dir = tempfile::tempdir().expect("temp dir");

    let path = write_workbook(
        workshop.plan(),
        dir.path(),
        SpreadsheetOptions::default(),
    )
    .expect("workbook written");

    assert_eq!(path, dir.path().join(WORKBOOK_FILENAME));
    assert!(std::fs::metadata(&path).expect("file exists").len() > 0);
}

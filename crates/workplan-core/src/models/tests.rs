#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::{
        error::WorkPlanError,
        models::{Goal, ObjectiveSet, PlanField, PlanRow, Selection, Stage, Toggle, MAX_SELECTED},
    };

    fn create_test_row() -> PlanRow {
        PlanRow::new(Goal::new(2, "Robotics", "🤖"))
    }

    #[test]
    fn test_selection_toggle_adds_and_removes() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle(1), Toggle::Added);
        assert_eq!(selection.toggle(3), Toggle::Added);
        assert_eq!(selection.ids(), &[1, 3]);

        assert_eq!(selection.toggle(1), Toggle::Removed);
        assert_eq!(selection.ids(), &[3]);
    }

    #[test]
    fn test_selection_ignores_fourth_goal() {
        let mut selection = Selection::new();
        for id in [1, 2, 3] {
            selection.toggle(id);
        }
        assert!(selection.is_full());
        assert!(!selection.can_toggle(4));
        assert!(selection.can_toggle(2));

        assert_eq!(selection.toggle(4), Toggle::Ignored);
        assert_eq!(selection.ids(), &[1, 2, 3]);
    }

    #[test]
    fn test_selection_bound_holds_for_every_toggle_sequence() {
        // Every sequence of five toggles over six goals.
        let goals = 6u32;
        let length = 5u32;
        for code in 0..goals.pow(length) {
            let mut selection = Selection::new();
            let mut rest = code;
            for _ in 0..length {
                selection.toggle(rest % goals + 1);
                rest /= goals;

                assert!(selection.len() <= MAX_SELECTED);
                let mut ids = selection.ids().to_vec();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), selection.len(), "duplicate id in {selection:?}");
            }
        }
    }

    #[test]
    fn test_selection_reselect_moves_to_end() {
        let mut selection = Selection::new();
        for id in [5, 1, 6] {
            selection.toggle(id);
        }
        selection.toggle(5);
        selection.toggle(5);
        assert_eq!(selection.ids(), &[1, 6, 5]);
    }

    #[test]
    fn test_plan_field_parsing_accepts_spellings() {
        assert_eq!("resources".parse::<PlanField>().unwrap(), PlanField::Resources);
        assert_eq!(
            "performanceIndicators".parse::<PlanField>().unwrap(),
            PlanField::PerformanceIndicators
        );
        assert_eq!(
            "performance-indicators".parse::<PlanField>().unwrap(),
            PlanField::PerformanceIndicators
        );
        assert_eq!("start_date".parse::<PlanField>().unwrap(), PlanField::StartDate);
        assert_eq!(
            "MeasurementDate".parse::<PlanField>().unwrap(),
            PlanField::MeasurementDate
        );
    }

    #[test]
    fn test_plan_field_rejects_unknown_name() {
        let err = "goal".parse::<PlanField>().unwrap_err();
        assert!(matches!(err, WorkPlanError::InvalidInput { ref field, .. } if field == "field"));
        assert!("objectives".parse::<PlanField>().is_err());
    }

    #[test]
    fn test_plan_field_names_round_trip() {
        for field in PlanField::ALL {
            assert_eq!(field.as_str().parse::<PlanField>().unwrap(), field);
        }
    }

    #[test]
    fn test_objective_set_parsing() {
        let set: ObjectiveSet = "2, 0,2".parse().unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2]);

        let empty: ObjectiveSet = "".parse().unwrap();
        assert!(empty.is_empty());

        assert!("0,x".parse::<ObjectiveSet>().is_err());
        assert!("-1".parse::<ObjectiveSet>().is_err());
    }

    #[test]
    fn test_new_row_is_blank() {
        let row = create_test_row();
        assert!(row.is_blank());
        assert_eq!(row.goal_id(), 2);
        for field in PlanField::ALL {
            assert_eq!(row.field_text(field), "");
        }
    }

    #[test]
    fn test_row_set_text_fields() {
        let mut row = create_test_row();
        row.set_field(PlanField::Resources, "Lego kits").unwrap();
        row.set_field(PlanField::Partners, "Science teachers").unwrap();
        row.set_field(PlanField::PerformanceIndicators, "2 classes").unwrap();

        assert_eq!(row.resources, "Lego kits");
        assert_eq!(row.partners, "Science teachers");
        assert_eq!(row.performance_indicators, "2 classes");
        assert!(!row.is_blank());
    }

    #[test]
    fn test_row_set_and_clear_dates() {
        let mut row = create_test_row();
        row.set_field(PlanField::StartDate, "2024-09-01").unwrap();
        row.set_field(PlanField::MeasurementDate, " 2025-06-15 ").unwrap();
        assert_eq!(row.start_date, Some(date(2024, 9, 1)));
        assert_eq!(row.field_text(PlanField::MeasurementDate), "2025-06-15");

        row.set_field(PlanField::StartDate, "").unwrap();
        assert_eq!(row.start_date, None);
    }

    #[test]
    fn test_row_rejects_bad_date_without_change() {
        let mut row = create_test_row();
        row.set_field(PlanField::StartDate, "2024-09-01").unwrap();

        let err = row.set_field(PlanField::StartDate, "next week").unwrap_err();
        assert!(
            matches!(err, WorkPlanError::InvalidInput { ref field, .. } if field == "startDate")
        );
        assert_eq!(row.start_date, Some(date(2024, 9, 1)));
    }

    #[test]
    fn test_stage_defaults_to_selecting() {
        assert_eq!(Stage::default(), Stage::Selecting);
        assert_eq!(Stage::Editing.as_str(), "editing");
    }
}

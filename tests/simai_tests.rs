//! Tests for the simai chart parser.

use breakrank::chart::{ChartParser, Note};
use breakrank::error::ParseError;
use breakrank::simai::{SimaiParser, parse_chart};

fn notes_of(body: &str) -> Vec<Note> {
    let chart = parse_chart(&format!("&inote_5={}", body)).unwrap();
    chart.fumens[0].notes().copied().collect()
}

fn note(is_break: bool, is_ex: bool) -> Note {
    Note { is_break, is_ex }
}

mod fields {
    use super::*;

    #[test]
    fn test_title_and_levels() {
        let chart = parse_chart("&title=Test Song\n&lv_4=10\n&lv_5=12+\n&inote_5=1,E\n").unwrap();

        assert_eq!(chart.title.as_deref(), Some("Test Song"));
        assert_eq!(chart.fumens.len(), 2);
        assert_eq!(chart.fumens[0].difficulty_index, Some(4));
        assert_eq!(chart.fumens[0].level_info.as_deref(), Some("10"));
        assert!(chart.fumens[0].note_events.is_empty());
        assert_eq!(chart.fumens[1].difficulty_index, Some(5));
        assert_eq!(chart.fumens[1].note_events.len(), 1);
    }

    #[test]
    fn test_missing_title() {
        let chart = parse_chart("&artist=Someone\n&title=\n").unwrap();
        assert!(chart.title.is_none());
        assert!(chart.fumens.is_empty());
    }

    #[test]
    fn test_bom_is_ignored() {
        let chart = parse_chart("\u{feff}&title=BOM\n").unwrap();
        assert_eq!(chart.title.as_deref(), Some("BOM"));
    }

    #[test]
    fn test_fumens_sorted_with_unknown_last() {
        let chart = parse_chart("&inote_x=1,E\n&inote_6=1,E\n&inote_2=1,E\n").unwrap();
        let indices: Vec<_> = chart.fumens.iter().map(|f| f.difficulty_index).collect();
        assert_eq!(indices, vec![Some(2), Some(6), None]);
    }

    #[test]
    fn test_multiline_body() {
        let chart = parse_chart("&inote_3=(120){4}\n1,2,\n|| comment, with commas\n3,\nE\n&lv_3=5\n").unwrap();
        assert_eq!(chart.fumens[0].note_events.len(), 3);
        assert_eq!(chart.fumens[0].level_info.as_deref(), Some("5"));
    }

    #[test]
    fn test_parser_trait() {
        let chart = SimaiParser.parse("&title=Via Trait\n").unwrap();
        assert_eq!(chart.title.as_deref(), Some("Via Trait"));
    }
}

mod notes {
    use super::*;

    #[test]
    fn test_break_and_ex_flags() {
        assert_eq!(
            notes_of("(120){4}1bx/2b/3b/4,E"),
            vec![note(true, true), note(true, false), note(true, false), note(false, false)]
        );
    }

    #[test]
    fn test_each_shorthand() {
        assert_eq!(notes_of("15,E").len(), 2);
    }

    #[test]
    fn test_rests_are_not_events() {
        let chart = parse_chart("&inote_1=(120){4}1,,,2,E").unwrap();
        assert_eq!(chart.fumens[0].note_events.len(), 2);
    }

    #[test]
    fn test_notes_after_end_marker_are_ignored() {
        assert_eq!(notes_of("1,E,2b").len(), 1);
    }

    #[test]
    fn test_hold_duration_is_not_read_as_flags() {
        assert_eq!(notes_of("1h[4:1],E"), vec![note(false, false)]);
        assert_eq!(notes_of("1bh[4:1],E"), vec![note(true, false)]);
    }

    #[test]
    fn test_slide_head_and_path() {
        assert_eq!(notes_of("1-5[8:1],E"), vec![note(false, false), note(false, false)]);
        assert_eq!(notes_of("1b-5[8:1],E"), vec![note(true, false), note(false, false)]);
        assert_eq!(notes_of("1-5[8:1]b,E"), vec![note(false, false), note(true, false)]);
    }

    #[test]
    fn test_slide_without_star() {
        assert_eq!(notes_of("1?-5[8:1]b,E"), vec![note(true, false)]);
    }

    #[test]
    fn test_same_head_slides() {
        assert_eq!(
            notes_of("1x-5[8:1]*>4[8:1]b,E"),
            vec![note(false, true), note(false, false), note(true, false)]
        );
    }

    #[test]
    fn test_touch_notes() {
        assert_eq!(
            notes_of("A1/B8/C/C1/Ch[4:1]/E3f/D2b,E"),
            vec![
                note(false, false),
                note(false, false),
                note(false, false),
                note(false, false),
                note(false, false),
                note(false, false),
                note(true, false),
            ]
        );
    }

    #[test]
    fn test_pseudo_each() {
        assert_eq!(notes_of("1b`2`3,E").len(), 3);
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_invalid_button() {
        let err = parse_chart("&inote_5=1,9b,E").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidButton {
                key: "inote_5".to_string(),
                token: "9b".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_shorthand_digit() {
        assert!(matches!(
            parse_chart("&inote_5=19,E"),
            Err(ParseError::InvalidButton { .. })
        ));
    }

    #[test]
    fn test_unclosed_bpm() {
        assert!(matches!(
            parse_chart("&inote_5=(120{4}1,E"),
            Err(ParseError::Unbalanced { open: '(', .. })
        ));
    }

    #[test]
    fn test_unclosed_duration() {
        assert!(matches!(
            parse_chart("&inote_5=1h[4:1,E"),
            Err(ParseError::Unbalanced { open: '[', .. })
        ));
    }

    #[test]
    fn test_bad_bpm_and_division() {
        assert!(matches!(
            parse_chart("&inote_5=(fast)1,E"),
            Err(ParseError::InvalidBpm { .. })
        ));
        assert!(matches!(
            parse_chart("&inote_5={four}1,E"),
            Err(ParseError::InvalidDivision { .. })
        ));
    }

    #[test]
    fn test_unknown_note_and_sensor() {
        assert!(matches!(
            parse_chart("&inote_5=Z1,E"),
            Err(ParseError::UnknownNote { .. })
        ));
        assert!(matches!(
            parse_chart("&inote_5=A9,E"),
            Err(ParseError::InvalidSensor { .. })
        ));
    }

    #[test]
    fn test_level_only_chart_does_not_parse_notes() {
        let chart = parse_chart("&lv_5=14\n").unwrap();
        assert!(chart.fumens[0].note_events.is_empty());
        assert!(chart.fumens[0].is_authored());
    }
}

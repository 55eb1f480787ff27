#[cfg(test)]
mod tests {
    use crate::core::domain::Status;
    use crate::error::LoadError;
    use crate::parsing::json_parser::{adapt_json_row, adapt_json_rows, parse_events_json_str};
    use serde_json::json;

    /// Test parsing a top-level array of rows
    #[test]
    fn test_parse_top_level_array() {
        let json = r#"[
            {
                "centro": "Arroyo",
                "fecha": "10/09/2025",
                "hora": "14:00-16:00",
                "responsable": "Erika López",
                "asistentes": ["Juan P.", " María L. ", ""],
                "estado": "Programado",
                "jornada": "Tarde",
                "area": "Música"
            }
        ]"#;

        let events = parse_events_json_str(json).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.center, "Arroyo");
        assert_eq!(event.date, "2025-09-10");
        assert_eq!(event.time_range, "14:00–16:00");
        assert_eq!(event.responsible, "Erika López");
        assert_eq!(event.attendees, vec!["Juan P.", "María L."]);
        assert_eq!(event.status, Status::Scheduled);
        assert_eq!(event.shift, "Tarde");
        assert_eq!(event.area, "Música");
    }

    /// Test parsing an object wrapping rows under "data"
    #[test]
    fn test_parse_wrapped_data() {
        let json = r#"{"data": [{"sede": "Lucero", "fecha_evento": "2025-09-12"}], "updated": "ayer"}"#;

        let events = parse_events_json_str(json).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].center, "Lucero");
        assert_eq!(events[0].date, "2025-09-12");
    }

    /// Test aliases for every logical field
    #[test]
    fn test_field_aliases() {
        let row = json!({
            "sede": " Jerusalén ",
            "fechaevento": "13-09-25",
            "hora_inicio": "10:00",
            "hora_fin": "12:00",
            "líder": "T. Sarmiento",
            "status": "CONFIRMED",
            "turno": "Mañana",
            "categoría": "Teatro",
            "asistentes": "Samuel D.; Valentina H., Kevin T."
        });

        let event = adapt_json_row(&row).unwrap();
        assert_eq!(event.center, "Jerusalén");
        assert_eq!(event.date, "2025-09-13");
        assert_eq!(event.time_range, "10:00–12:00");
        assert_eq!(event.responsible, "T. Sarmiento");
        assert_eq!(event.status, Status::Confirmed);
        assert_eq!(event.shift, "Mañana");
        assert_eq!(event.area, "Teatro");
        assert_eq!(
            event.attendees,
            vec!["Samuel D.", "Valentina H.", "Kevin T."]
        );
    }

    /// Test that keys are matched like headers (case and accents ignored)
    #[test]
    fn test_keys_matched_like_headers() {
        let row = json!({"Centro": "Arroyo", "Área": "Danza", "Fecha Evento": "2025-10-01"});

        let event = adapt_json_row(&row).unwrap();
        assert_eq!(event.center, "Arroyo");
        assert_eq!(event.area, "Danza");
        assert_eq!(event.date, "2025-10-01");
    }

    /// Test that the preferred alias wins, and null falls through to the next
    #[test]
    fn test_alias_priority_and_null_fallthrough() {
        let row = json!({"centro": "Arroyo", "sede": "Lucero"});
        assert_eq!(adapt_json_row(&row).unwrap().center, "Arroyo");

        let row = json!({"centro": null, "sede": "Lucero"});
        assert_eq!(adapt_json_row(&row).unwrap().center, "Lucero");
    }

    /// Test that blank rows and non-object rows are dropped
    #[test]
    fn test_blank_rows_are_dropped() {
        let rows = vec![
            json!({"centro": "", "fecha": "", "hora": "", "responsable": "Nadie", "area": "Danza"}),
            json!(null),
            json!(42),
            json!({"centro": "Arroyo"}),
        ];

        let events = adapt_json_rows(&rows);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].center, "Arroyo");
        assert_eq!(events[0].date, "");
        assert_eq!(events[0].time_range, "");
    }

    /// Test non-string scalar values are rendered as text
    #[test]
    fn test_numeric_values_become_text() {
        let row = json!({"centro": 7, "fecha": "2025-09-10", "asistentes": ["Ana", 3, null]});

        let event = adapt_json_row(&row).unwrap();
        assert_eq!(event.center, "7");
        assert_eq!(event.attendees, vec!["Ana", "3"]);
    }

    /// Test invalid JSON syntax is a format error
    #[test]
    fn test_invalid_json() {
        let result = parse_events_json_str("{not json");
        assert!(matches!(result, Err(LoadError::Format(msg)) if msg.contains("Invalid JSON")));
    }

    /// Test unexpected document shapes are format errors
    #[test]
    fn test_unexpected_shape() {
        let result = parse_events_json_str(r#"{"rows": []}"#);
        match result {
            Err(LoadError::Format(msg)) => assert!(msg.contains("rows"), "{}", msg),
            other => panic!("expected format error, got {:?}", other),
        }

        let result = parse_events_json_str(r#""just a string""#);
        assert!(matches!(result, Err(LoadError::Format(_))));

        let result = parse_events_json_str(r#"{"data": {"centro": "Arroyo"}}"#);
        assert!(matches!(result, Err(LoadError::Format(_))));
    }

    /// Test an empty row list parses to no events
    #[test]
    fn test_empty_list_parses_to_nothing() {
        assert!(parse_events_json_str("[]").unwrap().is_empty());
        assert!(parse_events_json_str(r#"{"data": []}"#).unwrap().is_empty());
    }

    /// Test a leading byte-order mark is ignored
    #[test]
    fn test_byte_order_mark_is_stripped() {
        let events =
            parse_events_json_str("\u{feff}[{\"centro\":\"Arroyo\",\"fecha\":\"2025-10-01\"}]")
                .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].center, "Arroyo");
        assert_eq!(events[0].date, "2025-10-01");

        let wrapped = parse_events_json_str("\u{feff}{\"data\": [{\"sede\": \"Lucero\"}]}").unwrap();
        assert_eq!(wrapped[0].center, "Lucero");
    }

    /// Test that an earlier synonym wins regardless of key order
    #[test]
    fn test_synonym_rank_beats_key_order() {
        let row = json!({"sede": "Lucero", "Centro": "Arroyo", "categoría": "Teatro", "AREA": "Danza"});
        let event = adapt_json_row(&row).unwrap();
        assert_eq!(event.center, "Arroyo");
        assert_eq!(event.area, "Danza");
    }
}

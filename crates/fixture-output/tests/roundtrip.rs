//! Property tests: emitted fixtures re-parse to the trimmed source fields,
//! and ids never collide within a run.

use proptest::prelude::*;

use fixture_ingest::Concept;
use fixture_model::TestCase;
use fixture_output::{OutputMode, render};
use fixture_transform::concepts_to_cases;

proptest! {
    #[test]
    fn emitted_lines_round_trip(
        pairs in proptest::collection::vec(("[a-z0-9./%]{1,12}", "[ a-zA-Z0-9]{0,24}"), 0..16)
    ) {
        let concepts: Vec<Concept> = pairs
            .iter()
            .map(|(code, display)| Concept {
                code: code.clone(),
                display: Some(display.clone()),
            })
            .collect();
        let outcome = concepts_to_cases("fhir-common", &concepts);

        // Codes never trim to empty here, so every record is emitted.
        prop_assert_eq!(outcome.cases.len(), concepts.len());

        let rendered = render(&outcome.cases, OutputMode::JsonLines).expect("render");
        let parsed: Vec<TestCase> = rendered
            .lines()
            .map(|line| serde_json::from_str(line).expect("parse line"))
            .collect();
        prop_assert_eq!(&parsed, &outcome.cases);

        for (case, (code, display)) in outcome.cases.iter().zip(pairs.iter()) {
            prop_assert_eq!(case.input_expression.as_str(), code.trim());
            prop_assert_eq!(case.reason.as_str(), display.trim());
            prop_assert!(case.valid);
        }
    }

    #[test]
    fn line_delimited_lines_parse_after_stripping_the_comma(
        pairs in proptest::collection::vec(("[a-z0-9./%]{1,12}", "[a-zA-Z ]{0,16}"), 1..8)
    ) {
        let concepts: Vec<Concept> = pairs
            .iter()
            .map(|(code, display)| Concept {
                code: code.clone(),
                display: Some(display.clone()),
            })
            .collect();
        let outcome = concepts_to_cases("fhir-common", &concepts);
        let rendered = render(&outcome.cases, OutputMode::LineDelimited).expect("render");

        for line in rendered.lines() {
            let stripped = line.strip_suffix(',').expect("trailing comma");
            let case: TestCase = serde_json::from_str(stripped).expect("parse line");
            prop_assert!(case.valid);
        }
    }

    #[test]
    fn ids_are_unique(count in 0usize..64) {
        let concepts: Vec<Concept> = (0..count)
            .map(|i| Concept {
                code: format!("u{i}"),
                display: None,
            })
            .collect();
        let outcome = concepts_to_cases("fhir-common", &concepts);
        let mut ids: Vec<&str> = outcome.cases.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), outcome.cases.len());
    }
}

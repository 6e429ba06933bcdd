//! Service Tests
//!
//! JSON-lines loop behavior and command line parsing.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::recommend::{templates, FixedChooser, RecommendationDataset};
use crate::service::{AdvisorService, RecommendResponse};

fn service() -> AdvisorService {
    AdvisorService::new(
        &AppConfig::default(),
        Arc::new(RecommendationDataset::empty()),
        Arc::new(FixedChooser(1)),
    )
}

fn parse_lines(output: Vec<u8>) -> Vec<RecommendResponse> {
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[cfg(test)]
mod loop_tests {
    use super::*;

    #[tokio::test]
    async fn test_mixed_requests() {
        let input = concat!(
            "{\"recomnquery_val\": \"grade 9 physics practical exam\"}\n",
            "{\"other\": 1}\n",
            "[1, 2]\n",
            "{\"recomnquery_val\": \"pe\"}\n",
        );
        let mut output = Vec::new();
        let handled = service().run(input.as_bytes(), &mut output).await.unwrap();
        assert_eq!(handled, 4);

        let responses = parse_lines(output);
        assert_eq!(
            responses[0],
            RecommendResponse::Result {
                result: templates::practical_science_exam("physics")
            }
        );
        match &responses[1] {
            RecommendResponse::Result { result } => {
                assert!(result.contains("General in Unknown Phase"))
            }
            other => panic!("unexpected response: {:?}", other),
        }
        assert!(matches!(responses[2], RecommendResponse::Error { .. }));
        assert_eq!(
            responses[3],
            RecommendResponse::Result {
                result: templates::pe_outdoor()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_input() {
        let mut output = Vec::new();
        let handled = service().run("".as_bytes(), &mut output).await.unwrap();
        assert_eq!(handled, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_recommend_is_deterministic_with_fixed_chooser() {
        let service = service();
        let first = service.recommend("grade 7 history").unwrap();
        let second = service.recommend("grade 7 history").unwrap();
        assert_eq!(first, second);
        assert!(first.contains("Classroom Size: 8m x 8m"));
    }
}

#[cfg(test)]
mod cli_tests {
    use crate::parse_query_arg;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_serves_stdin() {
        assert_eq!(parse_query_arg(&[]).unwrap(), None);
    }

    #[test]
    fn test_query_words_are_joined() {
        let parsed = parse_query_arg(&args(&["--query", "grade", "5", "math"])).unwrap();
        assert_eq!(parsed.as_deref(), Some("grade 5 math"));
        let short = parse_query_arg(&args(&["-q", "chemistry lab"])).unwrap();
        assert_eq!(short.as_deref(), Some("chemistry lab"));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_query_arg(&args(&["--query"])).is_err());
        assert!(parse_query_arg(&args(&["--verbose"])).is_err());
    }
}

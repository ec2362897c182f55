#[cfg(test)]
mod tests {
    use crate::implementations::config::ExecutorConfig;
    use crate::implementations::executor::PistonExecutor;
    use crate::models::common::Language;
    use crate::models::execution::{ExecutionRequest, ExecutionResult};
    use crate::traits::executor::SandboxExecutor;

    /// Points at a closed local port so any request that did go out would
    /// come back as a transport error instead of hanging
    fn unroutable_executor() -> PistonExecutor {
        let config = ExecutorConfig {
            api_endpoint: Some("http://127.0.0.1:9/api/v2/piston/execute".to_string()),
            timeout_secs: Some(2),
        };
        PistonExecutor::new(config).unwrap()
    }

    #[tokio::test]
    async fn unsupported_language_is_rejected_before_any_request() {
        let executor = unroutable_executor();
        let request = ExecutionRequest::new(
            Language::Custom("Haskell".to_string()),
            "main = pure ()",
        );

        let result = executor.execute(&request).await;

        assert!(!result.succeeded);
        assert!(result.stdout.is_none());
        // The unsupported-language message, not a transport error: nothing
        // went over the wire
        let error = result.error.unwrap();
        assert!(
            error.contains("'Haskell' is not supported"),
            "unexpected error: {}",
            error
        );
        assert!(
            !error.contains("Network error"),
            "a network call was attempted: {}",
            error
        );
    }

    #[test]
    fn every_supported_language_has_a_runtime_id() {
        for language in Language::SUPPORTED {
            assert!(
                language.runtime_id().is_some(),
                "{} has no runtime id",
                language
            );
        }
        assert_eq!(Language::Python.runtime_id(), Some("python3"));
        assert_eq!(Language::CPlusPlus.runtime_id(), Some("cpp"));
        assert_eq!(Language::Custom("Haskell".to_string()).runtime_id(), None);
    }

    #[test]
    fn language_names_parse_with_their_aliases() {
        assert_eq!(Language::parse("Python"), Language::Python);
        assert_eq!(Language::parse("py"), Language::Python);
        assert_eq!(Language::parse("js"), Language::JavaScript);
        assert_eq!(Language::parse("C++"), Language::CPlusPlus);
        assert_eq!(Language::parse("PHP"), Language::Php);
        assert_eq!(
            Language::parse("Haskell"),
            Language::Custom("Haskell".to_string())
        );
    }

    #[test]
    fn successful_results_carry_trimmed_stdout() {
        let result = ExecutionResult::success("  hello world  \n");
        assert!(result.succeeded);
        assert_eq!(result.stdout.as_deref(), Some("hello world"));
        assert!(result.error.is_none());
    }

    #[test]
    fn empty_stdout_is_distinct_from_missing_output() {
        let empty = ExecutionResult::success("");
        assert!(empty.succeeded);
        assert_eq!(empty.stdout.as_deref(), Some(""));

        let missing = ExecutionResult::no_output();
        assert!(!missing.succeeded);
        assert!(missing.stdout.is_none());
        assert!(missing.error.is_some());
    }

    #[test]
    fn output_or_error_falls_back_to_the_error_text() {
        let result = ExecutionResult::failure("boom");
        assert_eq!(result.output_or_error(), "boom");

        let result = ExecutionResult::success(" out ");
        assert_eq!(result.output_or_error(), "out");
    }
}

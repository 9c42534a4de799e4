use graphtrace_core::algos::Algorithm;
use graphtrace_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse a critical tolerance: finite and non-negative
pub fn parse_tolerance(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("invalid tolerance: {}", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("tolerance must be finite and non-negative: {}", s));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_reports_choices() {
        assert_eq!(parse_algorithm("dijkstra").unwrap(), Algorithm::Dijkstra);
        let err = parse_algorithm("astar").unwrap_err();
        assert!(err.contains("kruskal"), "{}", err);
    }

    #[test]
    fn test_parse_tolerance() {
        assert_eq!(parse_tolerance("0.5").unwrap(), 0.5);
        assert!(parse_tolerance("-1").is_err());
        assert!(parse_tolerance("inf").is_err());
        assert!(parse_tolerance("abc").is_err());
    }
}
